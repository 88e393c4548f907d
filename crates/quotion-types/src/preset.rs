// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of QuotION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use serde::{Deserialize, Serialize};

use crate::system::{InverterKind, SystemType};

/// Named default bill of materials for one (system type, size, panel brand)
/// combination.
///
/// Presets are catalog data: created once, never mutated at runtime. The
/// configuration resolver only reads them and maps them into
/// [`ProductSelection`](crate::selection::ProductSelection) values. Panel
/// quantity is deliberately NOT stored here; it is derived from the system
/// size and panel wattage at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfigurationPreset {
    /// Display name, e.g. "DCR 5kW Adani"
    pub name: String,
    pub system_type: SystemType,
    pub system_size_kw: f32,

    pub panel_brand: String,
    pub panel_size_watts: f32,

    pub inverter_brand: String,
    pub inverter_size_kw: f32,
    #[serde(default)]
    pub inverter_kind: InverterKind,

    pub structure_type: String,
    pub structure_size_kw: f32,

    pub meter_brand: String,

    pub ac_cable_brand: String,
    pub ac_cable_size: String,
    pub dc_cable_brand: String,
    pub dc_cable_size: String,

    /// ACDB selection string as shown in the quotation form, e.g.
    /// "Elmeasure 3-Phase"
    pub acdb_selection: String,
    /// DCDB selection string as shown in the quotation form
    pub dcdb_selection: String,

    /// Central government capital subsidy, when the preset qualifies
    #[serde(default)]
    pub central_subsidy: Option<f32>,
    /// State subsidy, when the preset qualifies
    #[serde(default)]
    pub state_subsidy: Option<f32>,
}
