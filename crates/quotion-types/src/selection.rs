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

/// One homogeneous group of panels in a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelGroup {
    pub brand: String,
    pub size_watts: f32,
    /// Derived at resolution time: ceil(capacity / panel wattage)
    pub quantity: u32,
}

/// The full product selection a quotation form needs.
///
/// Built fresh on every resolution call and owned by the caller; the engine
/// never retains one. For BOTH systems [`panels`](Self::panels) is the
/// DCR-eligible group and [`non_dcr_panels`](Self::non_dcr_panels) carries
/// the second, independently sized group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    pub system_type: SystemType,
    pub system_size_kw: f32,

    pub panels: PanelGroup,
    #[serde(default)]
    pub non_dcr_panels: Option<PanelGroup>,

    pub inverter_brand: String,
    pub inverter_size_kw: f32,
    pub inverter_kind: InverterKind,

    pub structure_type: String,
    pub structure_size_kw: f32,

    pub meter_brand: String,

    pub ac_cable_brand: String,
    pub ac_cable_size: String,
    pub dc_cable_brand: String,
    pub dc_cable_size: String,

    pub acdb_selection: String,
    pub dcdb_selection: String,

    #[serde(default)]
    pub central_subsidy: Option<f32>,
    #[serde(default)]
    pub state_subsidy: Option<f32>,
}
