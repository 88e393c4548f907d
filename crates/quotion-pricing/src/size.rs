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

//! System size from panel selection.

use quotion_types::units::{format_kw, parse_watts};

/// Sentinel returned for missing or malformed input. Downstream resolvers
/// treat it as "no valid system size yet".
pub const ZERO_KW: &str = "0kW";

/// Compute the system size label from a panel wattage label and quantity.
///
/// `("545W", 9)` yields `"4.905kW"`. Malformed wattage labels and
/// non-positive quantities degrade to [`ZERO_KW`] instead of failing, so the
/// quotation form keeps working while the dealer is still typing.
pub fn calculate_system_size(panel_size_label: &str, quantity: i32) -> String {
    let Some(watts) = parse_watts(panel_size_label) else {
        return ZERO_KW.to_owned();
    };
    if quantity <= 0 {
        return ZERO_KW.to_owned();
    }
    format_kw(watts * quantity as f32 / 1000.0)
}
