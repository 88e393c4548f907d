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

//! Per-component price resolution.
//!
//! Panels, inverters and structures resolve through three tiers: exact
//! catalog row, same-brand row at another size scaled linearly, then a
//! built-in base-price table. Meters, cables, ACDBs and DCDBs have no
//! meaningful size axis and fall back to flat defaults instead. Every
//! function here is total: it returns a finite non-negative price for any
//! input, with unparseable sizes degrading to `0.0`.

use tracing::debug;

use crate::defaults::{
    self, DEFAULT_METER_PRICE, INVERTER_REFERENCE_KW, PANEL_REFERENCE_WATTS,
    STRUCTURE_REFERENCE_KW, default_catalog,
};
use quotion_types::units::{kw_eq, parse_kw, parse_watts, watts_eq};
use quotion_types::{CircuitType, Phase, PricingCatalog};

/// Panel price for a (brand, wattage label) pair.
pub fn panel_price(brand: &str, size_label: &str, catalog: Option<&PricingCatalog>) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let Some(watts) = parse_watts(size_label) else {
        return 0.0;
    };

    if let Some(row) = catalog
        .panel_prices
        .iter()
        .find(|row| row.brand.eq_ignore_ascii_case(brand) && watts_eq(row.size_watts, watts))
    {
        return row.price;
    }

    // Same brand at another wattage: scale the nearest row linearly.
    // Panel pricing tracks wattage closely enough for a quotation estimate.
    let nearest = catalog
        .panel_prices
        .iter()
        .filter(|row| row.brand.eq_ignore_ascii_case(brand) && row.size_watts > 0.0)
        .min_by(|a, b| {
            (a.size_watts - watts)
                .abs()
                .total_cmp(&(b.size_watts - watts).abs())
        });
    if let Some(row) = nearest {
        debug!(
            "no exact {brand} {size_label} panel row, scaling {}W row",
            row.size_watts
        );
        return row.price * watts / row.size_watts;
    }

    debug!("no {brand} panel rows at all, using base-price table");
    defaults::panel_base_price(brand) * watts / PANEL_REFERENCE_WATTS
}

/// Inverter price for a (brand, kW label) pair.
pub fn inverter_price(brand: &str, size_label: &str, catalog: Option<&PricingCatalog>) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let Some(kw) = parse_kw(size_label) else {
        return 0.0;
    };

    if let Some(row) = catalog
        .inverter_prices
        .iter()
        .find(|row| row.brand.eq_ignore_ascii_case(brand) && kw_eq(row.size_kw, kw))
    {
        return row.price;
    }

    let nearest = catalog
        .inverter_prices
        .iter()
        .filter(|row| row.brand.eq_ignore_ascii_case(brand) && row.size_kw > 0.0)
        .min_by(|a, b| (a.size_kw - kw).abs().total_cmp(&(b.size_kw - kw).abs()));
    if let Some(row) = nearest {
        debug!(
            "no exact {brand} {size_label} inverter row, scaling {}kW row",
            row.size_kw
        );
        return row.price * kw / row.size_kw;
    }

    debug!("no {brand} inverter rows at all, using base-price table");
    defaults::inverter_base_price(brand) * kw / INVERTER_REFERENCE_KW
}

/// Mounting structure price for a (type, kW label) pair.
pub fn structure_price(
    structure_type: &str,
    size_label: &str,
    catalog: Option<&PricingCatalog>,
) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let Some(kw) = parse_kw(size_label) else {
        return 0.0;
    };

    if let Some(row) = catalog.structure_prices.iter().find(|row| {
        row.structure_type.eq_ignore_ascii_case(structure_type) && kw_eq(row.size_kw, kw)
    }) {
        return row.price;
    }

    let nearest = catalog
        .structure_prices
        .iter()
        .filter(|row| row.structure_type.eq_ignore_ascii_case(structure_type) && row.size_kw > 0.0)
        .min_by(|a, b| (a.size_kw - kw).abs().total_cmp(&(b.size_kw - kw).abs()));
    if let Some(row) = nearest {
        debug!(
            "no exact {structure_type} {size_label} structure row, scaling {}kW row",
            row.size_kw
        );
        return row.price * kw / row.size_kw;
    }

    debug!("no {structure_type} structure rows at all, using base-price table");
    defaults::structure_base_price(structure_type) * kw / STRUCTURE_REFERENCE_KW
}

/// Net meter price for a brand. No size axis: exact row or flat default.
pub fn meter_price(brand: &str, catalog: Option<&PricingCatalog>) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    catalog
        .meter_prices
        .iter()
        .find(|row| row.brand.eq_ignore_ascii_case(brand))
        .map_or(DEFAULT_METER_PRICE, |row| row.price)
}

/// Cable price for a (brand, size label, circuit) triple.
/// Cable sizes are free-form labels ("4mm"), compared as strings.
pub fn cable_price(
    brand: &str,
    size_label: &str,
    circuit: CircuitType,
    catalog: Option<&PricingCatalog>,
) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    catalog
        .cable_prices
        .iter()
        .find(|row| {
            row.brand.eq_ignore_ascii_case(brand)
                && row.size_label.trim().eq_ignore_ascii_case(size_label.trim())
                && row.circuit == circuit
        })
        .map_or_else(|| defaults::default_cable_price(circuit), |row| row.price)
}

/// ACDB price for a (brand, phase) pair.
pub fn acdb_price(brand: &str, phase: Phase, catalog: Option<&PricingCatalog>) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    catalog
        .acdb_prices
        .iter()
        .find(|row| row.brand.eq_ignore_ascii_case(brand) && row.phase == phase)
        .map_or_else(|| defaults::default_acdb_price(phase), |row| row.price)
}

/// DCDB price for a (brand, phase) pair.
pub fn dcdb_price(brand: &str, phase: Phase, catalog: Option<&PricingCatalog>) -> f32 {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    catalog
        .dcdb_prices
        .iter()
        .find(|row| row.brand.eq_ignore_ascii_case(brand) && row.phase == phase)
        .map_or_else(|| defaults::default_dcdb_price(phase), |row| row.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_PANEL_BASE_PRICE;

    #[test]
    fn test_exact_panel_row_is_returned_verbatim() {
        assert_eq!(panel_price("Adani", "545W", None), 13080.0);
        assert_eq!(panel_price("adani", "545W", None), 13080.0, "brand match is case-insensitive");
    }

    #[test]
    fn test_panel_interpolation_scales_linearly() {
        // 1090W has no row; the nearest Adani row is 545W, so the price is
        // exactly double.
        let doubled = panel_price("Adani", "1090W", None);
        assert_eq!(doubled, 2.0 * 13080.0);
    }

    #[test]
    fn test_unknown_brand_uses_base_table() {
        let at_reference = panel_price("NoSuchBrand", "440W", None);
        assert_eq!(at_reference, DEFAULT_PANEL_BASE_PRICE);

        let scaled = panel_price("NoSuchBrand", "545W", None);
        assert_eq!(scaled, DEFAULT_PANEL_BASE_PRICE * 545.0 / 440.0);
    }

    #[test]
    fn test_unparseable_size_yields_zero() {
        assert_eq!(panel_price("Adani", "", None), 0.0);
        assert_eq!(panel_price("Adani", "large", None), 0.0);
        assert_eq!(inverter_price("Growatt", "?", None), 0.0);
        assert_eq!(structure_price("Elevated", "", None), 0.0);
    }

    #[test]
    fn test_inverter_interpolation_uses_nearest_row() {
        // Growatt has no 9kW row; nearest is 10kW at 68000.
        let price = inverter_price("Growatt", "9kW", None);
        assert_eq!(price, 68000.0 * 9.0 / 10.0);
    }

    #[test]
    fn test_structure_interpolation() {
        // Elevated has rows at 3/5/10 kW; 7kW scales the 5kW row.
        let price = structure_price("Elevated", "7kW", None);
        assert_eq!(price, 26000.0 * 7.0 / 5.0);
    }

    #[test]
    fn test_flat_components_fall_back_to_defaults() {
        assert_eq!(meter_price("Secure", None), 4300.0);
        assert_eq!(meter_price("NoSuchMeter", None), DEFAULT_METER_PRICE);

        assert_eq!(cable_price("Polycab", "4mm", CircuitType::Ac, None), 2950.0);
        assert_eq!(
            cable_price("NoSuchCable", "4mm", CircuitType::Dc, None),
            defaults::default_cable_price(CircuitType::Dc)
        );

        assert_eq!(acdb_price("Elmeasure", Phase::ThreePhase, None), 4200.0);
        assert_eq!(
            dcdb_price("NoSuchBox", Phase::OnePhase, None),
            defaults::default_dcdb_price(Phase::OnePhase)
        );
    }

    #[test]
    fn test_component_prices_are_total_and_non_negative() {
        let empty = PricingCatalog::default();
        for (brand, size) in [("Adani", "545W"), ("", ""), ("X", "9999W")] {
            let price = panel_price(brand, size, Some(&empty));
            assert!(
                price.is_finite() && price >= 0.0,
                "panel_price({brand:?}, {size:?}) = {price}"
            );
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = panel_price("Waaree", "600W", None);
        let second = panel_price("Waaree", "600W", None);
        assert_eq!(first, second, "no hidden state may affect results");
    }
}
