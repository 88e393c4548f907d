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

//! Turnkey package price resolution.
//!
//! Package prices are negotiated per configuration and are NOT linear in
//! size, so there is no interpolation here: an exact multi-key match returns
//! the tabulated price, anything else is `None`. Absence is an expected
//! outcome and the caller supplies its own fallback (a previously stored
//! price, or zero).

use tracing::debug;

use crate::defaults::{DEFAULT_REFERENCE_BRAND, REFERENCE_PANEL_BRANDS, default_catalog};
use quotion_types::units::{kw_eq, parse_kw};
use quotion_types::{Phase, PricingCatalog, SystemPrice};

/// Map a panel brand onto the reference set the package tables are keyed on.
///
/// Brands outside the reference set resolve against
/// [`DEFAULT_REFERENCE_BRAND`], the legacy behavior for unrecognized brands,
/// kept as an explicit step so it is visible and testable.
pub fn normalize_brand(brand: &str) -> &str {
    if REFERENCE_PANEL_BRANDS
        .iter()
        .any(|reference| reference.eq_ignore_ascii_case(brand))
    {
        brand
    } else {
        debug!("panel brand '{brand}' is not a reference brand, pricing as {DEFAULT_REFERENCE_BRAND}");
        DEFAULT_REFERENCE_BRAND
    }
}

fn find_package(
    rows: &[SystemPrice],
    system_kw: f32,
    phase: Phase,
    inverter_kw: f32,
    panel_brand: &str,
) -> Option<f32> {
    rows.iter()
        .find(|row| {
            kw_eq(row.system_size_kw, system_kw)
                && row.phase == phase
                && kw_eq(row.inverter_size_kw, inverter_kw)
                && row.panel_brand.eq_ignore_ascii_case(panel_brand)
        })
        .map(|row| row.price)
}

/// DCR package price for an exact (size, phase, inverter, brand) key.
pub fn dcr_price(
    system_size_label: &str,
    phase: Phase,
    inverter_size_label: &str,
    panel_brand: &str,
    catalog: Option<&PricingCatalog>,
) -> Option<f32> {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let system_kw = parse_kw(system_size_label)?;
    let inverter_kw = parse_kw(inverter_size_label)?;
    find_package(
        &catalog.dcr_system_prices,
        system_kw,
        phase,
        inverter_kw,
        normalize_brand(panel_brand),
    )
}

/// NON-DCR package price for an exact (size, phase, inverter, brand) key.
pub fn non_dcr_price(
    system_size_label: &str,
    phase: Phase,
    inverter_size_label: &str,
    panel_brand: &str,
    catalog: Option<&PricingCatalog>,
) -> Option<f32> {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let system_kw = parse_kw(system_size_label)?;
    let inverter_kw = parse_kw(inverter_size_label)?;
    find_package(
        &catalog.non_dcr_system_prices,
        system_kw,
        phase,
        inverter_kw,
        normalize_brand(panel_brand),
    )
}

/// BOTH (mixed DCR/NON-DCR) package price for an exact key, including the
/// capacity split.
pub fn both_price(
    system_size_label: &str,
    phase: Phase,
    inverter_size_label: &str,
    dcr_capacity_label: &str,
    non_dcr_capacity_label: &str,
    panel_brand: &str,
    catalog: Option<&PricingCatalog>,
) -> Option<f32> {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let system_kw = parse_kw(system_size_label)?;
    let inverter_kw = parse_kw(inverter_size_label)?;
    let dcr_kw = parse_kw(dcr_capacity_label)?;
    let non_dcr_kw = parse_kw(non_dcr_capacity_label)?;
    let brand = normalize_brand(panel_brand);

    catalog
        .both_system_prices
        .iter()
        .find(|row| {
            kw_eq(row.system_size_kw, system_kw)
                && row.phase == phase
                && kw_eq(row.inverter_size_kw, inverter_kw)
                && kw_eq(row.dcr_capacity_kw, dcr_kw)
                && kw_eq(row.non_dcr_capacity_kw, non_dcr_kw)
                && row.panel_brand.eq_ignore_ascii_case(brand)
        })
        .map(|row| row.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_brand_is_identity_on_reference_brands() {
        for brand in REFERENCE_PANEL_BRANDS {
            assert_eq!(normalize_brand(brand), *brand);
        }
        assert_eq!(normalize_brand("waaree"), "waaree", "case is preserved");
    }

    #[test]
    fn test_normalize_brand_maps_unknown_to_default() {
        assert_eq!(normalize_brand("SunPower"), DEFAULT_REFERENCE_BRAND);
        assert_eq!(normalize_brand(""), DEFAULT_REFERENCE_BRAND);
    }

    #[test]
    fn test_exact_dcr_match() {
        let price = dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", None);
        assert_eq!(price, Some(322000.0));
    }

    #[test]
    fn test_unknown_brand_prices_as_default_reference() {
        let reference = dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", None);
        let unknown = dcr_price("5kW", Phase::OnePhase, "5kW", "SunPower", None);
        assert_eq!(unknown, reference);
    }

    #[test]
    fn test_absent_key_is_none_never_a_substitute() {
        // 9kW is not tabulated: the resolver must not fall back to 8 or 10kW.
        assert_eq!(dcr_price("9kW", Phase::ThreePhase, "9kW", "Adani", None), None);
        // Wrong phase for a tabulated size is also a miss.
        assert_eq!(dcr_price("5kW", Phase::ThreePhase, "5kW", "Adani", None), None);
        // Oversized inverter key absent from the table.
        assert_eq!(non_dcr_price("5kW", Phase::OnePhase, "6kW", "Adani", None), None);
    }

    #[test]
    fn test_unparseable_labels_are_none() {
        assert_eq!(dcr_price("", Phase::OnePhase, "5kW", "Adani", None), None);
        assert_eq!(dcr_price("5kW", Phase::OnePhase, "five", "Adani", None), None);
    }

    #[test]
    fn test_both_price_requires_the_capacity_split() {
        let matched = both_price(
            "5kW",
            Phase::ThreePhase,
            "5kW",
            "3kW",
            "2kW",
            "Adani",
            None,
        );
        assert_eq!(matched, Some(310000.0));

        // Same total size, different split: no row, no price.
        let wrong_split = both_price(
            "5kW",
            Phase::ThreePhase,
            "5kW",
            "2kW",
            "3kW",
            "Adani",
            None,
        );
        assert_eq!(wrong_split, None);
    }

    #[test]
    fn test_empty_catalog_always_misses() {
        let empty = PricingCatalog::default();
        assert_eq!(
            dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", Some(&empty)),
            None
        );
        assert_eq!(
            non_dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", Some(&empty)),
            None
        );
    }
}
