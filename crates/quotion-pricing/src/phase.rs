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

//! Phase classification for a system/inverter size pair.
//!
//! Catalog data is authoritative when a matching package row exists; the
//! heuristic only keeps the form responsive for sizes the catalog does not
//! tabulate (or before catalog data has loaded).

use tracing::{debug, warn};

use crate::defaults::default_catalog;
use quotion_types::units::{kw_eq, parse_kw};
use quotion_types::{Phase, PricingCatalog};

/// Systems at or above this size are wired three-phase.
/// Domain constant inferred from the package tables; preserve, do not re-derive.
pub const THREE_PHASE_CUTOFF_KW: f32 = 7.0;

/// Resolve the electrical phase for a system/inverter size pair.
///
/// Order, first match wins:
/// 1. A DCR or NON-DCR package row matching both sizes (brand ignored)
///    supplies its recorded phase.
/// 2. A BOTH package row matching both sizes means three-phase
///    unconditionally (mixed-capacity systems are always wired three-phase).
/// 3. Heuristic fallback on the parsed sizes. A label that fails to parse
///    (including the `"0kW"` placeholder a half-filled form produces) never
///    triggers the oversized-inverter rule; without a valid system size the
///    classification stays at the single-phase default.
///
/// A catalog row whose recorded phase contradicts the heuristic is flagged
/// via `warn!` but still wins; the catalog stays authoritative.
pub fn determine_phase(
    system_size_label: &str,
    inverter_size_label: &str,
    catalog: Option<&PricingCatalog>,
) -> Phase {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let system_kw = parse_kw(system_size_label);
    let inverter_kw = parse_kw(inverter_size_label);

    if let (Some(system), Some(inverter)) = (system_kw, inverter_kw) {
        let package_row = catalog
            .dcr_system_prices
            .iter()
            .chain(catalog.non_dcr_system_prices.iter())
            .find(|row| kw_eq(row.system_size_kw, system) && kw_eq(row.inverter_size_kw, inverter));
        if let Some(row) = package_row {
            let heuristic = heuristic_phase(Some(system), Some(inverter));
            if row.phase != heuristic {
                warn!(
                    "catalog package row {}kW/{}kW ({}) records {} but the sizing heuristic says {}",
                    row.system_size_kw, row.inverter_size_kw, row.panel_brand, row.phase, heuristic
                );
            }
            return row.phase;
        }

        let both_match = catalog
            .both_system_prices
            .iter()
            .any(|row| kw_eq(row.system_size_kw, system) && kw_eq(row.inverter_size_kw, inverter));
        if both_match {
            return Phase::ThreePhase;
        }
    }

    debug!(
        "no package row for {system_size_label}/{inverter_size_label}, classifying heuristically"
    );
    heuristic_phase(system_kw, inverter_kw)
}

/// Size-based classification used when the catalog has no matching row.
/// With no valid system size there is nothing to classify by, so the
/// single-phase default applies.
fn heuristic_phase(system_kw: Option<f32>, inverter_kw: Option<f32>) -> Phase {
    let Some(system) = system_kw else {
        return Phase::OnePhase;
    };
    if system >= THREE_PHASE_CUTOFF_KW {
        return Phase::ThreePhase;
    }
    // An inverter rated above the system size implies three-phase wiring
    if inverter_kw.is_some_and(|inverter| inverter > system) {
        return Phase::ThreePhase;
    }
    // 3-6 kW systems with a matched inverter, and everything smaller,
    // run single-phase
    Phase::OnePhase
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotion_types::SystemPrice;

    #[test]
    fn test_large_systems_are_three_phase() {
        assert_eq!(determine_phase("7kW", "8kW", None), Phase::ThreePhase);
        assert_eq!(determine_phase("10kW", "10kW", None), Phase::ThreePhase);
    }

    #[test]
    fn test_matched_mid_size_is_one_phase() {
        assert_eq!(determine_phase("4kW", "4kW", None), Phase::OnePhase);
    }

    #[test]
    fn test_oversized_inverter_implies_three_phase() {
        assert_eq!(determine_phase("3kW", "5kW", None), Phase::ThreePhase);
    }

    #[test]
    fn test_empty_catalog_falls_back_to_heuristic() {
        let empty = PricingCatalog::default();
        assert_eq!(determine_phase("4kW", "4kW", Some(&empty)), Phase::OnePhase);
        assert_eq!(determine_phase("8kW", "8kW", Some(&empty)), Phase::ThreePhase);
    }

    #[test]
    fn test_unparseable_sizes_default_to_one_phase() {
        assert_eq!(determine_phase("", "", None), Phase::OnePhase);
        // A parseable inverter next to an unparseable system size must not
        // trip the oversized-inverter rule.
        assert_eq!(determine_phase("abc", "3kW", None), Phase::OnePhase);
        assert_eq!(determine_phase("0kW", "5kW", None), Phase::OnePhase);
        // The other way round the system size alone still decides.
        assert_eq!(determine_phase("4kW", "junk", None), Phase::OnePhase);
        assert_eq!(determine_phase("8kW", "junk", None), Phase::ThreePhase);
    }

    #[test]
    fn test_catalog_row_wins_over_heuristic() {
        // A (contradictory) 4kW row recorded as 3-phase: flagged, but the
        // catalog value is returned.
        let catalog = PricingCatalog {
            dcr_system_prices: vec![SystemPrice {
                system_size_kw: 4.0,
                phase: Phase::ThreePhase,
                inverter_size_kw: 4.0,
                panel_brand: "Adani".to_owned(),
                price: 260000.0,
            }],
            ..PricingCatalog::default()
        };
        assert_eq!(
            determine_phase("4kW", "4kW", Some(&catalog)),
            Phase::ThreePhase
        );
    }

    #[test]
    fn test_both_table_match_is_three_phase() {
        // Default catalog carries a 5kW/5kW BOTH row, but the DCR table also
        // has 5kW/5kW, which is searched first and records 1-phase.
        assert_eq!(determine_phase("5kW", "5kW", None), Phase::OnePhase);

        // With only the BOTH table populated the rule fires.
        let catalog = PricingCatalog {
            both_system_prices: default_catalog().both_system_prices.clone(),
            ..PricingCatalog::default()
        };
        assert_eq!(
            determine_phase("5kW", "5kW", Some(&catalog)),
            Phase::ThreePhase
        );
    }

    #[test]
    fn test_label_format_variants_classify_identically() {
        assert_eq!(
            determine_phase("5.0kW", "5kW", None),
            determine_phase("5kW", "5.0kW", None)
        );
    }
}
