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

//! Integration tests for the full quotation resolution flow:
//! preset cascade -> product selection -> phase classification -> pricing.

use quotion_pricing::{
    calculate_system_size, dcr_price, determine_phase, non_dcr_price, panel_price,
    preset_to_selection, resolve_both_configuration, system_configuration,
};
use quotion_types::units::{format_kw, kw_eq};
use quotion_types::{Phase, PricingCatalog, SystemType};

/// The flow the quotation form runs on every dealer edit, against the
/// bundled default catalog.
#[test]
fn test_dcr_quotation_flow_against_default_catalog() {
    // Dealer picks: DCR, 5kW, Adani. ConfigurationResolver fills the form.
    let preset = system_configuration(SystemType::Dcr, "5kW", "Adani", None)
        .expect("default catalog should cover DCR 5kW Adani");
    let selection = preset_to_selection(preset, None);
    assert_eq!(selection.panels.quantity, 10, "ceil(5000/545)");

    // The form recomputes the size label from the selected panels.
    let size_label = calculate_system_size("545W", selection.panels.quantity as i32);
    assert_eq!(size_label, "5.45kW", "10 x 545W panels");

    // Phase comes from the preset's nominal size, not the recomputed label.
    let phase = determine_phase(
        &format_kw(preset.system_size_kw),
        &format_kw(preset.inverter_size_kw),
        None,
    );
    assert_eq!(phase, Phase::OnePhase);

    // Package price resolves against the exact key.
    let price = dcr_price("5kW", phase, "5kW", "Adani", None);
    assert_eq!(price, Some(322000.0));
}

#[test]
fn test_unknown_brand_still_yields_a_quotation() {
    // A brand the catalog has never seen must not leave the dealer with an
    // empty form or a thrown error.
    let preset = system_configuration(SystemType::Dcr, "7kW", "NoSuchBrand", None)
        .expect("cascade should fall back to any DCR preset at 7kW");
    assert!(kw_eq(preset.system_size_kw, 7.0));

    let phase = determine_phase("7kW", "7kW", None);
    assert_eq!(phase, Phase::ThreePhase);

    // Package lookup normalizes the brand to the default reference.
    let price = dcr_price("7kW", phase, "7kW", "NoSuchBrand", None);
    assert_eq!(price, dcr_price("7kW", phase, "7kW", "Adani", None));
    assert!(price.is_some());

    // Component pricing degrades to the base table instead of failing.
    let panel = panel_price("NoSuchBrand", "545W", None);
    assert!(panel > 0.0);
}

#[test]
fn test_both_system_flow_splits_capacity() {
    let preset = system_configuration(SystemType::Both, "5kW", "Adani", None)
        .expect("default catalog should cover BOTH 5kW");
    let selection = resolve_both_configuration(3.0, 2.0, preset);

    assert_eq!(selection.panels.quantity, 6, "ceil(3000/545)");
    let non_dcr = selection.non_dcr_panels.as_ref().expect("second group");
    assert_eq!(non_dcr.quantity, 4, "ceil(2000/545)");

    // BOTH systems classify three-phase through the both-prices table.
    let phase = determine_phase("5kW", "5kW", Some(&both_only_catalog()));
    assert_eq!(phase, Phase::ThreePhase);
}

/// Catalog reduced to its BOTH table, as a backend serving only mixed
/// packages would send it.
fn both_only_catalog() -> PricingCatalog {
    let payload = serde_json::json!({
        "bothSystemPrices": [{
            "systemSizeKw": 5.0,
            "phase": "3-phase",
            "inverterSizeKw": 5.0,
            "dcrCapacityKw": 3.0,
            "nonDcrCapacityKw": 2.0,
            "panelBrand": "Adani",
            "price": 310000.0
        }]
    });
    PricingCatalog::from_json_str(&payload.to_string()).expect("payload should parse")
}

#[test]
fn test_external_catalog_overrides_bundled_prices() {
    let payload = r#"{
        "dcrSystemPrices": [{
            "systemSizeKw": 5.0,
            "phase": "1-phase",
            "inverterSizeKw": 5.0,
            "panelBrand": "Adani",
            "price": 318000.0
        }]
    }"#;
    let catalog = PricingCatalog::from_json_str(payload).expect("payload should parse");

    let external = dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", Some(&catalog));
    assert_eq!(external, Some(318000.0), "external catalog price wins");

    // Rows absent from the external catalog are misses, not bundled
    // fallbacks: the caller owns that decision.
    let missing = non_dcr_price("5kW", Phase::OnePhase, "5kW", "Adani", Some(&catalog));
    assert_eq!(missing, None);
}

#[test]
fn test_resolution_is_deterministic_across_calls() {
    let first = system_configuration(SystemType::Dcr, "5kW", "Adani", None)
        .map(|preset| preset_to_selection(preset, None));
    let second = system_configuration(SystemType::Dcr, "5kW", "Adani", None)
        .map(|preset| preset_to_selection(preset, None));
    assert_eq!(first, second, "identical inputs must yield identical output");
}
