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

//! Configuration preset resolution and mapping.
//!
//! A dealer should always get *a* sensible default configuration to start
//! editing from rather than an empty form, so preset lookup broadens in
//! three tiers: exact (type, size, brand), then (type, size), then type
//! alone. The cascade trades precision for availability.

use tracing::debug;

use crate::defaults::default_catalog;
use quotion_types::units::{kw_eq, parse_kw};
use quotion_types::{
    PanelGroup, PricingCatalog, ProductSelection, SystemConfigurationPreset, SystemType,
};

/// Resolve the default configuration preset for a selection.
///
/// Tier 1 matches (type, size, brand) exactly; tier 2 drops the brand;
/// tier 3 takes any preset of the requested type. `None` only when the
/// catalog has no preset of that type at all.
pub fn system_configuration<'a>(
    system_type: SystemType,
    system_size_label: &str,
    panel_brand: &str,
    catalog: Option<&'a PricingCatalog>,
) -> Option<&'a SystemConfigurationPreset> {
    let catalog = catalog.unwrap_or_else(|| default_catalog());
    let presets = &catalog.system_config_presets;

    if let Some(size_kw) = parse_kw(system_size_label) {
        let exact = presets.iter().find(|preset| {
            preset.system_type == system_type
                && kw_eq(preset.system_size_kw, size_kw)
                && preset.panel_brand.eq_ignore_ascii_case(panel_brand)
        });
        if exact.is_some() {
            return exact;
        }

        let size_match = presets
            .iter()
            .find(|preset| preset.system_type == system_type && kw_eq(preset.system_size_kw, size_kw));
        if let Some(preset) = size_match {
            debug!(
                "no {system_type} {system_size_label} preset for brand '{panel_brand}', using '{}'",
                preset.name
            );
            return Some(preset);
        }
    }

    let type_match = presets.iter().find(|preset| preset.system_type == system_type);
    if let Some(preset) = type_match {
        debug!(
            "no {system_type} preset at {system_size_label}, falling back to '{}'",
            preset.name
        );
    }
    type_match
}

/// Panel count needed to reach a capacity: ceil(kW x 1000 / panel watts).
/// The one place panel quantity is derived rather than stored.
fn derived_panel_quantity(capacity_kw: f32, panel_watts: f32) -> u32 {
    if capacity_kw <= 0.0 || panel_watts <= 0.0 {
        return 0;
    }
    (capacity_kw * 1000.0 / panel_watts).ceil() as u32
}

/// Map a preset into the product selection a quotation form needs.
///
/// Every preset field copies through unchanged; panel quantity comes from
/// `explicit_quantity` when the dealer already chose one (zero counts as
/// unset), otherwise it is derived from the preset's own size and wattage.
pub fn preset_to_selection(
    preset: &SystemConfigurationPreset,
    explicit_quantity: Option<u32>,
) -> ProductSelection {
    let quantity = match explicit_quantity {
        Some(quantity) if quantity > 0 => quantity,
        _ => derived_panel_quantity(preset.system_size_kw, preset.panel_size_watts),
    };

    ProductSelection {
        system_type: preset.system_type,
        system_size_kw: preset.system_size_kw,
        panels: PanelGroup {
            brand: preset.panel_brand.clone(),
            size_watts: preset.panel_size_watts,
            quantity,
        },
        non_dcr_panels: None,
        inverter_brand: preset.inverter_brand.clone(),
        inverter_size_kw: preset.inverter_size_kw,
        inverter_kind: preset.inverter_kind,
        structure_type: preset.structure_type.clone(),
        structure_size_kw: preset.structure_size_kw,
        meter_brand: preset.meter_brand.clone(),
        ac_cable_brand: preset.ac_cable_brand.clone(),
        ac_cable_size: preset.ac_cable_size.clone(),
        dc_cable_brand: preset.dc_cable_brand.clone(),
        dc_cable_size: preset.dc_cable_size.clone(),
        acdb_selection: preset.acdb_selection.clone(),
        dcdb_selection: preset.dcdb_selection.clone(),
        central_subsidy: preset.central_subsidy,
        state_subsidy: preset.state_subsidy,
    }
}

/// Map a preset into a mixed-capacity (BOTH) selection.
///
/// The preset describes a single homogeneous panel choice; the capacity
/// split sizes two independent groups from it, each quantity derived from
/// its own capacity. The DCR-eligible group lands in `panels`, the second
/// group in `non_dcr_panels`.
pub fn resolve_both_configuration(
    dcr_capacity_kw: f32,
    non_dcr_capacity_kw: f32,
    preset: &SystemConfigurationPreset,
) -> ProductSelection {
    let mut selection = preset_to_selection(preset, None);
    selection.system_type = SystemType::Both;
    selection.system_size_kw = dcr_capacity_kw + non_dcr_capacity_kw;
    selection.panels.quantity =
        derived_panel_quantity(dcr_capacity_kw, preset.panel_size_watts);
    selection.non_dcr_panels = Some(PanelGroup {
        brand: preset.panel_brand.clone(),
        size_watts: preset.panel_size_watts,
        quantity: derived_panel_quantity(non_dcr_capacity_kw, preset.panel_size_watts),
    });
    selection
}
