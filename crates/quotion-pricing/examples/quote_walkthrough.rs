// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of QuotION.

//! End-to-end walkthrough of the resolution flow a quotation form runs:
//! resolve a configuration preset, map it to a product selection, classify
//! the phase and price the package and its components.
//!
//! Run with: cargo run -p quotion-pricing --example quote_walkthrough

use quotion_pricing::{
    acdb_price, calculate_system_size, dcr_price, determine_phase, inverter_price, meter_price,
    panel_price, preset_to_selection, structure_price, system_configuration,
};
use quotion_types::units::{format_kw, format_watts};
use quotion_types::SystemType;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // Dealer intake: DCR system, 5 kW, Adani panels. No backend catalog
    // loaded yet, so every resolver falls back to the bundled defaults.
    let Some(preset) = system_configuration(SystemType::Dcr, "5kW", "Adani", None) else {
        println!("no preset available for this selection");
        return;
    };
    println!("preset: {}", preset.name);

    let selection = preset_to_selection(preset, None);
    println!(
        "panels: {} x {} {}W",
        selection.panels.quantity, selection.panels.brand, selection.panels.size_watts
    );
    println!(
        "actual array size: {}",
        calculate_system_size(
            &format_watts(selection.panels.size_watts),
            selection.panels.quantity as i32
        )
    );

    let system_label = format_kw(selection.system_size_kw);
    let inverter_label = format_kw(selection.inverter_size_kw);
    let phase = determine_phase(&system_label, &inverter_label, None);
    println!("phase: {phase}");

    match dcr_price(&system_label, phase, &inverter_label, &selection.panels.brand, None) {
        Some(package) => println!("turnkey package price: INR {package}"),
        None => {
            // No tabulated package: the form falls back to summed components.
            let panel_label = format_watts(selection.panels.size_watts);
            let total = panel_price(&selection.panels.brand, &panel_label, None)
                * selection.panels.quantity as f32
                + inverter_price(&selection.inverter_brand, &inverter_label, None)
                + structure_price(&selection.structure_type, &system_label, None)
                + meter_price(&selection.meter_brand, None)
                + acdb_price("Elmeasure", phase, None);
            println!("no package row, component estimate: INR {total}");
        }
    }

    if let Some(subsidy) = selection.central_subsidy {
        println!("central subsidy: INR {subsidy}");
    }
}
