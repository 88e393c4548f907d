// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of QuotION.

//! Bundled default catalog and base-price tables.
//!
//! Used transparently whenever a resolver is called without an external
//! catalog (e.g. before the backend payload has loaded), and as the tier-3
//! fallback source for per-component pricing. All amounts are INR.

use std::sync::LazyLock;

use quotion_types::{
    BothSystemPrice, CablePrice, CircuitType, DistributionBoxPrice, InverterKind, InverterPrice,
    MeterPrice, PanelPrice, Phase, PricingCatalog, StructurePrice, SystemConfigurationPreset,
    SystemPrice, SystemType,
};

// ============= Reference Brands & Constants =============

/// Panel brands the package-price tables are keyed on.
pub const REFERENCE_PANEL_BRANDS: &[&str] = &["Adani", "Waaree", "Vikram", "Tata", "RenewSys"];

/// Brand that unrecognized panel brands normalize to before package lookup.
pub const DEFAULT_REFERENCE_BRAND: &str = "Adani";

/// Reference wattage for the per-brand panel base-price table.
pub const PANEL_REFERENCE_WATTS: f32 = 440.0;

/// Reference rating for the per-brand inverter base-price table.
pub const INVERTER_REFERENCE_KW: f32 = 5.0;

/// Reference rating for the per-type structure base-price table.
pub const STRUCTURE_REFERENCE_KW: f32 = 5.0;

// ============= Base-Price Tables (tier-3 component fallback) =============

/// Panel base prices at [`PANEL_REFERENCE_WATTS`], per reference brand.
const PANEL_BASE_PRICES: &[(&str, f32)] = &[
    ("Adani", 10120.0),
    ("Waaree", 9680.0),
    ("Vikram", 9460.0),
    ("Tata", 10340.0),
    ("RenewSys", 9240.0),
];

/// Base price for panels of a brand with no base-table entry.
pub const DEFAULT_PANEL_BASE_PRICE: f32 = 9900.0;

/// Inverter base prices at [`INVERTER_REFERENCE_KW`].
const INVERTER_BASE_PRICES: &[(&str, f32)] = &[
    ("Growatt", 40000.0),
    ("Polycab", 38500.0),
    ("Luminous", 39500.0),
];

pub const DEFAULT_INVERTER_BASE_PRICE: f32 = 39000.0;

/// Structure base prices at [`STRUCTURE_REFERENCE_KW`], per structure type.
const STRUCTURE_BASE_PRICES: &[(&str, f32)] = &[("Elevated", 26000.0), ("Standard", 19000.0)];

pub const DEFAULT_STRUCTURE_BASE_PRICE: f32 = 20000.0;

/// Flat fallbacks for components priced without interpolation.
pub const DEFAULT_METER_PRICE: f32 = 4200.0;
pub const DEFAULT_AC_CABLE_PRICE: f32 = 3000.0;
pub const DEFAULT_DC_CABLE_PRICE: f32 = 3700.0;

/// Panel base price for a brand, at [`PANEL_REFERENCE_WATTS`].
pub fn panel_base_price(brand: &str) -> f32 {
    PANEL_BASE_PRICES
        .iter()
        .find(|(b, _)| b.eq_ignore_ascii_case(brand))
        .map_or(DEFAULT_PANEL_BASE_PRICE, |(_, price)| *price)
}

/// Inverter base price for a brand, at [`INVERTER_REFERENCE_KW`].
pub fn inverter_base_price(brand: &str) -> f32 {
    INVERTER_BASE_PRICES
        .iter()
        .find(|(b, _)| b.eq_ignore_ascii_case(brand))
        .map_or(DEFAULT_INVERTER_BASE_PRICE, |(_, price)| *price)
}

/// Structure base price for a structure type, at [`STRUCTURE_REFERENCE_KW`].
pub fn structure_base_price(structure_type: &str) -> f32 {
    STRUCTURE_BASE_PRICES
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(structure_type))
        .map_or(DEFAULT_STRUCTURE_BASE_PRICE, |(_, price)| *price)
}

/// Flat fallback for cable pricing, per circuit.
pub fn default_cable_price(circuit: CircuitType) -> f32 {
    match circuit {
        CircuitType::Ac => DEFAULT_AC_CABLE_PRICE,
        CircuitType::Dc => DEFAULT_DC_CABLE_PRICE,
    }
}

/// Flat fallback for ACDB pricing, per phase.
pub fn default_acdb_price(phase: Phase) -> f32 {
    match phase {
        Phase::OnePhase => 2600.0,
        Phase::ThreePhase => 4300.0,
    }
}

/// Flat fallback for DCDB pricing, per phase.
pub fn default_dcdb_price(phase: Phase) -> f32 {
    match phase {
        Phase::OnePhase => 2300.0,
        Phase::ThreePhase => 3900.0,
    }
}

// ============= Default Catalog =============

/// The bundled default catalog.
///
/// Every resolver that takes `Option<&PricingCatalog>` substitutes this
/// value when handed `None`, so the quotation form stays usable before the
/// backend payload arrives.
pub fn default_catalog() -> &'static PricingCatalog {
    &DEFAULT_CATALOG
}

static DEFAULT_CATALOG: LazyLock<PricingCatalog> = LazyLock::new(build_default_catalog);

fn panel(brand: &str, size_watts: f32, price: f32) -> PanelPrice {
    PanelPrice {
        brand: brand.to_owned(),
        size_watts,
        price,
    }
}

fn inverter(brand: &str, size_kw: f32, price: f32) -> InverterPrice {
    InverterPrice {
        brand: brand.to_owned(),
        size_kw,
        price,
    }
}

fn structure(structure_type: &str, size_kw: f32, price: f32) -> StructurePrice {
    StructurePrice {
        structure_type: structure_type.to_owned(),
        size_kw,
        price,
    }
}

fn meter(brand: &str, price: f32) -> MeterPrice {
    MeterPrice {
        brand: brand.to_owned(),
        price,
    }
}

fn cable(brand: &str, size_label: &str, circuit: CircuitType, price: f32) -> CablePrice {
    CablePrice {
        brand: brand.to_owned(),
        size_label: size_label.to_owned(),
        circuit,
        price,
    }
}

fn dbox(brand: &str, phase: Phase, price: f32) -> DistributionBoxPrice {
    DistributionBoxPrice {
        brand: brand.to_owned(),
        phase,
        price,
    }
}

fn package(
    system_size_kw: f32,
    phase: Phase,
    inverter_size_kw: f32,
    panel_brand: &str,
    price: f32,
) -> SystemPrice {
    SystemPrice {
        system_size_kw,
        phase,
        inverter_size_kw,
        panel_brand: panel_brand.to_owned(),
        price,
    }
}

fn both_package(
    system_size_kw: f32,
    inverter_size_kw: f32,
    dcr_capacity_kw: f32,
    non_dcr_capacity_kw: f32,
    panel_brand: &str,
    price: f32,
) -> BothSystemPrice {
    BothSystemPrice {
        system_size_kw,
        // Mixed-capacity systems are wired three-phase without exception
        phase: Phase::ThreePhase,
        inverter_size_kw,
        dcr_capacity_kw,
        non_dcr_capacity_kw,
        panel_brand: panel_brand.to_owned(),
        price,
    }
}

fn build_default_catalog() -> PricingCatalog {
    use Phase::{OnePhase, ThreePhase};

    PricingCatalog {
        panel_prices: vec![
            panel("Adani", 440.0, 10120.0),
            panel("Adani", 530.0, 12190.0),
            panel("Adani", 545.0, 13080.0),
            panel("Waaree", 440.0, 9680.0),
            panel("Waaree", 545.0, 12530.0),
            panel("Vikram", 440.0, 9460.0),
            panel("Vikram", 545.0, 12260.0),
            panel("Tata", 440.0, 10340.0),
            panel("Tata", 545.0, 13350.0),
            panel("RenewSys", 440.0, 9240.0),
            panel("RenewSys", 545.0, 11990.0),
        ],
        inverter_prices: vec![
            inverter("Growatt", 3.0, 27000.0),
            inverter("Growatt", 5.0, 40000.0),
            inverter("Growatt", 7.0, 52000.0),
            inverter("Growatt", 10.0, 68000.0),
            inverter("Polycab", 3.0, 25500.0),
            inverter("Polycab", 5.0, 38500.0),
            inverter("Polycab", 10.0, 65000.0),
            inverter("Luminous", 3.0, 26500.0),
            inverter("Luminous", 5.0, 39500.0),
        ],
        structure_prices: vec![
            structure("Elevated", 3.0, 16500.0),
            structure("Elevated", 5.0, 26000.0),
            structure("Elevated", 10.0, 48000.0),
            structure("Standard", 3.0, 12000.0),
            structure("Standard", 5.0, 19000.0),
            structure("Standard", 10.0, 36000.0),
        ],
        meter_prices: vec![
            meter("Secure", 4300.0),
            meter("Genus", 3900.0),
            meter("L&T", 4600.0),
        ],
        cable_prices: vec![
            cable("Polycab", "4mm", CircuitType::Ac, 2950.0),
            cable("Polycab", "6mm", CircuitType::Ac, 4150.0),
            cable("Polycab", "4mm", CircuitType::Dc, 3650.0),
            cable("Polycab", "6mm", CircuitType::Dc, 5200.0),
            cable("Havells", "4mm", CircuitType::Ac, 3100.0),
            cable("Havells", "4mm", CircuitType::Dc, 3800.0),
        ],
        acdb_prices: vec![
            dbox("Elmeasure", OnePhase, 2500.0),
            dbox("Elmeasure", ThreePhase, 4200.0),
            dbox("Havells", OnePhase, 2800.0),
            dbox("Havells", ThreePhase, 4600.0),
        ],
        dcdb_prices: vec![
            dbox("Elmeasure", OnePhase, 2200.0),
            dbox("Elmeasure", ThreePhase, 3800.0),
            dbox("Havells", OnePhase, 2450.0),
            dbox("Havells", ThreePhase, 4100.0),
        ],
        dcr_system_prices: vec![
            package(1.0, OnePhase, 1.0, "Adani", 75000.0),
            package(2.0, OnePhase, 2.0, "Adani", 145000.0),
            package(3.0, OnePhase, 3.0, "Adani", 205000.0),
            package(4.0, OnePhase, 4.0, "Adani", 265000.0),
            package(5.0, OnePhase, 5.0, "Adani", 322000.0),
            package(6.0, OnePhase, 6.0, "Adani", 378000.0),
            package(7.0, ThreePhase, 7.0, "Adani", 435000.0),
            package(8.0, ThreePhase, 8.0, "Adani", 490000.0),
            package(10.0, ThreePhase, 10.0, "Adani", 598000.0),
            package(1.0, OnePhase, 1.0, "Waaree", 73500.0),
            package(2.0, OnePhase, 2.0, "Waaree", 142000.0),
            package(3.0, OnePhase, 3.0, "Waaree", 201000.0),
            package(4.0, OnePhase, 4.0, "Waaree", 259000.0),
            package(5.0, OnePhase, 5.0, "Waaree", 315000.0),
            package(6.0, OnePhase, 6.0, "Waaree", 370000.0),
            package(7.0, ThreePhase, 7.0, "Waaree", 426000.0),
            package(8.0, ThreePhase, 8.0, "Waaree", 480000.0),
            package(10.0, ThreePhase, 10.0, "Waaree", 585000.0),
        ],
        non_dcr_system_prices: vec![
            package(3.0, OnePhase, 3.0, "Adani", 188000.0),
            package(5.0, OnePhase, 5.0, "Adani", 296000.0),
            package(6.0, OnePhase, 6.0, "Adani", 348000.0),
            package(7.0, ThreePhase, 7.0, "Adani", 400000.0),
            package(10.0, ThreePhase, 10.0, "Adani", 550000.0),
            package(3.0, OnePhase, 3.0, "Waaree", 184000.0),
            package(5.0, OnePhase, 5.0, "Waaree", 290000.0),
            package(10.0, ThreePhase, 10.0, "Waaree", 538000.0),
        ],
        both_system_prices: vec![
            both_package(5.0, 5.0, 3.0, 2.0, "Adani", 310000.0),
            both_package(7.0, 7.0, 4.0, 3.0, "Adani", 420000.0),
            both_package(10.0, 10.0, 6.0, 4.0, "Adani", 572000.0),
            both_package(10.0, 10.0, 5.0, 5.0, "Waaree", 561000.0),
        ],
        system_config_presets: default_presets(),
    }
}

fn default_presets() -> Vec<SystemConfigurationPreset> {
    vec![
        SystemConfigurationPreset {
            name: "DCR 3kW Adani".to_owned(),
            system_type: SystemType::Dcr,
            system_size_kw: 3.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 3.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 3.0,
            meter_brand: "Secure".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "4mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "4mm".to_owned(),
            acdb_selection: "Elmeasure 1-Phase".to_owned(),
            dcdb_selection: "Elmeasure 1-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "DCR 5kW Adani".to_owned(),
            system_type: SystemType::Dcr,
            system_size_kw: 5.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 5.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 5.0,
            meter_brand: "Secure".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "4mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Elmeasure 1-Phase".to_owned(),
            dcdb_selection: "Elmeasure 1-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "DCR 7kW Adani".to_owned(),
            system_type: SystemType::Dcr,
            system_size_kw: 7.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 7.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 7.0,
            meter_brand: "Secure".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "6mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Elmeasure 3-Phase".to_owned(),
            dcdb_selection: "Elmeasure 3-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "DCR 10kW Waaree".to_owned(),
            system_type: SystemType::Dcr,
            system_size_kw: 10.0,
            panel_brand: "Waaree".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 10.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 10.0,
            meter_brand: "Genus".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "6mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Havells 3-Phase".to_owned(),
            dcdb_selection: "Havells 3-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "NON-DCR 3kW Adani".to_owned(),
            system_type: SystemType::NonDcr,
            system_size_kw: 3.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 530.0,
            inverter_brand: "Polycab".to_owned(),
            inverter_size_kw: 3.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Standard".to_owned(),
            structure_size_kw: 3.0,
            meter_brand: "Genus".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "4mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "4mm".to_owned(),
            acdb_selection: "Elmeasure 1-Phase".to_owned(),
            dcdb_selection: "Elmeasure 1-Phase".to_owned(),
            central_subsidy: None,
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "NON-DCR 5kW Waaree".to_owned(),
            system_type: SystemType::NonDcr,
            system_size_kw: 5.0,
            panel_brand: "Waaree".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Polycab".to_owned(),
            inverter_size_kw: 5.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Standard".to_owned(),
            structure_size_kw: 5.0,
            meter_brand: "Genus".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "4mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Elmeasure 1-Phase".to_owned(),
            dcdb_selection: "Elmeasure 1-Phase".to_owned(),
            central_subsidy: None,
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "NON-DCR 10kW Adani".to_owned(),
            system_type: SystemType::NonDcr,
            system_size_kw: 10.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Polycab".to_owned(),
            inverter_size_kw: 10.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 10.0,
            meter_brand: "L&T".to_owned(),
            ac_cable_brand: "Havells".to_owned(),
            ac_cable_size: "6mm".to_owned(),
            dc_cable_brand: "Havells".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Havells 3-Phase".to_owned(),
            dcdb_selection: "Havells 3-Phase".to_owned(),
            central_subsidy: None,
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "BOTH 5kW Adani".to_owned(),
            system_type: SystemType::Both,
            system_size_kw: 5.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 5.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 5.0,
            meter_brand: "Secure".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "6mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Elmeasure 3-Phase".to_owned(),
            dcdb_selection: "Elmeasure 3-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
        SystemConfigurationPreset {
            name: "BOTH 10kW Adani".to_owned(),
            system_type: SystemType::Both,
            system_size_kw: 10.0,
            panel_brand: "Adani".to_owned(),
            panel_size_watts: 545.0,
            inverter_brand: "Growatt".to_owned(),
            inverter_size_kw: 10.0,
            inverter_kind: InverterKind::OnGrid,
            structure_type: "Elevated".to_owned(),
            structure_size_kw: 10.0,
            meter_brand: "L&T".to_owned(),
            ac_cable_brand: "Polycab".to_owned(),
            ac_cable_size: "6mm".to_owned(),
            dc_cable_brand: "Polycab".to_owned(),
            dc_cable_size: "6mm".to_owned(),
            acdb_selection: "Havells 3-Phase".to_owned(),
            dcdb_selection: "Havells 3-Phase".to_owned(),
            central_subsidy: Some(78000.0),
            state_subsidy: None,
        },
    ]
}
