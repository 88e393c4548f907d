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

//! Pricing & configuration resolution engine.
//!
//! Given sparse, dealer-supplied selection criteria (system type, size,
//! phase, inverter rating, panel brand), resolve a concrete price and a
//! complete bill-of-materials configuration from a multi-table
//! [`PricingCatalog`], degrading through fallback tiers when exact matches
//! are absent.
//!
//! Every operation here is a pure, synchronous function of its inputs and an
//! immutable catalog. Malformed input degrades to sentinels (`"0kW"`, price
//! `0`), a missing catalog row is a normal `None`, and a missing catalog
//! falls back to the bundled defaults. Nothing in this crate can fail
//! fatally, because a pricing tool must never block a dealer from producing
//! a quotation.

pub mod component;
pub mod configuration;
pub mod defaults;
pub mod phase;
pub mod size;
pub mod system_price;

// Re-export common entry points for convenience
pub use component::{
    acdb_price, cable_price, dcdb_price, inverter_price, meter_price, panel_price,
    structure_price,
};
pub use configuration::{preset_to_selection, resolve_both_configuration, system_configuration};
pub use defaults::default_catalog;
pub use phase::determine_phase;
pub use size::{ZERO_KW, calculate_system_size};
pub use system_price::{both_price, dcr_price, non_dcr_price, normalize_brand};

pub use quotion_types::{
    PanelGroup, Phase, PricingCatalog, ProductSelection, SystemConfigurationPreset, SystemType,
};
