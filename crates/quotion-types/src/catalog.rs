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

//! The pricing catalog: every lookup table the resolution engine reads.
//!
//! A catalog is constructed once per dealer session, either from the backend's
//! JSON payload or from the bundled defaults, and is read-only afterwards.
//! Catalog refresh means substituting a new catalog value, never mutating
//! tables in place. A missing row for a key combination is a normal, expected
//! condition, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preset::SystemConfigurationPreset;
use crate::system::{CircuitType, Phase};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("negative price {price} in {table} for '{key}'")]
    NegativePrice {
        table: &'static str,
        key: String,
        price: f32,
    },
}

// ============= Component Price Rows =============

/// Panel price row, unique per (brand, wattage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPrice {
    pub brand: String,
    pub size_watts: f32,
    pub price: f32,
}

/// Inverter price row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterPrice {
    pub brand: String,
    pub size_kw: f32,
    pub price: f32,
}

/// Mounting structure price row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructurePrice {
    #[serde(rename = "type")]
    pub structure_type: String,
    pub size_kw: f32,
    pub price: f32,
}

/// Net meter price row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterPrice {
    pub brand: String,
    pub price: f32,
}

/// Cable price row, per coil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CablePrice {
    pub brand: String,
    pub size_label: String,
    pub circuit: CircuitType,
    pub price: f32,
}

/// ACDB/DCDB price row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBoxPrice {
    pub brand: String,
    pub phase: Phase,
    pub price: f32,
}

// ============= Package Price Rows =============

/// Turnkey package price row for DCR and NON-DCR systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPrice {
    pub system_size_kw: f32,
    pub phase: Phase,
    pub inverter_size_kw: f32,
    pub panel_brand: String,
    pub price: f32,
}

/// Turnkey package price row for BOTH (mixed DCR/NON-DCR) systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BothSystemPrice {
    pub system_size_kw: f32,
    pub phase: Phase,
    pub inverter_size_kw: f32,
    pub dcr_capacity_kw: f32,
    pub non_dcr_capacity_kw: f32,
    pub panel_brand: String,
    pub price: f32,
}

// ============= Catalog Container =============

/// Immutable container of all pricing tables for one dealer session.
///
/// Every table may be empty: the backend is free to send a partial payload
/// and the resolvers degrade through their fallback tiers. There is no
/// mutation API by design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingCatalog {
    pub panel_prices: Vec<PanelPrice>,
    pub inverter_prices: Vec<InverterPrice>,
    pub structure_prices: Vec<StructurePrice>,
    pub meter_prices: Vec<MeterPrice>,
    pub cable_prices: Vec<CablePrice>,
    pub acdb_prices: Vec<DistributionBoxPrice>,
    pub dcdb_prices: Vec<DistributionBoxPrice>,
    pub dcr_system_prices: Vec<SystemPrice>,
    pub non_dcr_system_prices: Vec<SystemPrice>,
    pub both_system_prices: Vec<BothSystemPrice>,
    pub system_config_presets: Vec<SystemConfigurationPreset>,
}

impl PricingCatalog {
    /// Parse a catalog from the backend's JSON payload.
    /// Absent tables deserialize as empty; negative prices are rejected.
    pub fn from_json_str(payload: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(payload)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the non-negative price invariant across every table.
    pub fn validate(&self) -> Result<(), CatalogError> {
        fn check(
            table: &'static str,
            rows: impl Iterator<Item = (String, f32)>,
        ) -> Result<(), CatalogError> {
            for (key, price) in rows {
                if price < 0.0 {
                    return Err(CatalogError::NegativePrice { table, key, price });
                }
            }
            Ok(())
        }

        check(
            "panelPrices",
            self.panel_prices
                .iter()
                .map(|r| (format!("{} {}W", r.brand, r.size_watts), r.price)),
        )?;
        check(
            "inverterPrices",
            self.inverter_prices
                .iter()
                .map(|r| (format!("{} {}kW", r.brand, r.size_kw), r.price)),
        )?;
        check(
            "structurePrices",
            self.structure_prices
                .iter()
                .map(|r| (format!("{} {}kW", r.structure_type, r.size_kw), r.price)),
        )?;
        check(
            "meterPrices",
            self.meter_prices.iter().map(|r| (r.brand.clone(), r.price)),
        )?;
        check(
            "cablePrices",
            self.cable_prices
                .iter()
                .map(|r| (format!("{} {} {}", r.brand, r.size_label, r.circuit), r.price)),
        )?;
        check(
            "acdbPrices",
            self.acdb_prices
                .iter()
                .map(|r| (format!("{} {}", r.brand, r.phase), r.price)),
        )?;
        check(
            "dcdbPrices",
            self.dcdb_prices
                .iter()
                .map(|r| (format!("{} {}", r.brand, r.phase), r.price)),
        )?;
        check(
            "dcrSystemPrices",
            self.dcr_system_prices
                .iter()
                .map(|r| (format!("{}kW {}", r.system_size_kw, r.panel_brand), r.price)),
        )?;
        check(
            "nonDcrSystemPrices",
            self.non_dcr_system_prices
                .iter()
                .map(|r| (format!("{}kW {}", r.system_size_kw, r.panel_brand), r.price)),
        )?;
        check(
            "bothSystemPrices",
            self.both_system_prices
                .iter()
                .map(|r| (format!("{}kW {}", r.system_size_kw, r.panel_brand), r.price)),
        )?;
        Ok(())
    }

    /// True when no table carries any row (e.g. the backend sent `{}`)
    pub fn is_empty(&self) -> bool {
        self.panel_prices.is_empty()
            && self.inverter_prices.is_empty()
            && self.structure_prices.is_empty()
            && self.meter_prices.is_empty()
            && self.cable_prices.is_empty()
            && self.acdb_prices.is_empty()
            && self.dcdb_prices.is_empty()
            && self.dcr_system_prices.is_empty()
            && self.non_dcr_system_prices.is_empty()
            && self.both_system_prices.is_empty()
            && self.system_config_presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_an_empty_catalog() {
        let catalog = PricingCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty(), "all tables should deserialize as empty");
    }

    #[test]
    fn test_partial_payload_deserializes() {
        let payload = r#"{
            "panelPrices": [
                {"brand": "Adani", "sizeWatts": 545, "price": 13080}
            ],
            "acdbPrices": [
                {"brand": "Elmeasure", "phase": "3-phase", "price": 4200}
            ]
        }"#;
        let catalog = PricingCatalog::from_json_str(payload).unwrap();
        assert_eq!(catalog.panel_prices.len(), 1);
        assert_eq!(catalog.panel_prices[0].brand, "Adani");
        assert_eq!(catalog.acdb_prices[0].phase, Phase::ThreePhase);
        assert!(catalog.dcr_system_prices.is_empty());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let payload = r#"{
            "meterPrices": [{"brand": "Secure", "price": -1}]
        }"#;
        let err = PricingCatalog::from_json_str(payload).unwrap_err();
        assert!(
            matches!(err, CatalogError::NegativePrice { table: "meterPrices", .. }),
            "expected NegativePrice, got: {err}"
        );
    }

    #[test]
    fn test_malformed_payload_is_a_parse_error() {
        let err = PricingCatalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
