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

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Electrical Phase =============

/// Electrical supply type of an installation.
/// Constrains which inverters, ACDBs and DCDBs are compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "1-phase", alias = "1-Phase", alias = "one-phase")]
    OnePhase,
    #[serde(rename = "3-phase", alias = "3-Phase", alias = "three-phase")]
    ThreePhase,
}

impl Phase {
    /// Get human-readable name for the phase
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OnePhase => "1-Phase",
            Self::ThreePhase => "3-Phase",
        }
    }

    /// List all supported phases
    pub fn all() -> &'static [Phase] {
        &[Self::OnePhase, Self::ThreePhase]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Phase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1-phase" | "1 phase" | "1phase" | "one-phase" | "1" => Ok(Self::OnePhase),
            "3-phase" | "3 phase" | "3phase" | "three-phase" | "3" => Ok(Self::ThreePhase),
            _ => Err(anyhow::anyhow!(
                "Unknown phase: '{}'. Supported values: 1-Phase, 3-Phase",
                s
            )),
        }
    }
}

// ============= System Type =============

/// Subsidy category of a system.
/// DCR panels qualify for the central capital subsidy, NON-DCR panels do not,
/// BOTH mixes the two capacities under one inverter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    Dcr,
    NonDcr,
    Both,
}

impl SystemType {
    /// Get human-readable name for the system type
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dcr => "DCR",
            Self::NonDcr => "NON-DCR",
            Self::Both => "BOTH",
        }
    }

    /// Get config string value (kebab-case)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Dcr => "dcr",
            Self::NonDcr => "non-dcr",
            Self::Both => "both",
        }
    }

    /// List all supported system types
    pub fn all() -> &'static [SystemType] {
        &[Self::Dcr, Self::NonDcr, Self::Both]
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SystemType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dcr" => Ok(Self::Dcr),
            "non-dcr" | "nondcr" | "non dcr" => Ok(Self::NonDcr),
            "both" => Ok(Self::Both),
            _ => Err(anyhow::anyhow!(
                "Unknown system type: '{}'. Supported types: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.to_config_value())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

// ============= Cable Circuit =============

/// Which side of the inverter a cable run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CircuitType {
    Ac,
    Dc,
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ac => write!(f, "AC"),
            Self::Dc => write!(f, "DC"),
        }
    }
}

// ============= Inverter Kind =============

/// Inverter topology offered in quotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InverterKind {
    #[default]
    OnGrid,
    OffGrid,
    Hybrid,
}

impl InverterKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OnGrid => "On-Grid",
            Self::OffGrid => "Off-Grid",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for InverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for InverterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "on-grid" | "ongrid" | "on grid" => Ok(Self::OnGrid),
            "off-grid" | "offgrid" | "off grid" => Ok(Self::OffGrid),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(anyhow::anyhow!(
                "Unknown inverter kind: '{}'. Supported kinds: on-grid, off-grid, hybrid",
                s
            )),
        }
    }
}
