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

//! Size-label parsing and formatting.
//!
//! Dealer-facing data carries sizes as labels ("545W", "5kW"). Those labels
//! are parsed exactly once, at this boundary; everything past it works with
//! numeric watts/kW and formats back to a label only when handing a value to
//! the UI layer.

/// Tolerance for numeric size comparison after label parsing.
/// Keeps "5kW" and "5.0kW" resolving to the same catalog rows.
const SIZE_EPSILON: f32 = 1e-3;

/// Parse the numeric payload of a size label, ignoring any trailing unit
/// letters. Returns `None` for empty, non-numeric, non-finite or non-positive
/// values.
fn numeric_part(label: &str) -> Option<f32> {
    let digits = label
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .trim();
    if digits.is_empty() {
        return None;
    }
    let value: f32 = digits.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse a panel wattage label such as `"545W"` (or bare `"545"`).
pub fn parse_watts(label: &str) -> Option<f32> {
    numeric_part(label)
}

/// Parse a kilowatt label such as `"5kW"` (or bare `"5"`).
pub fn parse_kw(label: &str) -> Option<f32> {
    numeric_part(label)
}

/// Format a kilowatt value back into the label form the UI expects.
/// No decimal truncation is applied: `4.905` becomes `"4.905kW"`.
pub fn format_kw(kw: f32) -> String {
    format!("{kw}kW")
}

/// Format a wattage value back into the label form the UI expects.
pub fn format_watts(watts: f32) -> String {
    format!("{watts}W")
}

/// Compare two kW sizes that originated from labels.
pub fn kw_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < SIZE_EPSILON
}

/// Compare two wattage sizes that originated from labels.
pub fn watts_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < SIZE_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watts_accepts_labels_and_bare_numbers() {
        assert_eq!(parse_watts("545W"), Some(545.0));
        assert_eq!(parse_watts("545"), Some(545.0));
        assert_eq!(parse_watts(" 440 W "), Some(440.0));
    }

    #[test]
    fn test_parse_kw_accepts_fractional_sizes() {
        assert_eq!(parse_kw("5kW"), Some(5.0));
        assert_eq!(parse_kw("5.0kW"), Some(5.0));
        assert_eq!(parse_kw("4.905kW"), Some(4.905));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert_eq!(parse_watts(""), None);
        assert_eq!(parse_watts("W"), None);
        assert_eq!(parse_watts("abcW"), None);
        assert_eq!(parse_kw("-5kW"), None);
        assert_eq!(parse_kw("0kW"), None);
    }

    #[test]
    fn test_format_kw_keeps_fractional_payload() {
        assert_eq!(format_kw(5.0), "5kW");
        assert_eq!(format_kw(4.905), "4.905kW");
    }

    #[test]
    fn test_format_watts_parses_back() {
        let label = format_watts(545.0);
        assert_eq!(label, "545W");
        assert_eq!(parse_watts(&label), Some(545.0));
    }

    #[test]
    fn test_kw_eq_bridges_label_variants() {
        let a = parse_kw("5kW").unwrap();
        let b = parse_kw("5.0kW").unwrap();
        assert!(kw_eq(a, b), "label variants of the same size should compare equal");
        assert!(!kw_eq(5.0, 5.5));
    }
}
