//! Load assumptions from JSON
//!
//! Any field left out of the file falls back to the standard 48-month
//! scenario, so `{}` is a valid parameter file.

use super::Assumptions;
use crate::error::{ModelError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load and validate assumptions from a JSON file
pub fn load_assumptions<P: AsRef<Path>>(path: P) -> Result<Assumptions> {
    let path = path.as_ref();
    log::debug!("Loading assumptions from {}", path.display());
    let file = File::open(path)?;
    load_assumptions_from_reader(BufReader::new(file))
}

/// Load and validate assumptions from any reader
///
/// Well-formed JSON with a wrongly typed value (a string where a number
/// belongs) is an invalid parameter; malformed JSON is a parse error.
pub fn load_assumptions_from_reader<R: Read>(reader: R) -> Result<Assumptions> {
    let assumptions: Assumptions = serde_json::from_reader(reader).map_err(|e| {
        if e.is_data() {
            ModelError::invalid("assumptions", e.to_string())
        } else {
            ModelError::Json(e)
        }
    })?;
    assumptions.validate()?;
    Ok(assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        let assumptions = load_assumptions_from_reader("{}".as_bytes()).expect("Failed to load");
        assert_eq!(assumptions, Assumptions::default());
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "horizon_months": 36,
            "retention": { "churn_impact_month": 6 },
            "financing": { "annual_wacc": 0.12 }
        }"#;
        let assumptions = load_assumptions_from_reader(json.as_bytes()).expect("Failed to load");

        assert_eq!(assumptions.horizon_months, 36);
        assert_eq!(assumptions.retention.churn_impact_month, 6);
        // Untouched fields in the same group keep their defaults
        assert_eq!(assumptions.retention.total_accounts, 50);
        assert_eq!(assumptions.financing.annual_wacc, 0.12);
        assert_eq!(assumptions.financing.tax_rate, 0.25);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let json = r#"{ "upsell_per_month": "lots" }"#;
        let err = load_assumptions_from_reader(json.as_bytes()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_malformed_json() {
        let err = load_assumptions_from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let json = r#"{ "horizon_months": 0 }"#;
        let err = load_assumptions_from_reader(json.as_bytes()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{ "upsell_per_month": 7500.0 }}"#).expect("Failed to write");

        let assumptions = load_assumptions(file.path()).expect("Failed to load");
        assert_eq!(assumptions.upsell_per_month, 7500.0);
    }
}
