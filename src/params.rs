//! Run parameters, loaded from a JSON file or built in code.

use crate::error::ContagionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The inputs for a single simulation run.
///
/// Counts are signed so that a negative value arriving from an input form
/// or file surfaces as [`ContagionError::InvalidArgument`] from
/// [`Params::validate`] rather than a type error in deserialization.
///
/// `r0` is a reproduction-number proxy, not a calibrated rate: each
/// infected-susceptible contact pair transmits with probability `r0 / 10`
/// per day, saturating at 1. `recovery_rate` is the per-day probability
/// that an infected person recovers.
///
/// `isolation_rate`, `vaccination_rate` and `vaccine_efficacy` are accepted
/// for parity with the full input form but are not consumed by the model;
/// a run warns when they are set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Params {
    pub population: i64,
    pub initial_infections: i64,
    pub r0: f64,
    pub recovery_rate: f64,
    #[serde(default)]
    pub isolation_rate: f64,
    #[serde(default)]
    pub vaccination_rate: f64,
    #[serde(default)]
    pub vaccine_efficacy: f64,
    pub days: i64,
    #[serde(default)]
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population: 100,
            initial_infections: 1,
            r0: 2.5,
            recovery_rate: 0.1,
            isolation_rate: 0.0,
            vaccination_rate: 0.0,
            vaccine_efficacy: 0.0,
            days: 30,
            seed: 0,
        }
    }
}

impl Params {
    /// Loads and validates parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` if the file cannot be read, is not valid
    /// JSON, or fails [`Params::validate`].
    pub fn load_from_json(path: &Path) -> Result<Self, ContagionError> {
        let contents = fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Rejects structurally invalid inputs: negative counts and non-finite
    /// rates. Finite rates outside `[0, 1]` are allowed and saturate when
    /// trials are drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ContagionError::InvalidArgument`] naming the offending
    /// field.
    pub fn validate(&self) -> Result<(), ContagionError> {
        if self.population < 0 {
            return Err(ContagionError::InvalidArgument(
                "population must be non-negative".to_string(),
            ));
        }
        if self.initial_infections < 0 {
            return Err(ContagionError::InvalidArgument(
                "initial_infections must be non-negative".to_string(),
            ));
        }
        if self.days < 0 {
            return Err(ContagionError::InvalidArgument(
                "days must be non-negative".to_string(),
            ));
        }
        for (name, value) in [
            ("r0", self.r0),
            ("recovery_rate", self.recovery_rate),
            ("isolation_rate", self.isolation_rate),
            ("vaccination_rate", self.vaccination_rate),
            ("vaccine_efficacy", self.vaccine_efficacy),
        ] {
            if !value.is_finite() {
                return Err(ContagionError::InvalidArgument(format!(
                    "{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_params_are_valid() {
        Params::default().validate().unwrap();
    }

    #[test]
    fn negative_population_is_rejected() {
        let params = Params {
            population: -1,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ContagionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_days_are_rejected() {
        let params = Params {
            days: -3,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ContagionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn nan_rate_is_rejected() {
        let params = Params {
            recovery_rate: f64::NAN,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ContagionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn out_of_range_rates_pass_validation() {
        // A reproduction factor of 15 means a per-contact probability above
        // one; it saturates at trial time instead of being rejected here.
        let params = Params {
            r0: 15.0,
            recovery_rate: 1.5,
            ..Params::default()
        };
        params.validate().unwrap();
    }

    #[test]
    fn load_from_json_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "population": 50,
                "initial_infections": 3,
                "r0": 2.0,
                "recovery_rate": 0.25,
                "days": 10,
                "seed": 123
            }}"#
        )
        .unwrap();

        let params = Params::load_from_json(file.path()).unwrap();
        assert_eq!(params.population, 50);
        assert_eq!(params.initial_infections, 3);
        assert_eq!(params.days, 10);
        assert_eq!(params.seed, 123);
        // Unused inputs default to zero when omitted
        assert_eq!(params.isolation_rate, 0.0);
        assert_eq!(params.vaccination_rate, 0.0);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            Params::load_from_json(file.path()),
            Err(ContagionError::JsonError(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Params::load_from_json(Path::new("/nonexistent/params.json")),
            Err(ContagionError::IoError(_))
        ));
    }

    #[test]
    fn negative_population_in_file_is_invalid_argument() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "population": -5,
                "initial_infections": 1,
                "r0": 2.0,
                "recovery_rate": 0.25,
                "days": 10
            }}"#
        )
        .unwrap();
        assert!(matches!(
            Params::load_from_json(file.path()),
            Err(ContagionError::InvalidArgument(_))
        ));
    }
}
