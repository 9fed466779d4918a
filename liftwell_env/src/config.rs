//! Simulation configuration provider.
//!
//! Options are read from a JSON document with six keys: `structures`,
//! `floors`, `passengers`, `elevators`, `elevatorCapacity` and `duration`.
//! All six must be present; there is no per-key fallback. When the source
//! file is missing or unreadable the provider falls back to the built-in
//! defaults instead, so a fresh checkout runs without any config file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ConfigError;

/// Waiting-pool representation, selected by the `structures` option.
///
/// Both representations preserve arrival order and claim in the same scan
/// order; the option changes the backing collection, never observable
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStructure {
    /// Queue-backed pool
    Linked,

    /// Contiguous-array pool
    Array,
}

impl PoolStructure {
    /// Returns the option value for this structure.
    pub fn name(&self) -> &'static str {
        match self {
            PoolStructure::Linked => "linked",
            PoolStructure::Array => "array",
        }
    }
}

impl Default for PoolStructure {
    fn default() -> Self {
        PoolStructure::Linked
    }
}

impl std::fmt::Display for PoolStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters for one simulation run.
#[derive(Debug, Clone, Deserialize)]
pub struct SimProperties {
    /// Waiting-pool representation
    pub structures: PoolStructure,

    /// Number of floors in the building (numbered 1 upward)
    pub floors: i32,

    /// Per-floor, per-tick probability of a passenger arriving
    pub passengers: f64,

    /// Number of elevators, each starting at floor 1 heading up
    pub elevators: usize,

    /// Maximum onboard passengers per elevator
    #[serde(rename = "elevatorCapacity")]
    pub elevator_capacity: usize,

    /// Number of ticks to simulate
    pub duration: u64,
}

impl Default for SimProperties {
    fn default() -> Self {
        Self {
            structures: PoolStructure::Linked,
            floors: 32,
            passengers: 0.03,
            elevators: 1,
            elevator_capacity: 10,
            duration: 500,
        }
    }
}

impl SimProperties {
    /// Parses properties from a JSON document.
    ///
    /// Structural problems only; domain checks live in [`SimProperties::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks every field against its documented domain.
    ///
    /// Runs once at startup. The simulation itself assumes validated
    /// properties and performs no further checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors < 1 {
            return Err(ConfigError::invalid(
                "floors",
                format!("must be a positive integer, got {}", self.floors),
            ));
        }
        if !(0.0..=1.0).contains(&self.passengers) {
            return Err(ConfigError::invalid(
                "passengers",
                format!("must be a probability in [0, 1], got {}", self.passengers),
            ));
        }
        if self.elevators < 1 {
            return Err(ConfigError::invalid(
                "elevators",
                format!("must be a positive integer, got {}", self.elevators),
            ));
        }
        if self.elevator_capacity < 1 {
            return Err(ConfigError::invalid(
                "elevatorCapacity",
                format!("must be a positive integer, got {}", self.elevator_capacity),
            ));
        }
        if self.duration < 1 {
            return Err(ConfigError::invalid(
                "duration",
                format!("must be a positive integer, got {}", self.duration),
            ));
        }
        Ok(())
    }

    /// Resolves configuration from `path`.
    ///
    /// A missing or unreadable file falls back to the defaults. A file that
    /// exists but fails to parse or validate is fatal: a user who wrote a
    /// config file should never get a silently different simulation.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let props = match fs::read_to_string(path) {
            Ok(text) => {
                let props = Self::from_json(&text)?;
                info!("Configuration loaded successfully from {}", path.display());
                props
            }
            Err(err) => {
                info!("Config file {} not read ({}), using default configuration", path.display(), err);
                Self::default()
            }
        };
        props.validate()?;
        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"{
        "structures": "array",
        "floors": 10,
        "passengers": 0.5,
        "elevators": 2,
        "elevatorCapacity": 8,
        "duration": 100
    }"#;

    #[test]
    fn test_defaults() {
        let props = SimProperties::default();
        assert_eq!(props.structures, PoolStructure::Linked);
        assert_eq!(props.floors, 32);
        assert_eq!(props.passengers, 0.03);
        assert_eq!(props.elevators, 1);
        assert_eq!(props.elevator_capacity, 10);
        assert_eq!(props.duration, 500);
        assert!(props.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let props = SimProperties::from_json(FULL_CONFIG).unwrap();
        assert_eq!(props.structures, PoolStructure::Array);
        assert_eq!(props.floors, 10);
        assert_eq!(props.passengers, 0.5);
        assert_eq!(props.elevators, 2);
        assert_eq!(props.elevator_capacity, 8);
        assert_eq!(props.duration, 100);
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        // No per-key fallback: every key must be present
        let text = r#"{"floors": 10, "passengers": 0.5, "elevators": 2, "elevatorCapacity": 8, "duration": 100}"#;
        let err = SimProperties::from_json(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let text = FULL_CONFIG.replace("\"floors\": 10", "\"floors\": \"ten\"");
        let err = SimProperties::from_json(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_structure_is_parse_error() {
        let text = FULL_CONFIG.replace("\"array\"", "\"tree\"");
        let err = SimProperties::from_json(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_domain_values() {
        let cases = [
            (SimProperties { floors: 0, ..SimProperties::default() }, "floors"),
            (SimProperties { floors: -3, ..SimProperties::default() }, "floors"),
            (SimProperties { passengers: -0.1, ..SimProperties::default() }, "passengers"),
            (SimProperties { passengers: 1.5, ..SimProperties::default() }, "passengers"),
            (SimProperties { passengers: f64::NAN, ..SimProperties::default() }, "passengers"),
            (SimProperties { elevators: 0, ..SimProperties::default() }, "elevators"),
            (SimProperties { elevator_capacity: 0, ..SimProperties::default() }, "elevatorCapacity"),
            (SimProperties { duration: 0, ..SimProperties::default() }, "duration"),
        ];

        for (props, expected_field) in cases {
            match props.validate().unwrap_err() {
                ConfigError::Invalid { field, .. } => assert_eq!(field, expected_field),
                other => panic!("expected Invalid for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_probability_bounds_are_inclusive() {
        let zero = SimProperties { passengers: 0.0, ..SimProperties::default() };
        let one = SimProperties { passengers: 1.0, ..SimProperties::default() };
        assert!(zero.validate().is_ok());
        assert!(one.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let props = SimProperties::load_or_default(Path::new("/nonexistent/liftwell.json")).unwrap();
        assert_eq!(props.floors, SimProperties::default().floors);
        assert_eq!(props.duration, SimProperties::default().duration);
    }

    #[test]
    fn test_pool_structure_names() {
        assert_eq!(PoolStructure::Linked.name(), "linked");
        assert_eq!(PoolStructure::Array.name(), "array");
        assert_eq!(PoolStructure::Array.to_string(), "array");
    }
}
