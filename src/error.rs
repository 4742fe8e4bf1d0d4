//! The crate's single fallible boundary: configuration validation.

use crate::room::RoomConfig;

/// A `RoomConfig` list failed referential-integrity validation.
///
/// This is the only `Result`-returning surface in the core; everything
/// downstream of a validated config list (materializer, extractor, cost
/// field, Dijkstra, evaluator, perturbation) is a total function.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("room type {0} has a weight entry referencing unknown type {1}")]
    UnknownWeightTarget(u8, u8),
}

/// Checks that every `weights` key in `configs` refers to a `type_code`
/// present somewhere in the same slice.
pub fn validate_configs(configs: &[RoomConfig]) -> Result<(), ConfigError> {
    let known: std::collections::HashSet<u8> = configs.iter().map(|c| c.type_code).collect();
    for config in configs {
        for &target in config.weights.keys() {
            if !known.contains(&target) {
                return Err(ConfigError::UnknownWeightTarget(config.type_code, target));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_list_is_valid() {
        assert!(validate_configs(&[]).is_ok());
    }

    #[test]
    fn weights_referencing_known_types_are_valid() {
        let mut a = RoomConfig::new("a", 0, 1);
        let b = RoomConfig::new("b", 1, 1);
        a.weights.insert(1, 0.5);
        assert!(validate_configs(&[a, b]).is_ok());
    }

    #[test]
    fn weights_referencing_unknown_type_is_rejected() {
        let mut a = RoomConfig::new("a", 0, 1);
        a.weights.insert(9, 0.5);
        let err = validate_configs(&[a]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownWeightTarget(0, 9));
    }
}
