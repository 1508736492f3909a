//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Standard board side length.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Smallest board on which four distinct starting corners exist.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board the engine accepts (coordinates are `i32`).
pub const MAX_BOARD_SIZE: usize = 1024;

/// Settings fixed for the lifetime of a [`crate::Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the square board.
    pub board_size: usize,
}

impl EngineConfig {
    /// Config for a board of the given size.
    pub fn with_board_size(board_size: usize) -> EngineConfig {
        EngineConfig { board_size }
    }

    /// Check that the settings describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(
            EngineConfig::with_board_size(1).validate(),
            Err(ConfigError::BoardTooSmall { size: 1, min: 2 })
        );
        assert!(EngineConfig::with_board_size(2).validate().is_ok());
        assert!(EngineConfig::with_board_size(MAX_BOARD_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig = serde_json::from_str(r#"{"board_size": 14}"#).unwrap();
        assert_eq!(config.board_size, 14);
    }
}
