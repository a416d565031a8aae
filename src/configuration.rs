use std::io::Read;
use std::num::NonZeroU32;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SUBDIVISIONS: [u32; 6] = [6, 10, 20, 100, 500, 1000];

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("subdivision list must not be empty")]
    EmptySubdivisions,
    #[error("subdivision count at position {0} must be positive")]
    ZeroSubdivisions(usize),
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    subdivisions: Vec<u32>
}

/// Ordered subdivision counts, one experiment per entry.
///
/// The binary always runs with [`Configuration::default`]. `new`,
/// `from_reader` and `from_json` are library entry points for callers that
/// drive [`crate::application::run`] with their own list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    subdivisions: Vec<NonZeroU32>
}

impl Configuration {
    pub fn new(subdivisions: &[u32]) -> Result<Configuration, ConfigurationError> {
        if subdivisions.is_empty() {
            return Err(ConfigurationError::EmptySubdivisions);
        }
        let subdivisions = subdivisions
            .iter()
            .enumerate()
            .map(|(position, &n)| NonZeroU32::new(n).ok_or(ConfigurationError::ZeroSubdivisions(position)))
            .collect::<Result<Vec<NonZeroU32>, ConfigurationError>>()?;
        Ok(Configuration { subdivisions })
    }

    pub fn subdivisions(&self) -> &[NonZeroU32] {
        &self.subdivisions
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::new(&json_prop.subdivisions)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Configuration::new(&json_prop.subdivisions)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            subdivisions: DEFAULT_SUBDIVISIONS
                .iter()
                .filter_map(|&n| NonZeroU32::new(n))
                .collect()
        }
    }
}
