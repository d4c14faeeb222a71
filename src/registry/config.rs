#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// What to do with a stored value that matches no member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum UnknownValuePolicy {
    /// Fail with `CategoryError::UnknownValue`
    #[default]
    Reject,

    /// Substitute the enumeration's documented default and log a warning
    UseDefault,
}

/// Configuration parameters for the category registry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RegistryConfig {
    /// Policy applied by `CategoryRegistry::decode`
    pub unknown_value_policy: UnknownValuePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            unknown_value_policy: UnknownValuePolicy::Reject,
        }
    }
}
