//! Category enumerations for a physics integration layer.
//!
//! Every enumeration here is a closed, `i32`-backed type whose values are part
//! of the on-disk contract of scenes and prefabs. Metadata for tooling lives in
//! [`registry::CategoryRegistry`], which is built by an explicit call rather
//! than populated when the types are loaded.

#[macro_use]
pub mod registry;
pub mod bodies;
pub mod math;
pub mod collision;
pub mod shapes;
pub mod constraints;

/// Re-export common types for easier usage
pub use crate::bodies::{RigidBodyType, RigidBodyTypeMask};
pub use crate::collision::{PhysicsGroup, PhysicsGroupMask, SimplexType};
pub use crate::constraints::ConstraintType;
pub use crate::math::AxisDirection;
pub use crate::registry::{Category, CategoryRegistry, EnumTable, RegistryConfig, UnknownValuePolicy};
pub use crate::shapes::{CharacterControllerType, ColliderType};

/// Error types for category lookups and registration
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum CategoryError {
        #[error("unrecognized {category} value: {value}")]
        UnknownValue { category: &'static str, value: i32 },

        #[error("unrecognized {category} name: {name:?}")]
        UnknownName { category: &'static str, name: String },

        #[error("unrecognized {category} bits: {bits:#x}")]
        UnknownBits { category: &'static str, bits: i32 },

        #[error("duplicate {category} entry: {entry}")]
        DuplicateEntry { category: &'static str, entry: String },

        #[error("category already registered: {0}")]
        AlreadyRegistered(String),

        #[error("category not registered: {0}")]
        NotRegistered(String),
    }
}

/// Result type for category operations
pub type Result<T> = std::result::Result<T, error::CategoryError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
