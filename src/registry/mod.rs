#[macro_use]
mod macros;
mod category;
mod table;
mod config;

pub use self::category::Category;
pub use self::table::EnumTable;
pub use self::config::{RegistryConfig, UnknownValuePolicy};

use crate::error::CategoryError;
use crate::Result;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Metadata registry handed to serialization and editor tooling.
///
/// Nothing is registered implicitly: callers build the registry and register
/// the enumerations they need, or use [`CategoryRegistry::with_builtin`].
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    config: RegistryConfig,
    tables: Vec<EnumTable>,
    index: HashMap<&'static str, usize>,
}

impl CategoryRegistry {
    /// Creates an empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a registry holding every physics category this crate defines
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtin();
        registry
    }

    /// Registers every physics category this crate defines.
    ///
    /// Categories that are already present are left untouched.
    pub fn register_builtin(&mut self) {
        use crate::{
            AxisDirection, CharacterControllerType, ColliderType, ConstraintType,
            PhysicsGroup, RigidBodyType, SimplexType,
        };

        self.register_if_absent::<RigidBodyType>();
        self.register_if_absent::<AxisDirection>();
        self.register_if_absent::<SimplexType>();
        self.register_if_absent::<ColliderType>();
        self.register_if_absent::<ConstraintType>();
        self.register_if_absent::<CharacterControllerType>();
        self.register_if_absent::<PhysicsGroup>();
    }

    fn register_if_absent<T: Category>(&mut self) {
        if self.contains(T::TYPE_NAME) {
            return;
        }

        let table = T::table();
        debug!("registering category {} with {} members", table.type_name(), table.len());
        self.insert(table);
    }

    /// Registers the metadata table of `T`
    pub fn register<T: Category>(&mut self) -> Result<&EnumTable> {
        self.register_table(T::table())
    }

    /// Registers a prebuilt table, e.g. one describing a consumer's own groups.
    ///
    /// Member names and values must both be unique within the table.
    pub fn register_table(&mut self, table: EnumTable) -> Result<&EnumTable> {
        let type_name = table.type_name();
        if self.index.contains_key(type_name) {
            warn!("category {} is already registered", type_name);
            return Err(CategoryError::AlreadyRegistered(type_name.to_owned()));
        }

        let mut names = HashSet::new();
        let mut values = HashSet::new();
        for &(name, value) in table.entries() {
            if !names.insert(name) {
                return Err(CategoryError::DuplicateEntry {
                    category: type_name,
                    entry: name.to_owned(),
                });
            }
            if !values.insert(value) {
                return Err(CategoryError::DuplicateEntry {
                    category: type_name,
                    entry: value.to_string(),
                });
            }
        }

        debug!("registering category {} with {} members", type_name, table.len());
        Ok(self.insert(table))
    }

    fn insert(&mut self, table: EnumTable) -> &EnumTable {
        let slot = self.tables.len();
        self.index.insert(table.type_name(), slot);
        self.tables.push(table);
        &self.tables[slot]
    }

    /// Returns the active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the table registered under `type_name`
    pub fn table(&self, type_name: &str) -> Option<&EnumTable> {
        self.index.get(type_name).map(|&slot| &self.tables[slot])
    }

    /// Returns all tables in registration order
    pub fn tables(&self) -> &[EnumTable] {
        &self.tables
    }

    /// Returns whether a category is registered under `type_name`
    pub fn contains(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    /// Returns the number of registered categories
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns whether no category is registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Resolves a raw value to its member name
    pub fn name_of(&self, type_name: &str, value: i32) -> Option<&'static str> {
        self.table(type_name)?.name_of(value)
    }

    /// Resolves a member name to its raw value
    pub fn value_of(&self, type_name: &str, name: &str) -> Option<i32> {
        self.table(type_name)?.value_of(name)
    }

    /// Decodes a stored value, applying the configured unknown-value policy.
    ///
    /// `T` must be registered; decoding through the registry is how loaders
    /// opt into the policy, so an unregistered category is an error.
    pub fn decode<T: Category>(&self, raw: i32) -> Result<T> {
        if !self.contains(T::TYPE_NAME) {
            return Err(CategoryError::NotRegistered(T::TYPE_NAME.to_owned()));
        }

        match T::from_value(raw) {
            Some(member) => Ok(member),
            None => match self.config.unknown_value_policy {
                UnknownValuePolicy::Reject => Err(CategoryError::UnknownValue {
                    category: T::TYPE_NAME,
                    value: raw,
                }),
                UnknownValuePolicy::UseDefault => {
                    let fallback = T::default();
                    warn!(
                        "unrecognized {} value {}, substituting {}",
                        T::TYPE_NAME,
                        raw,
                        fallback
                    );
                    Ok(fallback)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColliderType, ConstraintType, PhysicsGroup, RigidBodyType};

    #[test]
    fn test_builtin_registers_every_category() {
        let registry = CategoryRegistry::with_builtin();

        assert_eq!(registry.len(), 7);
        let names: Vec<_> = registry.tables().iter().map(|t| t.type_name()).collect();
        assert_eq!(
            names,
            vec![
                "RigidBodyType",
                "AxisDirection",
                "SimplexType",
                "ColliderType",
                "ConstraintType",
                "CharacterControllerType",
                "PhysicsGroup",
            ]
        );
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = CategoryRegistry::new();
        assert!(registry.register::<ColliderType>().is_ok());

        let err = registry.register::<ColliderType>().unwrap_err();
        assert_eq!(err, CategoryError::AlreadyRegistered("ColliderType".to_owned()));
        assert_eq!(registry.len(), 1);

        // Builtin registration skips what is already there
        registry.register_builtin();
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_lookups_through_registry() {
        let registry = CategoryRegistry::with_builtin();

        assert_eq!(registry.value_of("ColliderType", "CAPSULE"), Some(2));
        assert_eq!(registry.name_of("ColliderType", 2), Some("CAPSULE"));
        assert_eq!(registry.name_of("PhysicsGroup", 1), Some("DEFAULT"));
        assert_eq!(registry.name_of("ConstraintType", 99), None);
        assert_eq!(registry.name_of("NoSuchCategory", 0), None);
        assert!(registry.table("RigidBodyType").is_some_and(|t| !t.contains_value(3)));
    }

    #[test]
    fn test_decode_rejects_by_default() {
        let registry = CategoryRegistry::with_builtin();

        assert_eq!(registry.decode::<ConstraintType>(1), Ok(ConstraintType::Hinge));
        assert_eq!(
            registry.decode::<ConstraintType>(99),
            Err(CategoryError::UnknownValue {
                category: "ConstraintType",
                value: 99,
            })
        );
    }

    #[test]
    fn test_decode_falls_back_when_configured() {
        let mut registry = CategoryRegistry::with_config(RegistryConfig {
            unknown_value_policy: UnknownValuePolicy::UseDefault,
        });
        registry.register_builtin();

        assert_eq!(registry.decode::<ColliderType>(9), Ok(ColliderType::Box));
        assert_eq!(registry.decode::<RigidBodyType>(3), Ok(RigidBodyType::Dynamic));
        assert_eq!(registry.decode::<PhysicsGroup>(1), Ok(PhysicsGroup::Default));
    }

    #[test]
    fn test_consumer_group_table() {
        let mut registry = CategoryRegistry::with_builtin();
        let groups = EnumTable::new(
            "GameGroup",
            vec![("DEFAULT", 1), ("ENEMY", 2), ("TERRAIN", 4)],
        );

        let table = registry.register_table(groups).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.value_of("GameGroup", "TERRAIN"), Some(4));
        assert_eq!(registry.name_of("GameGroup", 2), Some("ENEMY"));
        assert_eq!(registry.tables().last().map(|t| t.type_name()), Some("GameGroup"));
    }

    #[test]
    fn test_table_with_duplicates_is_rejected() {
        let mut registry = CategoryRegistry::new();

        let same_name = EnumTable::new("GameGroup", vec![("ENEMY", 2), ("ENEMY", 4)]);
        assert_eq!(
            registry.register_table(same_name).unwrap_err(),
            CategoryError::DuplicateEntry {
                category: "GameGroup",
                entry: "ENEMY".to_owned(),
            }
        );

        let same_value = EnumTable::new("GameGroup", vec![("ENEMY", 2), ("TERRAIN", 2)]);
        assert_eq!(
            registry.register_table(same_value).unwrap_err(),
            CategoryError::DuplicateEntry {
                category: "GameGroup",
                entry: "2".to_owned(),
            }
        );

        assert!(registry.is_empty());
        assert!(!registry.contains("GameGroup"));
    }

    #[test]
    fn test_builtin_skips_registered_categories() {
        let mut registry = CategoryRegistry::new();
        registry.register::<PhysicsGroup>().unwrap();

        registry.register_builtin();
        registry.register_builtin();

        assert_eq!(registry.len(), 7);
        assert_eq!(registry.tables()[0].type_name(), "PhysicsGroup");
    }

    #[test]
    fn test_decode_requires_registration() {
        let registry = CategoryRegistry::new();

        assert_eq!(
            registry.decode::<ColliderType>(0),
            Err(CategoryError::NotRegistered("ColliderType".to_owned()))
        );
    }
}
