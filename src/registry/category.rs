use crate::registry::EnumTable;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed, integer-valued enumeration that tooling can introspect.
///
/// Member values are stable: scenes and prefabs persist the raw integer, so a
/// member is never renumbered once assigned.
pub trait Category: Copy + Eq + Hash + Debug + Display + Default + Send + Sync + 'static {
    /// Name under which the enumeration is registered
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order
    const MEMBERS: &'static [Self];

    /// Returns the member name exposed to tooling
    fn name(self) -> &'static str;

    /// Returns the raw integer value
    fn value(self) -> i32;

    /// Looks up a member by raw value
    fn from_value(value: i32) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|member| member.value() == value)
    }

    /// Looks up a member by name. Names are matched exactly.
    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|member| member.name() == name)
    }

    /// Returns whether `value` is a defined member
    fn is_valid(value: i32) -> bool {
        Self::from_value(value).is_some()
    }

    /// Returns the ordered `(name, value)` pairs
    fn entries() -> impl Iterator<Item = (&'static str, i32)> {
        Self::MEMBERS.iter().map(|member| (member.name(), member.value()))
    }

    /// Builds the metadata table handed to serialization and editor tooling
    fn table() -> EnumTable {
        EnumTable::new(Self::TYPE_NAME, Self::entries().collect())
    }
}
