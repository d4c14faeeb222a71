/// Name/value metadata for one enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable {
    type_name: &'static str,
    entries: Vec<(&'static str, i32)>,
}

impl EnumTable {
    /// Creates a table from ordered `(name, value)` pairs
    pub fn new(type_name: &'static str, entries: Vec<(&'static str, i32)>) -> Self {
        Self { type_name, entries }
    }

    /// Returns the registered enumeration name
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the `(name, value)` pairs in declaration order
    pub fn entries(&self) -> &[(&'static str, i32)] {
        &self.entries
    }

    /// Returns the number of members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no members
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the member name for a raw value
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    /// Returns the raw value for a member name
    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    /// Returns whether `value` is a defined member
    pub fn contains_value(&self, value: i32) -> bool {
        self.name_of(value).is_some()
    }
}
