use bitflags::bitflags;

category_enum! {
    /// Named collision filtering groups.
    ///
    /// Only the default group is predefined; games add their own bits through
    /// [`PhysicsGroupMask::user_group`].
    pub enum PhysicsGroup as "PhysicsGroup" {
        /// Default group (collides with everything)
        Default = 1 => "DEFAULT",
    }
    default = Default;
}

impl PhysicsGroup {
    /// Returns the group as a mask
    #[inline]
    pub fn mask(self) -> PhysicsGroupMask {
        PhysicsGroupMask::from_bits_retain(self as u32)
    }
}

bitflags! {
    /// A bit mask representing a combination of collision groups
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PhysicsGroupMask: u32 {
        /// Default group (collides with everything)
        const DEFAULT = 0x00000001;

        /// All groups
        const ALL = 0xFFFFFFFF;
    }
}

impl Default for PhysicsGroupMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PhysicsGroupMask {
    /// Returns the mask of a game-defined group.
    ///
    /// Bit 0 is [`PhysicsGroup::Default`], so user groups occupy bits 1..=31.
    pub fn user_group(index: u32) -> Option<Self> {
        if (1..32).contains(&index) {
            Some(Self::from_bits_retain(1 << index))
        } else {
            None
        }
    }

    /// Returns whether two bodies with the given groups and masks may collide.
    ///
    /// A collides with B if A's mask includes B's group AND B's mask includes A's group.
    pub fn collides(group_a: Self, mask_a: Self, group_b: Self, mask_b: Self) -> bool {
        group_a.intersects(mask_b) && group_b.intersects(mask_a)
    }
}

impl From<PhysicsGroup> for PhysicsGroupMask {
    fn from(group: PhysicsGroup) -> Self {
        group.mask()
    }
}

// Every bit is a valid group once games add their own, so reading keeps all bits.
#[cfg(feature = "serialize")]
impl serde::Serialize for PhysicsGroupMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for PhysicsGroupMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
