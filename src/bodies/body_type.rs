use crate::error::CategoryError;
use crate::Result;
use bitflags::bitflags;

category_enum! {
    /// Type of rigid body, determining how its transform is driven.
    ///
    /// Values are powers of two so a set of allowed types fits in a
    /// [`RigidBodyTypeMask`].
    pub enum RigidBodyType as "RigidBodyType" {
        /// Dynamic bodies are fully simulated (affected by forces, collisions, etc.)
        Dynamic = 1 => "DYNAMIC",

        /// Static bodies don't move and aren't affected by forces or collisions
        Static = 2 => "STATIC",

        /// Kinematic bodies are moved programmatically but affect dynamic bodies
        Kinematic = 4 => "KINEMATIC",
    }
    default = Dynamic;
}

impl RigidBodyType {
    /// Returns the single-bit mask for this type
    #[inline]
    pub fn mask(self) -> RigidBodyTypeMask {
        RigidBodyTypeMask::from_bits_retain(self as i32)
    }

    /// Returns whether this type is one of the types allowed by `mask`
    #[inline]
    pub fn matches(self, mask: RigidBodyTypeMask) -> bool {
        mask.contains(self.mask())
    }

    pub fn is_dynamic(self) -> bool {
        self == Self::Dynamic
    }

    pub fn is_static(self) -> bool {
        self == Self::Static
    }

    pub fn is_kinematic(self) -> bool {
        self == Self::Kinematic
    }
}

bitflags! {
    /// A set of rigid body types, e.g. the bodies a query or sensor accepts
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RigidBodyTypeMask: i32 {
        const DYNAMIC = 1;
        const STATIC = 2;
        const KINEMATIC = 4;
    }
}

impl RigidBodyTypeMask {
    /// Parses a stored mask, rejecting bits that name no body type
    pub fn from_raw(bits: i32) -> Result<Self> {
        Self::from_bits(bits).ok_or(CategoryError::UnknownBits {
            category: "RigidBodyType",
            bits,
        })
    }

    /// Returns the body types contained in the mask, in declaration order
    pub fn types(self) -> impl Iterator<Item = RigidBodyType> {
        use crate::registry::Category;

        RigidBodyType::MEMBERS
            .iter()
            .copied()
            .filter(move |body_type| body_type.matches(self))
    }
}

impl From<RigidBodyType> for RigidBodyTypeMask {
    fn from(body_type: RigidBodyType) -> Self {
        body_type.mask()
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for RigidBodyTypeMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.bits())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for RigidBodyTypeMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = <i32 as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_raw(bits).map_err(serde::de::Error::custom)
    }
}
