/// Declares an `i32`-backed category enumeration and wires it into [`Category`].
///
/// Each variant carries its explicit discriminant and the member name exposed
/// to tooling. The generated type also gets `Default`, `Display`, `FromStr`,
/// `TryFrom<i32>` and, with the `serialize` feature, serde impls that store
/// the raw integer.
///
/// [`Category`]: crate::registry::Category
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident as $type_name:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $name:literal,
            )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $crate::registry::Category for $ty {
            const TYPE_NAME: &'static str = $type_name;
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            #[inline]
            fn value(self) -> i32 {
                self as i32
            }
        }

        impl ::std::default::Default for $ty {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<$ty> for i32 {
            #[inline]
            fn from(member: $ty) -> i32 {
                member as i32
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = $crate::error::CategoryError;

            fn try_from(value: i32) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::registry::Category>::from_value(value).ok_or(
                    $crate::error::CategoryError::UnknownValue {
                        category: $type_name,
                        value,
                    },
                )
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CategoryError;

            fn from_str(name: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::registry::Category>::from_name(name).ok_or_else(|| {
                    $crate::error::CategoryError::UnknownName {
                        category: $type_name,
                        name: name.to_owned(),
                    }
                })
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::registry::Category::name(*self))
            }
        }

        #[cfg(feature = "serialize")]
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i32(*self as i32)
            }
        }

        #[cfg(feature = "serialize")]
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <i32 as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}
