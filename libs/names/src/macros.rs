//! Macros for defining validated name types.

/// Macro to define a validated name type of a specific kind.
///
/// This generates a newtype wrapper around `String` with:
/// - A `KIND` constant
/// - `parse()` as the only way to construct a value
/// - `as_str()` and `into_string()` to render the value
/// - `Display`, `FromStr` and `TryFrom` implementations
/// - `Serialize` and `Deserialize` implementations that re-validate
/// - `Ord`, `Hash`, and other standard traits, consistent with `str`
///
/// # Example
///
/// ```ignore
/// define_name!(IndexName, NameKind::Index);
///
/// let name = IndexName::parse("orders-v2")?;
/// let parsed: IndexName = "orders-v2".parse()?;
/// assert_eq!(name, parsed);
/// ```
#[macro_export]
macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The kind of name this type holds.
            pub const KIND: $crate::NameKind = $kind;

            /// Parses and validates a name.
            pub fn parse(s: &str) -> Result<Self, $crate::NameError> {
                $crate::validate(Self::KIND, s)?;
                Ok(Self(s.to_string()))
            }

            fn parse_owned(s: String) -> Result<Self, $crate::NameError> {
                $crate::validate(Self::KIND, &s)?;
                Ok(Self(s))
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the name and returns the underlying string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::NameError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::NameError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse_owned(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> Self {
                name.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_owned(s).map_err(serde::de::Error::custom)
            }
        }
    };
}
