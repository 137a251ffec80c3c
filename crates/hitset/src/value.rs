use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Column value domain for extracted cells. Scalars only; the crate never
/// coerces between variants, so whatever a source holds is what a column
/// reads.
///
/// Null → the hit carries no value for the requested source.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Uint(_) => "Uint",
            Self::Float(_) => "Float",
            Self::Text(_) => "Text",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
    f32     => Float,
    f64     => Float,
    String  => Text,
    &str    => Text,
}

///
/// TESTS
///
