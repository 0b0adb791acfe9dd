//! Types module
//!
//! This module contains the canonical representation of the types that values can
//! take. The type system is built on three layers:
//!
//! - Primitive types: `string`, `number` and `bool`.
//! - Collection types: `list`, `set` and `map`, all homogeneous over a single element type.
//! - Structural types: objects and tuples (see `aggregate.rs`), whose members may each
//!   have a different type, and opaque capsules defined by the embedder.
//!
//! On top of those sits [`Type::Dynamic`], the unconstrained pseudo-type carried by
//! values whose type is not yet decided (typically unknown or null values).
//!
//! The [`Type::friendly_name`] helper renders types the way they appear in
//! diagnostics, e.g. `list of map of number`.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

pub use crate::types::aggregate::{CapsuleType, ObjectType, TupleType};
pub mod aggregate;

/// A sum-type representing any type a value can have.
///
/// [`Type`] implements `Ord`/`Hash` so values of any type can live inside ordered
/// sets and maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The unconstrained pseudo-type.
    ///
    /// No known value ever has this type. It is only used for unknown and null values
    /// whose type could not be determined.
    Dynamic,

    /// UTF-8 text.
    String,

    /// Arbitrary-precision number (see [`crate::number::Number`]).
    Number,

    /// `true` or `false`.
    Bool,

    /// An ordered sequence of elements sharing the given type.
    List(Box<Type>),

    /// An unordered collection of distinct elements sharing the given type.
    Set(Box<Type>),

    /// A mapping from string keys to elements sharing the given type.
    Map(Box<Type>),

    /// Named attributes, each with its own type.
    Object(ObjectType),

    /// Positional elements, each with its own type.
    Tuple(TupleType),

    /// An opaque type defined by the embedder.
    Capsule(CapsuleType),
}

impl From<ObjectType> for Type {
    fn from(value: ObjectType) -> Self {
        Type::Object(value)
    }
}

impl From<TupleType> for Type {
    fn from(value: TupleType) -> Self {
        Type::Tuple(value)
    }
}

impl From<CapsuleType> for Type {
    fn from(value: CapsuleType) -> Self {
        Type::Capsule(value)
    }
}

impl Type {
    /// Create the type `list of element`.
    pub fn list_of(element: Type) -> Self {
        Type::List(Box::new(element))
    }

    /// Create the type `set of element`.
    pub fn set_of(element: Type) -> Self {
        Type::Set(Box::new(element))
    }

    /// Create the type `map of element`.
    pub fn map_of(element: Type) -> Self {
        Type::Map(Box::new(element))
    }

    /// Returns `true` for `string`, `number` and `bool`.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::String | Type::Number | Type::Bool)
    }

    /// Returns `true` for the homogeneous collections (`list`, `set` and `map`).
    #[inline]
    pub fn is_collection(&self) -> bool {
        matches!(self, Type::List(_) | Type::Set(_) | Type::Map(_))
    }

    /// Returns the element type of a collection type, or [`None`] for every other type.
    ///
    /// ```rust
    /// # use hyvalue::types::Type;
    /// let ty = Type::set_of(Type::Bool);
    /// assert_eq!(ty.element_type(), Some(&Type::Bool));
    /// assert_eq!(Type::Bool.element_type(), None);
    /// ```
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(element) | Type::Set(element) | Type::Map(element) => Some(element),
            _ => None,
        }
    }

    /// Build a formatting helper that renders the human-readable name of this type.
    ///
    /// ```rust
    /// # use hyvalue::types::Type;
    /// let ty = Type::list_of(Type::map_of(Type::Number));
    /// assert_eq!(ty.friendly_name().to_string(), "list of map of number");
    /// ```
    pub fn friendly_name(&self) -> impl std::fmt::Display + '_ {
        struct Fmt<'a> {
            ty: &'a Type,
        }

        impl std::fmt::Display for Fmt<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.ty {
                    Type::Dynamic => write!(f, "dynamic"),
                    Type::String => write!(f, "string"),
                    Type::Number => write!(f, "number"),
                    Type::Bool => write!(f, "bool"),
                    Type::List(element) => write!(f, "list of {}", element.friendly_name()),
                    Type::Set(element) => write!(f, "set of {}", element.friendly_name()),
                    Type::Map(element) => write!(f, "map of {}", element.friendly_name()),
                    Type::Object(_) => write!(f, "object"),
                    Type::Tuple(_) => write!(f, "tuple"),
                    Type::Capsule(capsule) => write!(f, "{}", capsule.name()),
                }
            }
        }

        Fmt { ty: self }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.friendly_name())
    }
}
