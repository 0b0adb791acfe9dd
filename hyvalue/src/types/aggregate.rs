//! Structural types
//!
//! This file provides the types whose members are individually typed:
//! - `ObjectType`: named attributes, kept in declaration order.
//! - `TupleType`: positional elements.
//!
//! It also hosts `CapsuleType`, the opaque embedder-defined type.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{ValueError, ValueResult},
    types::Type,
};

/// Object type
///
/// Attributes keep their declaration order, which takes part in equality and ordering.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectType {
    attributes: Vec<(String, Type)>,
}

impl ObjectType {
    /// Create an object type from `(name, type)` pairs. Declaration order is kept.
    ///
    /// Fails with [`ValueError::DuplicateAttribute`] when a name appears twice.
    pub fn new<K: Into<String>>(attributes: impl IntoIterator<Item = (K, Type)>) -> ValueResult<Self> {
        let mut collected: Vec<(String, Type)> = Vec::new();
        for (name, ty) in attributes {
            let name = name.into();
            if collected.iter().any(|(existing, _)| *existing == name) {
                return Err(ValueError::DuplicateAttribute(name));
            }
            collected.push((name, ty));
        }

        Ok(Self {
            attributes: collected,
        })
    }

    /// Type of the attribute `name`, if the object declares it.
    pub fn attribute_type(&self, name: &str) -> Option<&Type> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, ty)| ty)
    }

    /// Iterate over the attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.attributes.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Tuple type
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TupleType {
    pub element_types: Vec<Type>,
}

impl TupleType {
    pub fn new(element_types: impl IntoIterator<Item = Type>) -> Self {
        Self {
            element_types: element_types.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.element_types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.element_types.is_empty()
    }
}

/// Capsule types wrap host data the type system knows nothing about.
///
/// Only the name is visible: it is what diagnostics print in place of a structural
/// description.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapsuleType {
    name: String,
}

impl CapsuleType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_keeps_declaration_order() {
        let object = ObjectType::new([("zeta", Type::Bool), ("alpha", Type::Number)]).unwrap();
        let names: Vec<_> = object.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(object.attribute_type("alpha"), Some(&Type::Number));
        assert_eq!(object.attribute_type("beta"), None);
    }

    #[test]
    fn object_type_rejects_duplicate_attributes() {
        let err = ObjectType::new([("a", Type::Bool), ("a", Type::String)]).unwrap_err();
        assert_eq!(err, ValueError::DuplicateAttribute("a".to_string()));
    }
}
