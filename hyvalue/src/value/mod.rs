//! Values
//!
//! A [`Value`] pairs a [`Type`] with a state: unknown (a placeholder for a result that
//! is not determined yet), null, or known [`Data`]. The type is available in every
//! state, which is what lets diagnostics tell a null string from a null number.
//!
//! Known collections are validated on construction: every element must have exactly
//! the collection's element type.
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
};

use auto_enums::auto_enum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use crate::{
    error::{ValueError, ValueResult},
    number::Number,
    types::{CapsuleType, ObjectType, TupleType, Type},
};

/// Content of a known value.
///
/// Sets are kept in the total order of [`Value`] and maps in key order, so iteration
/// is deterministic. Object attributes keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Data {
    String(String),
    Number(Number),
    Bool(bool),
    Object(Vec<(String, Value)>),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Set(BTreeSet<Value>),
    Map(BTreeMap<String, Value>),
    /// Opaque payload of a capsule, described by the embedder.
    Capsule(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum State {
    Unknown,
    Null,
    Known(Data),
}

/// A dynamically-typed value.
///
/// Ordering compares the type first, then the state (`unknown < null < known`), then
/// the content. Object attributes are compared in insertion order, so two objects
/// holding the same attributes in a different order are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Value {
    ty: Type,
    state: State,
}

fn check_element(expected: &Type, found: &Value, index: usize) -> ValueResult<()> {
    if expected.is_dynamic() {
        return Err(ValueError::DynamicElementType);
    }
    if found.ty() != expected {
        return Err(ValueError::ElementTypeMismatch {
            index,
            expected: expected.to_string(),
            found: found.ty().to_string(),
        });
    }
    Ok(())
}

impl Value {
    #[inline]
    fn known(ty: Type, data: Data) -> Self {
        Self {
            ty,
            state: State::Known(data),
        }
    }

    /// A value of type `ty` whose content is not determined yet.
    pub fn unknown(ty: Type) -> Self {
        Self {
            ty,
            state: State::Unknown,
        }
    }

    /// The null value of type `ty`.
    pub fn null(ty: Type) -> Self {
        Self {
            ty,
            state: State::Null,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::known(Type::String, Data::String(value.into()))
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Self::known(Type::Number, Data::Number(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Self::known(Type::Bool, Data::Bool(value))
    }

    /// Build an object from `(name, value)` pairs. The object's type is derived from
    /// the attribute values and attributes keep their insertion order.
    ///
    /// ```rust
    /// # use hyvalue::value::Value;
    /// let obj = Value::object([("name", Value::string("x")), ("size", Value::number(3))]).unwrap();
    /// let names: Vec<_> = obj.elements().map(|(k, _)| k.as_str().unwrap().to_string()).collect();
    /// assert_eq!(names, ["name", "size"]);
    /// ```
    pub fn object<K: Into<String>>(
        attributes: impl IntoIterator<Item = (K, Value)>,
    ) -> ValueResult<Self> {
        let attributes: Vec<(String, Value)> = attributes
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        let ty = ObjectType::new(
            attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.ty.clone())),
        )?;
        Ok(Self::known(ty.into(), Data::Object(attributes)))
    }

    /// Build a tuple. Elements may have different types.
    pub fn tuple(elements: impl IntoIterator<Item = Value>) -> Self {
        let elements: Vec<Value> = elements.into_iter().collect();
        let ty = TupleType::new(elements.iter().map(|value| value.ty.clone()));
        Self::known(ty.into(), Data::Tuple(elements))
    }

    /// Build a list whose elements all have type `element_type`.
    pub fn list(element_type: Type, elements: impl IntoIterator<Item = Value>) -> ValueResult<Self> {
        let elements: Vec<Value> = elements.into_iter().collect();
        for (index, element) in elements.iter().enumerate() {
            check_element(&element_type, element, index)?;
        }
        Ok(Self::known(Type::list_of(element_type), Data::List(elements)))
    }

    pub fn list_empty(element_type: Type) -> Self {
        Self::known(Type::list_of(element_type), Data::List(Vec::new()))
    }

    /// Build a set whose elements all have type `element_type`. Duplicates collapse.
    pub fn set(element_type: Type, elements: impl IntoIterator<Item = Value>) -> ValueResult<Self> {
        let mut collected = BTreeSet::new();
        for (index, element) in elements.into_iter().enumerate() {
            check_element(&element_type, &element, index)?;
            collected.insert(element);
        }
        Ok(Self::known(Type::set_of(element_type), Data::Set(collected)))
    }

    pub fn set_empty(element_type: Type) -> Self {
        Self::known(Type::set_of(element_type), Data::Set(BTreeSet::new()))
    }

    /// Build a map whose elements all have type `element_type`.
    pub fn map<K: Into<String>>(
        element_type: Type,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> ValueResult<Self> {
        let mut collected = BTreeMap::new();
        for (key, element) in entries {
            let key = key.into();
            if element_type.is_dynamic() {
                return Err(ValueError::DynamicElementType);
            }
            if element.ty != element_type {
                return Err(ValueError::MapElementTypeMismatch {
                    key,
                    expected: element_type.to_string(),
                    found: element.ty.to_string(),
                });
            }
            if collected.contains_key(&key) {
                return Err(ValueError::DuplicateKey(key));
            }
            collected.insert(key, element);
        }
        Ok(Self::known(Type::map_of(element_type), Data::Map(collected)))
    }

    pub fn map_empty(element_type: Type) -> Self {
        Self::known(Type::map_of(element_type), Data::Map(BTreeMap::new()))
    }

    /// Wrap an opaque host payload, described by `payload`.
    pub fn capsule(ty: CapsuleType, payload: impl Into<String>) -> Self {
        Self::known(ty.into(), Data::Capsule(payload.into()))
    }

    /// Returns `false` when the value is a placeholder for an undetermined result.
    #[inline]
    pub fn is_known(&self) -> bool {
        !self.state.is_unknown()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.state.is_null()
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The content of the value, [`None`] when unknown or null.
    pub fn data(&self) -> Option<&Data> {
        match &self.state {
            State::Known(data) => Some(data),
            State::Unknown | State::Null => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.data()?.try_as_string_ref().map(String::as_str)
    }

    pub fn as_number(&self) -> Option<&Number> {
        self.data()?.try_as_number_ref()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.data()?.try_as_bool_ref().copied()
    }

    /// Number of members of a known aggregate, [`None`] for everything else.
    pub fn len(&self) -> Option<usize> {
        match self.data()? {
            Data::Object(attributes) => Some(attributes.len()),
            Data::Tuple(elements) | Data::List(elements) => Some(elements.len()),
            Data::Set(elements) => Some(elements.len()),
            Data::Map(entries) => Some(entries.len()),
            Data::String(_) | Data::Number(_) | Data::Bool(_) | Data::Capsule(_) => None,
        }
    }

    /// Iterate over the members of a known aggregate as `(key, element)` pairs.
    ///
    /// Keys are index numbers for lists and tuples, strings for objects and maps, and
    /// the element itself for sets. Unknown, null and non-aggregate values yield
    /// nothing. The order is stable: insertion order for objects, lists and tuples,
    /// key order for maps and value order for sets.
    #[auto_enum(Iterator)]
    pub fn elements(&self) -> impl Iterator<Item = (Cow<'_, Value>, &Value)> {
        match self.data() {
            Some(Data::Object(attributes)) => attributes
                .iter()
                .map(|(name, value)| (Cow::Owned(Value::string(name.as_str())), value)),
            Some(Data::Map(entries)) => entries
                .iter()
                .map(|(key, value)| (Cow::Owned(Value::string(key.as_str())), value)),
            Some(Data::Tuple(elements) | Data::List(elements)) => elements
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(Value::number(index as u64)), value)),
            Some(Data::Set(elements)) => elements.iter().map(|value| (Cow::Borrowed(value), value)),
            _ => std::iter::empty(),
        }
    }
}
