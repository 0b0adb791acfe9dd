use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum ValueError {
    /// A collection element does not have the collection's element type.
    #[error(
        "Element {index} has type `{found}`, but the collection only holds elements of type `{expected}`."
    )]
    ElementTypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    /// A map element does not have the map's element type.
    #[error(
        "Map element `{key}` has type `{found}`, but the map only holds elements of type `{expected}`."
    )]
    MapElementTypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// Known collections must commit to a concrete element type.
    #[error(
        "A known, non-empty collection cannot use `dynamic` as its element type. Use a concrete type instead."
    )]
    DynamicElementType,

    /// An object attribute name is used twice.
    #[error("Attribute `{0}` is defined more than once within the same object.")]
    DuplicateAttribute(String),

    /// A map key is used twice.
    #[error("Key `{0}` appears more than once within the same map.")]
    DuplicateKey(String),

    /// NaN has no counterpart in the number type.
    #[error("NaN cannot be represented as a number value.")]
    NotANumber,

    /// Text that cannot be parsed as a number.
    #[error("`{text}` is not a valid number literal: {reason}")]
    InvalidNumber { text: String, reason: String },
}

pub type ValueResult<T> = Result<T, ValueError>;
