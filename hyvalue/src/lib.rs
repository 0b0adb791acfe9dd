//! Dynamically-typed values for the Hyperion REPL.
//!
//! The crate exposes a small, schema-flexible type system ([`types::Type`]) and the
//! values that inhabit it ([`value::Value`]). Every value carries its type
//! independently of its content, so unknown and null values still know what they
//! would have been. Numbers are arbitrary precision ([`number::Number`]).
//!
//! ```rust
//! # use hyvalue::{types::Type, value::Value};
//! let names = Value::list(Type::String, [Value::string("a"), Value::string("b")]).unwrap();
//! assert_eq!(names.ty(), &Type::list_of(Type::String));
//! assert_eq!(names.len(), Some(2));
//! ```

pub mod error;
pub mod number;
pub mod types;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use number::Number;
pub use types::Type;
pub use value::{Data, Value};
