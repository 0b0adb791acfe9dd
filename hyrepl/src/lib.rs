//! Diagnostic rendering of dynamically-typed values for the Hyperion REPL.
//!
//! The crate turns [`hyvalue::Value`]s into deterministic, literal-like text that
//! shows a value's type as well as its content (see [`format`]). Layout options can be
//! loaded from a TOML file (see [`conf::FormatOptions`]).
//!
//! Logging goes through the [`log`] facade; no logger is installed here.

pub mod conf;
pub mod error;
pub mod format;
pub mod magic;

pub use conf::FormatOptions;
pub use error::{ReplError, ReplResult};
pub use format::{FormatValueExt, ValueFormatter, format_value};
