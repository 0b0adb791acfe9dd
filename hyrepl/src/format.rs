//! Render values as literal-like text that shows their type.
//!
//! The output resembles the configuration language's own literal syntax and uses the
//! type conversion functions (`tolist`, `tostring`, ...) where necessary to indicate
//! exactly what type a value has, so that a failed equality test between a null string
//! and a null number is readable at a glance.
//!
//! ```rust
//! # use hyrepl::format::format_value;
//! # use hyvalue::{types::Type, value::Value};
//! let map = Value::map(Type::Number, [("a", Value::number(1)), ("b", Value::number(2))]).unwrap();
//! assert_eq!(format_value(&map, 0), "tomap({\n  \"a\" = 1\n  \"b\" = 2\n})");
//! assert_eq!(format_value(&Value::null(Type::String), 0), "tostring(null)");
//! ```
use std::fmt::{self, Write};

use hyvalue::{
    types::Type,
    value::{Data, Value},
};
use log::{trace, warn};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::{
    conf::FormatOptions,
    magic::{TRUNCATED_MARKER, UNKNOWN_MARKER},
};

/// Format `value` with the default options, starting at the given indentation.
///
/// `indent` is the column of the line the value starts on. Nested lines are indented
/// relative to it and the closing bracket of a collection returns to it.
pub fn format_value(value: &Value, indent: usize) -> String {
    ValueFormatter::default().format(value, indent)
}

/// Convenience entry point on values.
pub trait FormatValueExt {
    /// Format with the default options at indentation zero.
    fn formatted(&self) -> String;
}

impl FormatValueExt for Value {
    fn formatted(&self) -> String {
        format_value(self, 0)
    }
}

/// The recursive value printer.
///
/// A formatter holds only its options; every call is independent, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFormatter {
    options: FormatOptions,
}

impl ValueFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format `value` starting at the given indentation. The result never ends with a
    /// newline.
    pub fn format(&self, value: &Value, indent: usize) -> String {
        self.display_at(value, indent).to_string()
    }

    /// Write `value` into `out` starting at the given indentation.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, value: &Value, indent: usize) -> fmt::Result {
        self.write_value(out, value, indent, 0)
    }

    /// Build a formatting helper that renders `value` at indentation zero.
    pub fn display<'a>(&'a self, value: &'a Value) -> impl fmt::Display + 'a {
        self.display_at(value, 0)
    }

    /// Build a formatting helper that renders `value` at the given indentation.
    pub fn display_at<'a>(&'a self, value: &'a Value, indent: usize) -> impl fmt::Display + 'a {
        struct Fmt<'a> {
            formatter: &'a ValueFormatter,
            value: &'a Value,
            indent: usize,
        }

        impl fmt::Display for Fmt<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.formatter.write(f, self.value, self.indent)
            }
        }

        Fmt {
            formatter: self,
            value,
            indent,
        }
    }

    /// `depth` counts the collections enclosing `value`.
    fn write_value<W: Write + ?Sized>(
        &self,
        f: &mut W,
        value: &Value,
        indent: usize,
        depth: usize,
    ) -> fmt::Result {
        if !value.is_known() {
            return f.write_str(UNKNOWN_MARKER);
        }
        if value.is_null() {
            return write_null(f, value.ty());
        }

        let Some(data) = value.data() else {
            return self.write_fallback(f, value);
        };

        let aggregate = matches!(
            data,
            Data::Object(_) | Data::Tuple(_) | Data::List(_) | Data::Set(_) | Data::Map(_)
        );
        if aggregate && depth >= self.options.max_depth {
            warn!(
                "Value of type `{}` nested {} collections deep exceeds the limit of {}, truncating.",
                value.ty(),
                depth,
                self.options.max_depth
            );
            return f.write_str(TRUNCATED_MARKER);
        }

        match data {
            // TODO: render multi-line strings using heredoc syntax once the REPL can parse it back.
            Data::String(text) => write_quoted(f, text),
            Data::Number(number) => f.write_str(&number.to_general_string()),
            Data::Bool(true) => f.write_str("true"),
            Data::Bool(false) => f.write_str("false"),
            Data::Object(_) => self.write_keyed(f, value, indent, depth),
            Data::Tuple(_) => self.write_ordered(f, value, indent, depth),
            Data::List(_) => {
                f.write_str("tolist(")?;
                self.write_ordered(f, value, indent, depth)?;
                f.write_char(')')
            }
            Data::Set(_) => {
                f.write_str("toset(")?;
                self.write_ordered(f, value, indent, depth)?;
                f.write_char(')')
            }
            Data::Map(_) => {
                f.write_str("tomap(")?;
                self.write_keyed(f, value, indent, depth)?;
                f.write_char(')')
            }
            Data::Capsule(_) => self.write_fallback(f, value),
        }
    }

    /// `{ key = value ... }` with one entry per line, in the value's iteration order.
    fn write_keyed<W: Write + ?Sized>(
        &self,
        f: &mut W,
        value: &Value,
        indent: usize,
        depth: usize,
    ) -> fmt::Result {
        let inner = indent + self.options.indent_width;
        let mut count = 0;

        f.write_char('{')?;
        for (key, element) in value.elements() {
            count += 1;
            write!(f, "\n{:inner$}", "")?;
            self.write_value(f, &key, inner, depth + 1)?;
            f.write_str(" = ")?;
            self.write_value(f, element, inner, depth + 1)?;
        }
        if count > 0 {
            write!(f, "\n{:indent$}", "")?;
        }
        f.write_char('}')
    }

    /// `[ value, ... ]` with one element per line, every element comma-terminated.
    fn write_ordered<W: Write + ?Sized>(
        &self,
        f: &mut W,
        value: &Value,
        indent: usize,
        depth: usize,
    ) -> fmt::Result {
        let inner = indent + self.options.indent_width;
        let mut count = 0;

        f.write_char('[')?;
        for (_, element) in value.elements() {
            count += 1;
            write!(f, "\n{:inner$}", "")?;
            self.write_value(f, element, inner, depth + 1)?;
            f.write_char(',')?;
        }
        if count > 0 {
            write!(f, "\n{:indent$}", "")?;
        }
        f.write_char(']')
    }

    fn write_fallback<W: Write + ?Sized>(&self, f: &mut W, value: &Value) -> fmt::Result {
        trace!("No literal syntax for values of type `{}`, dumping.", value.ty());
        write!(f, "{:#?}", value)
    }
}

fn write_null<W: Write + ?Sized>(f: &mut W, ty: &Type) -> fmt::Result {
    match ty {
        Type::Dynamic => f.write_str("null"),
        Type::String => f.write_str("tostring(null)"),
        Type::Number => f.write_str("tonumber(null)"),
        Type::Bool => f.write_str("tobool(null)"),
        Type::List(element) => write!(f, "tolist(null) /* of {} */", element.friendly_name()),
        Type::Set(element) => write!(f, "toset(null) /* of {} */", element.friendly_name()),
        Type::Map(element) => write!(f, "tomap(null) /* of {} */", element.friendly_name()),
        Type::Object(_) | Type::Tuple(_) | Type::Capsule(_) => {
            write!(f, "null /* {} */", ty.friendly_name())
        }
    }
}

/// Double-quoted, single-line string literal.
fn write_quoted<W: Write + ?Sized>(f: &mut W, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0B}' => f.write_str("\\v")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c if c.is_ascii() || is_printable(c) => f.write_char(c)?,
            c if (c as u32) < 0x10000 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "\\U{:08x}", c as u32)?,
        }
    }
    f.write_char('"')
}

/// Non-ASCII characters that can be shown verbatim: letters, marks, numbers,
/// punctuation and symbols.
fn is_printable(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    )
}

#[cfg(test)]
mod tests {
    use hyvalue::types::{CapsuleType, ObjectType, TupleType};

    use super::*;

    fn quoted(text: &str) -> String {
        format_value(&Value::string(text), 0)
    }

    #[test]
    fn quoting_escapes_quotes_backslashes_and_controls() {
        assert_eq!(quoted("plain"), r#""plain""#);
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quoted(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(quoted("a\nb\tc\r"), r#""a\nb\tc\r""#);
        assert_eq!(quoted("\u{07}\u{08}\u{0B}\u{0C}"), r#""\a\b\v\f""#);
        assert_eq!(quoted("\u{00}\u{1B}\u{7F}"), r#""\x00\x1b\x7f""#);
    }

    #[test]
    fn quoting_keeps_printable_unicode() {
        assert_eq!(quoted("héllo wörld ✓ 日本"), "\"héllo wörld ✓ 日本\"");
        assert_eq!(quoted("🦀"), "\"🦀\"");
        assert_eq!(quoted("e\u{301}"), "\"e\u{301}\"");
        assert_eq!(quoted("हिन्दी"), "\"हिन्दी\"");
        assert_eq!(quoted("zero\u{200B}width"), r#""zero\u200bwidth""#);
        assert_eq!(quoted("\u{FFFF}"), r#""\uffff""#);
        assert_eq!(quoted("no\u{A0}break"), r#""no\u00a0break""#);
        assert_eq!(quoted("\u{2028}"), r#""\u2028""#);
        assert_eq!(quoted("\u{E0001}"), r#""\U000e0001""#);
    }

    #[test]
    fn null_of_structural_types_is_annotated() {
        let object = ObjectType::new([("a", Type::String)]).unwrap();
        assert_eq!(format_value(&Value::null(object.into()), 0), "null /* object */");
        assert_eq!(
            format_value(&Value::null(TupleType::new([Type::Bool]).into()), 0),
            "null /* tuple */"
        );
        assert_eq!(
            format_value(&Value::null(CapsuleType::new("file handle").into()), 0),
            "null /* file handle */"
        );
    }

    #[test]
    fn capsules_fall_back_to_a_debug_dump() {
        let capsule = Value::capsule(CapsuleType::new("socket"), "fd=3");
        let rendered = format_value(&capsule, 0);
        assert_eq!(rendered, format!("{:#?}", capsule));
        assert!(rendered.contains("fd=3"));
    }

    #[test]
    fn wide_indentation_option() {
        let formatter = ValueFormatter::new(FormatOptions {
            indent_width: 4,
            ..Default::default()
        });
        let tuple = Value::tuple([Value::bool(true), Value::tuple([Value::number(1)])]);
        assert_eq!(
            formatter.format(&tuple, 0),
            "[\n    true,\n    [\n        1,\n    ],\n]"
        );
    }

    #[test]
    fn writes_into_an_existing_buffer() {
        let mut out = String::from("result: ");
        ValueFormatter::default()
            .write(&mut out, &Value::bool(false), 0)
            .unwrap();
        assert_eq!(out, "result: false");
        assert_eq!(
            format!("{}", ValueFormatter::default().display(&Value::number(5))),
            "5"
        );
    }
}
