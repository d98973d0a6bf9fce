//! Printing values as re-readable literals
//!
//! Grammar of the printed form:
//!
//! ```text
//! value   := "null" | "true" | "false" | number | string | list | record
//! number  := ["-"] digits ["." digits] | ["-"] "inf" | "nan"
//! list    := "[" [value ("," value)*] "]"
//! record  := "{" [field ("," field)*] "}"
//! field   := (ident | string) ":" value
//! ```
//!
//! Record fields print in name order. Shapes print as their record.
//! Functions print as `<function NAME>`, the one form that cannot be read
//! back.
//!
//! Printing has no depth limit, but reading does: output nested deeper than
//! [`ReadContext::max_depth`](crate::ReadContext::max_depth) (256 by
//! default) reads back only with a context that allows that depth.

use std::fmt;

use super::*;
use crate::PrintContext;

/// Writes values to a text sink using one [`PrintContext`].
pub struct Printer<'a> {
    out: &'a mut dyn fmt::Write,
    ctx: PrintContext,
}

impl<'a> Printer<'a> {
    /// Create a printer over any `fmt::Write` sink.
    pub fn new(out: &'a mut dyn fmt::Write, ctx: PrintContext) -> Self {
        Self { out, ctx }
    }

    /// The options in effect
    pub fn context(&self) -> &PrintContext {
        &self.ctx
    }

    /// Write raw text.
    pub fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }

    /// Write formatted text; makes `write!` work on a printer.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.out.write_fmt(args)
    }

    /// Print any value.
    pub fn value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.write_str("null"),
            Value::Bool(b) => self.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.number(*n),
            Value::String(s) => s.print(self),
            Value::List(items) => items.print(self),
            Value::Record(r) => r.print(self),
            Value::Shape2D(s) => s.print(self),
            Value::Function(func) => func.print(self),
        }
    }

    /// Print a number in shortest round-trip form.
    pub fn number(&mut self, n: f64) -> fmt::Result {
        if n.is_nan() {
            self.write_str("nan")
        } else if n.is_infinite() {
            self.write_str(if n > 0.0 { "inf" } else { "-inf" })
        } else {
            // f64's Display never uses exponent notation and drops ".0"
            write!(self.out, "{}", n)
        }
    }

    /// Print a quoted, escaped string.
    pub fn string(&mut self, s: &str) -> fmt::Result {
        write!(self.out, "{:?}", s)
    }

    /// Print a list literal.
    pub fn list(&mut self, items: &[Value]) -> fmt::Result {
        let sep = self.ctx.item_separator();
        self.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write_str(sep)?;
            }
            self.value(item)?;
        }
        self.write_str("]")
    }

    /// Print a record literal, every field in name order.
    pub fn record(&mut self, record: &Record) -> fmt::Result {
        let sep = self.ctx.item_separator();
        let colon = self.ctx.field_separator();
        self.write_str("{")?;
        for (i, (name, value)) in record.iter().enumerate() {
            if i > 0 {
                self.write_str(sep)?;
            }
            self.field_name(name)?;
            self.write_str(colon)?;
            self.value(value)?;
        }
        self.write_str("}")
    }

    /// Print a field name, quoting it unless it is a plain identifier.
    pub fn field_name(&mut self, name: &str) -> fmt::Result {
        if is_bare_name(name) {
            self.write_str(name)
        } else {
            self.string(name)
        }
    }
}

fn is_bare_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Value {
    /// Print this value with the canonical options.
    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.print_with(out, PrintContext::default())
    }

    /// Print this value with the given options.
    pub fn print_with(&self, out: &mut dyn fmt::Write, ctx: PrintContext) -> fmt::Result {
        Printer::new(out, ctx).value(self)
    }

    /// Render this value to a string with the given options.
    pub fn to_source_with(&self, ctx: PrintContext) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.print_with(&mut out, ctx);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
