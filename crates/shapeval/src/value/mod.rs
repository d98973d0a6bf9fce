//! Value representation for runtime values

mod callable;
mod compound;
mod display;
mod impls;
mod refs;
mod shape;
mod tag;

pub use callable::{Function, NativeFnPtr};
pub use compound::Record;
pub use display::Printer;
pub use refs::RefValue;
pub use shape::Shape2D;
pub use tag::Tag;

use std::sync::Arc;

/// Runtime value handle for the shape language.
///
/// Values are organized into two tiers:
/// - Immediates: stored inline, no reference count
/// - Reference kinds: a shared, immutable payload behind an `Arc`
///
/// Cloning a handle never copies the payload; it bumps the atomic count.
/// The payload is destroyed exactly once, when the last handle drops.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Immediates
    // ═══════════════════════════════════════════════════════════════════
    /// The `null` value
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// The single numeric type
    Number(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Reference kinds
    // ═══════════════════════════════════════════════════════════════════
    /// Immutable string
    String(Arc<String>),

    /// Ordered sequence of values
    List(Arc<Vec<Value>>),

    /// Field name to value mapping
    Record(Arc<Record>),

    /// Two-dimensional shape backed by a record
    Shape2D(Arc<Shape2D>),

    /// Native function
    Function(Arc<Function>),
}

impl Value {
    /// The runtime tag of this value.
    ///
    /// Derived from the variant, so it is fixed for the life of the handle.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Bool,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Record(_) => Tag::Record,
            Value::Shape2D(_) => Tag::Shape2D,
            Value::Function(_) => Tag::Function,
        }
    }

    /// Recover the concrete payload of a reference kind.
    ///
    /// The stored tag is checked first; a mismatch yields `None` rather
    /// than a wrongly typed view.
    pub fn downcast<T: RefValue>(&self) -> Option<&Arc<T>> {
        if self.tag() != T::TAG {
            return None;
        }
        T::borrow_from(self)
    }

    /// Like [`Value::downcast`], reporting a mismatch as an error.
    pub fn expect<T: RefValue>(&self) -> crate::Result<&Arc<T>> {
        self.downcast::<T>().ok_or(crate::Error::TagMismatch {
            expected: T::TAG,
            got: self.tag(),
        })
    }

    /// Number of live handles sharing this payload.
    ///
    /// `None` for immediates, which are not reference counted.
    pub fn ref_count(&self) -> Option<usize> {
        match self {
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
            Value::String(s) => Some(Arc::strong_count(s)),
            Value::List(l) => Some(Arc::strong_count(l)),
            Value::Record(r) => Some(Arc::strong_count(r)),
            Value::Shape2D(s) => Some(Arc::strong_count(s)),
            Value::Function(f) => Some(Arc::strong_count(f)),
        }
    }

    /// Check whether two handles refer to the same payload.
    ///
    /// Immediates have no identity and always compare false.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Shape2D(a), Value::Shape2D(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
