//! The capability shared by every reference-counted value kind

use std::fmt;
use std::sync::Arc;

use super::{Printer, Tag, Value};

/// A heap-allocated value kind reached through an `Arc` handle.
///
/// Each implementor carries exactly one fixed [`Tag`]. The `borrow_from`
/// and `into_value` pair is how a [`Value`] handle is converted to and from
/// the concrete kind; callers go through [`Value::downcast`], which checks
/// the tag before borrowing.
pub trait RefValue: fmt::Debug + Send + Sync + 'static {
    /// The tag every value of this kind carries
    const TAG: Tag;

    /// Print this value as a re-readable literal.
    fn print(&self, p: &mut Printer<'_>) -> fmt::Result;

    /// Wrap a shared payload in a value handle.
    fn into_value(this: Arc<Self>) -> Value;

    /// Borrow the payload if `value` holds this kind.
    fn borrow_from(value: &Value) -> Option<&Arc<Self>>;
}

impl RefValue for String {
    const TAG: Tag = Tag::String;

    fn print(&self, p: &mut Printer<'_>) -> fmt::Result {
        p.string(self)
    }

    fn into_value(this: Arc<Self>) -> Value {
        Value::String(this)
    }

    fn borrow_from(value: &Value) -> Option<&Arc<Self>> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl RefValue for Vec<Value> {
    const TAG: Tag = Tag::List;

    fn print(&self, p: &mut Printer<'_>) -> fmt::Result {
        p.list(self)
    }

    fn into_value(this: Arc<Self>) -> Value {
        Value::List(this)
    }

    fn borrow_from(value: &Value) -> Option<&Arc<Self>> {
        match value {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}
