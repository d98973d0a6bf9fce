//! The two-dimensional shape value kind

use std::fmt;
use std::sync::Arc;

use super::{Printer, Record, RefValue, Tag, Value};
use crate::protocol;

/// A 2D shape whose geometric and visual properties live in a record.
///
/// The record is shared, not owned: wrapping it never copies its fields,
/// and any other holder of the same `Arc<Record>` sees the same data.
/// Construction does not look at the fields; see [`Shape2D::checked`] for
/// the variant that enforces the shape protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape2D {
    record: Arc<Record>,
}

impl Shape2D {
    /// Wrap a fully built record.
    pub fn new(record: Arc<Record>) -> Self {
        Self { record }
    }

    /// Wrap a record after checking it against the shape protocol.
    pub fn checked(record: Arc<Record>) -> crate::Result<Self> {
        protocol::check_shape2d(&record)?;
        Ok(Self::new(record))
    }

    /// The shared record holding this shape's fields
    pub fn record(&self) -> &Arc<Record> {
        &self.record
    }
}

impl RefValue for Shape2D {
    const TAG: Tag = Tag::Shape2D;

    /// A shape prints exactly as its record does.
    fn print(&self, p: &mut Printer<'_>) -> fmt::Result {
        p.record(&self.record)
    }

    fn into_value(this: Arc<Self>) -> Value {
        Value::Shape2D(this)
    }

    fn borrow_from(value: &Value) -> Option<&Arc<Self>> {
        match value {
            Value::Shape2D(s) => Some(s),
            _ => None,
        }
    }
}
