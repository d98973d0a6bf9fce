//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number value
    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    /// Create a record value
    pub fn record(r: Record) -> Self {
        Value::Record(Arc::new(r))
    }

    /// Create a shape value sharing an existing record
    pub fn shape2d(record: Arc<Record>) -> Self {
        Value::Shape2D(Arc::new(Shape2D::new(record)))
    }

    /// Create a native function value
    pub fn function<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Value::Function(Arc::new(Function::new(name, arity, func)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a shape
    pub fn is_shape2d(&self) -> bool {
        self.tag() == Tag::Shape2D
    }

    /// Check if value is callable
    pub fn is_callable(&self) -> bool {
        self.tag() == Tag::Function
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract number value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        self.downcast::<String>().map(|s| s.as_str())
    }

    /// Extract list items
    pub fn as_list(&self) -> Option<&[Value]> {
        self.downcast::<Vec<Value>>().map(|l| l.as_slice())
    }

    /// Extract the record of a record value
    pub fn as_record(&self) -> Option<&Arc<Record>> {
        self.downcast::<Record>()
    }

    /// Extract the shape of a shape value
    pub fn as_shape2d(&self) -> Option<&Arc<Shape2D>> {
        self.downcast::<Shape2D>()
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,

            // Payloads compare structurally, not by identity
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Shape2D(a), Value::Shape2D(b)) => a == b,

            // Functions are equal if they're the same Arc
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),

            // A record and a shape holding it are different values
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::record(r)
    }
}

impl From<Shape2D> for Value {
    fn from(s: Shape2D) -> Self {
        Value::Shape2D(Arc::new(s))
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(Arc::new(func))
    }
}

impl<T: RefValue> From<Arc<T>> for Value {
    fn from(payload: Arc<T>) -> Self {
        T::into_value(payload)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arc_keeps_identity() {
        let record = Arc::new(Record::new());
        let value = Value::from(Arc::clone(&record));
        assert!(Arc::ptr_eq(value.as_record().unwrap(), &record));
    }

    #[test]
    fn test_record_and_shape_differ() {
        let record = Arc::new(Record::new().with_field("a", Value::Null));
        assert_ne!(Value::Record(Arc::clone(&record)), Value::shape2d(record));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(1.5)), Value::Number(1.5));
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::Number(1.0).as_str(), None);
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::list(vec![]).as_list().map(<[Value]>::len), Some(0));
    }
}
