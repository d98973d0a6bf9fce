//! Native function values

use std::fmt;
use std::sync::Arc;

use super::{Printer, RefValue, Tag, Value};
use crate::{Error, Result};

/// Type alias for native function bodies to reduce complexity
pub type NativeFnPtr = Box<dyn Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync>;

/// A function implemented in Rust.
///
/// Shapes use these for fields such as the distance function; this layer
/// treats them as opaque values that can be called.
pub struct Function {
    /// Function name (for display/debugging)
    pub name: String,

    /// Number of arguments the function accepts
    pub arity: usize,

    func: NativeFnPtr,
}

impl Function {
    /// Create a new native function
    pub fn new<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            func: Box::new(func),
        }
    }

    /// Call the function, checking arity first.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity {
            return Err(Error::Arity {
                name: self.name.clone(),
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.func)(args).map_err(|message| Error::Call {
            name: self.name.clone(),
            message,
        })
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({}/{})", self.name, self.arity)
    }
}

impl RefValue for Function {
    const TAG: Tag = Tag::Function;

    fn print(&self, p: &mut Printer<'_>) -> fmt::Result {
        write!(p, "<function {}>", self.name)
    }

    fn into_value(this: Arc<Self>) -> Value {
        Value::Function(this)
    }

    fn borrow_from(value: &Value) -> Option<&Arc<Self>> {
        match value {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }
}
