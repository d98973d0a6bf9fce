//! Printing and reading configuration

/// Options controlling how values are printed.
///
/// Both styles produce re-readable literals; they differ only in
/// whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintContext {
    /// Omit the space after `,` and `:` separators
    pub compact: bool,
}

impl PrintContext {
    /// Create a context producing the canonical spaced form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context producing the compact form.
    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub(crate) fn item_separator(&self) -> &'static str {
        if self.compact {
            ","
        } else {
            ", "
        }
    }

    pub(crate) fn field_separator(&self) -> &'static str {
        if self.compact {
            ":"
        } else {
            ": "
        }
    }
}

/// Configuration for reading literals back into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadContext {
    /// Maximum list/record nesting depth (stack overflow protection)
    pub max_depth: usize,
}

impl Default for ReadContext {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl ReadContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!PrintContext::default().compact);
        assert_eq!(ReadContext::default().max_depth, 256);
    }

    #[test]
    fn test_separators() {
        assert_eq!(PrintContext::new().item_separator(), ", ");
        assert_eq!(PrintContext::compact().field_separator(), ":");
    }
}
