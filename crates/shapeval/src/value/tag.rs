//! Runtime type tags

use std::fmt;

/// Discriminant identifying the kind of a [`Value`](super::Value).
///
/// Adding a value kind means adding a tag here and one
/// [`RefValue`](super::RefValue) implementor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `null`
    Null,
    /// Booleans
    Bool,
    /// Numbers
    Number,
    /// Strings
    String,
    /// Lists
    List,
    /// Records
    Record,
    /// Two-dimensional shapes
    Shape2D,
    /// Functions
    Function,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 8] = [
        Tag::Null,
        Tag::Bool,
        Tag::Number,
        Tag::String,
        Tag::List,
        Tag::Record,
        Tag::Shape2D,
        Tag::Function,
    ];

    /// User-facing name of the kind
    pub fn name(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Record => "record",
            Tag::Shape2D => "shape2d",
            Tag::Function => "function",
        }
    }

    /// Whether values of this kind are reference counted
    pub fn is_ref(self) -> bool {
        !matches!(self, Tag::Null | Tag::Bool | Tag::Number)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
