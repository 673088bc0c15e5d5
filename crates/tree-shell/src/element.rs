//! The element value type shown in the tree

use filter_tree::{predicate, Predicate};
use std::fmt;

/// A named item in the tree
///
/// Equality and hashing go by the text, which is also what filter queries
/// match against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    text: String,
}

impl Element {
    /// Create an element with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The element's text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Turn a raw filter query into a predicate
///
/// A blank query means "no filter active" and clears the predicate;
/// anything else matches elements whose text contains the query as a
/// substring.
pub fn text_query(query: &str) -> Option<Predicate<Element>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let query = query.to_string();
    Some(predicate(move |element: &Element| {
        element.text().contains(&query)
    }))
}
