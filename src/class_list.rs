//! Class-name assembly: ordered, de-duplicated lists of class tokens.
//!
//! Components build their class attribute through [`ClassList`], which knows
//! the two token shapes used throughout the crate: `<prefix>_<value>` for a
//! literal prop and `<prefix>_<breakpoint>_<value>` for each breakpoint of a
//! responsive prop.

use std::fmt;

use crate::breakpoint::Breakpoint;
use crate::responsive::Responsive;

/// An ordered list of class tokens. Pushing a duplicate token is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Append a class. No-op if already present or empty.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Append a `<prefix>_<value>` token.
    pub fn push_token(&mut self, prefix: &str, value: impl fmt::Display) {
        self.push(format!("{prefix}_{value}"));
    }

    /// Append a `<prefix>_<breakpoint>_<value>` token.
    pub fn push_breakpoint_token(
        &mut self,
        prefix: &str,
        breakpoint: Breakpoint,
        value: impl fmt::Display,
    ) {
        self.push(format!("{prefix}_{breakpoint}_{value}"));
    }

    /// Append the tokens for a responsive prop.
    ///
    /// A single value becomes one `<prefix>_<value>` token. A map is
    /// cascade-resolved first, then contributes one breakpoint token per set
    /// slot in descending breakpoint order — so an empty map contributes
    /// nothing.
    pub fn push_responsive<T>(&mut self, prefix: &str, prop: &Responsive<T>)
    where
        T: fmt::Display + Clone,
    {
        match prop {
            Responsive::Value(value) => self.push_token(prefix, value),
            Responsive::Map(map) => {
                let resolved = map.resolve();
                for (breakpoint, value) in resolved.iter() {
                    self.push_breakpoint_token(prefix, breakpoint, value);
                }
            }
        }
    }

    /// The tokens, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if no token has been pushed.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether a token is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The whitespace-joined class attribute value.
    pub fn join(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
