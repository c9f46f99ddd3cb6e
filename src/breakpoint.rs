//! Responsive breakpoints: the fixed, ordered set of viewport size classes.
//!
//! Breakpoints are ordered from largest viewport to smallest, matching
//! `max-width` media query semantics: a value defined at a larger breakpoint
//! cascades down to smaller ones unless overridden.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown breakpoint token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint: {0}")]
pub struct ParseBreakpointError(pub String);

/// A responsive breakpoint, from largest (`Xxxl`) to smallest (`Xxxs`).
///
/// The variant order is significant: it defines the cascade direction used by
/// [`crate::responsive::ResponsiveMap::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xxxl,
    Xxl,
    Xl,
    L,
    M,
    S,
    Xs,
    Xxs,
    Xxxs,
}

impl Breakpoint {
    /// All breakpoints in descending order (largest viewport first).
    pub const ALL: [Breakpoint; 9] = [
        Breakpoint::Xxxl,
        Breakpoint::Xxl,
        Breakpoint::Xl,
        Breakpoint::L,
        Breakpoint::M,
        Breakpoint::S,
        Breakpoint::Xs,
        Breakpoint::Xxs,
        Breakpoint::Xxxs,
    ];

    /// The lowercase token form used in class names and serialized maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xxxl => "xxxl",
            Breakpoint::Xxl => "xxl",
            Breakpoint::Xl => "xl",
            Breakpoint::L => "l",
            Breakpoint::M => "m",
            Breakpoint::S => "s",
            Breakpoint::Xs => "xs",
            Breakpoint::Xxs => "xxs",
            Breakpoint::Xxxs => "xxxs",
        }
    }

    /// The next-larger breakpoint, or `None` for `Xxxl`.
    pub fn larger(self) -> Option<Breakpoint> {
        let index = self as usize;
        if index == 0 {
            None
        } else {
            Some(Breakpoint::ALL[index - 1])
        }
    }

    /// The next-smaller breakpoint, or `None` for `Xxxs`.
    pub fn smaller(self) -> Option<Breakpoint> {
        let index = self as usize;
        if index + 1 == Breakpoint::ALL.len() {
            None
        } else {
            Some(Breakpoint::ALL[index + 1])
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xxxl" => Ok(Breakpoint::Xxxl),
            "xxl" => Ok(Breakpoint::Xxl),
            "xl" => Ok(Breakpoint::Xl),
            "l" => Ok(Breakpoint::L),
            "m" => Ok(Breakpoint::M),
            "s" => Ok(Breakpoint::S),
            "xs" => Ok(Breakpoint::Xs),
            "xxs" => Ok(Breakpoint::Xxs),
            "xxxs" => Ok(Breakpoint::Xxxs),
            other => Err(ParseBreakpointError(other.to_owned())),
        }
    }
}
