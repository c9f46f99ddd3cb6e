//! Responsive values: per-breakpoint maps and the cascade resolver.
//!
//! A [`ResponsiveMap`] holds an optional value for each of the nine
//! breakpoints. Maps are typically sparse — callers define only the
//! breakpoints they care about — and [`ResponsiveMap::resolve`] fills the
//! gaps so every breakpoint ends up with a value, cascading from larger
//! breakpoints down to smaller ones.
//!
//! [`Responsive`] is the prop-level wrapper: either a single value applied
//! everywhere, or a per-breakpoint map.

use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;

// ---------------------------------------------------------------------------
// ResponsiveMap
// ---------------------------------------------------------------------------

/// A per-breakpoint mapping with one optional slot per breakpoint.
///
/// The slots are explicit named fields rather than a keyed collection, so
/// adding or removing a breakpoint is a compile error everywhere it matters.
///
/// Serialized form is a sparse object keyed by breakpoint token, e.g.
/// `{"m": "xl", "xs": "none"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxxl: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxs: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxxs: Option<T>,
}

impl<T> ResponsiveMap<T> {
    /// Create an empty map (no breakpoint set).
    pub fn new() -> Self {
        Self {
            xxxl: None,
            xxl: None,
            xl: None,
            l: None,
            m: None,
            s: None,
            xs: None,
            xxs: None,
            xxxs: None,
        }
    }

    fn slot(&self, breakpoint: Breakpoint) -> &Option<T> {
        match breakpoint {
            Breakpoint::Xxxl => &self.xxxl,
            Breakpoint::Xxl => &self.xxl,
            Breakpoint::Xl => &self.xl,
            Breakpoint::L => &self.l,
            Breakpoint::M => &self.m,
            Breakpoint::S => &self.s,
            Breakpoint::Xs => &self.xs,
            Breakpoint::Xxs => &self.xxs,
            Breakpoint::Xxxs => &self.xxxs,
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Xxxl => &mut self.xxxl,
            Breakpoint::Xxl => &mut self.xxl,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::L => &mut self.l,
            Breakpoint::M => &mut self.m,
            Breakpoint::S => &mut self.s,
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Xxs => &mut self.xxs,
            Breakpoint::Xxxs => &mut self.xxxs,
        }
    }

    /// The value at a breakpoint, if set.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.slot(breakpoint).as_ref()
    }

    /// Set the value at a breakpoint.
    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        *self.slot_mut(breakpoint) = Some(value);
    }

    /// Set the value at a breakpoint (builder).
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    /// Returns `true` if no breakpoint is set.
    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL.iter().all(|&bp| self.get(bp).is_none())
    }

    /// The number of breakpoints with a value set.
    pub fn len(&self) -> usize {
        Breakpoint::ALL
            .iter()
            .filter(|&&bp| self.get(bp).is_some())
            .count()
    }

    /// Returns `true` if every breakpoint has a value set.
    pub fn is_dense(&self) -> bool {
        self.len() == Breakpoint::ALL.len()
    }

    /// Iterate the set breakpoints in descending order (largest first).
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .iter()
            .filter_map(move |&bp| self.get(bp).map(|value| (bp, value)))
    }

    /// Fill unset breakpoints by cascading values from larger breakpoints.
    ///
    /// The largest breakpoint is the one exception to the downward cascade:
    /// if `xxxl` is unset, it inherits from the nearest *smaller* breakpoint
    /// that has a value. Every other unset breakpoint then copies the value
    /// of its next-larger neighbor, processed largest to smallest, so values
    /// cascade down until the next explicit entry.
    ///
    /// An empty map resolves to an empty map — no default value is invented.
    /// Resolving an already-dense map returns it unchanged.
    pub fn resolve(&self) -> Self
    where
        T: Clone,
    {
        let mut resolved = self.clone();

        if resolved.xxxl.is_none() {
            resolved.xxxl = Breakpoint::ALL[1..]
                .iter()
                .find_map(|&bp| self.get(bp).cloned());
        }

        for pair in Breakpoint::ALL.windows(2) {
            let (larger, smaller) = (pair[0], pair[1]);
            if resolved.slot(smaller).is_none() {
                let inherited = resolved.slot(larger).clone();
                *resolved.slot_mut(smaller) = inherited;
            }
        }

        resolved
    }
}

impl<T> Default for ResponsiveMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Responsive
// ---------------------------------------------------------------------------

/// A prop value that is either a single value or a per-breakpoint map.
///
/// Deserializes untagged: a bare value becomes [`Responsive::Value`], an
/// object becomes [`Responsive::Map`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    /// One value applied at every breakpoint.
    Value(T),
    /// Distinct values per breakpoint, cascaded on use.
    Map(ResponsiveMap<T>),
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}
