//! Typed prop values: alignment, gap sizes, and item sizing.
//!
//! Each prop type knows its class-name token form (`Display`) and parses
//! from that form (`FromStr`). Serde support mirrors the token form, with
//! [`Size`] additionally accepting bare integers for column counts.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::responsive::{Responsive, ResponsiveMap};

/// Errors from parsing or constructing prop values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePropError {
    /// The token does not name a known value for this prop.
    #[error("unknown {prop} value: {token}")]
    UnknownToken {
        prop: &'static str,
        token: String,
    },
    /// A column count outside the 12-column layout range.
    #[error("column size out of range (expected 1-12): {0}")]
    ColumnsOutOfRange(u64),
}

// ---------------------------------------------------------------------------
// Align
// ---------------------------------------------------------------------------

/// Column alignment within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// The class-name token form.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(ParsePropError::UnknownToken {
                prop: "align",
                token: other.to_owned(),
            }),
        }
    }
}

/// The alignment prop of a grid: a single alignment, or a per-breakpoint
/// map of on/off flags (rendered into class tokens as `true` / `false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlignProp {
    /// One alignment applied at every breakpoint.
    Value(Align),
    /// Per-breakpoint alignment flags, cascaded on use.
    Responsive(ResponsiveMap<bool>),
}

impl Default for AlignProp {
    fn default() -> Self {
        AlignProp::Value(Align::Left)
    }
}

impl From<Align> for AlignProp {
    fn from(align: Align) -> Self {
        AlignProp::Value(align)
    }
}

impl From<ResponsiveMap<bool>> for AlignProp {
    fn from(map: ResponsiveMap<bool>) -> Self {
        AlignProp::Responsive(map)
    }
}

// ---------------------------------------------------------------------------
// Gap
// ---------------------------------------------------------------------------

/// Row or column gap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gap {
    Xl,
    L,
    #[default]
    M,
    S,
    Xs,
    None,
}

impl Gap {
    /// The class-name token form.
    pub fn as_str(self) -> &'static str {
        match self {
            Gap::Xl => "xl",
            Gap::L => "l",
            Gap::M => "m",
            Gap::S => "s",
            Gap::Xs => "xs",
            Gap::None => "none",
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gap {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xl" => Ok(Gap::Xl),
            "l" => Ok(Gap::L),
            "m" => Ok(Gap::M),
            "s" => Ok(Gap::S),
            "xs" => Ok(Gap::Xs),
            "none" => Ok(Gap::None),
            other => Err(ParsePropError::UnknownToken {
                prop: "gap",
                token: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Item sizing: a flex-style keyword or a 12-column layout span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Size to content.
    Auto,
    /// Take the remaining space.
    Grow,
    /// Give up space to siblings.
    Shrink,
    /// Share space evenly with siblings.
    Even,
    /// Span a fixed number of columns in a 12-column layout.
    Columns(u8),
}

impl Size {
    /// A column span, validated against the 12-column layout range.
    pub fn columns(count: u8) -> Result<Self, ParsePropError> {
        if (1..=12).contains(&count) {
            Ok(Size::Columns(count))
        } else {
            Err(ParsePropError::ColumnsOutOfRange(count as u64))
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Auto => f.write_str("auto"),
            Size::Grow => f.write_str("grow"),
            Size::Shrink => f.write_str("shrink"),
            Size::Even => f.write_str("even"),
            Size::Columns(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for Size {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Size::Auto),
            "grow" => Ok(Size::Grow),
            "shrink" => Ok(Size::Shrink),
            "even" => Ok(Size::Even),
            other => match other.parse::<u8>() {
                Ok(count) => Size::columns(count),
                Err(_) => Err(ParsePropError::UnknownToken {
                    prop: "size",
                    token: other.to_owned(),
                }),
            },
        }
    }
}

impl Serialize for Size {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Size::Columns(count) => serializer.serialize_u8(*count),
            keyword => serializer.serialize_str(&keyword.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SizeVisitor;

        impl Visitor<'_> for SizeVisitor {
            type Value = Size;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a size keyword or a column count from 1 to 12")
            }

            fn visit_str<E>(self, value: &str) -> Result<Size, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Size, E>
            where
                E: de::Error,
            {
                if (1..=12).contains(&value) {
                    Ok(Size::Columns(value as u8))
                } else {
                    Err(E::custom(ParsePropError::ColumnsOutOfRange(value)))
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Size, E>
            where
                E: de::Error,
            {
                if (1..=12).contains(&value) {
                    Ok(Size::Columns(value as u8))
                } else {
                    Err(E::custom(format!(
                        "column size out of range (expected 1-12): {value}"
                    )))
                }
            }
        }

        deserializer.deserialize_any(SizeVisitor)
    }
}

/// The sizing prop: a single size or a per-breakpoint map.
pub type SizeProp = Responsive<Size>;

/// The gap prop: a single gap or a per-breakpoint map.
pub type GapProp = Responsive<Gap>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn align_tokens() {
        assert_eq!(Align::Left.to_string(), "left");
        assert_eq!(Align::Center.to_string(), "center");
        assert_eq!(Align::Right.to_string(), "right");
    }

    #[test]
    fn align_default_is_left() {
        assert_eq!(Align::default(), Align::Left);
        assert_eq!(AlignProp::default(), AlignProp::Value(Align::Left));
    }

    #[test]
    fn align_from_str() {
        assert_eq!("center".parse::<Align>(), Ok(Align::Center));
        let err = "middle".parse::<Align>().unwrap_err();
        assert_eq!(
            err,
            ParsePropError::UnknownToken {
                prop: "align",
                token: "middle".to_owned(),
            }
        );
    }

    #[test]
    fn align_prop_from_conversions() {
        let from_value: AlignProp = Align::Right.into();
        assert_eq!(from_value, AlignProp::Value(Align::Right));

        let map = ResponsiveMap::new().with(Breakpoint::M, true);
        let from_map: AlignProp = map.clone().into();
        assert_eq!(from_map, AlignProp::Responsive(map));
    }

    #[test]
    fn align_prop_serde_untagged() {
        let value: AlignProp = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(value, AlignProp::Value(Align::Right));

        let map: AlignProp = serde_json::from_str(r#"{"m": true, "s": false}"#).unwrap();
        match map {
            AlignProp::Responsive(m) => {
                assert_eq!(m.get(Breakpoint::M), Some(&true));
                assert_eq!(m.get(Breakpoint::S), Some(&false));
            }
            AlignProp::Value(_) => panic!("expected responsive map"),
        }
    }

    #[test]
    fn gap_tokens() {
        assert_eq!(Gap::Xl.to_string(), "xl");
        assert_eq!(Gap::None.to_string(), "none");
    }

    #[test]
    fn gap_default_is_m() {
        assert_eq!(Gap::default(), Gap::M);
    }

    #[test]
    fn gap_from_str_round_trips() {
        for gap in [Gap::Xl, Gap::L, Gap::M, Gap::S, Gap::Xs, Gap::None] {
            assert_eq!(gap.as_str().parse::<Gap>(), Ok(gap));
        }
        assert!("xxl".parse::<Gap>().is_err());
    }

    #[test]
    fn size_keyword_tokens() {
        assert_eq!(Size::Auto.to_string(), "auto");
        assert_eq!(Size::Grow.to_string(), "grow");
        assert_eq!(Size::Shrink.to_string(), "shrink");
        assert_eq!(Size::Even.to_string(), "even");
    }

    #[test]
    fn size_columns_token() {
        assert_eq!(Size::columns(4).unwrap().to_string(), "4");
        assert_eq!(Size::columns(12).unwrap().to_string(), "12");
    }

    #[test]
    fn size_columns_range() {
        assert_eq!(Size::columns(1), Ok(Size::Columns(1)));
        assert_eq!(Size::columns(12), Ok(Size::Columns(12)));
        assert_eq!(Size::columns(0), Err(ParsePropError::ColumnsOutOfRange(0)));
        assert_eq!(Size::columns(13), Err(ParsePropError::ColumnsOutOfRange(13)));
    }

    #[test]
    fn size_from_str() {
        assert_eq!("grow".parse::<Size>(), Ok(Size::Grow));
        assert_eq!("6".parse::<Size>(), Ok(Size::Columns(6)));
        assert!("0".parse::<Size>().is_err());
        assert!("13".parse::<Size>().is_err());
        assert!("wide".parse::<Size>().is_err());
    }

    #[test]
    fn size_serde_keyword() {
        assert_eq!(serde_json::to_string(&Size::Even).unwrap(), "\"even\"");
        let size: Size = serde_json::from_str("\"shrink\"").unwrap();
        assert_eq!(size, Size::Shrink);
    }

    #[test]
    fn size_serde_number() {
        assert_eq!(serde_json::to_string(&Size::Columns(6)).unwrap(), "6");
        let size: Size = serde_json::from_str("6").unwrap();
        assert_eq!(size, Size::Columns(6));
        assert!(serde_json::from_str::<Size>("13").is_err());
        assert!(serde_json::from_str::<Size>("-2").is_err());
    }

    #[test]
    fn size_prop_serde_untagged() {
        let prop: SizeProp = serde_json::from_str(r#"{"l": "even", "xs": 12}"#).unwrap();
        match prop {
            Responsive::Map(m) => {
                assert_eq!(m.get(Breakpoint::L), Some(&Size::Even));
                assert_eq!(m.get(Breakpoint::Xs), Some(&Size::Columns(12)));
            }
            Responsive::Value(_) => panic!("expected map"),
        }
    }

    #[test]
    fn error_display() {
        let err = ParsePropError::UnknownToken {
            prop: "gap",
            token: "huge".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown gap value: huge");
        assert_eq!(
            ParsePropError::ColumnsOutOfRange(13).to_string(),
            "column size out of range (expected 1-12): 13"
        );
    }
}
