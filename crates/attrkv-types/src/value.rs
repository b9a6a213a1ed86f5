use std::fmt;

use serde::Serialize;

/// The type an attribute name is locked to once it is first stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Number,
    Boolean,
}

impl AttributeType {
    /// Lower-case type name, as used in messages and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed attribute value.
///
/// Values are produced from raw text by [`AttributeValue::infer`]. Equality
/// is only ever true between values of the same variant: numbers compare
/// numerically, strings byte-for-byte, booleans by value.
///
/// Serializes as the bare JSON value (`"text"`, `1.5`, `true`). JSON has no
/// infinities or NaN, so non-finite numbers serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl AttributeValue {
    /// Classify a raw token.
    ///
    /// First match wins:
    /// 1. the exact literals `true` / `false` (case-sensitive, untrimmed)
    /// 2. anything `f64` parses (`30`, `-1.5`, `1e3`, `inf`)
    /// 3. otherwise the token verbatim as a string
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => Self::Boolean(true),
            "false" => Self::Boolean(false),
            _ => match raw.parse::<f64>() {
                Ok(n) => Self::Number(n),
                Err(_) => Self::String(raw.to_owned()),
            },
        }
    }

    /// The type tag of this value.
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Self::String(_) => AttributeType::String,
            Self::Number(_) => AttributeType::Number,
            Self::Boolean(_) => AttributeType::Boolean,
        }
    }

    /// The text of a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number held by a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The flag held by a `Boolean` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Same as [`AttributeValue::infer`].
impl From<&str> for AttributeValue {
    fn from(raw: &str) -> Self {
        Self::infer(raw)
    }
}

/// Display form used by the line protocol.
///
/// Whole numbers get exactly one decimal digit (`30.0`). Everything else is
/// rounded half away from zero to two decimal places (`30.125` -> `30.13`).
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        // f64::round is half-away-from-zero; scaling first pins the rule to
        // the second decimal instead of the formatter's own tie handling.
        let rounded = (n * 100.0).round() / 100.0;
        format!("{rounded:.2}")
    }
}
