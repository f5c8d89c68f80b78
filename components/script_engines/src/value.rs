//! Engine-neutral script values.
//!
//! Both adapters translate to and from `ScriptValue` so the benchmark core
//! never touches engine types.

use std::fmt;

/// A value crossing the engine boundary.
///
/// JavaScript has a single number type; adapters report numbers without a
/// fractional part as `Integer` so an integer binding reads back unchanged.
///
/// # Examples
///
/// ```
/// use script_engines::ScriptValue;
///
/// assert_eq!(ScriptValue::from_f64(3.0), ScriptValue::Integer(3));
/// assert_eq!(ScriptValue::from_f64(0.5), ScriptValue::Number(0.5));
/// assert!(ScriptValue::Boolean(true).is_true());
/// assert!(!ScriptValue::Integer(1).is_true());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// A boolean
    Boolean(bool),
    /// A number with no fractional part
    Integer(i64),
    /// Any other number
    Number(f64),
    /// A string
    String(String),
    /// Anything else (objects, functions, symbols), described by its type.
    ///
    /// Only produced by evaluation; evaluators refuse to bind it.
    Other(String),
}

impl ScriptValue {
    /// Normalize a JavaScript number.
    pub fn from_f64(n: f64) -> Self {
        let negative_zero = n == 0.0 && n.is_sign_negative();
        if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 && !negative_zero {
            ScriptValue::Integer(n as i64)
        } else {
            ScriptValue::Number(n)
        }
    }

    /// Whether the value can be handed to an engine without loss
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ScriptValue::Other(_))
    }

    /// Exactly boolean `true`; no truthiness coercion.
    pub fn is_true(&self) -> bool {
        matches!(self, ScriptValue::Boolean(true))
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Undefined => write!(f, "undefined"),
            ScriptValue::Null => write!(f, "null"),
            ScriptValue::Boolean(b) => write!(f, "{}", b),
            ScriptValue::Integer(i) => write!(f, "{}", i),
            ScriptValue::Number(n) => write!(f, "{}", n),
            ScriptValue::String(s) => write!(f, "{:?}", s),
            ScriptValue::Other(desc) => write!(f, "[{}]", desc),
        }
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Integer(value)
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Boolean(value)
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}
