//! The generated pool of variables available for binding.

use script_engines::ScriptValue;
use std::collections::HashMap;

/// Number of variables generated when nothing else is asked for
pub const DEFAULT_SIZE: usize = 100;

/// Immutable mapping of variable names to values.
///
/// Built once per run and shared read-only by every iteration and strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpace {
    values: HashMap<String, ScriptValue>,
}

impl VariableSpace {
    /// Generate `size` variables.
    ///
    /// The first half (`V0` ..) hold their index as an integer, the rest hold
    /// the string `"v<index>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binding_bench::VariableSpace;
    /// use script_engines::ScriptValue;
    ///
    /// let space = VariableSpace::generate(4);
    /// assert_eq!(space.get("V1"), Some(&ScriptValue::Integer(1)));
    /// assert_eq!(space.get("V3"), Some(&ScriptValue::String("v3".to_string())));
    /// ```
    pub fn generate(size: usize) -> Self {
        let half = size / 2;
        let values = (0..size)
            .map(|i| {
                let value = if i < half {
                    ScriptValue::Integer(i as i64)
                } else {
                    ScriptValue::String(format!("v{}", i))
                };
                (format!("V{}", i), value)
            })
            .collect();
        Self { values }
    }

    /// Value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&ScriptValue> {
        self.values.get(name)
    }

    /// Whether `name` is a variable
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// All entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the space is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for VariableSpace {
    fn default() -> Self {
        Self::generate(DEFAULT_SIZE)
    }
}
