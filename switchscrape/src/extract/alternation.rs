//! Per-field pattern alternation.
//!
//! The same fact is phrased differently across dialects (`Hardware is` vs
//! `Hardware:`, `packets input` vs `input packets`). Each field owns an
//! ordered list of independent candidate patterns and is filled by the first
//! line that matches any of them.

use regex::Regex;

/// Ordered `(field key, candidate patterns)` table.
#[derive(Debug, Clone, Default)]
pub struct FieldPatterns {
    fields: Vec<(&'static str, Vec<Regex>)>,
}

impl FieldPatterns {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field with its candidate patterns, tried in order.
    pub fn field(mut self, key: &'static str, patterns: &[&str]) -> Result<Self, regex::Error> {
        let compiled = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        self.fields.push((key, compiled));
        Ok(self)
    }

    /// Scan `lines` and fill each field from its first match.
    ///
    /// Lines are trimmed before matching. A field is populated once, by the
    /// earliest line in document order that any of its candidates match;
    /// later matches are ignored. The value is the first capture group that
    /// is non-empty after trimming.
    pub fn extract<'a, I>(&self, lines: I) -> FieldValues
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values: Vec<Option<String>> = vec![None; self.fields.len()];
        let mut remaining = self.fields.len();

        for line in lines {
            if remaining == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            for ((_, candidates), slot) in self.fields.iter().zip(values.iter_mut()) {
                if slot.is_some() {
                    continue;
                }
                if let Some(value) = candidates.iter().find_map(|re| first_capture(re, line)) {
                    *slot = Some(value);
                    remaining -= 1;
                }
            }
        }

        FieldValues {
            values: self
                .fields
                .iter()
                .zip(values)
                .map(|((key, _), value)| (*key, value))
                .collect(),
        }
    }
}

fn first_capture(re: &Regex, line: &str) -> Option<String> {
    let caps = re.captures(line)?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Values extracted by [`FieldPatterns::extract`], in field definition order.
#[derive(Debug, Clone)]
pub struct FieldValues {
    values: Vec<(&'static str, Option<String>)>,
}

impl FieldValues {
    /// The value for `key`, or the empty string if it was not found.
    pub fn get(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_deref())
            .unwrap_or("")
    }

    /// Owned copy of [`get`](Self::get).
    pub fn take(&self, key: &str) -> String {
        self.get(key).to_string()
    }

    /// Whether `key` was populated.
    pub fn is_set(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Populated `(key, value)` pairs in field definition order.
    pub fn found(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
    }
}
