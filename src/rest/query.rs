//! Filter option encoding for GET and DELETE requests.
//!
//! The Management API filters collections with query parameters. Most
//! filters take a scalar, but fields that match several values at once use
//! the `field:in` convention: one key whose value is a comma-separated
//! list. [`QueryOptions::with_in_params`] normalizes both spellings of an
//! eligible field into the `:in` form, and
//! [`QueryOptions::to_query_string`] serializes the result for the URL.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::QueryOptions;
//!
//! let options = QueryOptions::new()
//!     .with("id", vec![1, 2])
//!     .with("id:in", vec![3])
//!     .with("page", 2)
//!     .with_in_params(&["id"]);
//!
//! assert_eq!(options.to_query_string(), "?page=2&id%3Ain=1,2,3");
//! ```

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// A single filter value.
///
/// Values convert from the obvious Rust types via `From`, so filter maps
/// are usually built with [`QueryOptions::with`] and plain literals.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A string value, percent-encoded on serialization.
    String(String),
    /// A signed integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, serialized as `true`/`false`.
    Bool(bool),
    /// A timestamp, serialized as `%Y-%m-%dT%H:%M:%S%z` and NOT
    /// percent-encoded: the server's date parser rejects encoded offsets.
    Timestamp(DateTime<FixedOffset>),
    /// A list of values, joined with `,` on serialization.
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Renders the raw (unencoded) wire form of this value.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Timestamp(t) => t.format("%Y-%m-%dT%H:%M:%S%z").to_string(),
            Self::List(items) => items
                .iter()
                .map(Self::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Renders the percent-encoded wire form of this value.
    ///
    /// Timestamps stay raw, and list separators stay literal commas; all
    /// other content is percent-encoded.
    #[must_use]
    pub fn to_encoded(&self) -> String {
        match self {
            Self::Timestamp(_) => self.render(),
            Self::List(items) => items
                .iter()
                .map(Self::to_encoded)
                .collect::<Vec<_>>()
                .join(","),
            other => urlencoding::encode(&other.render()).into_owned(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        // Resource ids fit i64; anything larger falls back to its decimal string.
        i64::try_from(value).map_or_else(|_| Self::String(value.to_string()), Self::Int)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<FixedOffset>> for QueryValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value.with_timezone(&Utc.fix()))
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// An insertion-ordered collection of filter options.
///
/// Order is preserved so the `:in` merge concatenates values
/// deterministically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryOptions {
    /// Creates an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends an option, consuming and returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends an option in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the first value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of option pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the option pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Merges plain and `:in` spellings of the eligible fields.
    ///
    /// For each name in `eligible` that is present as `field` or
    /// `field:in`, every value from both spellings is collected into one
    /// list re-emitted under `field:in` (plain values first, `:in` values
    /// after, order preserved, no dedup). Other fields (including ones with
    /// different suffixes such as `date_created:min`) pass through
    /// unchanged. The merge is idempotent.
    #[must_use]
    pub fn with_in_params(self, eligible: &[&str]) -> Self {
        let mut pairs = self.pairs;

        // Bases to merge, in order of first appearance of either spelling.
        let mut bases: Vec<String> = Vec::new();
        for (name, _) in &pairs {
            let base = base_name(name);
            if eligible.contains(&base)
                && (name == base || name == &format!("{base}:in"))
                && !bases.iter().any(|b| b == base)
            {
                bases.push(base.to_string());
            }
        }

        for base in bases {
            let in_key = format!("{base}:in");
            let mut values = take_values(&mut pairs, &base);
            values.extend(take_values(&mut pairs, &in_key));
            if values.is_empty() {
                continue;
            }
            pairs.push((in_key, QueryValue::List(values)));
        }

        Self { pairs }
    }

    /// Serializes the options as a `?`-prefixed query string.
    ///
    /// Keys are always percent-encoded; values follow
    /// [`QueryValue::to_encoded`]. An empty option set serializes to an
    /// empty string, not `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{}={}", urlencoding::encode(name), value.to_encoded()))
            .collect();

        format!("?{}", encoded.join("&"))
    }
}

/// Returns the field name before any `:` suffix.
fn base_name(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

/// Removes every pair stored under `key`, flattening list values.
fn take_values(pairs: &mut Vec<(String, QueryValue)>, key: &str) -> Vec<QueryValue> {
    let mut values = Vec::new();
    let mut i = 0;
    while i < pairs.len() {
        if pairs[i].0 == key {
            let (_, value) = pairs.remove(i);
            match value {
                QueryValue::List(items) => values.extend(items),
                other => values.push(other),
            }
        } else {
            i += 1;
        }
    }
    values
}
