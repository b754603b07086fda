//! Query parameters for catalog calls and how they are written onto a URL.
//!
//! Values are passed through untouched; nothing here validates dates, currencies or
//! account codes. The only decision made on the caller's behalf is how a multi-value
//! filter is spelled in the query string, which is chosen once per client via
//! [`ArrayFormat`].

use chrono::NaiveDate;
use url::{Url, form_urlencoded};

/// How a [`ParamValue::List`] is written into the query string.
///
/// The same format is applied to every endpoint of a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    /// `accounts[0]=A1&accounts[1]=A2`. PHP-style form parsers, including the server's,
    /// read this back as an array. (Default)
    #[default]
    Indexed,
    /// `accounts[]=A1&accounts[]=A2`.
    Brackets,
    /// `accounts=A1&accounts=A2`.
    Repeat,
    /// `accounts=A1,A2`. Equivalent to passing the comma-separated string yourself.
    Comma,
}

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value. A comma-separated list passed as a string stays a scalar.
    Scalar(String),
    /// An ordered multi-value filter, such as a list of accounts.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(s) => Some(s),
            ParamValue::List(_) => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(items) => Some(items),
            ParamValue::Scalar(_) => None,
        }
    }
}

macro_rules! param_value_from {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for ParamValue {
            fn from(v: $t) -> Self {
                ParamValue::Scalar(v.to_string())
            }
        }

        impl From<Vec<$t>> for ParamValue {
            fn from(v: Vec<$t>) -> Self {
                ParamValue::List(v.iter().map(ToString::to_string).collect())
            }
        }

        impl From<&[$t]> for ParamValue {
            fn from(v: &[$t]) -> Self {
                ParamValue::List(v.iter().map(ToString::to_string).collect())
            }
        }

        impl<const N: usize> From<[$t; N]> for ParamValue {
            fn from(v: [$t; N]) -> Self {
                ParamValue::List(v.iter().map(ToString::to_string).collect())
            }
        }
    )*};
}

param_value_from!(String, &str, &String, i32, i64, u32, u64, usize, f64, NaiveDate);

/// Booleans are written as `1`/`0`, the form the API documents for flags such as
/// `showZeroValued`.
impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Scalar(if v { "1" } else { "0" }.to_string())
    }
}

/// An ordered mapping of query parameter names to values.
///
/// Insertion order is preserved on the wire. Setting a name that is already present
/// replaces its value in place.
///
/// ```
/// use omnibus_rs::QueryParams;
///
/// let params = QueryParams::new()
///     .from("2024-01-01")
///     .to("2024-01-31")
///     .accounts(["A1", "A2"])
///     .currency("EUR,USD");
/// assert_eq!(params.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, builder style.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /* ---------- documented filters ---------- */

    /// The start of the date range.
    pub fn from(self, value: impl Into<ParamValue>) -> Self {
        self.param("from", value)
    }

    /// The end of the date range.
    pub fn to(self, value: impl Into<ParamValue>) -> Self {
        self.param("to", value)
    }

    /// The balance or position date.
    pub fn date(self, value: impl Into<ParamValue>) -> Self {
        self.param("date", value)
    }

    /// Currencies to include (list or comma-separated string).
    pub fn currency(self, value: impl Into<ParamValue>) -> Self {
        self.param("currency", value)
    }

    /// Accounts to include (list or comma-separated string).
    pub fn accounts(self, value: impl Into<ParamValue>) -> Self {
        self.param("accounts", value)
    }

    /// Clients to include (list or comma-separated string).
    pub fn clients(self, value: impl Into<ParamValue>) -> Self {
        self.param("clients", value)
    }

    /// A search string matched against instruments and exchanges.
    pub fn search(self, value: impl Into<ParamValue>) -> Self {
        self.param("search", value)
    }

    /// Instruments to include (list or comma-separated string). Devex only.
    pub fn instrument(self, value: impl Into<ParamValue>) -> Self {
        self.param("instrument", value)
    }

    /// Destinations to include (list or comma-separated string).
    pub fn destinations(self, value: impl Into<ParamValue>) -> Self {
        self.param("destinations", value)
    }

    /// Counterparties to include (list or comma-separated string).
    pub fn counterparties(self, value: impl Into<ParamValue>) -> Self {
        self.param("counterparties", value)
    }

    /// Include zero valued records (`1`) or exclude them (`0`, the server default).
    pub fn show_zero_valued(self, show: bool) -> Self {
        self.param("showZeroValued", show)
    }

    /* ---------- wire encoding ---------- */

    /// Encodes the parameters as an `application/x-www-form-urlencoded` query string.
    ///
    /// Returns an empty string when there is nothing to write. Empty lists write nothing.
    pub fn to_query_string(&self, format: ArrayFormat) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            match value {
                ParamValue::Scalar(v) => {
                    ser.append_pair(name, v);
                }
                ParamValue::List(items) => match format {
                    ArrayFormat::Indexed => {
                        for (i, item) in items.iter().enumerate() {
                            ser.append_pair(&format!("{name}[{i}]"), item);
                        }
                    }
                    ArrayFormat::Brackets => {
                        let key = format!("{name}[]");
                        for item in items {
                            ser.append_pair(&key, item);
                        }
                    }
                    ArrayFormat::Repeat => {
                        for item in items {
                            ser.append_pair(name, item);
                        }
                    }
                    ArrayFormat::Comma => {
                        if !items.is_empty() {
                            ser.append_pair(name, &items.join(","));
                        }
                    }
                },
            }
        }
        ser.finish()
    }

    /// Replaces the query of `url` with these parameters (or clears it when empty).
    pub(crate) fn apply_to(&self, url: &mut Url, format: ArrayFormat) {
        let qs = self.to_query_string(format);
        if qs.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&qs));
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
