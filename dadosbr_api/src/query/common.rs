//! Shared query infrastructure: the [`Query`] trait, the ordered
//! [`QueryParams`] mapping and the per-endpoint [`DateStyle`].

use std::fmt::Display;

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders. Provides URL serialization on top
/// of the parameter catalog each builder declares.
pub trait Query {
    /// Returns every parameter this query knows about, in wire order.
    /// Unset parameters are kept as `None` and skipped on serialization.
    fn params(&self) -> QueryParams;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.params().add_to_url(url)
    }
}

/// Endpoints without query parameters.
impl Query for () {
    fn params(&self) -> QueryParams {
        QueryParams::default()
    }
}

/// Ordered mapping from wire key to an optional, already-encoded value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` with an optional value. `None` is remembered but never
    /// sent; any present value is sent, including `0` and `false`.
    pub fn push<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        self.pairs
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Records a value that is always present.
    pub fn set<V: Display>(&mut self, key: &str, value: V) -> &mut Self {
        self.push(key, Some(value))
    }

    /// Value sent for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether `key` will be serialized.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Every declared key, set or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Pairs that will be sent, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Appends the present pairs to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let mut present = self.iter().peekable();
        if present.peek().is_some() {
            url.query_pairs_mut().extend_pairs(present);
        }
        url
    }
}

/// Date layouts used by the remote APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// `DD/MM/YYYY`, used by the SGS time-series API.
    DayMonthYear,
    /// `YYYY-MM-DD`, used by the Senate open-data API.
    Iso,
    /// `MM-DD-YYYY`, used inside PTAX function-call paths.
    MonthDayYear,
}

impl DateStyle {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateStyle::DayMonthYear => "%d/%m/%Y",
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::MonthDayYear => "%m-%d-%Y",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}
