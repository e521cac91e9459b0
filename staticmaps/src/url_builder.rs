//! Query string assembly.

use std::borrow::Cow;
use std::fmt;

use crate::{GeoPoint, MarkerGroup, MarkerStyle, Path, PathStyle};

mod sealed {
    pub trait Sealed {}
}

/// Value which can be written as a query parameter. Implemented for the map elements and the
/// few scalars a request is made of, and not implementable outside of this crate.
pub trait QueryValue: sealed::Sealed {
    /// Canonical, not yet percent-encoded, form of the value.
    fn query_value(&self) -> Cow<'_, str>;
}

macro_rules! display_query_value {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl QueryValue for $t {
                fn query_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_query_value!(u8, u32, GeoPoint, MarkerGroup, MarkerStyle, Path, PathStyle);

impl sealed::Sealed for str {}

impl QueryValue for str {
    fn query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl sealed::Sealed for String {}

impl QueryValue for String {
    fn query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// Accumulates `key=value` pairs, in insertion order, after a base URL. Keys may repeat.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    query: String,
}

impl UrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            query: String::new(),
        }
    }

    /// Append a `key=value` pair, both form-urlencoded.
    pub fn append_query<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        self.append_key(key);
        self.query.push('=');
        self.query
            .extend(form_urlencoded::byte_serialize(value.query_value().as_bytes()));
        self
    }

    /// Append a bare key, without `=` nor value.
    pub fn append_key(&mut self, key: &str) -> &mut Self {
        if !self.query.is_empty() {
            self.query.push('&');
        }
        self.query
            .extend(form_urlencoded::byte_serialize(key.as_bytes()));
        self
    }

    /// Append `key=value` if there is a value, and the bare key otherwise.
    pub fn append_optional<V: QueryValue + ?Sized>(
        &mut self,
        key: &str,
        value: Option<&V>,
    ) -> &mut Self {
        match value {
            Some(value) => self.append_query(key, value),
            None => self.append_key(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.base)
        } else {
            write!(f, "{}?{}", self.base, self.query)
        }
    }
}
