// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::BTreeMap;

const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
///
/// - [Option] fields that do not contain a value are not included in the HTTP
///   query.
/// - Simple scalars are formatted as usual, booleans as `true` or `false`.
/// - Lists of values are joined with commas.
pub trait QueryParameter {
    fn format(&self) -> Option<String>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn format(&self) -> Option<String> {
        self.as_ref().and_then(QueryParameter::format)
    }
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn format(&self) -> Option<String> {
        (**self).format()
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn format(&self) -> Option<String> {
        self.as_slice().format()
    }
}

impl<T: QueryParameter> QueryParameter for [T] {
    fn format(&self) -> Option<String> {
        let values = self
            .iter()
            .filter_map(QueryParameter::format)
            .collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }
        Some(values.join(","))
    }
}

impl QueryParameter for str {
    fn format(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParameter for String {
    fn format(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! display_query_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryParameter for $t {
                fn format(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_query_parameter!(bool, i32, i64, u32, u64, f32, f64);

/// The query parameters of a request.
///
/// Parameters are kept sorted by name, so the encoded query string is
/// deterministic. Each parameter appears at most once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or clears) a parameter.
    ///
    /// If `value` formats to `None` any previous value for `name` is removed.
    pub fn set<V: QueryParameter>(&mut self, name: &str, value: V) {
        match value.format() {
            Some(v) => {
                self.0.insert(name.to_string(), v);
            }
            None => {
                self.0.remove(name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the `application/x-www-form-urlencoded` form of the parameters.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY),
                    utf8_percent_encode(v, QUERY)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn none() {
        assert_eq!(None, QueryParameter::format(&None::<i32>));
        assert_eq!(None, QueryParameter::format(&None::<i64>));
        assert_eq!(None, QueryParameter::format(&None::<u32>));
        assert_eq!(None, QueryParameter::format(&None::<u64>));
        assert_eq!(None, QueryParameter::format(&None::<f32>));
        assert_eq!(None, QueryParameter::format(&None::<f64>));
        assert_eq!(None, QueryParameter::format(&None::<bool>));
        assert_eq!(None, QueryParameter::format(&None::<String>));
        assert_eq!(None, QueryParameter::format(&None::<Vec<String>>));
    }

    #[test]
    fn with_value() {
        let want = Some("42".to_string());
        assert_eq!(want, QueryParameter::format(&Some(42_i32)));
        assert_eq!(want, QueryParameter::format(&Some(42_i64)));
        assert_eq!(want, QueryParameter::format(&Some(42_u32)));
        assert_eq!(want, QueryParameter::format(&Some(42_u64)));
        assert_eq!(want, QueryParameter::format(&Some(42_f32)));
        assert_eq!(want, QueryParameter::format(&Some(42_f64)));
        assert_eq!(Some("2.5".to_string()), QueryParameter::format(&2.5_f64));
    }

    #[test]
    fn booleans() {
        assert_eq!(Some("true".to_string()), QueryParameter::format(&true));
        assert_eq!(Some("false".to_string()), QueryParameter::format(&false));
    }

    #[test]
    fn lists() {
        let v = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Some("a,b".to_string()), QueryParameter::format(&v));
        assert_eq!(Some("a,b".to_string()), QueryParameter::format(&Some(v)));
        assert_eq!(None, QueryParameter::format(&Vec::<String>::new()));
        assert_eq!(
            Some("1,2,3".to_string()),
            QueryParameter::format(&[1_i32, 2, 3][..])
        );
    }

    #[test]
    fn sorted_and_encoded() {
        let mut params = QueryParams::new();
        params.set("pageToken", "T1");
        params.set("alt", "json");
        params.set("where", "name = 'a&b'");
        params.set("maxResults", 10_u32);
        assert_eq!(
            params.encode(),
            "alt=json&maxResults=10&pageToken=T1&where=name%20%3D%20%27a%26b%27"
        );
    }

    #[test]
    fn omitted() {
        let mut params = QueryParams::new();
        params.set("alt", "json");
        params.set("pageToken", None::<String>);
        params.set("maxResults", None::<u32>);
        assert_eq!(params.encode(), "alt=json");
        assert_eq!(params.get("pageToken"), None);
    }

    #[test]
    fn cleared() {
        let mut params = QueryParams::new();
        params.set("pageToken", "T1");
        assert_eq!(params.get("pageToken"), Some("T1"));
        params.set("pageToken", None::<&str>);
        assert!(params.is_empty(), "{params:?}");
    }

    #[test_case("range.start", "10", "range.start=10")]
    #[test_case("q", "a b", "q=a%20b")]
    #[test_case("q", "a+b", "q=a%2Bb")]
    fn encoding(name: &str, value: &str, want: &str) {
        let mut params = QueryParams::new();
        params.set(name, value);
        assert_eq!(params.encode(), want);
    }
}
