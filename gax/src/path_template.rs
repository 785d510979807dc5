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

/// Everything except the RFC 3986 unreserved characters.
const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Used for `{+name}` placeholders, keeps `/` and the sub-delimiters.
const RESERVED: &AsciiSet = &SIMPLE
    .remove(b'/')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("unterminated placeholder in path template {0:?}")]
    UnterminatedPlaceholder(String),
    #[error("empty placeholder in path template {0:?}")]
    EmptyPlaceholder(String),
    #[error("the value {value:?} for parameter {name} cannot be used as a path segment")]
    DotSegment { name: String, value: String },
    #[error("the value for parameter {0} is empty")]
    EmptyValue(String),
}

/// A parsed path template, such as `datasets/{datasetId}/undelete`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Variable { name: String, reserved: bool },
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self, Error> {
        let mut segments = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let end = rest[start..]
                .find('}')
                .map(|e| start + e)
                .ok_or_else(|| Error::UnterminatedPlaceholder(template.to_string()))?;
            let body = &rest[start + 1..end];
            let (name, reserved) = match body.strip_prefix('+') {
                Some(n) => (n, true),
                None => (body, false),
            };
            if name.is_empty() {
                return Err(Error::EmptyPlaceholder(template.to_string()));
            }
            segments.push(Segment::Variable {
                name: name.to_string(),
                reserved,
            });
            rest = &rest[end + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Ok(Self { segments })
    }

    /// The names of all the placeholders, in the order they appear.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// Values are treated as opaque: a `{name}` value cannot introduce a new
    /// path segment, and no value can introduce a query or fragment.
    pub fn render(&self, values: &BTreeMap<String, String>) -> Result<String, Error> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(l) => path.push_str(l),
                Segment::Variable { name, reserved } => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| Error::MissingRequiredParameter(name.clone()))?;
                    // An empty value would address the parent collection.
                    if value.is_empty() {
                        return Err(Error::EmptyValue(name.clone()));
                    }
                    // URL parsers collapse dot segments, they cannot be sent
                    // as opaque values.
                    let is_dot_segment = if *reserved {
                        value.split('/').any(|s| s == "." || s == "..")
                    } else {
                        value == "." || value == ".."
                    };
                    if is_dot_segment {
                        return Err(Error::DotSegment {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                    let set = if *reserved { RESERVED } else { SIMPLE };
                    path.extend(utf8_percent_encode(value, set));
                }
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn values<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse() -> TestResult {
        let template = PathTemplate::parse("tables/{id}/features/{+rest}:batch")?;
        assert_eq!(template.variables().collect::<Vec<_>>(), vec!["id", "rest"]);
        let template = PathTemplate::parse("datasets")?;
        assert_eq!(template.variables().count(), 0);
        Ok(())
    }

    #[test_case("things/{id"; "unterminated")]
    #[test_case("things/{}"; "empty")]
    #[test_case("things/{+}"; "empty reserved")]
    fn parse_errors(input: &str) {
        let got = PathTemplate::parse(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn render_simple() -> TestResult {
        let template = PathTemplate::parse("things/{id}")?;
        let got = template.render(&values([("id", "abc")]))?;
        assert_eq!(got, "things/abc");
        Ok(())
    }

    #[test]
    fn render_many() -> TestResult {
        let template = PathTemplate::parse("a/{x}/b/{y}/c/{z}")?;
        let got = template.render(&values([("x", "1"), ("y", "two words"), ("z", "3/4")]))?;
        assert_eq!(got, "a/1/b/two%20words/c/3%2F4");
        assert!(!got.contains('{'), "{got}");
        Ok(())
    }

    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b", "a%3Fb")]
    #[test_case("a#b", "a%23b")]
    #[test_case("100%", "100%25")]
    #[test_case("~user_1.2-x", "~user_1.2-x")]
    #[test_case("ñ", "%C3%B1")]
    #[test_case("...", "...")]
    fn render_opaque(input: &str, want: &str) -> TestResult {
        let template = PathTemplate::parse("things/{id}")?;
        let got = template.render(&values([("id", input)]))?;
        assert_eq!(got, format!("things/{want}"));
        Ok(())
    }

    #[test_case("projects/p/locations/l", "projects/p/locations/l")]
    #[test_case("a b", "a%20b")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("k=v,w:x@y", "k=v,w:x@y")]
    fn render_reserved(input: &str, want: &str) -> TestResult {
        let template = PathTemplate::parse("v1/{+name}")?;
        let got = template.render(&values([("name", input)]))?;
        assert_eq!(got, format!("v1/{want}"));
        Ok(())
    }

    #[test]
    fn render_missing() -> TestResult {
        let template = PathTemplate::parse("tables/{id}/features")?;
        let got = template.render(&values([("other", "x")]));
        assert_eq!(got, Err(Error::MissingRequiredParameter("id".into())));
        Ok(())
    }

    #[test_case("{id}", "."; "dot")]
    #[test_case("{id}", ".."; "dot dot")]
    #[test_case("{+id}", "a/../b"; "reserved dot dot")]
    fn render_dot_segment(template: &str, value: &str) -> TestResult {
        let template = PathTemplate::parse(template)?;
        let got = template.render(&values([("id", value)]));
        assert!(matches!(got, Err(Error::DotSegment { .. })), "{got:?}");
        Ok(())
    }

    #[test_case("things/{id}"; "simple")]
    #[test_case("{+id}/items"; "reserved")]
    fn render_empty_value(template: &str) -> TestResult {
        let template = PathTemplate::parse(template)?;
        let got = template.render(&values([("id", "")]));
        assert_eq!(got, Err(Error::EmptyValue("id".to_string())));
        Ok(())
    }
}
