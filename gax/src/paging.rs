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

/// Implemented by list responses that carry a continuation token.
///
/// The token is opaque. Applications pass it back in the `pageToken`
/// parameter of the next request. The client libraries do not iterate over
/// pages on their own.
///
/// # Example
/// ```
/// use gax::paging::PageableResponse;
/// struct ListThings { next_page_token: Option<String> }
/// impl PageableResponse for ListThings {
///     fn next_page_token(&self) -> Option<&str> {
///         gax::paging::token(&self.next_page_token)
///     }
/// }
/// let last = ListThings { next_page_token: Some(String::new()) };
/// assert!(!last.has_next_page());
/// ```
pub trait PageableResponse {
    /// The token for the next page, `None` on the last page.
    fn next_page_token(&self) -> Option<&str>;

    fn has_next_page(&self) -> bool {
        self.next_page_token().is_some()
    }
}

/// Normalizes a continuation token.
///
/// An empty token means there are no more pages, same as an absent token.
pub fn token(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeResponse {
        next_page_token: Option<String>,
    }

    impl PageableResponse for FakeResponse {
        fn next_page_token(&self) -> Option<&str> {
            token(&self.next_page_token)
        }
    }

    #[test]
    fn absent() {
        let response = FakeResponse {
            next_page_token: None,
        };
        assert_eq!(response.next_page_token(), None);
        assert!(!response.has_next_page());
    }

    #[test]
    fn empty() {
        let response = FakeResponse {
            next_page_token: Some(String::new()),
        };
        assert_eq!(response.next_page_token(), None);
        assert!(!response.has_next_page());
    }

    #[test]
    fn present() {
        let response = FakeResponse {
            next_page_token: Some("T2".into()),
        };
        assert_eq!(response.next_page_token(), Some("T2"));
        assert!(response.has_next_page());
    }
}
