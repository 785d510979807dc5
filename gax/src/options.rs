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

//! Client library configuration for individual requests.
//!
//! The client configuration applies to all requests made by a client. Some
//! applications need to change the timeout or add headers for a single
//! request. This module contains the types to do so.

use http::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Options not set here fall back to the client configuration.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Sets the user agent header, replacing the client default.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user agent override.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request, replacing the client default.
    ///
    /// The timeout covers the whole exchange, from sending the request until
    /// the response body is fully read.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the current timeout override.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Adds a header to the request.
    ///
    /// The header replaces any header with the same name set by the client
    /// library, including `user-agent`.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Gets the extra headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a call descriptor for each API method. The
/// call descriptors can be used to set the request parameters, as well as any
/// options affecting the request, such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the request.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Adds a header to the request.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().insert_header(name, value);
        self
    }
}
