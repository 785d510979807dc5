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

//! Provide types for client construction.
//!
//! Each generated crate defines a `Client` type, created with a
//! [ClientBuilder]. The default configuration works for most applications:
//!
//! ```
//! # use gax::client::examples;
//! # fn main() -> gax::Result<()> {
//! use examples::Client; // Placeholder for examples
//! let client = Client::builder().build()?;
//! # Ok(()) }
//! ```
//!
//! ## Example: use an authenticated HTTP client
//!
//! The client libraries do not implement authentication. Applications provide
//! a [reqwest::Client] that adds the right `Authorization` header to each
//! request, typically through its default headers or a proxy.
//!
//! ```
//! # use gax::client::examples;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use examples::Client; // Placeholder for examples
//! let mut headers = http::HeaderMap::new();
//! headers.insert("authorization", "Bearer my-token".parse()?);
//! let http_client = reqwest::Client::builder().default_headers(headers).build()?;
//! let client = Client::builder()
//!     .with_http_client(http_client)
//!     .build()?;
//! # Ok(()) }
//! ```

use crate::Result;
use crate::error::Error;
use crate::request::RequestBuilder;
use http::HeaderValue;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

/// The user agent sent when neither the client nor the request set one.
pub const DEFAULT_USER_AGENT: &str = concat!("google-apis-rust/", env!("CARGO_PKG_VERSION"));

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use gax::client::examples;
/// # fn main() -> gax::Result<()> {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("https://private.googleapis.com/genomics/v1beta2/")
///     .with_timeout(std::time::Duration::from_secs(30))
///     .build()?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config)
    }

    /// Sets the endpoint, including the service path.
    ///
    /// Method paths are relative to this endpoint. A trailing `/` is added if
    /// missing.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the HTTP client used to send all requests.
    ///
    /// Use this to provide an authenticated client, or to share a connection
    /// pool between multiple clients.
    pub fn with_http_client(mut self, v: reqwest::Client) -> Self {
        self.config.http_client = Some(v);
        self
    }

    /// Sets the default user agent.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Sets the default timeout for each request.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.timeout = Some(v.into());
        self
    }
}

/// Configure a client.
///
/// The default configuration for each client should work for most
/// applications, but the endpoint, HTTP client and defaults can be overridden.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub http_client: Option<reqwest::Client>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> Result<Self::Client>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }
}

/// The HTTP handle shared by all the services and call descriptors of a
/// client.
///
/// Cloning is cheap and all clones share the same connection pool. The handle
/// is never mutated after construction, so it is safe to use from many tasks.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: Arc<str>,
    user_agent: HeaderValue,
    timeout: Option<Duration>,
}

impl ReqwestClient {
    /// Creates the shared handle from a configuration.
    ///
    /// `default_endpoint` is used when the configuration does not override it.
    pub fn new(config: ClientConfig, default_endpoint: &str) -> Result<Self> {
        let mut endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        url::Url::parse(&endpoint).map_err(Error::malformed_request)?;
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let user_agent = HeaderValue::from_str(user_agent).map_err(Error::malformed_request)?;
        let inner = match config.http_client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .build()
                .map_err(Error::transport)?,
        };
        Ok(Self {
            inner,
            endpoint: endpoint.into(),
            user_agent,
            timeout: config.timeout,
        })
    }

    /// The base URL, always ending with `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts a request for `path_template`, relative to the endpoint.
    pub fn builder(&self, method: Method, path_template: &str) -> RequestBuilder {
        RequestBuilder::new(self.clone(), method, path_template)
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.inner
    }

    pub(crate) fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    use super::{ClientConfig, ClientBuilder, ReqwestClient};
    use crate::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[derive(Clone, Debug)]
    pub struct Client(ReqwestClient);

    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> ClientBuilder<client::Factory> {
            super::internal::new_builder(client::Factory)
        }

        fn new(config: ClientConfig) -> Result<Self> {
            Ok(Self(ReqwestClient::new(
                config,
                "https://example.googleapis.com/example/v1/",
            )?))
        }

        pub fn inner(&self) -> &ReqwestClient {
            &self.0
        }
    }

    pub mod client {
        pub struct Factory;
        impl crate::client::internal::ClientFactory for Factory {
            type Client = super::Client;
            fn build(self, config: crate::client::ClientConfig) -> crate::Result<Self::Client> {
                super::Client::new(config)
            }
        }
    }
}
