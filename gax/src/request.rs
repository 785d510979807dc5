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

use crate::Result;
use crate::client::ReqwestClient;
use crate::error::Error;
use crate::media::Media;
use crate::options::RequestOptions;
use crate::path_parameter::PathParameter;
use crate::path_template::PathTemplate;
use crate::query_parameter::{QueryParameter, QueryParams};
use bytes::Bytes;
use http::HeaderValue;
use http::header::{CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use reqwest::multipart::{Form, Part};
use std::collections::BTreeMap;

pub use reqwest::Method;

const JSON_CONTENT_TYPE: &str = "application/json";
const METADATA_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Accumulates the parts of a single API request.
///
/// The generated call descriptors create one `RequestBuilder` for each
/// request. The builder is consumed by [execute][RequestBuilder::execute], so
/// it cannot be modified, or sent a second time, after the request starts.
///
/// Setters never fail. Problems detected while accumulating the request, such
/// as a body that cannot be serialized, are reported by `build()` or
/// `execute()` before any I/O.
///
/// # Example
/// ```no_run
/// # use gax::client::examples::Client;
/// # use gax::request::Method;
/// # async fn sample() -> gax::Result<()> {
/// let client = Client::builder().build()?;
/// let response: serde_json::Value = client
///     .inner()
///     .builder(Method::GET, "things/{id}")
///     .path_param("id", "abc")
///     .query_param("fields", "id,name")
///     .execute()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
#[must_use]
pub struct RequestBuilder {
    client: ReqwestClient,
    method: Method,
    path_template: String,
    path_params: BTreeMap<String, String>,
    query: QueryParams,
    body: Option<Bytes>,
    media: Option<Media>,
    options: RequestOptions,
    error: Option<Error>,
}

impl RequestBuilder {
    pub fn new(client: ReqwestClient, method: Method, path_template: impl Into<String>) -> Self {
        let mut query = QueryParams::new();
        query.set("alt", "json");
        Self {
            client,
            method,
            path_template: path_template.into(),
            path_params: BTreeMap::new(),
            query,
            body: None,
            media: None,
            options: RequestOptions::default(),
            error: None,
        }
    }

    /// Sets the value for a `{name}` or `{+name}` placeholder.
    ///
    /// A `None` value leaves the placeholder unset.
    pub fn path_param<V: PathParameter>(mut self, name: &str, value: V) -> Self {
        if let Some(v) = value.format() {
            self.path_params.insert(name.to_string(), v);
        }
        self
    }

    /// Sets a query parameter. A `None` value removes the parameter.
    pub fn query_param<V: QueryParameter>(mut self, name: &str, value: V) -> Self {
        self.query.set(name, value);
        self
    }

    /// Sets the JSON body of the request.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(b) => self.body = Some(Bytes::from(b)),
            Err(e) => self.record_error(Error::malformed_request(e)),
        }
        self
    }

    /// Switches the request to upload mode with `media` as the payload.
    pub fn media<M: Into<Media>>(mut self, media: M) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Replaces the per-request options.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    fn record_error(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn url(&self) -> Result<url::Url> {
        let template =
            PathTemplate::parse(&self.path_template).map_err(Error::malformed_request)?;
        let path = template
            .render(&self.path_params)
            .map_err(Error::malformed_request)?;
        let path = path.trim_start_matches('/');
        let mut base = url::Url::parse(self.client.endpoint()).map_err(Error::malformed_request)?;
        if self.media.is_some() {
            let upload_path = format!("/upload{}", base.path());
            base.set_path(&upload_path);
        }
        let mut query = self.query.clone();
        if self.media.is_some() {
            query.set("uploadType", "multipart");
        }
        let url = format!("{base}{path}?{}", query.encode());
        url::Url::parse(&url).map_err(Error::malformed_request)
    }

    /// Builds the HTTP request without sending it.
    pub async fn build(mut self) -> Result<reqwest::Request> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        let url = self.url()?;
        let mut request = reqwest::Request::new(self.method, url);
        let user_agent = match self.options.user_agent() {
            Some(ua) => HeaderValue::from_str(ua).map_err(Error::malformed_request)?,
            None => self.client.user_agent().clone(),
        };
        request.headers_mut().insert(USER_AGENT, user_agent);
        match (self.media, self.body) {
            (None, None) => {}
            (None, Some(body)) => {
                request
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                *request.body_mut() = Some(body.into());
            }
            (Some(media), body) => {
                let form = multipart_related(body, media).await?;
                let content_type = format!("multipart/related; boundary={}", form.boundary());
                let content_type =
                    HeaderValue::from_str(&content_type).map_err(Error::malformed_request)?;
                request.headers_mut().insert(CONTENT_TYPE, content_type);
                *request.body_mut() = Some(reqwest::Body::wrap_stream(form.into_stream()));
            }
        }
        for (name, value) in self.options.headers() {
            request.headers_mut().insert(name.clone(), value.clone());
        }
        *request.timeout_mut() = self.options.timeout().or(self.client.timeout());
        Ok(request)
    }

    /// Sends the request and decodes the JSON response.
    pub async fn execute<O: DeserializeOwned>(self) -> Result<O> {
        let payload = self.send().await?;
        serde_json::from_slice(&payload).map_err(Error::decode)
    }

    /// Sends the request for methods without a response body.
    ///
    /// Any 2xx response is a success, its body is discarded.
    pub async fn execute_empty(self) -> Result<()> {
        self.send().await.map(|_| ())
    }

    async fn send(self) -> Result<Bytes> {
        let client = self.client.http_client().clone();
        let request = self.build().await?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");
        let response = client.execute(request).await.map_err(map_send_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        // Always read the full body, so the connection can be reused.
        let payload = response.bytes().await.map_err(map_send_error)?;
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), headers, payload));
        }
        Ok(payload)
    }
}

impl crate::options::internal::RequestBuilder for RequestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(err)
    } else {
        Error::transport(err)
    }
}

/// Returns the parts of a `multipart/related` upload.
///
/// The JSON metadata, if any, is the first part, the media is the second part.
async fn multipart_related(metadata: Option<Bytes>, media: Media) -> Result<Form> {
    let form = match metadata {
        None => Form::new(),
        Some(m) => {
            let metadata = Part::bytes(m.to_vec())
                .mime_str(METADATA_CONTENT_TYPE)
                .map_err(Error::malformed_request)?;
            Form::new().part("metadata", metadata)
        }
    };
    Ok(form.part("media", media.into_part().await?))
}
