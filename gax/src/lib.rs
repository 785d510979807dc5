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

//! Google APIs helpers for discovery-based clients.
//!
//! This crate contains the types and functions shared by the client libraries
//! generated from Google API Discovery documents. The generated crates are
//! thin: each call descriptor collects its parameters and hands them to a
//! [RequestBuilder][request::RequestBuilder], which renders the URL, encodes
//! the query string and body, sends exactly one HTTP request, and maps the
//! response into either a decoded value or an [Error][error::Error].
//!
//! Application developers mostly interact with the [error] types, the
//! [client::ClientBuilder] used to configure generated clients, and the
//! per-call [options].

/// The core error types used by generated clients.
pub mod error;

/// Configuration and the shared HTTP handle used by generated clients.
pub mod client;

/// Per-request configuration.
pub mod options;

/// The request builder used by all generated call descriptors.
pub mod request;

/// Media payloads sent with upload requests.
pub mod media;

/// Helpers for list responses with continuation tokens.
pub mod paging;

/// Parses and renders URL path templates.
///
/// Discovery documents describe each method with a path such as
/// `datasets/{datasetId}` or `{+name}`. The types in this module substitute
/// the placeholders with percent-encoded values, so a value can never change
/// the structure of the URL.
pub mod path_template;

/// Defines traits and helpers to format path parameters.
pub mod path_parameter;

/// Defines traits and helpers to serialize query parameters.
///
/// Query parameters in the Google APIs can be strings, integers, floating
/// point numbers, booleans, or lists of strings. The generator produces query
/// parameters as optional fields in the call descriptors. The generated code
/// is simpler if all the query parameters can be treated uniformly, without
/// any conditionally generated code to handle different types.
///
/// The types are not intended for application developers to use. They are
/// public because we generate many crates (roughly one per service), and all
/// of these crates use these helpers.
pub mod query_parameter;

pub use error::Error;

/// The result type used by generated clients.
pub type Result<T> = std::result::Result<T, Error>;
