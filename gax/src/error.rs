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

mod core_error;
pub use core_error::*;

/// The error payload returned by Google APIs.
///
/// Services built on the Discovery platform report failures with a non-2xx
/// HTTP status and a JSON body of the form:
///
/// ```json
/// {"error": {"code": 404, "message": "not found", "errors": [...]}}
/// ```
///
/// The types in this module represent that body.
///
/// # Examples
///
/// ```
/// use gax::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(details) = e.api_error() {
///         println!("the service reported {} {}", details.code, details.message)
///     }
/// }
/// ```
pub mod api;
