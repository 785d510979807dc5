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

use super::api::ApiError;
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The request may
/// be impossible to build from the application inputs, the transport may be
/// unable to send the request or receive the response, the service may reject
/// the request, or the response may not match the expected schema.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use gax::error::Error;
/// match example_function() {
///     Err(e) if e.http_status_code() == Some(404) => {
///         println!("not there {e}");
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::api(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"not found")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a request that cannot be built.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::malformed_request("missing path parameter");
    /// assert!(error.is_malformed_request());
    /// assert!(error.source().is_some());
    /// ```
    pub fn malformed_request<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::MalformedRequest,
            source: Some(source.into()),
        }
    }

    /// The request could not be built from the application inputs.
    ///
    /// This is always a client-side generated error, detected before any
    /// network activity. The request was not sent.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a missing path parameter, or a path parameter
    /// with a value that cannot be represented as a single path segment, such
    /// as `.` or `..`. It can also be a request body that cannot be serialized
    /// to JSON, for example a map with non-string keys.
    pub fn is_malformed_request(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedRequest)
    }

    /// Creates an error representing a transport problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::transport("connection reset");
    /// assert!(error.is_transport());
    /// assert!(error.source().is_some());
    /// ```
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// The request may or may not have reached the service. If the request
    /// mutates any state in the service, it may or may not be safe to attempt
    /// the request again. The client libraries never retry on their own.
    ///
    /// Timeouts are a special case of transport errors, this predicate returns
    /// `true` for them too.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport | ErrorKind::Timeout)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.is_transport());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error from a non-2xx HTTP response.
    ///
    /// The payload is parsed as a Google API error reply, if possible. The raw
    /// payload is preserved either way.
    ///
    /// # Example
    /// ```
    /// use gax::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"error":{"code":404,"message":"not found"}}"#);
    /// let error = Error::api(404, http::HeaderMap::new(), payload);
    /// assert!(error.is_api());
    /// assert_eq!(error.http_status_code(), Some(404));
    /// assert_eq!(error.api_error().map(|e| e.message.as_str()), Some("not found"));
    /// ```
    pub fn api(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let error = ApiError::from_payload(&payload);
        let details = ApiDetails {
            status_code,
            headers,
            payload,
            error,
        };
        Self {
            kind: ErrorKind::Api(Box::new(details)),
            source: None,
        }
    }

    /// The service returned a non-2xx HTTP response.
    ///
    /// Use [http_status_code][Error::http_status_code] and
    /// [api_error][Error::api_error] to find out more.
    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api(_))
    }

    /// Creates an error representing a response that cannot be decoded.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::decode("simulated problem");
    /// assert!(error.is_decode());
    /// assert!(error.source().is_some());
    /// ```
    pub fn decode<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Decode,
            source: Some(source.into()),
        }
    }

    /// The service returned a 2xx response, but its body does not match the
    /// expected type.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is an outdated Discovery document. Regenerate the
    /// client library, or report the problem if the document is current.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode)
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The raw body of the error response, if any.
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// The structured error details returned by the service, if any.
    ///
    /// This is `None` for non-API errors and for API errors whose payload is
    /// not a Google API error reply.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(d) => d.error.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::MalformedRequest, Some(e)) => {
                write!(f, "cannot build the request {e}")
            }
            (ErrorKind::Transport, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Decode, Some(e)) => write!(f, "cannot decode the response {e}"),
            (ErrorKind::Api(d), _) => d.display(f),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    MalformedRequest,
    Transport,
    Timeout,
    Api(Box<ApiDetails>),
    Decode,
}

#[derive(Debug)]
struct ApiDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: Bytes,
    error: Option<ApiError>,
}

impl ApiDetails {
    fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        if let Some(e) = &self.error {
            return write!(
                f,
                "the service reports an error with HTTP status {code} described as: {}",
                e.message
            );
        }
        if let Ok(message) = std::str::from_utf8(self.payload.as_ref()) {
            write!(f, "the service reports an error with HTTP status {code}: {message}")
        } else {
            write!(
                f,
                "the service reports an error with HTTP status {code}: {:?}",
                self.payload
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    #[error("simulated leaf error")]
    struct LeafError;

    #[test]
    fn malformed_request() {
        let error = Error::malformed_request(LeafError);
        assert!(error.is_malformed_request(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<LeafError>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated leaf error"), "{error}");

        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(LeafError);
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated leaf error"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(LeafError);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("deadline"), "{error}");
    }

    #[test]
    fn decode() {
        let error = Error::decode(LeafError);
        assert!(error.is_decode(), "{error:?}");
        assert!(!error.is_api(), "{error:?}");
        assert!(error.to_string().contains("simulated leaf error"), "{error}");
    }

    #[test]
    fn api_with_error_reply() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let payload = Bytes::from_static(br#"{"error":{"code":404,"message":"not found"}}"#);
        let error = Error::api(404, headers.clone(), payload.clone());
        assert!(error.is_api(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(error.api_error(), Some(&ApiError::new(404, "not found")));
        assert!(error.to_string().contains("not found"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
    }

    #[test_case(b"bad gateway"; "text")]
    #[test_case(b"{\"unexpected\": true}"; "unexpected json")]
    #[test_case(&[0xFF_u8, 0xFE]; "not utf8")]
    fn api_without_error_reply(payload: &'static [u8]) {
        let error = Error::api(502, HeaderMap::new(), Bytes::from_static(payload));
        assert!(error.is_api(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert!(error.api_error().is_none(), "{error:?}");
        assert_eq!(
            error.http_payload().map(|p| p.as_ref()),
            Some(payload),
            "{error:?}"
        );
        assert!(error.to_string().contains("502"), "{error}");
    }
}
