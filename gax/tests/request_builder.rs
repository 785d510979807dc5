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

use gax::client::{ClientConfig, ReqwestClient};
use gax::media::Media;
use gax::options::RequestOptionsBuilder;
use gax::request::Method;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;
use std::time::Duration;

type TestResult = anyhow::Result<()>;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Thing {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListThings {
    #[serde(default)]
    things: Vec<Thing>,
    next_page_token: Option<String>,
}

fn test_client(server: &Server) -> gax::Result<ReqwestClient> {
    let config = ClientConfig {
        endpoint: Some(format!("http://{}/things/v1/", server.addr())),
        ..Default::default()
    };
    ReqwestClient::new(config, "https://unused.googleapis.com/")
}

#[tokio::test]
async fn get() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/things/v1/things/abc"),
            request::query(url_decoded(contains(("alt", "json")))),
            request::body(""),
        ])
        .respond_with(json_encoded(json!({"id": "abc", "displayName": "A thing"}))),
    );

    let client = test_client(&server)?;
    let thing: Thing = client
        .builder(Method::GET, "things/{id}")
        .path_param("id", "abc")
        .execute()
        .await?;
    assert_eq!(thing.id.as_deref(), Some("abc"));
    assert_eq!(thing.display_name.as_deref(), Some("A thing"));
    Ok(())
}

#[tokio::test]
async fn list_with_page_token() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/things/v1/things"),
            request::query(url_decoded(len(eq(2)))),
            request::query(url_decoded(contains(("alt", "json")))),
            request::query(url_decoded(contains(("pageToken", "T1")))),
        ])
        .respond_with(json_encoded(json!({
            "things": [{"id": "a"}, {"id": "b"}],
            "nextPageToken": "",
        }))),
    );

    let client = test_client(&server)?;
    let page: ListThings = client
        .builder(Method::GET, "things")
        .query_param("pageToken", "T1")
        .query_param("maxResults", None::<u32>)
        .query_param("fields", None::<String>)
        .execute()
        .await?;
    assert_eq!(page.things.len(), 2);
    assert_eq!(gax::paging::token(&page.next_page_token), None);
    Ok(())
}

#[tokio::test]
async fn not_found() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/things/v1/things/missing"))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(r#"{"error":{"code":404,"message":"not found"}}"#),
            ),
    );

    let client = test_client(&server)?;
    let err = client
        .builder(Method::GET, "things/{id}")
        .path_param("id", "missing")
        .execute::<Thing>()
        .await
        .unwrap_err();
    assert!(err.is_api(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(404));
    let details = err.api_error().expect("error reply should parse");
    assert_eq!(details.code, 404);
    assert_eq!(details.message, "not found");
    assert!(
        err.http_headers()
            .and_then(|h| h.get("content-type"))
            .is_some(),
        "{err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn error_without_reply() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/things/v1/things/abc"))
            .respond_with(status_code(503).body("service unavailable")),
    );

    let client = test_client(&server)?;
    let err = client
        .builder(Method::DELETE, "things/{id}")
        .path_param("id", "abc")
        .execute_empty()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(503));
    assert!(err.api_error().is_none(), "{err:?}");
    assert_eq!(
        err.http_payload().map(|p| p.as_ref()),
        Some(b"service unavailable".as_slice())
    );
    Ok(())
}

#[tokio::test]
async fn create() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/things/v1/things"),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(json!({"displayName": "new thing"})))),
        ])
        .respond_with(json_encoded(json!({"id": "generated", "displayName": "new thing"}))),
    );

    let client = test_client(&server)?;
    let request = Thing {
        display_name: Some("new thing".into()),
        ..Default::default()
    };
    let thing: Thing = client
        .builder(Method::POST, "things")
        .body(&request)
        .execute()
        .await?;
    assert_eq!(thing.id.as_deref(), Some("generated"));
    Ok(())
}

#[tokio::test]
async fn upload() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/upload/things/v1/things/abc/files"),
            request::query(url_decoded(contains(("uploadType", "multipart")))),
            request::query(url_decoded(contains(("alt", "json")))),
            request::headers(contains(key("content-type"))),
        ])
        .respond_with(status_code(204)),
    );

    let client = test_client(&server)?;
    client
        .builder(Method::POST, "things/{id}/files")
        .path_param("id", "abc")
        .media(Media::new("file contents", "text/plain"))
        .execute_empty()
        .await?;
    Ok(())
}

#[tokio::test]
async fn missing_path_param_sends_nothing() -> TestResult {
    // The server has no expectations, any request fails the test.
    let server = Server::run();
    let client = test_client(&server)?;
    let err = client
        .builder(Method::GET, "things/{id}/parts/{part}")
        .path_param("id", "abc")
        .execute::<Thing>()
        .await
        .unwrap_err();
    assert!(err.is_malformed_request(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn decode_error() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/things/v1/things/abc"))
            .respond_with(status_code(200).body("this is not json")),
    );

    let client = test_client(&server)?;
    let err = client
        .builder(Method::GET, "things/{id}")
        .path_param("id", "abc")
        .execute::<Thing>()
        .await
        .unwrap_err();
    assert!(err.is_decode(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn timeout() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/things/v1/things/slow")).respond_with(
            delay_and_then(
                Duration::from_secs(5),
                json_encoded(json!({"id": "slow"})),
            ),
        ),
    );

    let client = test_client(&server)?;
    let err = client
        .builder(Method::GET, "things/{id}")
        .path_param("id", "slow")
        .with_timeout(Duration::from_millis(100))
        .execute::<Thing>()
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "{err:?}");
    assert!(err.is_transport(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn transport_error() -> TestResult {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = ClientConfig {
        endpoint: Some(format!("http://{addr}/things/v1/")),
        ..Default::default()
    };
    let client = ReqwestClient::new(config, "https://unused.googleapis.com/")?;
    let err = client
        .builder(Method::GET, "things")
        .execute::<ListThings>()
        .await
        .unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert!(err.http_status_code().is_none(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn shared_client() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/things/v1/things"))
            .times(8)
            .respond_with(json_encoded(json!({"things": []}))),
    );

    let client = test_client(&server)?;
    let tasks = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .builder(Method::GET, "things")
                    .execute::<ListThings>()
                    .await
            })
        })
        .collect::<Vec<_>>();
    for t in tasks {
        let page = t.await??;
        assert!(page.things.is_empty());
    }
    Ok(())
}
