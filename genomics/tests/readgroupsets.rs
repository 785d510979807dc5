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

use gax::paging::PageableResponse;
use google_apis_genomics_v1beta2::{Client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;
use test_case::test_case;

type TestResult = anyhow::Result<()>;

fn test_client(server: &Server) -> gax::Result<Client> {
    Client::builder()
        .with_endpoint(format!("http://{}/genomics/v1beta2/", server.addr()))
        .build()
}

#[tokio::test]
async fn coverage_buckets() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "GET",
                "/genomics/v1beta2/readgroupsets/rgs-1/coveragebuckets"
            ),
            request::query(url_decoded(len(eq(4)))),
            request::query(url_decoded(contains(("alt", "json")))),
            request::query(url_decoded(contains(("range.referenceName", "chr 1")))),
            request::query(url_decoded(contains(("range.start", "100")))),
            request::query(url_decoded(contains(("range.end", "9000000000")))),
        ])
        .respond_with(json_encoded(json!({
            "bucketWidth": "2048",
            "coverageBuckets": [{
                "meanCoverage": 1.5,
                "range": {"referenceName": "chr 1", "start": "100", "end": "2148"},
            }],
        }))),
    );

    let client = test_client(&server)?;
    let response = client
        .readgroupsets_coveragebuckets()
        .list("rgs-1")
        .range_reference_name("chr 1")
        .range_start(100)
        .range_end(9_000_000_000)
        .execute()
        .await?;
    assert_eq!(response.bucket_width, Some(2048));
    assert!(!response.has_next_page());
    let buckets = response.coverage_buckets.unwrap_or_default();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].mean_coverage, Some(1.5));
    let range = buckets[0].range.clone().unwrap_or_default();
    assert_eq!(range.start, Some(100));
    assert_eq!(range.end, Some(2148));
    Ok(())
}

#[tokio::test]
async fn query_encoding() -> TestResult {
    let client = Client::builder()
        .with_endpoint("https://test.googleapis.com/genomics/v1beta2/")
        .build()?;
    let request = client
        .readgroupsets_coveragebuckets()
        .list("rgs 1")
        .range_reference_name("chr 1&x=y")
        .target_bucket_width(1 << 40)
        .into_builder()
        .build()
        .await?;
    assert_eq!(
        request.url().path(),
        "/genomics/v1beta2/readgroupsets/rgs%201/coveragebuckets"
    );
    assert_eq!(
        request.url().query(),
        Some("alt=json&range.referenceName=chr%201%26x%3Dy&targetBucketWidth=1099511627776")
    );
    Ok(())
}

#[tokio::test]
async fn search_call_sets() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/genomics/v1beta2/callsets/search"),
            request::body(json_decoded(eq(json!({
                "variantSetIds": ["vs-1", "vs-2"],
                "pageSize": 10,
            })))),
        ])
        .respond_with(json_encoded(json!({
            "callSets": [{
                "id": "cs-1",
                "created": "1420070400000",
                "info": {"source": ["a", "b"]},
            }],
            "nextPageToken": "next",
        }))),
    );

    let client = test_client(&server)?;
    let mut request = model::SearchCallSetsRequest::default();
    request.variant_set_ids = Some(vec!["vs-1".to_string(), "vs-2".to_string()]);
    request.page_size = Some(10);
    let response = client.callsets().search(request).execute().await?;
    assert_eq!(response.next_page_token(), Some("next"));
    let call_sets = response.call_sets.unwrap_or_default();
    assert_eq!(call_sets[0].created, Some(1_420_070_400_000));
    let info = call_sets[0].info.clone().unwrap_or_default();
    assert_eq!(info["source"], vec!["a", "b"]);
    Ok(())
}

#[test_case(json!({"projectNumber": "42"}), Some(42); "string")]
#[test_case(json!({"projectNumber": null}), None; "null")]
#[test_case(json!({}), None; "absent")]
fn int64_decoding(input: serde_json::Value, want: Option<i64>) -> TestResult {
    let dataset = serde_json::from_value::<model::Dataset>(input)?;
    assert_eq!(dataset.project_number, want);
    Ok(())
}

#[test]
fn int64_encoding() -> TestResult {
    let mut dataset = model::Dataset::default();
    dataset.project_number = Some(-7);
    assert_eq!(
        serde_json::to_value(&dataset)?,
        json!({"projectNumber": "-7"})
    );
    assert_eq!(serde_json::to_value(model::Dataset::default())?, json!({}));
    Ok(())
}

#[test]
fn unknown_fields_are_ignored() -> TestResult {
    let dataset = serde_json::from_value::<model::Dataset>(json!({
        "id": "ds-1",
        "kind": "genomics#dataset",
    }))?;
    assert_eq!(dataset.id.as_deref(), Some("ds-1"));
    Ok(())
}

fn populated_call_set() -> model::CallSet {
    let mut call_set = model::CallSet::default();
    call_set.id = Some("cs-1".to_string());
    call_set.name = Some("NA12878".to_string());
    call_set.sample_id = Some("sample-1".to_string());
    call_set.created = Some(i64::MAX);
    call_set.variant_set_ids = Some(vec!["vs-1".to_string()]);
    call_set.info = Some(
        [
            ("source".to_string(), vec!["a".to_string(), "b".to_string()]),
            ("empty".to_string(), Vec::new()),
        ]
        .into(),
    );
    call_set
}

fn populated_coverage_bucket() -> model::CoverageBucket {
    let mut range = model::Range::default();
    range.reference_name = Some("chrX".to_string());
    range.start = Some(-1);
    range.end = Some(1 << 40);
    let mut bucket = model::CoverageBucket::default();
    bucket.mean_coverage = Some(0.25);
    bucket.range = Some(range);
    bucket
}

#[test_case(populated_call_set(); "populated")]
#[test_case(model::CallSet::default(); "empty")]
fn call_set_round_trip(input: model::CallSet) -> TestResult {
    let encoded = serde_json::to_value(&input)?;
    let got = serde_json::from_value::<model::CallSet>(encoded)?;
    assert_eq!(got, input);
    Ok(())
}

#[test]
fn call_set_wire_format() -> TestResult {
    let encoded = serde_json::to_value(populated_call_set())?;
    assert_eq!(encoded["created"], json!(i64::MAX.to_string()));
    assert_eq!(encoded["info"]["source"], json!(["a", "b"]));
    assert_eq!(encoded["info"]["empty"], json!([]));
    Ok(())
}

#[test_case(populated_coverage_bucket(); "populated")]
#[test_case(model::CoverageBucket::default(); "empty")]
fn coverage_bucket_round_trip(input: model::CoverageBucket) -> TestResult {
    let encoded = serde_json::to_value(&input)?;
    if input.range.is_some() {
        assert_eq!(encoded.pointer("/range/end"), Some(&json!("1099511627776")));
    }
    let got = serde_json::from_value::<model::CoverageBucket>(encoded)?;
    assert_eq!(got, input);
    Ok(())
}

#[test]
fn nested_response_round_trip() -> TestResult {
    let mut input = model::ListCoverageBucketsResponse::default();
    input.bucket_width = Some(2048);
    input.coverage_buckets = Some(vec![populated_coverage_bucket(), Default::default()]);
    input.next_page_token = Some("T2".to_string());
    let encoded = serde_json::to_string(&input)?;
    let got = serde_json::from_str::<model::ListCoverageBucketsResponse>(&encoded)?;
    assert_eq!(got, input);
    Ok(())
}
