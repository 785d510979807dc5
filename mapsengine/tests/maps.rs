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

use google_apis_mapsengine_v1::{Client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;
use test_case::test_case;

type TestResult = anyhow::Result<()>;

fn test_client(server: &Server) -> gax::Result<Client> {
    Client::builder()
        .with_endpoint(format!("http://{}/mapsengine/v1/", server.addr()))
        .build()
}

#[tokio::test]
async fn get_map() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/mapsengine/v1/maps/m-1"),
            request::query(url_decoded(len(eq(2)))),
            request::query(url_decoded(contains(("version", "draft")))),
        ])
        .respond_with(json_encoded(json!({
            "id": "m-1",
            "name": "Parks",
            "contents": [
                {"type": "layer", "id": "l-1", "name": "Trails", "visibility": "defaultOn"},
                {
                    "type": "folder",
                    "name": "More",
                    "expandable": true,
                    "contents": [
                        {"type": "kmlLink", "kmlUrl": "https://example.com/a.kml"}
                    ],
                },
            ],
        }))),
    );

    let client = test_client(&server)?;
    let map = client.maps().get("m-1").version("draft").execute().await?;
    let contents = map.contents.unwrap_or_default();
    assert_eq!(contents.len(), 2);

    let model::MapItem::Layer(layer) = &contents[0] else {
        panic!("expected a layer in {contents:?}");
    };
    assert_eq!(layer.id.as_deref(), Some("l-1"));
    assert_eq!(layer.visibility.as_deref(), Some("defaultOn"));

    let model::MapItem::Folder(folder) = &contents[1] else {
        panic!("expected a folder in {contents:?}");
    };
    assert_eq!(folder.expandable, Some(true));
    let nested = folder.contents.clone().unwrap_or_default();
    let model::MapItem::KmlLink(link) = &nested[0] else {
        panic!("expected a KML link in {nested:?}");
    };
    assert_eq!(link.kml_url.as_deref(), Some("https://example.com/a.kml"));
    Ok(())
}

#[tokio::test]
async fn get_map_unknown_item() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/mapsengine/v1/maps/m-1"))
            .respond_with(json_encoded(json!({
                "contents": [{"type": "heatmap", "id": "h-1"}],
            }))),
    );

    let client = test_client(&server)?;
    let err = client.maps().get("m-1").execute().await.unwrap_err();
    assert!(err.is_decode(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn list_assets() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/mapsengine/v1/assets"),
            request::query(url_decoded(len(eq(4)))),
            request::query(url_decoded(contains(("type", "table,map")))),
            request::query(url_decoded(contains(("projectId", "p-1")))),
            request::query(url_decoded(contains(("pageToken", "T1")))),
        ])
        .respond_with(json_encoded(json!({
            "assets": [{"id": "a-1", "type": "table", "bbox": [-1.0, -2.0, 3.0, 4.0]}],
            "nextPageToken": "T2",
        }))),
    );

    let client = test_client(&server)?;
    let response = client
        .assets()
        .list()
        .type_("table,map")
        .project_id("p-1")
        .page_token("T1")
        .execute()
        .await?;
    let assets = response.assets.clone().unwrap_or_default();
    assert_eq!(assets[0].type_.as_deref(), Some("table"));
    assert_eq!(assets[0].bbox, Some(vec![-1.0, -2.0, 3.0, 4.0]));
    assert_eq!(
        gax::paging::PageableResponse::next_page_token(&response),
        Some("T2")
    );
    Ok(())
}

#[test_case(json!({"type": "Point", "coordinates": [1.0, 2.0]}); "point")]
#[test_case(json!({"type": "MultiPoint", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}); "multi point")]
#[test_case(json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}); "line string")]
#[test_case(json!({"type": "MultiLineString", "coordinates": [[[1.0, 2.0], [3.0, 4.0]]]}); "multi line string")]
#[test_case(json!({"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}); "polygon")]
#[test_case(json!({"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]}); "multi polygon")]
#[test_case(json!({"type": "GeometryCollection", "geometries": [{"type": "Point", "coordinates": [1.0, 2.0]}]}); "collection")]
fn geometry_wire_format(input: serde_json::Value) -> TestResult {
    let geometry = serde_json::from_value::<model::GeoJsonGeometry>(input.clone())?;
    assert_eq!(serde_json::to_value(&geometry)?, input);
    Ok(())
}

#[test]
fn geometry_from_variant() -> TestResult {
    let mut point = model::GeoJsonPoint::default();
    point.coordinates = Some(vec![5.0, 6.0, 7.0]);
    let geometry = model::GeoJsonGeometry::from(point.clone());
    assert_eq!(geometry, model::GeoJsonGeometry::Point(point));
    assert_eq!(
        serde_json::to_value(&geometry)?,
        json!({"type": "Point", "coordinates": [5.0, 6.0, 7.0]})
    );
    Ok(())
}

#[test]
fn map_item_tags() -> TestResult {
    let mut layer = model::MapLayer::default();
    layer.id = Some("l-1".to_string());
    let item: model::MapItem = layer.into();
    assert_eq!(
        serde_json::to_value(&item)?,
        json!({"type": "layer", "id": "l-1"})
    );
    Ok(())
}

#[test]
fn missing_discriminant() {
    let got = serde_json::from_value::<model::GeoJsonGeometry>(json!({"coordinates": [1.0, 2.0]}));
    assert!(got.is_err(), "{got:?}");
}
