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
//
// Code generated by discogen. DO NOT EDIT.

use serde::{Deserialize, Serialize};

/// An asset is any Google Maps Engine resource that has a globally
/// unique ID. Assets include maps, layers, vector tables, raster
/// collections, and rasters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Asset {
    /// A rectangular bounding box which contains all of the data in this
    /// asset. The box is expressed as "west, south, east, north". The
    /// numbers represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// The creation time of this asset. The value is an RFC 3339-formatted
    /// date-time value (for example, 1970-01-01T00:00:00Z).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// The asset's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ETag, used to refer to the current version of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The asset's globally unique ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The last modified time of this asset. The value is an RFC
    /// 3339-formatted date-time value (for example, 1970-01-01T00:00:00Z).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<String>,
    /// The asset's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The ID of the project to which the asset belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// The URL to query to retrieve the asset's complete object. The assets
    /// endpoint only returns high-level information about a resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// An array of text strings, with each string representing a tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// The type of asset. One of raster, rasterCollection, table, map, or
    /// layer.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// If true, WRITERs of the asset are able to edit the asset permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writers_can_edit_permissions: Option<bool>,
}

/// The response returned by a call to resources.List.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssetsListResponse {
    /// Assets returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    /// Next page token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl gax::paging::PageableResponse for AssetsListResponse {
    fn next_page_token(&self) -> Option<&str> {
        gax::paging::token(&self.next_page_token)
    }
}

/// A feature within a table.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Feature {
    /// The geometry member of this Feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeoJsonGeometry>,
    /// Key/value pairs of this Feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<GeoJsonProperties>,
    /// Identifies this object as a feature.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

/// The request sent to features.BatchInsert.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeaturesBatchInsertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
    /// If true, the server will normalize feature geometries. It is assumed
    /// that the South Pole is exterior to any polygons given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_geometries: Option<bool>,
}

/// The response returned by a call to features.List.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeaturesListResponse {
    /// An indicator of the maximum rate at which queries may be made, if all
    /// queries were as expensive as this query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_queries_per_second: Option<f64>,
    /// Resources returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
    /// Next page token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// The feature schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl gax::paging::PageableResponse for FeaturesListResponse {
    fn next_page_token(&self) -> Option<&str> {
        gax::paging::token(&self.next_page_token)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum GeoJsonGeometry {
    GeometryCollection(GeoJsonGeometryCollection),
    LineString(GeoJsonLineString),
    MultiLineString(GeoJsonMultiLineString),
    MultiPoint(GeoJsonMultiPoint),
    MultiPolygon(GeoJsonMultiPolygon),
    Point(GeoJsonPoint),
    Polygon(GeoJsonPolygon),
}

impl From<GeoJsonGeometryCollection> for GeoJsonGeometry {
    fn from(value: GeoJsonGeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

impl From<GeoJsonLineString> for GeoJsonGeometry {
    fn from(value: GeoJsonLineString) -> Self {
        Self::LineString(value)
    }
}

impl From<GeoJsonMultiLineString> for GeoJsonGeometry {
    fn from(value: GeoJsonMultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<GeoJsonMultiPoint> for GeoJsonGeometry {
    fn from(value: GeoJsonMultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<GeoJsonMultiPolygon> for GeoJsonGeometry {
    fn from(value: GeoJsonMultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeoJsonPoint> for GeoJsonGeometry {
    fn from(value: GeoJsonPoint) -> Self {
        Self::Point(value)
    }
}

impl From<GeoJsonPolygon> for GeoJsonGeometry {
    fn from(value: GeoJsonPolygon) -> Self {
        Self::Polygon(value)
    }
}

/// A heterogenous collection of GeoJsonGeometry objects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonGeometryCollection {
    /// An array of geometry objects. There must be at least 2 different
    /// types of geometries in the array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometries: Option<Vec<GeoJsonGeometry>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonLineString {
    /// An array of two or more positions, representing a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<GeoJsonPosition>>,
}

/// Multi Line String
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonMultiLineString {
    /// An array of at least two GeoJsonLineString coordinate arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Vec<GeoJsonPosition>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonMultiPoint {
    /// An array of at least two GeoJsonPoint coordinate arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<GeoJsonPosition>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonMultiPolygon {
    /// An array of at least two GeoJsonPolygon coordinate arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Vec<Vec<GeoJsonPosition>>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonPoint {
    /// A single GeoJsonPosition, specifying the location of the point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoJsonPosition>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GeoJsonPolygon {
    /// An array of LinearRings. A LinearRing is a GeoJsonLineString which is
    /// closed (the first and last GeoJsonPositions are equal), and which
    /// contains at least four GeoJsonPositions. For polygons with multiple
    /// rings, the first LinearRing is the exterior ring, and any subsequent
    /// rings are interior rings (that is, holes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Vec<GeoJsonPosition>>>,
}

/// A position represents a geographical position as an array containing
/// a longitude and a latitude, and optionally an altitude, in that
/// order. All Geometry objects make use of positions to represent
/// geometries as nested arrays. The structure of the array is governed
/// by the type of the geometry.
pub type GeoJsonPosition = Vec<f64>;

/// The properties associated with a feature.
pub type GeoJsonProperties = std::collections::HashMap<String, serde_json::Value>;

/// A Map is a collection of Layers, optionally contained within folders.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Map {
    /// A rectangular bounding box which contains all of the data in this
    /// Map. The box is expressed as "west, south, east, north". The numbers
    /// represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// The contents of this Map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<MapContents>,
    /// The creation time of this map. The value is an RFC 3339 formatted
    /// date-time value (e.g. 1970-01-01T00:00:00Z).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// The description of this Map, supplied by the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ETag, used to refer to the current version of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// A globally unique ID, used to refer to this Map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of this Map, supplied by the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The ID of the project that this Map is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Tags of this Map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

pub type MapContents = Vec<MapItem>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapFolder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<MapItem>>,
    /// An array of four numbers (west, south, east, north) which defines the
    /// rectangular bounding box of the default viewport. The numbers
    /// represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<Vec<f64>>,
    /// The expandability setting of this MapFolder. If true, the folder can
    /// be expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,
    /// A user defined alias for this MapFolder, specific to this Map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The name of this MapFolder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The visibility setting of this MapFolder. One of "defaultOn" or
    /// "defaultOff".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum MapItem {
    #[serde(rename = "folder")]
    Folder(MapFolder),
    #[serde(rename = "kmlLink")]
    KmlLink(MapKmlLink),
    #[serde(rename = "layer")]
    Layer(MapLayer),
}

impl From<MapFolder> for MapItem {
    fn from(value: MapFolder) -> Self {
        Self::Folder(value)
    }
}

impl From<MapKmlLink> for MapItem {
    fn from(value: MapKmlLink) -> Self {
        Self::KmlLink(value)
    }
}

impl From<MapLayer> for MapItem {
    fn from(value: MapLayer) -> Self {
        Self::Layer(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapKmlLink {
    /// An array of four numbers (west, south, east, north) which defines the
    /// rectangular bounding box of the default viewport. The numbers
    /// represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<Vec<f64>>,
    /// The URL to the KML file represented by this MapKmlLink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kml_url: Option<String>,
    /// The name of this MapKmlLink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The visibility setting of this MapKmlLink. One of "defaultOn" or
    /// "defaultOff".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapLayer {
    /// An array of four numbers (west, south, east, north) which defines the
    /// rectangular bounding box of the default viewport. The numbers
    /// represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<Vec<f64>>,
    /// The ID of this MapLayer. This ID can be used to request more details
    /// about the layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// A user defined alias for this MapLayer, specific to this Map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The name of this MapLayer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The visibility setting of this MapLayer. One of "defaultOn" or
    /// "defaultOff".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A schema indicating the properties which may be associated with
/// features within a Table, and the types of those properties.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Schema {
    /// An array of TableColumn objects. The first object in the array must
    /// be named geometry and be of type points, lineStrings, polygons, or
    /// mixedGeometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TableColumn>>,
    /// The name of the column that contains a feature's geometry. This field
    /// can be omitted during table create; Google Maps Engine supports only
    /// a single geometry column, which must be named geometry and be the
    /// first object in the columns array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_geometry: Option<String>,
    /// The name of the column that contains the unique identifier of a
    /// Feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
}

/// A collection of geographic features, and associated metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Table {
    /// A rectangular bounding box which contains all of the data in this
    /// Table. The box is expressed as "west, south, east, north". The
    /// numbers represent latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// The creation time of this table. The value is an RFC 3339 formatted
    /// date-time value (e.g. 1970-01-01T00:00:00Z).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// The description of this table, supplied by the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ETag, used to refer to the current version of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// A globally unique ID, used to refer to this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of this table, supplied by the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The ID of the project to which the table belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// The schema for this table. Note: The schema is returned in response
    /// to a get request but not a list request. After requesting a list of
    /// tables, you'll need to send a get request to retrieve the schema for
    /// each table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Encoding of the uploaded files. Valid values include UTF-8, CP1251,
    /// ISO 8859-1, and Shift_JIS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_encoding: Option<String>,
    /// Tags of this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TableColumn {
    /// The column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The type of data stored in this column.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}
