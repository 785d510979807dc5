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

//! This module contains the mappings for a JSON Discovery document.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub version: String,
    pub title: String,
    pub description: Option<String>,
    pub root_url: String,
    pub service_path: String,
    pub documentation_link: Option<String>,
    pub auth: Option<Auth>,
    /// Parameters accepted by every method of the API.
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    pub oauth2: OAuth2,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2 {
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeDesc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeDesc {
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub id: Option<String>,
    pub path: Option<String>,
    pub http_method: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub parameter_order: Vec<String>,
    pub request: Option<Schema>,
    pub response: Option<Schema>,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub media_upload: Option<MediaUpload>,
    #[serde(default)]
    pub supports_media_upload: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(flatten)]
    pub schema: Schema,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub repeated: bool,
    pub location: String,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
}

impl Parameter {
    pub fn is_path(&self) -> bool {
        self.location == "path"
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUpload {
    #[serde(default)]
    pub protocols: BTreeMap<String, Protocol>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    #[serde(default)]
    pub multipart: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub additional_properties: Option<Box<Schema>>,
    #[serde(rename = "$ref")]
    pub schema_ref: Option<String>,
    /// Present on polymorphic schemas, maps a discriminant value to the
    /// schema describing the object.
    pub variant: Option<Variant>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub discriminant: String,
    #[serde(default)]
    pub map: Vec<VariantMapping>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantMapping {
    #[serde(rename = "type_value")]
    pub type_value: String,
    #[serde(rename = "$ref")]
    pub schema_ref: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub methods: BTreeMap<String, Method>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) fn load(name: &str) -> anyhow::Result<Document> {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("resources/test");
        d.push(name);
        let contents = std::fs::read(d)?;
        Ok(serde_json::from_slice(&contents)?)
    }

    #[test]
    fn genomics() -> anyhow::Result<()> {
        let doc = load("genomics-v1beta2.json")?;
        assert_eq!(doc.name, "genomics");
        assert_eq!(doc.version, "v1beta2");
        assert!(doc.parameters.contains_key("fields"));
        let datasets = &doc.resources["datasets"];
        let get = &datasets.methods["get"];
        assert_eq!(get.path.as_deref(), Some("datasets/{datasetId}"));
        assert_eq!(get.parameter_order, vec!["datasetId"]);
        assert!(get.parameters["datasetId"].required);
        assert!(get.parameters["datasetId"].is_path());
        let buckets = &doc.resources["readgroupsets"].resources["coveragebuckets"];
        assert!(buckets.methods.contains_key("list"));
        Ok(())
    }

    #[test]
    fn mapsengine() -> anyhow::Result<()> {
        let doc = load("mapsengine-v1.json")?;
        let geometry = &doc.schemas["GeoJsonGeometry"];
        let variant = geometry.variant.as_ref().expect("geometry is polymorphic");
        assert_eq!(variant.discriminant, "type");
        assert_eq!(variant.map.len(), 7);
        assert_eq!(variant.map[0].type_value, "GeometryCollection");
        assert_eq!(variant.map[0].schema_ref, "GeoJsonGeometryCollection");
        let insert = &doc.resources["rasters"].resources["files"].methods["insert"];
        assert!(insert.supports_media_upload);
        let upload = insert.media_upload.as_ref().expect("insert accepts media");
        assert!(upload.protocols["simple"].multipart);
        Ok(())
    }

    #[test]
    fn variant_mapping_keys() -> anyhow::Result<()> {
        let variant = serde_json::from_value::<Variant>(serde_json::json!({
            "discriminant": "type",
            "map": [{"type_value": "folder", "$ref": "MapFolder"}],
        }))?;
        assert_eq!(variant.map[0].type_value, "folder");
        assert_eq!(variant.map[0].schema_ref, "MapFolder");

        let got = serde_json::from_value::<Variant>(serde_json::json!({
            "discriminant": "type",
            "map": [{"typeValue": "folder", "$ref": "MapFolder"}],
        }));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }
}
