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

//! This module is used to build up the Rust types for the Discovery schemas.

use anyhow::{Result, anyhow, bail};
use std::collections::BTreeMap;

use super::model::*;
use super::util::*;

/// All the types generated for the `schemas` section of a document, keyed by
/// type name.
#[derive(Debug, Default)]
pub struct Models {
    pub items: BTreeMap<String, Model>,
}

#[derive(Debug)]
pub enum Model {
    Struct(StructSchema),
    /// Top-level arrays and maps, e.g. `pub type GeoJsonPosition = Vec<f64>;`
    Alias(AliasSchema),
    /// Polymorphic schemas, tagged by a discriminant property.
    Union(UnionSchema),
}

/// Represents a request/response struct and all of its fields.
#[derive(Debug, Default)]
pub struct StructSchema {
    pub doc: Option<String>,
    pub fields: Vec<StructField>,
    /// List responses carrying a continuation token.
    pub pageable: bool,
}

impl StructSchema {
    pub fn uses_serde_as(&self) -> bool {
        self.fields.iter().any(|f| f.serde_as.is_some())
    }
}

/// Represents the fields of a request/response struct.
#[derive(Clone, Debug, Default, Eq)]
pub struct StructField {
    pub name: String,
    pub json_name: String,
    pub field_type: String,
    /// The `serde_with` adapter, for types with a different wire format.
    pub serde_as: Option<String>,
    pub doc: Option<String>,
}

impl StructField {
    /// The serde attributes for the field.
    pub fn attributes(&self) -> Vec<String> {
        let mut attrs = Vec::new();
        if camel_to_snake(&self.json_name) != self.name {
            attrs.push(format!("#[serde(rename = \"{}\")]", self.json_name));
        }
        attrs.push("#[serde(skip_serializing_if = \"Option::is_none\")]".to_string());
        if let Some(adapter) = &self.serde_as {
            attrs.push(format!("#[serde_as(as = \"Option<{adapter}>\")]"));
        }
        attrs
    }
}

impl Ord for StructField {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for StructField {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for StructField {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug)]
pub struct AliasSchema {
    pub doc: Option<String>,
    pub target: String,
}

#[derive(Debug)]
pub struct UnionSchema {
    pub doc: Option<String>,
    pub discriminant: String,
    pub variants: Vec<UnionVariant>,
}

#[derive(Debug)]
pub struct UnionVariant {
    /// The Rust variant name.
    pub name: String,
    /// The discriminant value on the wire.
    pub tag: String,
    pub schema: String,
}

/// Processes all schemas to build up a mapping of the types that will need to
/// be generated to represent them.
pub fn schema_models(schemas: &BTreeMap<String, Schema>) -> Result<Models> {
    // The members of a union do not carry the discriminant. The enum tag
    // reads and writes it.
    let mut discriminants = BTreeMap::new();
    for schema in schemas.values() {
        if let Some(variant) = &schema.variant {
            for m in &variant.map {
                discriminants.insert(m.schema_ref.clone(), variant.discriminant.clone());
            }
        }
    }

    let mut models = Models::default();
    for (name, schema) in schemas {
        if let Some(variant) = &schema.variant {
            models
                .items
                .insert(name.clone(), Model::Union(union_schema(schema, variant)?));
            continue;
        }
        match schema.schema_type.as_deref() {
            Some("object") if schema.additional_properties.is_none() => {
                let skip = discriminants.get(name).map(String::as_str);
                object_struct(name, schema, skip, &mut models)?;
            }
            _ => {
                let alias = AliasSchema {
                    doc: schema.description.clone(),
                    target: rust_type(schema)?,
                };
                models.items.insert(name.clone(), Model::Alias(alias));
            }
        }
    }
    for (member, _) in discriminants {
        if !matches!(models.items.get(&member), Some(Model::Struct(_))) {
            bail!("variant member `{member}` is not an object schema");
        }
    }
    Ok(models)
}

fn union_schema(schema: &Schema, variant: &Variant) -> Result<UnionSchema> {
    if variant.map.is_empty() {
        bail!("variant without members in {:?}", schema.id);
    }
    let variants = variant
        .map
        .iter()
        .map(|m| UnionVariant {
            name: to_title_case(&m.type_value),
            tag: m.type_value.clone(),
            schema: m.schema_ref.clone(),
        })
        .collect();
    Ok(UnionSchema {
        doc: schema.description.clone(),
        discriminant: variant.discriminant.clone(),
        variants,
    })
}

/// Adds a struct for `schema`, and any inline objects it contains.
fn object_struct(
    type_name: &str,
    schema: &Schema,
    skip: Option<&str>,
    models: &mut Models,
) -> Result<()> {
    let mut fields = Vec::new();
    for (prop_name, prop) in &schema.properties {
        if Some(prop_name.as_str()) == skip {
            continue;
        }
        let field_type = field_type(type_name, prop_name, prop, models)?;
        fields.push(StructField {
            name: field_name(prop_name),
            json_name: prop_name.clone(),
            field_type,
            serde_as: wire_adapter(prop),
            doc: prop.description.clone(),
        });
    }
    fields.sort();
    let pageable = schema
        .properties
        .get("nextPageToken")
        .is_some_and(|p| p.schema_type.as_deref() == Some("string"));
    let model = StructSchema {
        doc: schema.description.clone(),
        fields,
        pageable,
    };
    models
        .items
        .insert(type_name.to_string(), Model::Struct(model));
    Ok(())
}

/// Returns the type of a field, generating structs for inline objects.
///
/// Inline objects are named after the containing type and the property, e.g.
/// `CallSetStats` for a `stats` object inside `CallSet`.
fn field_type(parent: &str, prop_name: &str, prop: &Schema, models: &mut Models) -> Result<String> {
    if is_inline_object(prop) {
        let nested = format!("{parent}{}", to_title_case(prop_name));
        object_struct(&nested, prop, None, models)?;
        return Ok(nested);
    }
    if let Some(items) = prop.items.as_deref() {
        if is_inline_object(items) {
            let nested = format!("{parent}{}", to_title_case(prop_name));
            object_struct(&nested, items, None, models)?;
            return Ok(format!("Vec<{nested}>"));
        }
    }
    rust_type(prop)
}

fn is_inline_object(schema: &Schema) -> bool {
    schema.schema_ref.is_none()
        && schema.schema_type.as_deref() == Some("object")
        && schema.additional_properties.is_none()
}

/// Returns the Rust type that corresponds to a Discovery schema.
pub fn rust_type(schema: &Schema) -> Result<String> {
    if let Some(schema_ref) = &schema.schema_ref {
        return Ok(schema_ref.clone());
    }
    let schema_type = schema
        .schema_type
        .as_deref()
        .ok_or_else(|| anyhow!("no type provided for {:?}", schema))?;
    let rust_type = match (schema_type, schema.format.as_deref()) {
        ("string", Some("int64")) => "i64".to_string(),
        ("string", Some("uint64")) => "u64".to_string(),
        ("string", _) => "String".to_string(),
        ("integer", Some("uint32")) => "u32".to_string(),
        ("integer", _) => "i32".to_string(),
        ("number", Some("float")) => "f32".to_string(),
        ("number", _) => "f64".to_string(),
        ("boolean", _) => "bool".to_string(),
        ("any", _) => "serde_json::Value".to_string(),
        ("array", _) => {
            let items = schema
                .items
                .as_deref()
                .ok_or_else(|| anyhow!("no items found for schema: {:?}", schema))?;
            format!("Vec<{}>", rust_type(items)?)
        }
        ("object", _) => {
            let values = schema.additional_properties.as_deref().ok_or_else(|| {
                anyhow!("inline objects are only supported as properties: {:?}", schema)
            })?;
            format!("std::collections::HashMap<String, {}>", rust_type(values)?)
        }
        (t, _) => bail!("unknown type: {t}"),
    };
    Ok(rust_type)
}

/// Returns the `serde_with` adapter for types whose JSON encoding differs
/// from the serde default. 64-bit integers are sent as JSON strings.
fn wire_adapter(schema: &Schema) -> Option<String> {
    if schema.schema_ref.is_some() {
        return None;
    }
    match (schema.schema_type.as_deref(), schema.format.as_deref()) {
        (Some("string"), Some("int64" | "uint64")) => {
            Some("serde_with::DisplayFromStr".to_string())
        }
        (Some("array"), _) => schema
            .items
            .as_deref()
            .and_then(wire_adapter)
            .map(|a| format!("Vec<{a}>")),
        (Some("object"), _) => schema
            .additional_properties
            .as_deref()
            .and_then(wire_adapter)
            .map(|a| format!("std::collections::HashMap<serde_with::Same, {a}>")),
        _ => None,
    }
}
