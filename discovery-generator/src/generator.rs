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

//! Emits the `lib.rs` and `model.rs` sources for a Discovery document.

use anyhow::{Result, anyhow, bail};
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use super::model::*;
use super::schema::*;
use super::util::*;

/// The document level parameters exposed on every call. The request builder
/// always sets `alt`, and authentication belongs to the HTTP client.
const GLOBAL_PARAMETERS: &[&str] = &["fields", "quotaUser"];

const LICENSE: &str = "// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by discogen. DO NOT EDIT.
";

pub struct DocumentGenerator {
    /// An in memory buffer of the code to write out.
    b: String,
    /// The discovery document describing the code to generate.
    d: Document,
}

impl DocumentGenerator {
    pub fn new(d: Document) -> Self {
        Self { b: String::new(), d }
    }

    /// Generate the client, services and calls.
    pub fn gen_services(&mut self) -> Result<String> {
        self.b.clear();
        self.license()?;
        self.crate_docs()?;
        self.service_imports()?;
        self.consts()?;
        self.scopes()?;
        let services = service_mapping(&self.d.resources);
        self.client(&services)?;
        self.services(&services)?;
        Ok(std::mem::take(&mut self.b))
    }

    /// Generate all the types used in requests and responses.
    pub fn gen_models(&mut self) -> Result<String> {
        self.b.clear();
        self.license()?;
        writeln!(&mut self.b)?;
        writeln!(&mut self.b, "use serde::{{Deserialize, Serialize}};")?;
        self.schemas()?;
        Ok(std::mem::take(&mut self.b))
    }

    fn license(&mut self) -> Result<()> {
        self.b.push_str(LICENSE);
        Ok(())
    }

    fn crate_docs(&mut self) -> Result<()> {
        writeln!(&mut self.b)?;
        writeln!(
            &mut self.b,
            "//! Google APIs client library for Rust - {} ({}).",
            self.d.title, self.d.version
        )?;
        if let Some(description) = &self.d.description {
            writeln!(&mut self.b, "//!")?;
            self.b.push_str(&as_crate_comment(description.clone())?);
        }
        if let Some(link) = &self.d.documentation_link {
            writeln!(&mut self.b, "//!")?;
            writeln!(&mut self.b, "//! See <{link}> for the service documentation.")?;
        }
        Ok(())
    }

    fn service_imports(&mut self) -> Result<()> {
        write!(
            &mut self.b,
            "
use gax::options::RequestOptions;
use gax::request::{{Method, RequestBuilder}};

pub mod model;
"
        )?;
        Ok(())
    }

    /// Generate the default endpoint.
    fn consts(&mut self) -> Result<()> {
        let endpoint = format!(
            "{}/{}",
            self.d.root_url.trim_end_matches('/'),
            self.d.service_path.trim_start_matches('/')
        );
        write!(
            &mut self.b,
            "
/// The default endpoint, including the service path.
pub const DEFAULT_ENDPOINT: &str = \"{endpoint}\";
"
        )?;
        Ok(())
    }

    /// Generate one constant per OAuth scope.
    fn scopes(&mut self) -> Result<()> {
        let Some(auth) = &self.d.auth else {
            return Ok(());
        };
        let mut consts = String::new();
        for (scope, desc) in &auth.oauth2.scopes {
            consts.push_str(&as_comment("    ", desc.description.clone(), false)?);
            writeln!(
                &mut consts,
                "    pub const {}: &str = \"{}\";",
                scope_const_name(scope),
                scope
            )?;
        }
        write!(
            &mut self.b,
            "
/// OAuth 2.0 scopes used by this API.
///
/// The client does not fetch access tokens. Use these values to configure
/// the credentials of the HTTP client.
pub mod scopes {{
{consts}}}
"
        )?;
        Ok(())
    }

    /// Generate the client, its builder and the accessors for each service.
    fn client(&mut self, services: &BTreeMap<String, BTreeMap<String, Method>>) -> Result<()> {
        let mut accessors = String::new();
        for service in services.keys() {
            write!(
                &mut accessors,
                "

    /// Returns the methods of the `{}` resource.
    pub fn {}(&self) -> {}Service {{
        {}Service {{
            client: self.inner.clone(),
        }}
    }}",
                service.replace('_', "."),
                field_name(service),
                snake_to_pascal(service),
                snake_to_pascal(service),
            )?;
        }
        let crate_name = format!("google_apis_{}_{}", self.d.name, self.d.version)
            .replace(['-', '.'], "_");
        write!(
            &mut self.b,
            "
/// A builder for [Client].
pub type ClientBuilder = gax::client::ClientBuilder<client::Factory>;

#[doc(hidden)]
pub mod client {{
    pub struct Factory;
    impl gax::client::internal::ClientFactory for Factory {{
        type Client = super::Client;
        fn build(self, config: gax::client::ClientConfig) -> gax::Result<Self::Client> {{
            super::Client::new(config)
        }}
    }}
}}

/// Implements a client for the {title}.
///
/// The client is cheap to clone, all clones share the same HTTP client.
///
/// # Example
/// ```no_run
/// # fn sample() -> gax::Result<()> {{
/// use {crate_name}::Client;
/// let client = Client::builder().build()?;
/// # Ok(()) }}
/// ```
#[derive(Clone, Debug)]
pub struct Client {{
    inner: gax::client::ReqwestClient,
}}

impl Client {{
    /// Returns a builder for [Client].
    pub fn builder() -> ClientBuilder {{
        gax::client::internal::new_builder(client::Factory)
    }}

    fn new(config: gax::client::ClientConfig) -> gax::Result<Self> {{
        let inner = gax::client::ReqwestClient::new(config, DEFAULT_ENDPOINT)?;
        Ok(Self {{ inner }})
    }}{accessors}
}}
",
            title = self.d.title,
        )?;
        Ok(())
    }

    /// Generate the service structs and the call structs of their methods.
    fn services(&mut self, services: &BTreeMap<String, BTreeMap<String, Method>>) -> Result<()> {
        for (service, methods) in services {
            let service_struct = format!("{}Service", snake_to_pascal(service));
            let mut calls = Vec::new();
            for (name, method) in methods {
                tracing::debug!(%service, %name, "generating call");
                calls.push(Call::new(service, name, method, &self.d.parameters)?);
            }
            let factories = calls
                .iter()
                .map(Call::factory)
                .collect::<Result<Vec<_>>>()?
                .join("\n\n");
            write!(
                &mut self.b,
                "
/// Implements the `{}` resource.
#[derive(Clone, Debug)]
pub struct {service_struct} {{
    client: gax::client::ReqwestClient,
}}

impl {service_struct} {{
{factories}
}}
",
                service.replace('_', "."),
            )?;
            for call in &calls {
                self.b.push_str(&call.definition()?);
            }
        }
        Ok(())
    }

    /// Generate all struct schemas used by the API. These are all of the request
    /// and response objects.
    fn schemas(&mut self) -> Result<()> {
        let models = schema_models(&self.d.schemas)?;
        for (name, model) in &models.items {
            let code = match model {
                Model::Struct(s) => struct_model(name, s)?,
                Model::Alias(a) => alias_model(name, a)?,
                Model::Union(u) => union_model(name, u)?,
            };
            self.b.push_str(&code);
        }
        Ok(())
    }
}

/// Recursively build up a mapping from services to all of their different methods.
fn service_mapping(
    resources: &BTreeMap<String, Resource>,
) -> BTreeMap<String, BTreeMap<String, Method>> {
    let mut mapping = BTreeMap::new();
    get_service_names("", resources, &mut mapping);
    mapping
}

fn get_service_names(
    key_prefix: &str,
    resources: &BTreeMap<String, Resource>,
    service_mapping: &mut BTreeMap<String, BTreeMap<String, Method>>,
) {
    for (key, value) in resources {
        let new_key = if key_prefix.is_empty() {
            key.clone()
        } else {
            format!("{key_prefix}_{key}")
        };
        if !value.methods.is_empty() {
            service_mapping.insert(new_key.clone(), value.methods.clone());
        }
        get_service_names(&new_key, &value.resources, service_mapping)
    }
}

/// A parameter of a call.
#[derive(Debug)]
struct CallParam {
    json_name: String,
    field: String,
    rust_type: String,
    doc: Option<String>,
    path: bool,
}

impl CallParam {
    fn new(json_name: &str, p: &Parameter) -> Result<Self> {
        let mut rust_type = rust_type(&p.schema)?;
        if p.repeated {
            if p.is_path() {
                bail!("repeated path parameter `{json_name}` is not supported");
            }
            rust_type = format!("Vec<{rust_type}>");
        }
        Ok(Self {
            json_name: json_name.to_string(),
            field: field_name(json_name),
            rust_type,
            doc: p.schema.description.clone(),
            path: p.is_path(),
        })
    }

    /// The argument type in factories and setters.
    fn arg_type(&self) -> String {
        match self.rust_type.as_str() {
            "String" => "impl Into<String>".to_string(),
            "Vec<String>" => "impl IntoIterator<Item = impl Into<String>>".to_string(),
            t => t.to_string(),
        }
    }

    /// Converts an argument named `arg` into the field type.
    fn arg_value(&self, arg: &str) -> String {
        match self.rust_type.as_str() {
            "String" => format!("{arg}.into()"),
            "Vec<String>" => format!("{arg}.into_iter().map(Into::into).collect()"),
            _ => arg.to_string(),
        }
    }
}

/// The information needed to generate one call struct.
#[derive(Debug)]
struct Call {
    name: String,
    factory: String,
    doc: Option<String>,
    http_method: &'static str,
    path: String,
    required: Vec<CallParam>,
    optional: Vec<CallParam>,
    request: Option<String>,
    response: Option<String>,
    upload: bool,
}

impl Call {
    fn new(
        service: &str,
        name: &str,
        method: &Method,
        globals: &BTreeMap<String, Parameter>,
    ) -> Result<Self> {
        let path = method
            .path
            .clone()
            .ok_or_else(|| anyhow!("missing path for method: {:?}", method.id))?;
        let http_method = http_method(
            method
                .http_method
                .as_deref()
                .ok_or_else(|| anyhow!("missing http_method for method: {:?}", method.id))?,
        )?;

        let mut required = Vec::new();
        for key in &method.parameter_order {
            let p = method
                .parameters
                .get(key)
                .ok_or_else(|| anyhow!("no parameter found for key: {key}"))?;
            required.push(CallParam::new(key, p)?);
        }
        for (key, p) in &method.parameters {
            if (p.required || p.is_path()) && !method.parameter_order.contains(key) {
                required.push(CallParam::new(key, p)?);
            }
        }
        let mut optional = Vec::new();
        for (key, p) in &method.parameters {
            if !p.required && !p.is_path() {
                optional.push(CallParam::new(key, p)?);
            }
        }
        for key in GLOBAL_PARAMETERS {
            if let Some(p) = globals.get(*key) {
                optional.push(CallParam::new(key, p)?);
            }
        }
        optional.sort_by(|a, b| a.field.cmp(&b.field));

        let upload = method.supports_media_upload || method.media_upload.is_some();
        if upload {
            let multipart = method
                .media_upload
                .as_ref()
                .is_some_and(|m| m.protocols.values().any(|p| p.multipart));
            if !multipart {
                bail!("{:?} does not support multipart uploads", method.id);
            }
        }
        let request = match &method.request {
            Some(r) => Some(
                r.schema_ref
                    .clone()
                    .ok_or_else(|| anyhow!("no schema_ref found for request: {:?}", r))?,
            ),
            None => None,
        };
        let response = match &method.response {
            Some(r) => Some(
                r.schema_ref
                    .clone()
                    .ok_or_else(|| anyhow!("no schema_ref for response: {:?}", r))?,
            ),
            None => None,
        };
        Ok(Self {
            name: snake_to_pascal(&format!("{service}_{name}Call")),
            factory: field_name(name),
            doc: method.description.clone(),
            http_method,
            path,
            required,
            optional,
            request,
            response,
            upload,
        })
    }

    fn docs(&self, prefix: &str) -> Result<String> {
        match &self.doc {
            Some(d) => as_comment(prefix, d.clone(), false),
            None => Ok(String::new()),
        }
    }

    /// The service method creating this call.
    fn factory(&self) -> Result<String> {
        let mut args = String::new();
        let mut inits = String::new();
        for p in &self.required {
            write!(&mut args, ", {}: {}", p.field, p.arg_type())?;
            let value = p.arg_value(&p.field);
            if value == p.field {
                write!(&mut inits, "\n            {},", p.field)?;
            } else {
                write!(&mut inits, "\n            {}: {},", p.field, value)?;
            }
        }
        if let Some(request) = &self.request {
            write!(&mut args, ", request: model::{request}")?;
            inits.push_str("\n            request,");
        }
        for p in &self.optional {
            write!(&mut inits, "\n            {}: None,", p.field)?;
        }
        Ok(format!(
            "{docs}    pub fn {factory}(&self{args}) -> {name} {{
        {name} {{
            client: self.client.clone(),{inits}
            options: RequestOptions::default(),
        }}
    }}",
            docs = self.docs("    ")?,
            factory = self.factory,
            name = self.name,
        ))
    }

    /// The call struct and its implementation.
    fn definition(&self) -> Result<String> {
        let mut fields = String::new();
        for p in &self.required {
            write!(&mut fields, "\n    {}: {},", p.field, p.rust_type)?;
        }
        if let Some(request) = &self.request {
            write!(&mut fields, "\n    request: model::{request},")?;
        }
        for p in &self.optional {
            write!(&mut fields, "\n    {}: Option<{}>,", p.field, p.rust_type)?;
        }

        let mut blocks = Vec::new();
        for p in &self.optional {
            let docs = match &p.doc {
                Some(d) => as_comment("    ", d.clone(), false)?,
                None => String::new(),
            };
            blocks.push(format!(
                "{docs}    pub fn {field}(mut self, value: {arg}) -> Self {{
        self.{field} = Some({value});
        self
    }}",
                field = p.field,
                arg = p.arg_type(),
                value = p.arg_value("value"),
            ));
        }

        let mut builder = String::new();
        for p in self.required.iter().filter(|p| p.path) {
            write!(
                &mut builder,
                "\n            .path_param(\"{}\", self.{})",
                p.json_name, p.field
            )?;
        }
        if self.request.is_some() {
            builder.push_str("\n            .body(&self.request)");
        }
        let query = self
            .required
            .iter()
            .filter(|p| !p.path)
            .chain(self.optional.iter());
        for p in query {
            write!(
                &mut builder,
                "\n            .query_param(\"{}\", self.{})",
                p.json_name, p.field
            )?;
        }

        let output = match &self.response {
            Some(r) => format!("model::{r}"),
            None => "()".to_string(),
        };
        let send = if self.response.is_some() {
            "execute()"
        } else {
            "execute_empty()"
        };
        blocks.push(format!(
            "    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {{
        self.client
            .builder({method}, \"{path}\"){builder}
            .with_options(self.options)
    }}",
            method = self.http_method,
            path = self.path,
        ));
        if self.upload {
            blocks.push(format!(
                "    /// Sends the request, uploading `media` as the content.
    pub async fn upload<M: Into<gax::media::Media>>(self, media: M) -> gax::Result<{output}> {{
        self.into_builder().media(media).{send}.await
    }}"
            ));
        } else {
            blocks.push(format!(
                "    /// Sends the request.
    pub async fn execute(self) -> gax::Result<{output}> {{
        self.into_builder().{send}.await
    }}"
            ));
        }

        Ok(format!(
            "
{docs}#[derive(Clone, Debug)]
#[must_use]
pub struct {name} {{
    client: gax::client::ReqwestClient,{fields}
    options: RequestOptions,
}}

impl {name} {{
{body}
}}

impl gax::options::internal::RequestBuilder for {name} {{
    fn request_options(&mut self) -> &mut RequestOptions {{
        &mut self.options
    }}
}}
",
            docs = self.docs("")?,
            name = self.name,
            body = blocks.join("\n\n"),
        ))
    }
}

/// Return the request builder method for the corresponding discovery method.
fn http_method(method: &str) -> Result<&'static str> {
    let m = match method {
        "GET" => "Method::GET",
        "PATCH" => "Method::PATCH",
        "POST" => "Method::POST",
        "PUT" => "Method::PUT",
        "DELETE" => "Method::DELETE",
        _ => bail!("unsupported method: {method}"),
    };
    Ok(m)
}

fn struct_model(name: &str, schema: &StructSchema) -> Result<String> {
    let docs = match &schema.doc {
        Some(d) => as_comment("", d.clone(), false)?,
        None => String::new(),
    };
    let mut fields = String::new();
    for field in &schema.fields {
        if let Some(d) = &field.doc {
            fields.push_str(&as_comment("    ", d.clone(), false)?);
        }
        for attr in field.attributes() {
            writeln!(&mut fields, "    {attr}")?;
        }
        writeln!(&mut fields, "    pub {}: Option<{}>,", field.name, field.field_type)?;
    }
    let serde_as = if schema.uses_serde_as() {
        "#[serde_with::serde_as]\n"
    } else {
        ""
    };
    let mut buf = format!(
        "
{docs}{serde_as}#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = \"camelCase\")]
#[non_exhaustive]
pub struct {name} {{
{fields}}}
"
    );
    if schema.pageable {
        write!(
            &mut buf,
            "
impl gax::paging::PageableResponse for {name} {{
    fn next_page_token(&self) -> Option<&str> {{
        gax::paging::token(&self.next_page_token)
    }}
}}
"
        )?;
    }
    Ok(buf)
}

fn alias_model(name: &str, alias: &AliasSchema) -> Result<String> {
    let docs = match &alias.doc {
        Some(d) => as_comment("", d.clone(), false)?,
        None => String::new(),
    };
    Ok(format!("\n{docs}pub type {name} = {};\n", alias.target))
}

fn union_model(name: &str, union: &UnionSchema) -> Result<String> {
    let docs = match &union.doc {
        Some(d) => as_comment("", d.clone(), false)?,
        None => String::new(),
    };
    let mut variants = String::new();
    let mut conversions = String::new();
    for v in &union.variants {
        if v.name != v.tag {
            writeln!(&mut variants, "    #[serde(rename = \"{}\")]", v.tag)?;
        }
        writeln!(&mut variants, "    {}({}),", v.name, v.schema)?;
        write!(
            &mut conversions,
            "
impl From<{schema}> for {name} {{
    fn from(value: {schema}) -> Self {{
        Self::{variant}(value)
    }}
}}
",
            schema = v.schema,
            variant = v.name,
        )?;
    }
    Ok(format!(
        "
{docs}#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = \"{discriminant}\")]
#[non_exhaustive]
pub enum {name} {{
{variants}}}
{conversions}",
        discriminant = union.discriminant,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::load;

    fn generate(name: &str) -> Result<(String, String)> {
        let mut generator = DocumentGenerator::new(load(name)?);
        let lib = generator.gen_services()?;
        let model = generator.gen_models()?;
        Ok((lib, model))
    }

    fn assert_contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "missing:\n{needle}\n---- in ----\n{haystack}"
        );
    }

    #[test]
    fn genomics_services() -> Result<()> {
        let (lib, _) = generate("genomics-v1beta2.json")?;
        assert!(lib.starts_with("// Copyright 2024 Google LLC"));
        assert_contains(&lib, "// Code generated by discogen. DO NOT EDIT.");
        assert_contains(
            &lib,
            "pub const DEFAULT_ENDPOINT: &str = \"https://www.googleapis.com/genomics/v1beta2/\";",
        );
        assert_contains(
            &lib,
            "pub const GENOMICS: &str = \"https://www.googleapis.com/auth/genomics\";",
        );
        assert_contains(
            &lib,
            "pub fn readgroupsets_coveragebuckets(&self) -> ReadgroupsetsCoveragebucketsService {",
        );
        assert_contains(
            &lib,
            "pub fn get(&self, dataset_id: impl Into<String>) -> DatasetsGetCall {",
        );
        assert_contains(
            &lib,
            "pub fn update(&self, dataset_id: impl Into<String>, request: model::Dataset) -> DatasetsUpdateCall {",
        );
        assert_contains(
            &lib,
            "
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::PUT, \"datasets/{datasetId}\")
            .path_param(\"datasetId\", self.dataset_id)
            .body(&self.request)
            .query_param(\"fields\", self.fields)
            .query_param(\"quotaUser\", self.quota_user)
            .with_options(self.options)
    }",
        );
        assert_contains(&lib, "pub async fn execute(self) -> gax::Result<()> {");
        assert_contains(&lib, "pub fn range_start(mut self, value: i64) -> Self {");
        assert_contains(
            &lib,
            "pub fn page_token(mut self, value: impl Into<String>) -> Self {",
        );
        assert_contains(
            &lib,
            "impl gax::options::internal::RequestBuilder for CallsetsSearchCall {",
        );
        // Resources without methods do not get a service.
        assert!(!lib.contains("pub struct ReadgroupsetsService"), "{lib}");
        Ok(())
    }

    #[test]
    fn genomics_models() -> Result<()> {
        let (_, model) = generate("genomics-v1beta2.json")?;
        assert_contains(
            &model,
            "#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = \"camelCase\")]
#[non_exhaustive]
pub struct Dataset {",
        );
        assert_contains(
            &model,
            "    #[serde(skip_serializing_if = \"Option::is_none\")]
    #[serde_as(as = \"Option<serde_with::DisplayFromStr>\")]
    pub project_number: Option<i64>,",
        );
        assert_contains(
            &model,
            "impl gax::paging::PageableResponse for ListDatasetsResponse {",
        );
        assert_contains(
            &model,
            "pub info: Option<std::collections::HashMap<String, Vec<String>>>,",
        );
        Ok(())
    }

    #[test]
    fn mapsengine_services() -> Result<()> {
        let (lib, _) = generate("mapsengine-v1.json")?;
        assert_contains(
            &lib,
            "pub fn insert(&self, id: impl Into<String>, filename: impl Into<String>) -> RastersFilesInsertCall {",
        );
        assert_contains(
            &lib,
            "pub async fn upload<M: Into<gax::media::Media>>(self, media: M) -> gax::Result<()> {
        self.into_builder().media(media).execute_empty().await
    }",
        );
        assert_contains(
            &lib,
            ".builder(Method::POST, \"rasters/{id}/files\")
            .path_param(\"id\", self.id)
            .query_param(\"filename\", self.filename)",
        );
        assert_contains(&lib, "pub fn where_(mut self, value: impl Into<String>) -> Self {");
        assert_contains(&lib, "pub fn max_results(mut self, value: u32) -> Self {");
        assert_contains(
            &lib,
            "pub fn batch_insert(&self, id: impl Into<String>, request: model::FeaturesBatchInsertRequest) -> TablesFeaturesBatchInsertCall {",
        );
        Ok(())
    }

    #[test]
    fn mapsengine_models() -> Result<()> {
        let (_, model) = generate("mapsengine-v1.json")?;
        assert_contains(
            &model,
            "#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = \"type\")]
#[non_exhaustive]
pub enum MapItem {
    #[serde(rename = \"folder\")]
    Folder(MapFolder),
    #[serde(rename = \"kmlLink\")]
    KmlLink(MapKmlLink),
    #[serde(rename = \"layer\")]
    Layer(MapLayer),
}",
        );
        assert_contains(
            &model,
            "impl From<GeoJsonPoint> for GeoJsonGeometry {
    fn from(value: GeoJsonPoint) -> Self {
        Self::Point(value)
    }
}",
        );
        assert_contains(&model, "pub type GeoJsonPosition = Vec<f64>;");
        assert_contains(&model, "pub type MapContents = Vec<MapItem>;");
        assert_contains(
            &model,
            "    #[serde(rename = \"type\")]
    #[serde(skip_serializing_if = \"Option::is_none\")]
    pub type_: Option<String>,",
        );
        Ok(())
    }

    #[test]
    fn unsupported_method() {
        assert!(http_method("TRACE").is_err());
    }
}
