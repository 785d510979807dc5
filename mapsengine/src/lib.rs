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

//! Google APIs client library for Rust - Google Maps Engine API (v1).
//!
//! The Google Maps Engine API allows developers to store and query
//! geospatial vector and raster data.
//!
//! See <https://developers.google.com/maps-engine/> for the service documentation.

use gax::options::RequestOptions;
use gax::request::{Method, RequestBuilder};

pub mod model;

/// The default endpoint, including the service path.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/mapsengine/v1/";

/// OAuth 2.0 scopes used by this API.
///
/// The client does not fetch access tokens. Use these values to configure
/// the credentials of the HTTP client.
pub mod scopes {
    /// View and manage your Google My Maps data
    pub const MAPSENGINE: &str = "https://www.googleapis.com/auth/mapsengine";
    /// View your Google My Maps data
    pub const MAPSENGINE_READONLY: &str = "https://www.googleapis.com/auth/mapsengine.readonly";
}

/// A builder for [Client].
pub type ClientBuilder = gax::client::ClientBuilder<client::Factory>;

#[doc(hidden)]
pub mod client {
    pub struct Factory;
    impl gax::client::internal::ClientFactory for Factory {
        type Client = super::Client;
        fn build(self, config: gax::client::ClientConfig) -> gax::Result<Self::Client> {
            super::Client::new(config)
        }
    }
}

/// Implements a client for the Google Maps Engine API.
///
/// The client is cheap to clone, all clones share the same HTTP client.
///
/// # Example
/// ```no_run
/// # fn sample() -> gax::Result<()> {
/// use google_apis_mapsengine_v1::Client;
/// let client = Client::builder().build()?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: gax::client::ReqwestClient,
}

impl Client {
    /// Returns a builder for [Client].
    pub fn builder() -> ClientBuilder {
        gax::client::internal::new_builder(client::Factory)
    }

    fn new(config: gax::client::ClientConfig) -> gax::Result<Self> {
        let inner = gax::client::ReqwestClient::new(config, DEFAULT_ENDPOINT)?;
        Ok(Self { inner })
    }

    /// Returns the methods of the `assets` resource.
    pub fn assets(&self) -> AssetsService {
        AssetsService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `maps` resource.
    pub fn maps(&self) -> MapsService {
        MapsService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `rasters.files` resource.
    pub fn rasters_files(&self) -> RastersFilesService {
        RastersFilesService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `tables` resource.
    pub fn tables(&self) -> TablesService {
        TablesService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `tables.features` resource.
    pub fn tables_features(&self) -> TablesFeaturesService {
        TablesFeaturesService {
            client: self.inner.clone(),
        }
    }
}

/// Implements the `assets` resource.
#[derive(Clone, Debug)]
pub struct AssetsService {
    client: gax::client::ReqwestClient,
}

impl AssetsService {
    /// Return metadata for a particular asset.
    pub fn get(&self, id: impl Into<String>) -> AssetsGetCall {
        AssetsGetCall {
            client: self.client.clone(),
            id: id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Return all assets readable by the current user.
    pub fn list(&self) -> AssetsListCall {
        AssetsListCall {
            client: self.client.clone(),
            bbox: None,
            creator_email: None,
            fields: None,
            max_results: None,
            page_token: None,
            project_id: None,
            quota_user: None,
            search: None,
            tags: None,
            type_: None,
            options: RequestOptions::default(),
        }
    }
}

/// Return metadata for a particular asset.
#[derive(Clone, Debug)]
#[must_use]
pub struct AssetsGetCall {
    client: gax::client::ReqwestClient,
    id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl AssetsGetCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::GET, "assets/{id}")
            .path_param("id", self.id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Asset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for AssetsGetCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Return all assets readable by the current user.
#[derive(Clone, Debug)]
#[must_use]
pub struct AssetsListCall {
    client: gax::client::ReqwestClient,
    bbox: Option<String>,
    creator_email: Option<String>,
    fields: Option<String>,
    max_results: Option<u32>,
    page_token: Option<String>,
    project_id: Option<String>,
    quota_user: Option<String>,
    search: Option<String>,
    tags: Option<String>,
    type_: Option<String>,
    options: RequestOptions,
}

impl AssetsListCall {
    /// A bounding box, expressed as "west,south,east,north". If set, only
    /// assets which intersect this bounding box will be returned.
    pub fn bbox(mut self, value: impl Into<String>) -> Self {
        self.bbox = Some(value.into());
        self
    }

    /// An email address representing a user. Returned assets that have been
    /// created by the user associated with the provided email address.
    pub fn creator_email(mut self, value: impl Into<String>) -> Self {
        self.creator_email = Some(value.into());
        self
    }

    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// The maximum number of items to include in a single response page. The
    /// maximum supported value is 100.
    pub fn max_results(mut self, value: u32) -> Self {
        self.max_results = Some(value);
        self
    }

    /// The continuation token, used to page through large result sets. To
    /// get the next page of results, set this parameter to the value of
    /// nextPageToken from the previous response.
    pub fn page_token(mut self, value: impl Into<String>) -> Self {
        self.page_token = Some(value.into());
        self
    }

    /// The ID of a Maps Engine project, used to filter the response. To list
    /// all available projects with their IDs, send a Projects: list request.
    /// You can also find your project ID as the value of the
    /// DashboardPlace:cid URL parameter when signed in to
    /// mapsengine.google.com.
    pub fn project_id(mut self, value: impl Into<String>) -> Self {
        self.project_id = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// An unstructured search string used to filter the set of results based
    /// on asset metadata.
    pub fn search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }

    /// A comma separated list of tags. Returned assets will contain all the
    /// tags from the list.
    pub fn tags(mut self, value: impl Into<String>) -> Self {
        self.tags = Some(value.into());
        self
    }

    /// A comma separated list of asset types. Returned assets will have one
    /// of the types from the provided list. Supported values are 'map',
    /// 'layer', 'rasterCollection' and 'table'.
    pub fn type_(mut self, value: impl Into<String>) -> Self {
        self.type_ = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::GET, "assets")
            .query_param("bbox", self.bbox)
            .query_param("creatorEmail", self.creator_email)
            .query_param("fields", self.fields)
            .query_param("maxResults", self.max_results)
            .query_param("pageToken", self.page_token)
            .query_param("projectId", self.project_id)
            .query_param("quotaUser", self.quota_user)
            .query_param("search", self.search)
            .query_param("tags", self.tags)
            .query_param("type", self.type_)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::AssetsListResponse> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for AssetsListCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `maps` resource.
#[derive(Clone, Debug)]
pub struct MapsService {
    client: gax::client::ReqwestClient,
}

impl MapsService {
    /// Return metadata for a particular map.
    pub fn get(&self, id: impl Into<String>) -> MapsGetCall {
        MapsGetCall {
            client: self.client.clone(),
            id: id.into(),
            fields: None,
            quota_user: None,
            version: None,
            options: RequestOptions::default(),
        }
    }
}

/// Return metadata for a particular map.
#[derive(Clone, Debug)]
#[must_use]
pub struct MapsGetCall {
    client: gax::client::ReqwestClient,
    id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    version: Option<String>,
    options: RequestOptions,
}

impl MapsGetCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// Deprecated: The version parameter indicates which version of the map
    /// should be returned.
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::GET, "maps/{id}")
            .path_param("id", self.id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .query_param("version", self.version)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Map> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for MapsGetCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `rasters.files` resource.
#[derive(Clone, Debug)]
pub struct RastersFilesService {
    client: gax::client::ReqwestClient,
}

impl RastersFilesService {
    /// Upload a file to a raster asset.
    pub fn insert(
        &self,
        id: impl Into<String>,
        filename: impl Into<String>,
    ) -> RastersFilesInsertCall {
        RastersFilesInsertCall {
            client: self.client.clone(),
            id: id.into(),
            filename: filename.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }
}

/// Upload a file to a raster asset.
#[derive(Clone, Debug)]
#[must_use]
pub struct RastersFilesInsertCall {
    client: gax::client::ReqwestClient,
    id: String,
    filename: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl RastersFilesInsertCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::POST, "rasters/{id}/files")
            .path_param("id", self.id)
            .query_param("filename", self.filename)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request, uploading `media` as the content.
    pub async fn upload<M: Into<gax::media::Media>>(self, media: M) -> gax::Result<()> {
        self.into_builder().media(media).execute_empty().await
    }
}

impl gax::options::internal::RequestBuilder for RastersFilesInsertCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `tables` resource.
#[derive(Clone, Debug)]
pub struct TablesService {
    client: gax::client::ReqwestClient,
}

impl TablesService {
    /// Create a table asset.
    pub fn create(&self, request: model::Table) -> TablesCreateCall {
        TablesCreateCall {
            client: self.client.clone(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Return metadata for a particular table, including the schema.
    pub fn get(&self, id: impl Into<String>) -> TablesGetCall {
        TablesGetCall {
            client: self.client.clone(),
            id: id.into(),
            fields: None,
            quota_user: None,
            version: None,
            options: RequestOptions::default(),
        }
    }
}

/// Create a table asset.
#[derive(Clone, Debug)]
#[must_use]
pub struct TablesCreateCall {
    client: gax::client::ReqwestClient,
    request: model::Table,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl TablesCreateCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::POST, "tables")
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Table> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for TablesCreateCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Return metadata for a particular table, including the schema.
#[derive(Clone, Debug)]
#[must_use]
pub struct TablesGetCall {
    client: gax::client::ReqwestClient,
    id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    version: Option<String>,
    options: RequestOptions,
}

impl TablesGetCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::GET, "tables/{id}")
            .path_param("id", self.id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .query_param("version", self.version)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Table> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for TablesGetCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `tables.features` resource.
#[derive(Clone, Debug)]
pub struct TablesFeaturesService {
    client: gax::client::ReqwestClient,
}

impl TablesFeaturesService {
    /// Append features to an existing table. A single batchInsert request
    /// can create up to 50 features.
    pub fn batch_insert(
        &self,
        id: impl Into<String>,
        request: model::FeaturesBatchInsertRequest,
    ) -> TablesFeaturesBatchInsertCall {
        TablesFeaturesBatchInsertCall {
            client: self.client.clone(),
            id: id.into(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Return all features readable by the current user.
    pub fn list(&self, id: impl Into<String>) -> TablesFeaturesListCall {
        TablesFeaturesListCall {
            client: self.client.clone(),
            id: id.into(),
            fields: None,
            include: None,
            intersects: None,
            limit: None,
            max_results: None,
            order_by: None,
            page_token: None,
            quota_user: None,
            select: None,
            version: None,
            where_: None,
            options: RequestOptions::default(),
        }
    }
}

/// Append features to an existing table. A single batchInsert request
/// can create up to 50 features.
#[derive(Clone, Debug)]
#[must_use]
pub struct TablesFeaturesBatchInsertCall {
    client: gax::client::ReqwestClient,
    id: String,
    request: model::FeaturesBatchInsertRequest,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl TablesFeaturesBatchInsertCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::POST, "tables/{id}/features/batchInsert")
            .path_param("id", self.id)
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<()> {
        self.into_builder().execute_empty().await
    }
}

impl gax::options::internal::RequestBuilder for TablesFeaturesBatchInsertCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Return all features readable by the current user.
#[derive(Clone, Debug)]
#[must_use]
pub struct TablesFeaturesListCall {
    client: gax::client::ReqwestClient,
    id: String,
    fields: Option<String>,
    include: Option<String>,
    intersects: Option<String>,
    limit: Option<u32>,
    max_results: Option<u32>,
    order_by: Option<String>,
    page_token: Option<String>,
    quota_user: Option<String>,
    select: Option<String>,
    version: Option<String>,
    where_: Option<String>,
    options: RequestOptions,
}

impl TablesFeaturesListCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// A comma separated list of optional data to include. Optional data
    /// available: schema.
    pub fn include(mut self, value: impl Into<String>) -> Self {
        self.include = Some(value.into());
        self
    }

    /// A geometry literal that specifies the spatial restriction of the
    /// query.
    pub fn intersects(mut self, value: impl Into<String>) -> Self {
        self.intersects = Some(value.into());
        self
    }

    /// The total number of features to return from the query, irrespective
    /// of the number of pages.
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    /// The maximum number of items to include in the response, used for
    /// paging. The maximum supported value is 1000.
    pub fn max_results(mut self, value: u32) -> Self {
        self.max_results = Some(value);
        self
    }

    /// An SQL-like order by clause used to sort results. If this parameter
    /// is not included, the order of features is undefined.
    pub fn order_by(mut self, value: impl Into<String>) -> Self {
        self.order_by = Some(value.into());
        self
    }

    /// The continuation token, used to page through large result sets. To
    /// get the next page of results, set this parameter to the value of
    /// nextPageToken from the previous response.
    pub fn page_token(mut self, value: impl Into<String>) -> Self {
        self.page_token = Some(value.into());
        self
    }

    /// Available to use for quota purposes for server-side applications. Can
    /// be any arbitrary string assigned to a user, but should not exceed 40
    /// characters. Overrides userIp if both are provided.
    pub fn quota_user(mut self, value: impl Into<String>) -> Self {
        self.quota_user = Some(value.into());
        self
    }

    /// A SQL-like projection clause used to specify returned properties. If
    /// this parameter is not included, all properties are returned.
    pub fn select(mut self, value: impl Into<String>) -> Self {
        self.select = Some(value.into());
        self
    }

    /// The table version to access. See Accessing Public Data for
    /// information.
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// An SQL-like predicate used to filter results.
    pub fn where_(mut self, value: impl Into<String>) -> Self {
        self.where_ = Some(value.into());
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(Method::GET, "tables/{id}/features")
            .path_param("id", self.id)
            .query_param("fields", self.fields)
            .query_param("include", self.include)
            .query_param("intersects", self.intersects)
            .query_param("limit", self.limit)
            .query_param("maxResults", self.max_results)
            .query_param("orderBy", self.order_by)
            .query_param("pageToken", self.page_token)
            .query_param("quotaUser", self.quota_user)
            .query_param("select", self.select)
            .query_param("version", self.version)
            .query_param("where", self.where_)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::FeaturesListResponse> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for TablesFeaturesListCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
