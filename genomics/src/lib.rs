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

//! Google APIs client library for Rust - Genomics API (v1beta2).
//!
//! Provides access to Genomics data.
//!
//! See <https://developers.google.com/genomics/v1beta2/reference> for the service documentation.

use gax::options::RequestOptions;
use gax::request::{Method, RequestBuilder};

pub mod model;

/// The default endpoint, including the service path.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/genomics/v1beta2/";

/// OAuth 2.0 scopes used by this API.
///
/// The client does not fetch access tokens. Use these values to configure
/// the credentials of the HTTP client.
pub mod scopes {
    /// View and manage your data in Google BigQuery
    pub const BIGQUERY: &str = "https://www.googleapis.com/auth/bigquery";
    /// Manage your data in Google Cloud Storage
    pub const DEVSTORAGE_READ_WRITE: &str = "https://www.googleapis.com/auth/devstorage.read_write";
    /// View and manage Genomics data
    pub const GENOMICS: &str = "https://www.googleapis.com/auth/genomics";
    /// View Genomics data
    pub const GENOMICS_READONLY: &str = "https://www.googleapis.com/auth/genomics.readonly";
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

/// Implements a client for the Genomics API.
///
/// The client is cheap to clone, all clones share the same HTTP client.
///
/// # Example
/// ```no_run
/// # fn sample() -> gax::Result<()> {
/// use google_apis_genomics_v1beta2::Client;
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

    /// Returns the methods of the `callsets` resource.
    pub fn callsets(&self) -> CallsetsService {
        CallsetsService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `datasets` resource.
    pub fn datasets(&self) -> DatasetsService {
        DatasetsService {
            client: self.inner.clone(),
        }
    }

    /// Returns the methods of the `readgroupsets.coveragebuckets` resource.
    pub fn readgroupsets_coveragebuckets(&self) -> ReadgroupsetsCoveragebucketsService {
        ReadgroupsetsCoveragebucketsService {
            client: self.inner.clone(),
        }
    }
}

/// Implements the `callsets` resource.
#[derive(Clone, Debug)]
pub struct CallsetsService {
    client: gax::client::ReqwestClient,
}

impl CallsetsService {
    /// Creates a new call set.
    pub fn create(&self, request: model::CallSet) -> CallsetsCreateCall {
        CallsetsCreateCall {
            client: self.client.clone(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Deletes a call set.
    pub fn delete(&self, call_set_id: impl Into<String>) -> CallsetsDeleteCall {
        CallsetsDeleteCall {
            client: self.client.clone(),
            call_set_id: call_set_id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Gets a call set by ID.
    pub fn get(&self, call_set_id: impl Into<String>) -> CallsetsGetCall {
        CallsetsGetCall {
            client: self.client.clone(),
            call_set_id: call_set_id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Updates a call set. This method supports patch semantics.
    pub fn patch(
        &self,
        call_set_id: impl Into<String>,
        request: model::CallSet,
    ) -> CallsetsPatchCall {
        CallsetsPatchCall {
            client: self.client.clone(),
            call_set_id: call_set_id.into(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Gets a list of call sets matching the criteria.
    pub fn search(&self, request: model::SearchCallSetsRequest) -> CallsetsSearchCall {
        CallsetsSearchCall {
            client: self.client.clone(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }
}

/// Creates a new call set.
#[derive(Clone, Debug)]
#[must_use]
pub struct CallsetsCreateCall {
    client: gax::client::ReqwestClient,
    request: model::CallSet,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl CallsetsCreateCall {
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
            .builder(Method::POST, "callsets")
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::CallSet> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for CallsetsCreateCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Deletes a call set.
#[derive(Clone, Debug)]
#[must_use]
pub struct CallsetsDeleteCall {
    client: gax::client::ReqwestClient,
    call_set_id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl CallsetsDeleteCall {
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
            .builder(Method::DELETE, "callsets/{callSetId}")
            .path_param("callSetId", self.call_set_id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<()> {
        self.into_builder().execute_empty().await
    }
}

impl gax::options::internal::RequestBuilder for CallsetsDeleteCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Gets a call set by ID.
#[derive(Clone, Debug)]
#[must_use]
pub struct CallsetsGetCall {
    client: gax::client::ReqwestClient,
    call_set_id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl CallsetsGetCall {
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
            .builder(Method::GET, "callsets/{callSetId}")
            .path_param("callSetId", self.call_set_id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::CallSet> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for CallsetsGetCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Updates a call set. This method supports patch semantics.
#[derive(Clone, Debug)]
#[must_use]
pub struct CallsetsPatchCall {
    client: gax::client::ReqwestClient,
    call_set_id: String,
    request: model::CallSet,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl CallsetsPatchCall {
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
            .builder(Method::PATCH, "callsets/{callSetId}")
            .path_param("callSetId", self.call_set_id)
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::CallSet> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for CallsetsPatchCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Gets a list of call sets matching the criteria.
#[derive(Clone, Debug)]
#[must_use]
pub struct CallsetsSearchCall {
    client: gax::client::ReqwestClient,
    request: model::SearchCallSetsRequest,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl CallsetsSearchCall {
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
            .builder(Method::POST, "callsets/search")
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::SearchCallSetsResponse> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for CallsetsSearchCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `datasets` resource.
#[derive(Clone, Debug)]
pub struct DatasetsService {
    client: gax::client::ReqwestClient,
}

impl DatasetsService {
    /// Creates a new dataset.
    pub fn create(&self, request: model::Dataset) -> DatasetsCreateCall {
        DatasetsCreateCall {
            client: self.client.clone(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Deletes a dataset.
    pub fn delete(&self, dataset_id: impl Into<String>) -> DatasetsDeleteCall {
        DatasetsDeleteCall {
            client: self.client.clone(),
            dataset_id: dataset_id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Gets a dataset by ID.
    pub fn get(&self, dataset_id: impl Into<String>) -> DatasetsGetCall {
        DatasetsGetCall {
            client: self.client.clone(),
            dataset_id: dataset_id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Lists datasets within a project.
    pub fn list(&self) -> DatasetsListCall {
        DatasetsListCall {
            client: self.client.clone(),
            fields: None,
            page_size: None,
            page_token: None,
            project_number: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Updates a dataset. This method supports patch semantics.
    pub fn patch(
        &self,
        dataset_id: impl Into<String>,
        request: model::Dataset,
    ) -> DatasetsPatchCall {
        DatasetsPatchCall {
            client: self.client.clone(),
            dataset_id: dataset_id.into(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Undeletes a dataset by restoring a dataset which was deleted via this
    /// API. This operation is only possible for a week after the deletion
    /// occurred.
    pub fn undelete(&self, dataset_id: impl Into<String>) -> DatasetsUndeleteCall {
        DatasetsUndeleteCall {
            client: self.client.clone(),
            dataset_id: dataset_id.into(),
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }

    /// Updates a dataset.
    pub fn update(
        &self,
        dataset_id: impl Into<String>,
        request: model::Dataset,
    ) -> DatasetsUpdateCall {
        DatasetsUpdateCall {
            client: self.client.clone(),
            dataset_id: dataset_id.into(),
            request,
            fields: None,
            quota_user: None,
            options: RequestOptions::default(),
        }
    }
}

/// Creates a new dataset.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsCreateCall {
    client: gax::client::ReqwestClient,
    request: model::Dataset,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsCreateCall {
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
            .builder(Method::POST, "datasets")
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Dataset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsCreateCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Deletes a dataset.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsDeleteCall {
    client: gax::client::ReqwestClient,
    dataset_id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsDeleteCall {
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
            .builder(Method::DELETE, "datasets/{datasetId}")
            .path_param("datasetId", self.dataset_id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<()> {
        self.into_builder().execute_empty().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsDeleteCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Gets a dataset by ID.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsGetCall {
    client: gax::client::ReqwestClient,
    dataset_id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsGetCall {
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
            .builder(Method::GET, "datasets/{datasetId}")
            .path_param("datasetId", self.dataset_id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Dataset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsGetCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Lists datasets within a project.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsListCall {
    client: gax::client::ReqwestClient,
    fields: Option<String>,
    page_size: Option<i32>,
    page_token: Option<String>,
    project_number: Option<i64>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsListCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// The maximum number of results returned by this request. If
    /// unspecified, defaults to 50.
    pub fn page_size(mut self, value: i32) -> Self {
        self.page_size = Some(value);
        self
    }

    /// The continuation token, which is used to page through large result
    /// sets. To get the next page of results, set this parameter to the
    /// value of nextPageToken from the previous response.
    pub fn page_token(mut self, value: impl Into<String>) -> Self {
        self.page_token = Some(value.into());
        self
    }

    /// Only return datasets which belong to this Google Developers Console
    /// project.
    pub fn project_number(mut self, value: i64) -> Self {
        self.project_number = Some(value);
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
            .builder(Method::GET, "datasets")
            .query_param("fields", self.fields)
            .query_param("pageSize", self.page_size)
            .query_param("pageToken", self.page_token)
            .query_param("projectNumber", self.project_number)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::ListDatasetsResponse> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsListCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Updates a dataset. This method supports patch semantics.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsPatchCall {
    client: gax::client::ReqwestClient,
    dataset_id: String,
    request: model::Dataset,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsPatchCall {
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
            .builder(Method::PATCH, "datasets/{datasetId}")
            .path_param("datasetId", self.dataset_id)
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Dataset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsPatchCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Undeletes a dataset by restoring a dataset which was deleted via this
/// API. This operation is only possible for a week after the deletion
/// occurred.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsUndeleteCall {
    client: gax::client::ReqwestClient,
    dataset_id: String,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsUndeleteCall {
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
            .builder(Method::POST, "datasets/{datasetId}/undelete")
            .path_param("datasetId", self.dataset_id)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Dataset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsUndeleteCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Updates a dataset.
#[derive(Clone, Debug)]
#[must_use]
pub struct DatasetsUpdateCall {
    client: gax::client::ReqwestClient,
    dataset_id: String,
    request: model::Dataset,
    fields: Option<String>,
    quota_user: Option<String>,
    options: RequestOptions,
}

impl DatasetsUpdateCall {
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
            .builder(Method::PUT, "datasets/{datasetId}")
            .path_param("datasetId", self.dataset_id)
            .body(&self.request)
            .query_param("fields", self.fields)
            .query_param("quotaUser", self.quota_user)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::Dataset> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for DatasetsUpdateCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// Implements the `readgroupsets.coveragebuckets` resource.
#[derive(Clone, Debug)]
pub struct ReadgroupsetsCoveragebucketsService {
    client: gax::client::ReqwestClient,
}

impl ReadgroupsetsCoveragebucketsService {
    /// Lists fixed width coverage buckets for a read group set, each of
    /// which correspond to a range of a reference sequence. Each bucket
    /// summarizes coverage information across its corresponding genomic
    /// range.
    pub fn list(
        &self,
        read_group_set_id: impl Into<String>,
    ) -> ReadgroupsetsCoveragebucketsListCall {
        ReadgroupsetsCoveragebucketsListCall {
            client: self.client.clone(),
            read_group_set_id: read_group_set_id.into(),
            fields: None,
            page_size: None,
            page_token: None,
            quota_user: None,
            range_end: None,
            range_reference_name: None,
            range_start: None,
            target_bucket_width: None,
            options: RequestOptions::default(),
        }
    }
}

/// Lists fixed width coverage buckets for a read group set, each of
/// which correspond to a range of a reference sequence. Each bucket
/// summarizes coverage information across its corresponding genomic
/// range.
#[derive(Clone, Debug)]
#[must_use]
pub struct ReadgroupsetsCoveragebucketsListCall {
    client: gax::client::ReqwestClient,
    read_group_set_id: String,
    fields: Option<String>,
    page_size: Option<i32>,
    page_token: Option<String>,
    quota_user: Option<String>,
    range_end: Option<i64>,
    range_reference_name: Option<String>,
    range_start: Option<i64>,
    target_bucket_width: Option<i64>,
    options: RequestOptions,
}

impl ReadgroupsetsCoveragebucketsListCall {
    /// Selector specifying which fields to include in a partial response.
    pub fn fields(mut self, value: impl Into<String>) -> Self {
        self.fields = Some(value.into());
        self
    }

    /// The maximum number of results to return in a single page. If
    /// unspecified, defaults to 1024. The maximum value is 2048.
    pub fn page_size(mut self, value: i32) -> Self {
        self.page_size = Some(value);
        self
    }

    /// The continuation token, which is used to page through large result
    /// sets. To get the next page of results, set this parameter to the
    /// value of nextPageToken from the previous response.
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

    /// The end position of the range on the reference, 0-based exclusive.
    pub fn range_end(mut self, value: i64) -> Self {
        self.range_end = Some(value);
        self
    }

    /// The reference sequence name, for example chr1, 1, or chrX.
    pub fn range_reference_name(mut self, value: impl Into<String>) -> Self {
        self.range_reference_name = Some(value.into());
        self
    }

    /// The start position of the range on the reference, 0-based inclusive.
    pub fn range_start(mut self, value: i64) -> Self {
        self.range_start = Some(value);
        self
    }

    /// The desired width of each reported coverage bucket in base pairs.
    /// This will be rounded down to the nearest precomputed bucket width;
    /// the value of which is returned as bucketWidth in the response.
    pub fn target_bucket_width(mut self, value: i64) -> Self {
        self.target_bucket_width = Some(value);
        self
    }

    /// Returns the request builder for this call.
    pub fn into_builder(self) -> RequestBuilder {
        self.client
            .builder(
                Method::GET,
                "readgroupsets/{readGroupSetId}/coveragebuckets",
            )
            .path_param("readGroupSetId", self.read_group_set_id)
            .query_param("fields", self.fields)
            .query_param("pageSize", self.page_size)
            .query_param("pageToken", self.page_token)
            .query_param("quotaUser", self.quota_user)
            .query_param("range.end", self.range_end)
            .query_param("range.referenceName", self.range_reference_name)
            .query_param("range.start", self.range_start)
            .query_param("targetBucketWidth", self.target_bucket_width)
            .with_options(self.options)
    }

    /// Sends the request.
    pub async fn execute(self) -> gax::Result<model::ListCoverageBucketsResponse> {
        self.into_builder().execute().await
    }
}

impl gax::options::internal::RequestBuilder for ReadgroupsetsCoveragebucketsListCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
