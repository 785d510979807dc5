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

/// A call set is a collection of variant calls, typically for one
/// sample. It belongs to a variant set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CallSet {
    /// The date this call set was created in milliseconds from the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub created: Option<i64>,
    /// The Google generated ID of the call set, immutable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// A map of additional call set information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<std::collections::HashMap<String, Vec<String>>>,
    /// The call set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The sample ID this call set corresponds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
    /// The IDs of the variant sets this call set belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_set_ids: Option<Vec<String>>,
}

/// A bucket over which read coverage has been precomputed. A bucket
/// corresponds to a single range of the reference sequence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CoverageBucket {
    /// The average number of reads which are aligned to each individual
    /// reference base in this bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_coverage: Option<f32>,
    /// The genomic coordinate range spanned by this bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// A Dataset is a collection of genomic data.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dataset {
    /// The Google generated ID of the dataset, immutable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Flag indicating whether or not a dataset is publicly viewable. If a
    /// dataset is not public, it inherits viewing permissions from its
    /// project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// The dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Google Developers Console project number that this dataset
    /// belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub project_number: Option<i64>,
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCoverageBucketsResponse {
    /// The length of each coverage bucket in base pairs. Note that buckets
    /// at the end of a reference sequence may be shorter.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub bucket_width: Option<i64>,
    /// The coverage buckets. The list of buckets is sparse; a bucket with 0
    /// overlapping reads is not returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_buckets: Option<Vec<CoverageBucket>>,
    /// The continuation token, which is used to page through large result
    /// sets. Provide this value in a subsequent request to return the next
    /// page of results. This field will be empty if there aren't any
    /// additional results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl gax::paging::PageableResponse for ListCoverageBucketsResponse {
    fn next_page_token(&self) -> Option<&str> {
        gax::paging::token(&self.next_page_token)
    }
}

/// The dataset list response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatasetsResponse {
    /// The list of matching Datasets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<Dataset>>,
    /// The continuation token, which is used to page through large result
    /// sets. Provide this value in a subsequent request to return the next
    /// page of results. This field will be empty if there aren't any
    /// additional results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl gax::paging::PageableResponse for ListDatasetsResponse {
    fn next_page_token(&self) -> Option<&str> {
        gax::paging::token(&self.next_page_token)
    }
}

/// A 0-based half-open genomic coordinate range over a reference
/// sequence.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Range {
    /// The end position of the range on the reference, 0-based exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub end: Option<i64>,
    /// The reference sequence name, for example chr1, 1, or chrX.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// The start position of the range on the reference, 0-based inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub start: Option<i64>,
}

/// The call set search request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchCallSetsRequest {
    /// Only return call sets for which a substring of the name matches this
    /// string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The maximum number of call sets to return. If unspecified, defaults
    /// to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// The continuation token, which is used to page through large result
    /// sets. To get the next page of results, set this parameter to the
    /// value of nextPageToken from the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// Restrict the query to call sets within the given variant sets. At
    /// least one ID must be provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_set_ids: Option<Vec<String>>,
}

/// The call set search response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchCallSetsResponse {
    /// The list of matching call sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_sets: Option<Vec<CallSet>>,
    /// The continuation token, which is used to page through large result
    /// sets. Provide this value in a subsequent request to return the next
    /// page of results. This field will be empty if there aren't any
    /// additional results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl gax::paging::PageableResponse for SearchCallSetsResponse {
    fn next_page_token(&self) -> Option<&str> {
        gax::paging::token(&self.next_page_token)
    }
}
