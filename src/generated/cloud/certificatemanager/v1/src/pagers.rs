// Copyright 2025 Google LLC
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
// Code generated by sidekick. DO NOT EDIT.

//! Pagers for the list methods of the Certificate Manager API.
//!
//! Each list method has a blocking pager, returned by
//! [blocking::CertificateManager][crate::blocking::CertificateManager], and an
//! async pager, returned by
//! [client::CertificateManager][crate::client::CertificateManager]. They are
//! the same generic types from `gax::paginator`, instantiated for each
//! request and response pair.

use crate::model::*;

/// Iterates over the [certificates][ListCertificatesResponse::certificates] of a `ListCertificates`
/// call, fetching pages as needed.
pub type ListCertificatesPager =
    gax::paginator::Pager<ListCertificatesRequest, ListCertificatesResponse>;

/// The async version of [ListCertificatesPager].
pub type ListCertificatesAsyncPager =
    gax::paginator::AsyncPager<ListCertificatesRequest, ListCertificatesResponse>;

/// Iterates over the [certificate maps][ListCertificateMapsResponse::certificate_maps] of a `ListCertificateMaps`
/// call, fetching pages as needed.
pub type ListCertificateMapsPager =
    gax::paginator::Pager<ListCertificateMapsRequest, ListCertificateMapsResponse>;

/// The async version of [ListCertificateMapsPager].
pub type ListCertificateMapsAsyncPager =
    gax::paginator::AsyncPager<ListCertificateMapsRequest, ListCertificateMapsResponse>;

/// Iterates over the [certificate map entries][ListCertificateMapEntriesResponse::certificate_map_entries] of a `ListCertificateMapEntries`
/// call, fetching pages as needed.
pub type ListCertificateMapEntriesPager =
    gax::paginator::Pager<ListCertificateMapEntriesRequest, ListCertificateMapEntriesResponse>;

/// The async version of [ListCertificateMapEntriesPager].
pub type ListCertificateMapEntriesAsyncPager =
    gax::paginator::AsyncPager<ListCertificateMapEntriesRequest, ListCertificateMapEntriesResponse>;

/// Iterates over the [DNS authorizations][ListDnsAuthorizationsResponse::dns_authorizations] of a `ListDnsAuthorizations`
/// call, fetching pages as needed.
pub type ListDnsAuthorizationsPager =
    gax::paginator::Pager<ListDnsAuthorizationsRequest, ListDnsAuthorizationsResponse>;

/// The async version of [ListDnsAuthorizationsPager].
pub type ListDnsAuthorizationsAsyncPager =
    gax::paginator::AsyncPager<ListDnsAuthorizationsRequest, ListDnsAuthorizationsResponse>;

/// Iterates over the [certificate issuance configs][ListCertificateIssuanceConfigsResponse::certificate_issuance_configs] of a `ListCertificateIssuanceConfigs`
/// call, fetching pages as needed.
pub type ListCertificateIssuanceConfigsPager = gax::paginator::Pager<
    ListCertificateIssuanceConfigsRequest,
    ListCertificateIssuanceConfigsResponse,
>;

/// The async version of [ListCertificateIssuanceConfigsPager].
pub type ListCertificateIssuanceConfigsAsyncPager = gax::paginator::AsyncPager<
    ListCertificateIssuanceConfigsRequest,
    ListCertificateIssuanceConfigsResponse,
>;
