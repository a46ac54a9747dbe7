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

//! The asynchronous client.
//!
//! Each list method fetches the first page and returns an [AsyncPager], which
//! fetches the remaining pages on demand.
//!
//! [AsyncPager]: gax::paginator::AsyncPager

use crate::model;
use crate::pagers::*;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;

/// Implements a client for the Certificate Manager API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use certificatemanager_v1::client::CertificateManager;
/// # use certificatemanager_v1::model::*;
/// # use gax::options::RequestOptions;
/// # use gax::response::Response;
/// #[derive(Debug)]
/// struct Fake;
/// impl certificatemanager_v1::stub::CertificateManager for Fake {
///     async fn list_certificates(
///         &self,
///         _req: ListCertificatesRequest,
///         _options: RequestOptions,
///     ) -> gax::Result<Response<ListCertificatesResponse>> {
///         Ok(Response::from(ListCertificatesResponse::new().set_certificates([
///             Certificate::new().set_name("projects/p/locations/global/certificates/c"),
///         ])))
///     }
/// }
///
/// let client = CertificateManager::from_stub(Fake);
/// let request = ListCertificatesRequest::new().set_parent("projects/p/locations/global");
/// let mut pager = client.list_certificates(request, RequestOptions::default()).await?;
/// while let Some(certificate) = pager.next_item().await {
///     println!("{}", certificate?.name);
/// }
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// API Overview
///
/// Certificates Manager API allows customers to see and manage all their TLS
/// certificates.
///
/// # Pooling and Cloning
///
/// `CertificateManager` holds its stub in an [Arc]. Cloning the client is
/// cheap, and the clones share the stub.
#[derive(Clone, Debug)]
pub struct CertificateManager {
    inner: Arc<dyn super::stub::dynamic::CertificateManager>,
}

impl CertificateManager {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CertificateManager + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) fn stub(&self) -> Arc<dyn super::stub::dynamic::CertificateManager> {
        self.inner.clone()
    }

    /// Lists certificates in a given project and location.
    ///
    /// The request is sent with the `x-goog-request-params` routing header
    /// derived from its `parent`. The returned pager sends the same options
    /// when it fetches more pages.
    pub async fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificatesAsyncPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.stub();
        let method = move |r: model::ListCertificatesRequest, o: RequestOptions| {
            let stub = stub.clone();
            async move {
                stub.list_certificates(r, o).await.map(Response::into_body)
            }
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificates: fetching first page"
        );
        let first = method(req.clone(), options.clone()).await?;
        Ok(ListCertificatesAsyncPager::new(method, req, first, options))
    }

    /// Lists certificate maps in a given project and location.
    ///
    /// The request is sent with the `x-goog-request-params` routing header
    /// derived from its `parent`. The returned pager sends the same options
    /// when it fetches more pages.
    pub async fn list_certificate_maps(
        &self,
        req: crate::model::ListCertificateMapsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateMapsAsyncPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.stub();
        let method = move |r: model::ListCertificateMapsRequest, o: RequestOptions| {
            let stub = stub.clone();
            async move {
                stub.list_certificate_maps(r, o)
                    .await
                    .map(Response::into_body)
            }
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_maps: fetching first page"
        );
        let first = method(req.clone(), options.clone()).await?;
        Ok(ListCertificateMapsAsyncPager::new(method, req, first, options))
    }

    /// Lists certificate map entries in a given project, location and
    /// certificate map.
    ///
    /// The request is sent with the `x-goog-request-params` routing header
    /// derived from its `parent`. The returned pager sends the same options
    /// when it fetches more pages.
    pub async fn list_certificate_map_entries(
        &self,
        req: crate::model::ListCertificateMapEntriesRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateMapEntriesAsyncPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.stub();
        let method = move |r: model::ListCertificateMapEntriesRequest, o: RequestOptions| {
            let stub = stub.clone();
            async move {
                stub.list_certificate_map_entries(r, o)
                    .await
                    .map(Response::into_body)
            }
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_map_entries: fetching first page"
        );
        let first = method(req.clone(), options.clone()).await?;
        Ok(ListCertificateMapEntriesAsyncPager::new(method, req, first, options))
    }

    /// Lists DNS authorizations in a given project and location.
    ///
    /// The request is sent with the `x-goog-request-params` routing header
    /// derived from its `parent`. The returned pager sends the same options
    /// when it fetches more pages.
    pub async fn list_dns_authorizations(
        &self,
        req: crate::model::ListDnsAuthorizationsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListDnsAuthorizationsAsyncPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.stub();
        let method = move |r: model::ListDnsAuthorizationsRequest, o: RequestOptions| {
            let stub = stub.clone();
            async move {
                stub.list_dns_authorizations(r, o)
                    .await
                    .map(Response::into_body)
            }
        };
        tracing::debug!(
            parent = %req.parent,
            "list_dns_authorizations: fetching first page"
        );
        let first = method(req.clone(), options.clone()).await?;
        Ok(ListDnsAuthorizationsAsyncPager::new(method, req, first, options))
    }

    /// Lists certificate issuance configs in a given project and location.
    ///
    /// The request is sent with the `x-goog-request-params` routing header
    /// derived from its `parent`. The returned pager sends the same options
    /// when it fetches more pages.
    pub async fn list_certificate_issuance_configs(
        &self,
        req: crate::model::ListCertificateIssuanceConfigsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateIssuanceConfigsAsyncPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.stub();
        let method = move |r: model::ListCertificateIssuanceConfigsRequest, o: RequestOptions| {
            let stub = stub.clone();
            async move {
                stub.list_certificate_issuance_configs(r, o)
                    .await
                    .map(Response::into_body)
            }
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_issuance_configs: fetching first page"
        );
        let first = method(req.clone(), options.clone()).await?;
        Ok(ListCertificateIssuanceConfigsAsyncPager::new(method, req, first, options))
    }
}

pub(crate) fn with_routing(mut options: RequestOptions, parent: &str) -> RequestOptions {
    gax::routing::add_routing_header(&mut options, &[("parent", parent)]);
    options
}
