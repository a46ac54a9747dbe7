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

//! A blocking client.
//!
//! The blocking client owns a current-thread [tokio] runtime and drives each
//! RPC to completion on the caller's thread. Its list methods return
//! [Pager][gax::paginator::Pager]s, which block on every page fetch.
//!
//! Do not use the blocking client from within an async runtime: blocking on
//! a runtime from one of its own threads panics. Use
//! [client::CertificateManager][crate::client::CertificateManager] instead.

use crate::client::with_routing;
use crate::model;
use crate::pagers::*;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// A blocking client for the Certificate Manager API.
///
/// # Example
/// ```
/// # use certificatemanager_v1::blocking::CertificateManager;
/// # use certificatemanager_v1::model::*;
/// # use gax::options::RequestOptions;
/// # use gax::response::Response;
/// #[derive(Debug)]
/// struct Fake;
/// impl certificatemanager_v1::stub::CertificateManager for Fake {
///     async fn list_dns_authorizations(
///         &self,
///         _req: ListDnsAuthorizationsRequest,
///         _options: RequestOptions,
///     ) -> gax::Result<Response<ListDnsAuthorizationsResponse>> {
///         Ok(Response::from(ListDnsAuthorizationsResponse::new().set_dns_authorizations([
///             DnsAuthorization::new().set_domain("example.com"),
///         ])))
///     }
/// }
///
/// let client = CertificateManager::from_stub(Fake)?;
/// let request = ListDnsAuthorizationsRequest::new().set_parent("projects/p/locations/global");
/// for authorization in client.list_dns_authorizations(request, RequestOptions::default())? {
///     println!("{}", authorization?.domain);
/// }
/// # gax::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct CertificateManager {
    inner: crate::client::CertificateManager,
    runtime: Arc<Runtime>,
}

impl CertificateManager {
    /// Creates a new blocking client from the provided stub.
    ///
    /// Fails with an [io][gax::error::Error::is_io] error if the runtime
    /// cannot be created.
    pub fn from_stub<T>(stub: T) -> crate::Result<Self>
    where
        T: super::stub::CertificateManager + 'static,
    {
        Self::new(crate::client::CertificateManager::from_stub(stub))
    }

    /// Wraps an async client.
    pub fn new(inner: crate::client::CertificateManager) -> crate::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(crate::Error::io)?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// The blocking version of
    /// [client::CertificateManager::list_certificates][crate::client::CertificateManager::list_certificates].
    pub fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificatesPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.inner.stub();
        let runtime = self.runtime.clone();
        let method = move |r: model::ListCertificatesRequest, o: RequestOptions| {
            runtime
                .block_on(stub.list_certificates(r, o))
                .map(Response::into_body)
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificates: fetching first page"
        );
        let first = method(req.clone(), options.clone())?;
        Ok(ListCertificatesPager::new(method, req, first, options))
    }

    /// The blocking version of
    /// [client::CertificateManager::list_certificate_maps][crate::client::CertificateManager::list_certificate_maps].
    pub fn list_certificate_maps(
        &self,
        req: crate::model::ListCertificateMapsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateMapsPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.inner.stub();
        let runtime = self.runtime.clone();
        let method = move |r: model::ListCertificateMapsRequest, o: RequestOptions| {
            runtime
                .block_on(stub.list_certificate_maps(r, o))
                .map(Response::into_body)
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_maps: fetching first page"
        );
        let first = method(req.clone(), options.clone())?;
        Ok(ListCertificateMapsPager::new(method, req, first, options))
    }

    /// The blocking version of
    /// [client::CertificateManager::list_certificate_map_entries][crate::client::CertificateManager::list_certificate_map_entries].
    pub fn list_certificate_map_entries(
        &self,
        req: crate::model::ListCertificateMapEntriesRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateMapEntriesPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.inner.stub();
        let runtime = self.runtime.clone();
        let method = move |r: model::ListCertificateMapEntriesRequest, o: RequestOptions| {
            runtime
                .block_on(stub.list_certificate_map_entries(r, o))
                .map(Response::into_body)
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_map_entries: fetching first page"
        );
        let first = method(req.clone(), options.clone())?;
        Ok(ListCertificateMapEntriesPager::new(method, req, first, options))
    }

    /// The blocking version of
    /// [client::CertificateManager::list_dns_authorizations][crate::client::CertificateManager::list_dns_authorizations].
    pub fn list_dns_authorizations(
        &self,
        req: crate::model::ListDnsAuthorizationsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListDnsAuthorizationsPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.inner.stub();
        let runtime = self.runtime.clone();
        let method = move |r: model::ListDnsAuthorizationsRequest, o: RequestOptions| {
            runtime
                .block_on(stub.list_dns_authorizations(r, o))
                .map(Response::into_body)
        };
        tracing::debug!(
            parent = %req.parent,
            "list_dns_authorizations: fetching first page"
        );
        let first = method(req.clone(), options.clone())?;
        Ok(ListDnsAuthorizationsPager::new(method, req, first, options))
    }

    /// The blocking version of
    /// [client::CertificateManager::list_certificate_issuance_configs][crate::client::CertificateManager::list_certificate_issuance_configs].
    pub fn list_certificate_issuance_configs(
        &self,
        req: crate::model::ListCertificateIssuanceConfigsRequest,
        options: RequestOptions,
    ) -> crate::Result<ListCertificateIssuanceConfigsPager> {
        let options = with_routing(options, &req.parent);
        let stub = self.inner.stub();
        let runtime = self.runtime.clone();
        let method = move |r: model::ListCertificateIssuanceConfigsRequest, o: RequestOptions| {
            runtime
                .block_on(stub.list_certificate_issuance_configs(r, o))
                .map(Response::into_body)
        };
        tracing::debug!(
            parent = %req.parent,
            "list_certificate_issuance_configs: fetching first page"
        );
        let first = method(req.clone(), options.clone())?;
        Ok(ListCertificateIssuanceConfigsPager::new(method, req, first, options))
    }
}
