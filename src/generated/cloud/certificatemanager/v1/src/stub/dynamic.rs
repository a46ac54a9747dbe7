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

use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible, crate-private version of [super::CertificateManager].
#[async_trait::async_trait]
pub trait CertificateManager: std::fmt::Debug + Send + Sync {
    async fn list_certificates(
        &self,
        req: model::ListCertificatesRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificatesResponse>>;

    async fn list_certificate_maps(
        &self,
        req: model::ListCertificateMapsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateMapsResponse>>;

    async fn list_certificate_map_entries(
        &self,
        req: model::ListCertificateMapEntriesRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateMapEntriesResponse>>;

    async fn list_dns_authorizations(
        &self,
        req: model::ListDnsAuthorizationsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListDnsAuthorizationsResponse>>;

    async fn list_certificate_issuance_configs(
        &self,
        req: model::ListCertificateIssuanceConfigsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateIssuanceConfigsResponse>>;
}

/// All implementations of [super::CertificateManager] also implement [CertificateManager].
#[async_trait::async_trait]
impl<T: super::CertificateManager> CertificateManager for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_certificates(
        &self,
        req: model::ListCertificatesRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificatesResponse>> {
        super::CertificateManager::list_certificates(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_certificate_maps(
        &self,
        req: model::ListCertificateMapsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateMapsResponse>> {
        super::CertificateManager::list_certificate_maps(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_certificate_map_entries(
        &self,
        req: model::ListCertificateMapEntriesRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateMapEntriesResponse>> {
        super::CertificateManager::list_certificate_map_entries(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_dns_authorizations(
        &self,
        req: model::ListDnsAuthorizationsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListDnsAuthorizationsResponse>> {
        super::CertificateManager::list_dns_authorizations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_certificate_issuance_configs(
        &self,
        req: model::ListCertificateIssuanceConfigsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<model::ListCertificateIssuanceConfigsResponse>> {
        super::CertificateManager::list_certificate_issuance_configs(self, req, options).await
    }
}
