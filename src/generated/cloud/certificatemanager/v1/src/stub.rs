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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.
//!
//! The same traits are the seam between the clients and the transport: a
//! transport implementation only needs to provide the list methods it supports.

pub(crate) mod dynamic;

use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use gax::response::Response;

/// Defines the trait used to implement [super::client::CertificateManager].
///
/// Application developers may need to implement this trait to mock
/// `client::CertificateManager`. In other use-cases, application developers only
/// use `client::CertificateManager` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait CertificateManager: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CertificateManager::list_certificates].
    fn list_certificates(
        &self,
        _req: crate::model::ListCertificatesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::ListCertificatesResponse>>,
    > + Send {
        unimplemented_stub("ListCertificates")
    }

    /// Implements [super::client::CertificateManager::list_certificate_maps].
    fn list_certificate_maps(
        &self,
        _req: crate::model::ListCertificateMapsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::ListCertificateMapsResponse>>,
    > + Send {
        unimplemented_stub("ListCertificateMaps")
    }

    /// Implements [super::client::CertificateManager::list_certificate_map_entries].
    fn list_certificate_map_entries(
        &self,
        _req: crate::model::ListCertificateMapEntriesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::ListCertificateMapEntriesResponse>>,
    > + Send {
        unimplemented_stub("ListCertificateMapEntries")
    }

    /// Implements [super::client::CertificateManager::list_dns_authorizations].
    fn list_dns_authorizations(
        &self,
        _req: crate::model::ListDnsAuthorizationsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::ListDnsAuthorizationsResponse>>,
    > + Send {
        unimplemented_stub("ListDnsAuthorizations")
    }

    /// Implements [super::client::CertificateManager::list_certificate_issuance_configs].
    fn list_certificate_issuance_configs(
        &self,
        _req: crate::model::ListCertificateIssuanceConfigsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<crate::model::ListCertificateIssuanceConfigsResponse>>,
    > + Send {
        unimplemented_stub("ListCertificateIssuanceConfigs")
    }
}

async fn unimplemented_stub<T: Send>(method: &'static str) -> crate::Result<T> {
    Err(crate::Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}
