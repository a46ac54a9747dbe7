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

//! Client library for the Certificate Manager API.
//!
//! Certificates Manager API allows customers to see and manage all their TLS
//! certificates.
//!
//! This crate contains the messages ([model]), the trait implemented by
//! transports and mocks ([stub]), an async client ([client]) and a blocking
//! client ([blocking]). The list methods of both clients return pagers
//! ([pagers]) that fetch pages on demand:
//!
//! ```
//! # tokio_test::block_on(async {
//! use certificatemanager_v1::client::CertificateManager;
//! use certificatemanager_v1::model::*;
//! use futures::TryStreamExt;
//! use gax::options::RequestOptions;
//! use gax::response::Response;
//!
//! #[derive(Debug)]
//! struct Fake;
//! impl certificatemanager_v1::stub::CertificateManager for Fake {
//!     async fn list_certificate_maps(
//!         &self,
//!         req: ListCertificateMapsRequest,
//!         _options: RequestOptions,
//!     ) -> gax::Result<Response<ListCertificateMapsResponse>> {
//!         let (maps, next) = match req.page_token.as_str() {
//!             "" => (vec![CertificateMap::new().set_name("m-1")], "page-2"),
//!             _ => (vec![CertificateMap::new().set_name("m-2")], ""),
//!         };
//!         Ok(Response::from(
//!             ListCertificateMapsResponse::new()
//!                 .set_certificate_maps(maps)
//!                 .set_next_page_token(next),
//!         ))
//!     }
//! }
//!
//! let client = CertificateManager::from_stub(Fake);
//! let mut pager = client
//!     .list_certificate_maps(ListCertificateMapsRequest::new(), RequestOptions::default())
//!     .await?;
//! let names = pager
//!     .items()
//!     .map_ok(|m| m.name)
//!     .try_collect::<Vec<_>>()
//!     .await?;
//! assert_eq!(names, ["m-1", "m-2"]);
//! # gax::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub mod stub;

pub mod client;

pub mod blocking;

pub mod pagers;

pub use gax::Result;
pub use gax::error::Error;
