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

//! Certificate Manager client helpers.
//!
//! This crate contains the types and functions shared by the Certificate
//! Manager client library: the error type returned by every RPC, per-request
//! options, the response wrapper returned by stubs, and the paginators that
//! turn `List*` RPCs into a single sequence of items.
//!
//! Most applications use these types indirectly, via the client in the
//! `certificatemanager-v1` crate. They are public because mocks and custom
//! stub implementations need them.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

/// Per-request options, including the metadata sent with each RPC.
pub mod options;

/// Adapters that convert List RPCs into iterators and streams.
///
/// See [AIP-4233](https://google.aip.dev/client-libraries/4233) for the
/// general shape of List RPCs.
pub mod paginator;

pub mod response;

/// Helpers to format the `x-goog-request-params` routing header.
pub mod routing;
