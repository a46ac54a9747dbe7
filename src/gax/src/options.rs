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

//! Per request options.
//!
//! Applications may need to customize the behavior of some calls made via a
//! client. Applications sometimes change the timeout for a specific call, or
//! attach additional metadata to the request.
//!
//! The paginators capture the options used for the first page and send the
//! exact same options with every subsequent page request.

use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// # Example
/// ```
/// # use certificatemanager_gax::options::RequestOptions;
/// let mut options = RequestOptions::default();
/// options.insert_metadata("x-goog-user-project", "my-project");
/// options.set_attempt_timeout(std::time::Duration::from_secs(30));
/// assert_eq!(options.metadata(), &[("x-goog-user-project".to_string(), "my-project".to_string())]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    metadata: Vec<(String, String)>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// The ordered key/value pairs sent as headers (gRPC metadata) with the
    /// request.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Replaces the metadata sent with the request.
    pub fn set_metadata<I, K, V>(&mut self, v: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    }

    /// Adds a key/value pair to the metadata sent with the request.
    ///
    /// Keys are not required to be unique; all pairs are sent, in insertion
    /// order.
    pub fn insert_metadata<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.metadata.push((key.into(), value.into()));
    }

    /// Sets the per-attempt timeout.
    ///
    /// The stub enforces this timeout. The paginators do not have any timeout
    /// of their own, they send the same value with each page request.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }
}
