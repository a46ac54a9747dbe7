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

//! The response type returned by stubs.
//!
//! Stubs return the response body together with the response headers (or the
//! gRPC metadata converted to headers). The clients usually discard the
//! headers and only keep the body.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use certificatemanager_gax::Result;
//! # use certificatemanager_gax::response::Response;
//! #[derive(Default)]
//! struct ListThingsResponse {
//!   // ...
//! }
//!
//! fn make_mock_response() -> Result<Response<ListThingsResponse>> {
//!     Ok(Response::from(ListThingsResponse::default()))
//! }
//! ```

/// A service response: a body and the headers received with it.
#[derive(Clone, Debug)]
pub struct Response<T> {
    headers: http::HeaderMap,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with no headers.
    ///
    /// # Example
    /// ```
    /// # use certificatemanager_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            headers: http::HeaderMap::new(),
            body,
        }
    }

    /// Creates a response from the headers and the body.
    pub fn from_parts(headers: http::HeaderMap, body: T) -> Self {
        Self { headers, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the headers and body.
    pub fn into_parts(self) -> (http::HeaderMap, T) {
        (self.headers, self.body)
    }

    /// Consumes the response returning only its body.
    ///
    /// # Example
    /// ```
    /// # use certificatemanager_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.into_body().as_str(), "test");
    /// ```
    pub fn into_body(self) -> T {
        self.body
    }
}
