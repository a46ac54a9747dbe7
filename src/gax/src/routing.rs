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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The name of the routing header.
pub const ROUTING_HEADER: &str = "x-goog-request-params";

// Same set as form-urlencoding, minus the unreserved characters.
const ENCODED_CHARS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Formats the value of the routing header for a request.
///
/// Parameters with empty values are skipped. Returns `None` if no parameters
/// remain, in which case no routing header should be sent.
///
/// # Example
/// ```
/// # use certificatemanager_gax::routing::request_params;
/// let params = request_params(&[("parent", "projects/p/locations/global")]);
/// assert_eq!(params.as_deref(), Some("parent=projects%2Fp%2Flocations%2Fglobal"));
/// ```
pub fn request_params(params: &[(&str, &str)]) -> Option<String> {
    let mut i = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, ENCODED_CHARS)));
    let first = i.next()?;
    Some(i.fold(first, |s, p| s + "&" + &p))
}

/// Appends the routing header to `options`, if there is anything to route on.
pub fn add_routing_header(options: &mut crate::options::RequestOptions, params: &[(&str, &str)]) {
    if let Some(value) = request_params(params) {
        options.insert_metadata(ROUTING_HEADER, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RequestOptions;
    use test_case::test_case;

    #[test_case(&[], None; "no parameters")]
    #[test_case(&[("parent", "")], None; "empty value")]
    #[test_case(&[("parent", "projects/p")], Some("parent=projects%2Fp"); "single")]
    #[test_case(&[("parent", "a b"), ("name", "x")], Some("parent=a%20b&name=x"); "multiple")]
    #[test_case(&[("name", ""), ("parent", "p-1_2.3~")], Some("parent=p-1_2.3~"); "unreserved")]
    fn format(params: &[(&str, &str)], want: Option<&str>) {
        assert_eq!(request_params(params).as_deref(), want);
    }

    #[test]
    fn add_header() {
        let mut options = RequestOptions::default();
        add_routing_header(&mut options, &[("parent", "")]);
        assert!(options.metadata().is_empty(), "{options:?}");

        add_routing_header(&mut options, &[("parent", "projects/p")]);
        assert_eq!(
            options.metadata(),
            &[(ROUTING_HEADER.to_string(), "parent=projects%2Fp".to_string())]
        );
    }
}
