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

#![allow(rustdoc::bare_urls)]

/// Defines TLS certificate.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Certificate {
    /// A user-defined name of the resource. Names must be unique
    /// globally and match pattern `projects/*/locations/*/certificates/*`.
    pub name: String,

    /// One or more paragraphs of text description of the resource.
    pub description: String,

    /// Set of labels associated with the resource.
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. The list of Subject Alternative Names of dnsName type
    /// defined in the certificate (see RFC 5280 4.2.1.6).
    pub san_dnsnames: Vec<String>,

    /// Output only. The PEM-encoded certificate chain.
    pub pem_certificate: String,

    /// Immutable. The scope of the certificate, for example `DEFAULT` or
    /// `EDGE_CACHE`.
    pub scope: String,

    /// Output only. The expiry timestamp of the certificate, in RFC 3339
    /// format.
    pub expire_time: String,
}

impl Certificate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][Self::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [san_dnsnames][Self::san_dnsnames].
    pub fn set_san_dnsnames<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.san_dnsnames = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [pem_certificate][Self::pem_certificate].
    pub fn set_pem_certificate<T: Into<String>>(mut self, v: T) -> Self {
        self.pem_certificate = v.into();
        self
    }

    /// Sets the value of [scope][Self::scope].
    pub fn set_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.scope = v.into();
        self
    }

    /// Sets the value of [expire_time][Self::expire_time].
    pub fn set_expire_time<T: Into<String>>(mut self, v: T) -> Self {
        self.expire_time = v.into();
        self
    }
}

/// Defines a collection of certificate configurations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CertificateMap {
    /// A user-defined name of the resource. Names must be unique
    /// globally and match pattern `projects/*/locations/*/certificateMaps/*`.
    pub name: String,

    /// One or more paragraphs of text description of the resource.
    pub description: String,

    /// Set of labels associated with the resource.
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. The target proxies that reference this map.
    pub gclb_targets: Vec<String>,
}

impl CertificateMap {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][Self::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [gclb_targets][Self::gclb_targets].
    pub fn set_gclb_targets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.gclb_targets = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// Defines a certificate map entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CertificateMapEntry {
    /// A user-defined name of the resource. Names must be unique
    /// globally and match pattern `projects/*/locations/*/certificateMaps/*/certificateMapEntries/*`.
    pub name: String,

    /// One or more paragraphs of text description of the resource.
    pub description: String,

    /// Set of labels associated with the resource.
    pub labels: std::collections::HashMap<String, String>,

    /// A hostname matching the entry. It can be a wildcard hostname
    /// (`*.example.com`) or a fully qualified domain name.
    pub hostname: String,

    /// A set of Certificates defines for the given `hostname`. Each value is
    /// the name of a [Certificate][crate::model::Certificate].
    pub certificates: Vec<String>,

    /// Output only. A serving state of this Certificate Map Entry.
    pub state: String,
}

impl CertificateMapEntry {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][Self::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [hostname][Self::hostname].
    pub fn set_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.hostname = v.into();
        self
    }

    /// Sets the value of [certificates][Self::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.certificates = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [state][Self::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }
}

/// A DnsAuthorization resource describes a way to perform domain authorization
/// for certificate issuance.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DnsAuthorization {
    /// A user-defined name of the resource. Names must be unique
    /// globally and match pattern `projects/*/locations/*/dnsAuthorizations/*`.
    pub name: String,

    /// One or more paragraphs of text description of the resource.
    pub description: String,

    /// Set of labels associated with the resource.
    pub labels: std::collections::HashMap<String, String>,

    /// Immutable. A domain that is being authorized. A DnsAuthorization
    /// resource covers a single domain and its wildcard, e.g. authorization for
    /// `example.com` can be used to issue certificates for `example.com` and
    /// `*.example.com`.
    pub domain: String,
}

impl DnsAuthorization {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][Self::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [domain][Self::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }
}

/// CertificateIssuanceConfig specifies how to issue and manage a certificate.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CertificateIssuanceConfig {
    /// A user-defined name of the resource. Names must be unique
    /// globally and match pattern `projects/*/locations/*/certificateIssuanceConfigs/*`.
    pub name: String,

    /// One or more paragraphs of text description of the resource.
    pub description: String,

    /// Set of labels associated with the resource.
    pub labels: std::collections::HashMap<String, String>,

    /// Required. Workload certificate lifetime requested, as a duration
    /// (e.g. `"2592000s"`).
    pub lifetime: String,

    /// Required. Specifies the percentage of elapsed time of the certificate
    /// lifetime to wait before renewing the certificate.
    pub rotation_window_percentage: i32,

    /// Required. The key algorithm to use when generating the private key,
    /// for example `RSA_2048` or `ECDSA_P256`.
    pub key_algorithm: String,
}

impl CertificateIssuanceConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][Self::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [lifetime][Self::lifetime].
    pub fn set_lifetime<T: Into<String>>(mut self, v: T) -> Self {
        self.lifetime = v.into();
        self
    }

    /// Sets the value of [rotation_window_percentage][Self::rotation_window_percentage].
    pub fn set_rotation_window_percentage<T: Into<i32>>(mut self, v: T) -> Self {
        self.rotation_window_percentage = v.into();
        self
    }

    /// Sets the value of [key_algorithm][Self::key_algorithm].
    pub fn set_key_algorithm<T: Into<String>>(mut self, v: T) -> Self {
        self.key_algorithm = v.into();
        self
    }
}

/// Request for the `ListCertificates` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificatesRequest {
    /// Required. The project and location from which the certificates
    /// should be listed, specified in the format `projects/*/locations/*`.
    pub parent: String,

    /// Maximum number of items to return.
    pub page_size: i32,

    /// The value returned by the last `ListCertificatesResponse`. Indicates
    /// that this is a continuation of a prior `ListCertificates` call, and that
    /// the system should return the next page of data.
    pub page_token: String,

    /// Filter expression to restrict the results returned.
    pub filter: String,

    /// A list of fields to be sorted by, separated by commas. Use "desc"
    /// after the field name for descending order.
    pub order_by: String,
}

impl ListCertificatesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][Self::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for the `ListCertificates` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificatesResponse {
    /// A list of certificates for the parent resource.
    pub certificates: std::vec::Vec<crate::model::Certificate>,

    /// If there might be more results than those appearing in this response,
    /// then `next_page_token` is included. To get the next set of results, call
    /// this method again using the value of `next_page_token` as `page_token`.
    pub next_page_token: String,

    /// Locations that could not be reached.
    pub unreachable: Vec<String>,
}

impl ListCertificatesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificates][Self::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Certificate>,
    {
        self.certificates = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][Self::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl gax::paginator::PageableRequest for ListCertificatesRequest {
    fn page_token(&self) -> &str {
        &self.page_token
    }

    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl gax::paginator::PageableResponse for ListCertificatesResponse {
    type PageItem = crate::model::Certificate;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.certificates
    }
}

/// Request for the `ListCertificateMaps` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateMapsRequest {
    /// Required. The project and location from which the certificate maps
    /// should be listed, specified in the format `projects/*/locations/*`.
    pub parent: String,

    /// Maximum number of items to return.
    pub page_size: i32,

    /// The value returned by the last `ListCertificateMapsResponse`. Indicates
    /// that this is a continuation of a prior `ListCertificateMaps` call, and that
    /// the system should return the next page of data.
    pub page_token: String,

    /// Filter expression to restrict the results returned.
    pub filter: String,

    /// A list of fields to be sorted by, separated by commas. Use "desc"
    /// after the field name for descending order.
    pub order_by: String,
}

impl ListCertificateMapsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][Self::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for the `ListCertificateMaps` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateMapsResponse {
    /// A list of certificate maps for the parent resource.
    pub certificate_maps: std::vec::Vec<crate::model::CertificateMap>,

    /// If there might be more results than those appearing in this response,
    /// then `next_page_token` is included. To get the next set of results, call
    /// this method again using the value of `next_page_token` as `page_token`.
    pub next_page_token: String,

    /// Locations that could not be reached.
    pub unreachable: Vec<String>,
}

impl ListCertificateMapsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificate_maps][Self::certificate_maps].
    pub fn set_certificate_maps<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::CertificateMap>,
    {
        self.certificate_maps = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][Self::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl gax::paginator::PageableRequest for ListCertificateMapsRequest {
    fn page_token(&self) -> &str {
        &self.page_token
    }

    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl gax::paginator::PageableResponse for ListCertificateMapsResponse {
    type PageItem = crate::model::CertificateMap;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.certificate_maps
    }
}

/// Request for the `ListCertificateMapEntries` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateMapEntriesRequest {
    /// Required. The project and location from which the certificate map entries
    /// should be listed, specified in the format `projects/*/locations/*/certificateMaps/*`.
    pub parent: String,

    /// Maximum number of items to return.
    pub page_size: i32,

    /// The value returned by the last `ListCertificateMapEntriesResponse`. Indicates
    /// that this is a continuation of a prior `ListCertificateMapEntries` call, and that
    /// the system should return the next page of data.
    pub page_token: String,

    /// Filter expression to restrict the results returned.
    pub filter: String,

    /// A list of fields to be sorted by, separated by commas. Use "desc"
    /// after the field name for descending order.
    pub order_by: String,
}

impl ListCertificateMapEntriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][Self::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for the `ListCertificateMapEntries` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateMapEntriesResponse {
    /// A list of certificate map entries for the parent resource.
    pub certificate_map_entries: std::vec::Vec<crate::model::CertificateMapEntry>,

    /// If there might be more results than those appearing in this response,
    /// then `next_page_token` is included. To get the next set of results, call
    /// this method again using the value of `next_page_token` as `page_token`.
    pub next_page_token: String,

    /// Locations that could not be reached.
    pub unreachable: Vec<String>,
}

impl ListCertificateMapEntriesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificate_map_entries][Self::certificate_map_entries].
    pub fn set_certificate_map_entries<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::CertificateMapEntry>,
    {
        self.certificate_map_entries = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][Self::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl gax::paginator::PageableRequest for ListCertificateMapEntriesRequest {
    fn page_token(&self) -> &str {
        &self.page_token
    }

    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl gax::paginator::PageableResponse for ListCertificateMapEntriesResponse {
    type PageItem = crate::model::CertificateMapEntry;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.certificate_map_entries
    }
}

/// Request for the `ListDnsAuthorizations` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDnsAuthorizationsRequest {
    /// Required. The project and location from which the dns authorizations
    /// should be listed, specified in the format `projects/*/locations/*`.
    pub parent: String,

    /// Maximum number of items to return.
    pub page_size: i32,

    /// The value returned by the last `ListDnsAuthorizationsResponse`. Indicates
    /// that this is a continuation of a prior `ListDnsAuthorizations` call, and that
    /// the system should return the next page of data.
    pub page_token: String,

    /// Filter expression to restrict the results returned.
    pub filter: String,

    /// A list of fields to be sorted by, separated by commas. Use "desc"
    /// after the field name for descending order.
    pub order_by: String,
}

impl ListDnsAuthorizationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][Self::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for the `ListDnsAuthorizations` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDnsAuthorizationsResponse {
    /// A list of dns authorizations for the parent resource.
    pub dns_authorizations: std::vec::Vec<crate::model::DnsAuthorization>,

    /// If there might be more results than those appearing in this response,
    /// then `next_page_token` is included. To get the next set of results, call
    /// this method again using the value of `next_page_token` as `page_token`.
    pub next_page_token: String,

    /// Locations that could not be reached.
    pub unreachable: Vec<String>,
}

impl ListDnsAuthorizationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dns_authorizations][Self::dns_authorizations].
    pub fn set_dns_authorizations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DnsAuthorization>,
    {
        self.dns_authorizations = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][Self::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl gax::paginator::PageableRequest for ListDnsAuthorizationsRequest {
    fn page_token(&self) -> &str {
        &self.page_token
    }

    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl gax::paginator::PageableResponse for ListDnsAuthorizationsResponse {
    type PageItem = crate::model::DnsAuthorization;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.dns_authorizations
    }
}

/// Request for the `ListCertificateIssuanceConfigs` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateIssuanceConfigsRequest {
    /// Required. The project and location from which the certificate issuance configs
    /// should be listed, specified in the format `projects/*/locations/*`.
    pub parent: String,

    /// Maximum number of items to return.
    pub page_size: i32,

    /// The value returned by the last `ListCertificateIssuanceConfigsResponse`. Indicates
    /// that this is a continuation of a prior `ListCertificateIssuanceConfigs` call, and that
    /// the system should return the next page of data.
    pub page_token: String,

    /// Filter expression to restrict the results returned.
    pub filter: String,

    /// A list of fields to be sorted by, separated by commas. Use "desc"
    /// after the field name for descending order.
    pub order_by: String,
}

impl ListCertificateIssuanceConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][Self::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for the `ListCertificateIssuanceConfigs` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCertificateIssuanceConfigsResponse {
    /// A list of certificate issuance configs for the parent resource.
    pub certificate_issuance_configs: std::vec::Vec<crate::model::CertificateIssuanceConfig>,

    /// If there might be more results than those appearing in this response,
    /// then `next_page_token` is included. To get the next set of results, call
    /// this method again using the value of `next_page_token` as `page_token`.
    pub next_page_token: String,

    /// Locations that could not be reached.
    pub unreachable: Vec<String>,
}

impl ListCertificateIssuanceConfigsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certificate_issuance_configs][Self::certificate_issuance_configs].
    pub fn set_certificate_issuance_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::CertificateIssuanceConfig>,
    {
        self.certificate_issuance_configs = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][Self::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl gax::paginator::PageableRequest for ListCertificateIssuanceConfigsRequest {
    fn page_token(&self) -> &str {
        &self.page_token
    }

    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl gax::paginator::PageableResponse for ListCertificateIssuanceConfigsResponse {
    type PageItem = crate::model::CertificateIssuanceConfig;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.certificate_issuance_configs
    }
}
