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

//! Verify the clients return pagers that walk all the pages of a list RPC.

#[cfg(test)]
mod mocking {
    use certificatemanager_v1::model::*;
    use certificatemanager_v1::stub::CertificateManager as Stub;
    use certificatemanager_v1::{blocking, client};
    use futures::TryStreamExt;
    use gax::Result as GaxResult;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::paginator::PagerState;
    use gax::response::Response as GaxResponse;
    use gax::routing::ROUTING_HEADER;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        CertificateManager {}
        impl Stub for CertificateManager {
            async fn list_certificates(&self, req: ListCertificatesRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ListCertificatesResponse>>;
            async fn list_certificate_maps(&self, req: ListCertificateMapsRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ListCertificateMapsResponse>>;
            async fn list_certificate_map_entries(&self, req: ListCertificateMapEntriesRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ListCertificateMapEntriesResponse>>;
            async fn list_dns_authorizations(&self, req: ListDnsAuthorizationsRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ListDnsAuthorizationsResponse>>;
            async fn list_certificate_issuance_configs(&self, req: ListCertificateIssuanceConfigsRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ListCertificateIssuanceConfigsResponse>>;
        }
    }

    const PARENT: &str = "projects/test-project/locations/global";
    const ROUTING: &str = "parent=projects%2Ftest-project%2Flocations%2Fglobal";

    fn user_options() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.insert_metadata("x-goog-user-project", "billing-project");
        options
    }

    fn sent_correctly(options: &RequestOptions) -> bool {
        options.metadata()
            == [
                ("x-goog-user-project".to_string(), "billing-project".to_string()),
                (ROUTING_HEADER.to_string(), ROUTING.to_string()),
            ]
    }

    fn certificate_request() -> ListCertificatesRequest {
        ListCertificatesRequest::new()
            .set_parent(PARENT)
            .set_page_size(2)
            .set_filter("labels.env=prod")
            .set_order_by("name desc")
    }

    fn certificates(page: i32, count: i32) -> Vec<Certificate> {
        (0..count)
            .map(|i| Certificate::new().set_name(format!("{PARENT}/certificates/c-{page}-{i}")))
            .collect()
    }

    fn certificates_page(page: i32, count: i32, next: &str) -> ListCertificatesResponse {
        ListCertificatesResponse::new()
            .set_certificates(certificates(page, count))
            .set_next_page_token(next)
            .set_unreachable([format!("projects/test-project/locations/region-{page}")])
    }

    // Expects one call for each page, in order, with the given page tokens.
    fn expect_certificate_pages(mock: &mut MockCertificateManager, pages: &[(&str, i32, &str)]) {
        let mut seq = mockall::Sequence::new();
        for (page, (token, count, next)) in pages.iter().enumerate() {
            let page = page as i32;
            let (token, count, next) = (token.to_string(), *count, next.to_string());
            mock.expect_list_certificates()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r, o| {
                    *r == certificate_request().set_page_token(token.clone()) && sent_correctly(o)
                })
                .return_once(move |_, _| {
                    Ok(GaxResponse::from(certificates_page(page, count, &next)))
                });
        }
    }

    #[tokio::test]
    async fn async_items() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        expect_certificate_pages(
            &mut mock,
            &[("", 2, "abc"), ("abc", 0, "def"), ("def", 1, "")],
        );

        let client = client::CertificateManager::from_stub(mock);
        let mut pager = client
            .list_certificates(certificate_request(), user_options())
            .await?;
        let got = pager.items().try_collect::<Vec<_>>().await?;
        let want = [certificates(0, 2), certificates(1, 0), certificates(2, 1)].concat();
        assert_eq!(got, want);
        assert_eq!(pager.state(), PagerState::Exhausted);
        assert_eq!(
            pager.response().unreachable,
            ["projects/test-project/locations/region-2"]
        );
        assert!(sent_correctly(pager.options()));
        Ok(())
    }

    #[tokio::test]
    async fn async_pages() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        expect_certificate_pages(&mut mock, &[("", 1, "abc"), ("abc", 1, "")]);

        let client = client::CertificateManager::from_stub(mock);
        let mut pager = client
            .list_certificates(certificate_request(), user_options())
            .await?;
        let first = pager.next_page().await.transpose()?;
        assert_eq!(first, Some(certificates_page(0, 1, "abc")));
        let second = pager.next_page().await.transpose()?;
        assert_eq!(second, Some(certificates_page(1, 1, "")));
        assert!(pager.next_page().await.is_none());
        Ok(())
    }

    #[test]
    fn blocking_items() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        expect_certificate_pages(
            &mut mock,
            &[("", 3, "abc"), ("abc", 0, "def"), ("def", 1, "ghi"), ("ghi", 2, "")],
        );

        let client = blocking::CertificateManager::from_stub(mock)?;
        let pager = client.list_certificates(certificate_request(), user_options())?;
        let got = pager.into_iter().collect::<GaxResult<Vec<_>>>()?;
        let want = [
            certificates(0, 3),
            certificates(1, 0),
            certificates(2, 1),
            certificates(3, 2),
        ]
        .concat();
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn blocking_pages_and_delegation() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_certificate_map_entries()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, o| r.page_token.is_empty() && r.parent == PARENT && o.metadata().len() == 2)
            .return_once(|_, _| {
                Ok(GaxResponse::from(
                    ListCertificateMapEntriesResponse::new()
                        .set_certificate_map_entries([
                            CertificateMapEntry::new().set_hostname("a.example.com")
                        ])
                        .set_next_page_token("next")
                        .set_unreachable(["locations/us-east1"]),
                ))
            });
        mock.expect_list_certificate_map_entries()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, o| r.page_token == "next" && r.parent == PARENT && o.metadata().len() == 2)
            .return_once(|_, _| {
                Ok(GaxResponse::from(
                    ListCertificateMapEntriesResponse::new()
                        .set_certificate_map_entries([
                            CertificateMapEntry::new().set_hostname("b.example.com")
                        ])
                        .set_unreachable(["locations/us-west1"]),
                ))
            });

        let client = blocking::CertificateManager::from_stub(mock)?;
        let request = ListCertificateMapEntriesRequest::new().set_parent(PARENT);
        let mut pager = client.list_certificate_map_entries(request, user_options())?;
        assert_eq!(pager.response().unreachable, ["locations/us-east1"]);

        let tokens = pager
            .pages()
            .map(|p| p.map(|p| p.next_page_token))
            .collect::<GaxResult<Vec<_>>>()?;
        assert_eq!(tokens, ["next", ""]);
        assert_eq!(pager.response().unreachable, ["locations/us-west1"]);
        assert_eq!(pager.state(), PagerState::Exhausted);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_traversal() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_dns_authorizations()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(GaxResponse::from(
                    ListDnsAuthorizationsResponse::new()
                        .set_dns_authorizations([DnsAuthorization::new().set_domain("example.com")])
                        .set_next_page_token("abc"),
                ))
            });
        mock.expect_list_dns_authorizations()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::Unavailable)
                        .set_message("try again later"),
                ))
            });

        let client = client::CertificateManager::from_stub(mock);
        let request = ListDnsAuthorizationsRequest::new().set_parent(PARENT);
        let mut pager = client
            .list_dns_authorizations(request, RequestOptions::default())
            .await?;
        let first = pager.next_item().await.transpose()?;
        assert_eq!(first.map(|a| a.domain).as_deref(), Some("example.com"));

        let err = pager.next_item().await.transpose().unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        assert_eq!(pager.response().next_page_token, "abc");
        assert_eq!(pager.state(), PagerState::HoldingPage);
        Ok(())
    }

    #[tokio::test]
    async fn first_page_error() {
        let mut mock = MockCertificateManager::new();
        mock.expect_list_certificate_maps()
            .once()
            .return_once(|_, _| {
                Err(Error::service(
                    Status::default().set_code(Code::PermissionDenied),
                ))
            });

        let client = client::CertificateManager::from_stub(mock);
        let err = client
            .list_certificate_maps(
                ListCertificateMapsRequest::new().set_parent(PARENT),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[tokio::test]
    async fn no_routing_header_without_parent() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        mock.expect_list_certificate_issuance_configs()
            .once()
            .withf(|_, o| o.metadata().is_empty())
            .return_once(|_, _| {
                Ok(GaxResponse::from(
                    ListCertificateIssuanceConfigsResponse::new().set_certificate_issuance_configs([
                        CertificateIssuanceConfig::new()
                            .set_rotation_window_percentage(66)
                            .set_key_algorithm("ECDSA_P256"),
                    ]),
                ))
            });

        let client = client::CertificateManager::from_stub(mock);
        let pager = client
            .list_certificate_issuance_configs(
                ListCertificateIssuanceConfigsRequest::new(),
                RequestOptions::default(),
            )
            .await?;
        let got = pager.into_items().try_collect::<Vec<_>>().await?;
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].rotation_window_percentage, 66);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn pagers_are_send() -> anyhow::Result<()> {
        let mut mock = MockCertificateManager::new();
        expect_certificate_pages(&mut mock, &[("", 2, "abc"), ("abc", 1, "")]);

        async fn other_task(
            client: client::CertificateManager,
        ) -> anyhow::Result<Vec<Certificate>> {
            let mut pager = client
                .list_certificates(certificate_request(), user_options())
                .await?;
            let items = pager.items().try_collect::<Vec<_>>().await?;
            Ok(items)
        }

        let client = client::CertificateManager::from_stub(mock);
        let join = tokio::spawn(async move { other_task(client).await });
        let items = join.await??;
        assert_eq!(items, [certificates(0, 2), certificates(1, 1)].concat());
        Ok(())
    }

    #[derive(Debug)]
    struct Empty;
    impl Stub for Empty {}

    #[tokio::test]
    async fn default_stub_is_unimplemented() {
        let client = client::CertificateManager::from_stub(Empty);
        let err = client
            .list_certificates(certificate_request(), RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::Unimplemented);
        assert!(status.message.contains("ListCertificates"), "{status:?}");
    }

    static_assertions::assert_impl_all!(
        client::CertificateManager: Clone,
        Send,
        Sync,
        std::fmt::Debug
    );
    static_assertions::assert_impl_all!(blocking::CertificateManager: Clone, Send, Sync);
    static_assertions::assert_impl_all!(certificatemanager_v1::pagers::ListCertificatesPager: Send);
    static_assertions::assert_impl_all!(
        certificatemanager_v1::pagers::ListDnsAuthorizationsAsyncPager: Send
    );
}
