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

use super::cursor::PageCursor;
use super::{PageableRequest, PageableResponse, PagerState};
use crate::Result;
use crate::options::RequestOptions;
use futures::future::BoxFuture;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type ListMethod<Req, Resp> =
    Arc<dyn Fn(Req, RequestOptions) -> BoxFuture<'static, Result<Resp>> + Send + Sync>;

/// An async pager over the results of a List RPC.
///
/// The pager wraps the list method, the request, and the first response
/// (already fetched by the caller). Consuming the pager awaits the list
/// method each time a new page is needed. Other tasks run while the page is
/// in flight.
///
/// # Example
/// ```
/// # use certificatemanager_gax::paginator::{AsyncPager, PageableRequest, PageableResponse};
/// # use certificatemanager_gax::options::RequestOptions;
/// # #[derive(Clone, Default)]
/// # struct ListThingsRequest { page_token: String }
/// # impl PageableRequest for ListThingsRequest {
/// #     fn page_token(&self) -> &str { &self.page_token }
/// #     fn set_page_token(&mut self, t: String) { self.page_token = t; }
/// # }
/// # #[derive(Clone, Default)]
/// # struct ListThingsResponse { things: Vec<String>, next_page_token: String }
/// # impl PageableResponse for ListThingsResponse {
/// #     type PageItem = String;
/// #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
/// #     fn items(&self) -> &[String] { &self.things }
/// # }
/// # tokio_test::block_on(async {
/// use futures::TryStreamExt;
/// let list_things = |req: ListThingsRequest, _options: RequestOptions| async move {
///     // Make the RPC here.
///     Ok::<_, certificatemanager_gax::error::Error>(ListThingsResponse {
///         things: vec![format!("thing-{}", req.page_token)],
///         ..Default::default()
///     })
/// };
/// let first = ListThingsResponse {
///     things: vec!["thing-0".into()],
///     next_page_token: "1".into(),
/// };
/// let mut pager = AsyncPager::new(list_things, ListThingsRequest::default(), first, RequestOptions::default());
/// let things = pager.items().try_collect::<Vec<_>>().await?;
/// assert_eq!(things, ["thing-0", "thing-1"]);
/// # certificatemanager_gax::Result::<()>::Ok(()) });
/// ```
pub struct AsyncPager<Req, Resp> {
    cursor: PageCursor<Req, Resp>,
    method: ListMethod<Req, Resp>,
}

impl<Req, Resp> AsyncPager<Req, Resp>
where
    Req: PageableRequest + Send,
    Resp: PageableResponse + Send,
{
    /// Creates a pager.
    ///
    /// # Parameters
    /// - `method`: the list method, called with the request (with an updated
    ///   page token) and `options` for each page after the first.
    /// - `request`: the request used to fetch `response`.
    /// - `response`: the first page.
    /// - `options`: the options, including metadata, sent with each call.
    pub fn new<F, Fut>(method: F, request: Req, response: Resp, options: RequestOptions) -> Self
    where
        F: Fn(Req, RequestOptions) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Resp>> + Send + 'static,
    {
        let method: ListMethod<Req, Resp> =
            Arc::new(move |r: Req, o: RequestOptions| -> BoxFuture<'static, Result<Resp>> {
                Box::pin(method(r, o))
            });
        Self {
            cursor: PageCursor::new(request, response, options),
            method,
        }
    }

    /// The most recently fetched page.
    ///
    /// Use this to read response-level fields, such as the list of
    /// unreachable locations.
    pub fn response(&self) -> &Resp {
        self.cursor.response()
    }

    /// The options sent with each page request.
    pub fn options(&self) -> &RequestOptions {
        self.cursor.options()
    }

    /// The position of the pager in the List RPC protocol.
    pub fn state(&self) -> PagerState {
        self.cursor.state()
    }

    /// Returns the next page, fetching it if needed.
    ///
    /// Returns `None` after the last page.
    pub async fn next_page(&mut self) -> Option<Result<Resp>>
    where
        Resp: Clone,
    {
        if let Some(page) = self.cursor.take_page() {
            return Some(Ok(page));
        }
        if let Err(e) = self.fetch().await? {
            return Some(Err(e));
        }
        self.cursor.take_page().map(Ok)
    }

    /// Returns the next item, fetching more pages if needed.
    ///
    /// Returns `None` after the last item. Pages without items are skipped.
    pub async fn next_item(&mut self) -> Option<Result<Resp::PageItem>>
    where
        Resp::PageItem: Clone,
    {
        loop {
            if let Some(item) = self.cursor.take_item() {
                return Some(Ok(item));
            }
            if let Err(e) = self.fetch().await? {
                return Some(Err(e));
            }
        }
    }

    /// Returns a stream of pages, starting with the current page.
    ///
    /// The stream ends after the last page, or after returning an error.
    pub fn pages(&mut self) -> PagerStream<'_, Resp>
    where
        Resp: Clone,
    {
        self.cursor.rewind();
        let stream = unfold(Some(self), |state| async move {
            let Some(pager) = state else {
                return None;
            };
            let next = pager.next_page().await;
            match next {
                None => None,
                Some(Ok(page)) => Some((Ok(page), Some(pager))),
                Some(Err(e)) => Some((Err(e), None)),
            }
        });
        PagerStream::new(stream)
    }

    /// Returns a stream of items, starting with the first item in the
    /// current page.
    ///
    /// The stream ends after the last item, or after returning an error.
    pub fn items(&mut self) -> PagerStream<'_, Resp::PageItem>
    where
        Resp::PageItem: Clone + Send,
    {
        self.cursor.rewind();
        let stream = unfold(Some(self), |state| async move {
            let Some(pager) = state else {
                return None;
            };
            let next = pager.next_item().await;
            match next {
                None => None,
                Some(Ok(item)) => Some((Ok(item), Some(pager))),
                Some(Err(e)) => Some((Err(e), None)),
            }
        });
        PagerStream::new(stream)
    }

    /// Converts the pager into a stream of items, starting with the first
    /// item in the current page.
    pub fn into_items(mut self) -> PagerStream<'static, Resp::PageItem>
    where
        Req: 'static,
        Resp: 'static,
        Resp::PageItem: Clone + Send,
    {
        self.cursor.rewind();
        let stream = unfold(Some(self), |state| async move {
            let Some(mut pager) = state else {
                return None;
            };
            let next = pager.next_item().await;
            match next {
                None => None,
                Some(Ok(item)) => Some((Ok(item), Some(pager))),
                Some(Err(e)) => Some((Err(e), None)),
            }
        });
        PagerStream::new(stream)
    }

    async fn fetch(&mut self) -> Option<Result<()>> {
        let (request, options) = self.cursor.start_fetch()?;
        match (self.method)(request, options).await {
            Ok(response) => {
                self.cursor.adopt(response);
                Some(Ok(()))
            }
            Err(e) => {
                self.cursor.fetch_failed(&e);
                Some(Err(e))
            }
        }
    }
}

impl<Req, Resp> std::fmt::Debug for AsyncPager<Req, Resp>
where
    Resp: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncPager")
            .field("response", self.cursor.response())
            .field("state", &self.cursor.state())
            .finish()
    }
}

/// A [Stream] over the pages or items of an [AsyncPager].
#[pin_project]
pub struct PagerStream<'a, T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>,
}

impl<'a, T> PagerStream<'a, T> {
    fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<T>> + Send + 'a,
    {
        // `unfold` panics if polled after it ends.
        Self {
            stream: Box::pin(stream.fuse()),
        }
    }

    /// Returns the next element of the stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T> Stream for PagerStream<'_, T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T> std::fmt::Debug for PagerStream<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::Pager;
    use crate::paginator::testing::*;
    use futures::TryStreamExt;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn async_pager(fake: &FakeList, first: TestResponse) -> AsyncPager<TestRequest, TestResponse> {
        let fake = fake.clone();
        let request = TestRequest {
            parent: "projects/test-project".into(),
            page_size: 3,
            ..Default::default()
        };
        let mut options = RequestOptions::default();
        options.insert_metadata("x-goog-request-params", "parent=projects%2Ftest-project");
        AsyncPager::new(
            move |r, o| {
                let fake = fake.clone();
                async move {
                    tokio::task::yield_now().await;
                    fake.call(r, o)
                }
            },
            request,
            first,
            options,
        )
    }

    fn pages() -> Vec<Result<TestResponse>> {
        vec![Ok(page(0, "def")), Ok(page(1, "ghi")), Ok(page(2, ""))]
    }

    #[tokio::test]
    async fn exhausted_with_last_page() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(2, ""))]);
        let mut pager = async_pager(&fake, page(1, "abc"));
        let first = pager.next_page().await.transpose()?;
        assert_eq!(first, Some(page(1, "abc")));
        assert_eq!(pager.state(), PagerState::HoldingPage);
        let last = pager.next_page().await.transpose()?;
        assert_eq!(last, Some(page(2, "")));
        assert_eq!(pager.state(), PagerState::Exhausted);
        assert!(pager.next_page().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn flatten_items() -> anyhow::Result<()> {
        let fake = FakeList::new(pages());
        let mut pager = async_pager(&fake, page(3, "abc"));
        let items = pager.items().try_collect::<Vec<_>>().await?;
        let want = [
            "item-abc-0",
            "item-abc-1",
            "item-abc-2",
            "item-ghi-0",
            "item--0",
            "item--1",
        ];
        assert_eq!(items, want);
        assert_eq!(fake.sent_tokens(), ["abc", "def", "ghi"]);
        assert_eq!(pager.state(), PagerState::Exhausted);
        Ok(())
    }

    #[tokio::test]
    async fn pages_stream() -> anyhow::Result<()> {
        let fake = FakeList::new(pages());
        let mut pager = async_pager(&fake, page(3, "abc"));
        let mut stream = pager.pages();
        let mut tokens = Vec::new();
        while let Some(page) = stream.next().await {
            tokens.push(page?.next_page_token);
        }
        assert_eq!(tokens, ["abc", "def", "ghi", ""]);
        assert_eq!(fake.call_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn same_items_as_blocking() -> anyhow::Result<()> {
        let fake = FakeList::new(pages());
        let got = async_pager(&fake, page(3, "abc"))
            .into_items()
            .try_collect::<Vec<_>>()
            .await?;

        let blocking = FakeList::new(pages());
        let fake = blocking.clone();
        let pager = Pager::new(
            move |r, o| fake.call(r, o),
            TestRequest::default(),
            page(3, "abc"),
            RequestOptions::default(),
        );
        let want = pager.into_iter().collect::<Result<Vec<_>>>()?;
        assert_eq!(got, want);
        assert_eq!(blocking.call_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let fake = FakeList::new([Ok(page(1, "def")), Err(transport_error())]);
        let mut pager = async_pager(&fake, page(1, "abc"));
        let mut items = pager.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item);
        }
        assert_eq!(got.len(), 3, "{got:?}");
        assert!(got[2].as_ref().is_err_and(|e| e.is_transport()), "{got:?}");
        assert!(items.next().await.is_none());
        drop(items);
        assert_eq!(pager.response(), &page(1, "def"));
        assert_eq!(fake.sent_tokens(), ["abc", "def"]);
    }

    #[tokio::test]
    async fn next_item_and_delegation() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(0, "def")), Ok(page(1, ""))]);
        let mut pager = async_pager(&fake, page(1, "abc"));
        assert_eq!(pager.response().unreachable, ["unreachable-abc"]);
        assert_eq!(pager.next_item().await.transpose()?.as_deref(), Some("item-abc-0"));
        assert_eq!(pager.next_item().await.transpose()?.as_deref(), Some("item--0"));
        assert_eq!(pager.response().unreachable, ["unreachable-"]);
        assert!(pager.next_item().await.is_none());
        assert_eq!(pager.state(), PagerState::Exhausted);
        Ok(())
    }

    #[tokio::test]
    async fn replay_from_current() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(2, "def")), Ok(page(1, ""))]);
        let mut pager = async_pager(&fake, page(1, "abc"));
        assert_eq!(pager.next_page().await.transpose()?, Some(page(1, "abc")));
        assert_eq!(pager.next_page().await.transpose()?, Some(page(2, "def")));
        let pages = pager.pages().try_collect::<Vec<_>>().await?;
        assert_eq!(pages, [page(2, "def"), page(1, "")]);
        Ok(())
    }

    #[tokio::test]
    async fn metadata_propagation() -> anyhow::Result<()> {
        let fake = FakeList::new(pages());
        let pager = async_pager(&fake, page(1, "abc"));
        let want = pager.options().clone();
        let _ = pager.into_items().try_collect::<Vec<_>>().await?;
        let sent = fake.sent_options();
        assert_eq!(sent.len(), 3);
        assert!(sent.iter().all(|o| o == &want), "{sent:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_in_flight_fetch() -> anyhow::Result<()> {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let rx = Arc::new(std::sync::Mutex::new(Some(rx)));
        let mut pager = AsyncPager::new(
            move |_r: TestRequest, _o| {
                let rx = rx.lock().expect("not poisoned").take();
                async move {
                    if let Some(rx) = rx {
                        let _ = rx.await;
                    }
                    Ok(page(1, ""))
                }
            },
            TestRequest::default(),
            page(0, "abc"),
            RequestOptions::default(),
        );
        let timeout = tokio::time::timeout(Duration::from_secs(1), pager.next_item()).await;
        assert!(timeout.is_err(), "{timeout:?}");
        assert_eq!(pager.state(), PagerState::Fetching);
        assert_eq!(pager.response(), &page(0, "abc"));
        drop(tx);

        let items = pager.items().try_collect::<Vec<_>>().await?;
        assert_eq!(items, ["item--0"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn streams_are_send() -> anyhow::Result<()> {
        let fake = FakeList::new(pages());
        let pager = async_pager(&fake, page(3, "abc"));
        let join = tokio::spawn(async move { pager.into_items().try_collect::<Vec<_>>().await });
        let items = join.await??;
        assert_eq!(items.len(), 6);
        static_assertions::assert_impl_all!(AsyncPager<TestRequest, TestResponse>: Send);
        Ok(())
    }
}
