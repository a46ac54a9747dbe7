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

use super::cursor::PageCursor;
use super::{PageableRequest, PageableResponse, PagerState};
use crate::Result;
use crate::options::RequestOptions;

type ListMethod<Req, Resp> = Box<dyn FnMut(Req, RequestOptions) -> Result<Resp> + Send>;

/// A blocking pager over the results of a List RPC.
///
/// The pager wraps the list method, the request, and the first response
/// (already fetched by the caller). Iterating over the pager calls the list
/// method, on the calling thread, each time a new page is needed.
///
/// # Example
/// ```
/// # use certificatemanager_gax::paginator::{Pager, PageableRequest, PageableResponse};
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
/// let list_things = |req: ListThingsRequest, _options: RequestOptions| {
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
/// let pager = Pager::new(list_things, ListThingsRequest::default(), first, RequestOptions::default());
/// let things = pager.into_iter().collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(things, ["thing-0", "thing-1"]);
/// # certificatemanager_gax::Result::<()>::Ok(())
/// ```
pub struct Pager<Req, Resp> {
    cursor: PageCursor<Req, Resp>,
    method: ListMethod<Req, Resp>,
}

impl<Req, Resp> Pager<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
{
    /// Creates a pager.
    ///
    /// # Parameters
    /// - `method`: the list method, called with the request (with an updated
    ///   page token) and `options` for each page after the first.
    /// - `request`: the request used to fetch `response`.
    /// - `response`: the first page.
    /// - `options`: the options, including metadata, sent with each call.
    pub fn new<F>(method: F, request: Req, response: Resp, options: RequestOptions) -> Self
    where
        F: FnMut(Req, RequestOptions) -> Result<Resp> + Send + 'static,
    {
        Self {
            cursor: PageCursor::new(request, response, options),
            method: Box::new(method),
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

    /// Returns an iterator over the pages, starting with the current page.
    pub fn pages(&mut self) -> Pages<'_, Req, Resp>
    where
        Resp: Clone,
    {
        self.cursor.rewind();
        Pages {
            pager: self,
            done: false,
        }
    }

    /// Returns an iterator over the items, starting with the first item in
    /// the current page.
    pub fn items(&mut self) -> Items<'_, Req, Resp>
    where
        Resp::PageItem: Clone,
    {
        self.cursor.rewind();
        Items {
            pager: self,
            done: false,
        }
    }

    /// Returns the next page, fetching it if needed.
    ///
    /// Unlike [pages][Pager::pages] this continues from the current
    /// position.
    pub fn next_page(&mut self) -> Option<Result<Resp>>
    where
        Resp: Clone,
    {
        if let Some(page) = self.cursor.take_page() {
            return Some(Ok(page));
        }
        if let Err(e) = self.fetch()? {
            return Some(Err(e));
        }
        self.cursor.take_page().map(Ok)
    }

    /// Returns the next item, fetching more pages if needed.
    ///
    /// Unlike [items][Pager::items] this continues from the current
    /// position. Pages without items are skipped.
    pub fn next_item(&mut self) -> Option<Result<Resp::PageItem>>
    where
        Resp::PageItem: Clone,
    {
        loop {
            if let Some(item) = self.cursor.take_item() {
                return Some(Ok(item));
            }
            if let Err(e) = self.fetch()? {
                return Some(Err(e));
            }
        }
    }

    fn fetch(&mut self) -> Option<Result<()>> {
        let (request, options) = self.cursor.start_fetch()?;
        match (self.method)(request, options) {
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

impl<Req, Resp> std::fmt::Debug for Pager<Req, Resp>
where
    Resp: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("response", self.cursor.response())
            .field("state", &self.cursor.state())
            .finish()
    }
}

impl<Req, Resp> IntoIterator for Pager<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
    Resp::PageItem: Clone,
{
    type Item = Result<Resp::PageItem>;
    type IntoIter = IntoItems<Req, Resp>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.cursor.rewind();
        IntoItems {
            pager: self,
            done: false,
        }
    }
}

/// An iterator over the pages of a [Pager].
///
/// The iterator stops after the last page, or after returning an error.
#[derive(Debug)]
pub struct Pages<'a, Req, Resp> {
    pager: &'a mut Pager<Req, Resp>,
    done: bool,
}

impl<Req, Resp> Iterator for Pages<'_, Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
{
    type Item = Result<Resp>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.pager.next_page();
        self.done = !matches!(next, Some(Ok(_)));
        next
    }
}

impl<Req, Resp> std::iter::FusedIterator for Pages<'_, Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
{
}

/// An iterator over the items of a [Pager].
///
/// The iterator stops after the last item, or after returning an error.
#[derive(Debug)]
pub struct Items<'a, Req, Resp> {
    pager: &'a mut Pager<Req, Resp>,
    done: bool,
}

impl<Req, Resp> Iterator for Items<'_, Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
    Resp::PageItem: Clone,
{
    type Item = Result<Resp::PageItem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.pager.next_item();
        self.done = !matches!(next, Some(Ok(_)));
        next
    }
}

impl<Req, Resp> std::iter::FusedIterator for Items<'_, Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
    Resp::PageItem: Clone,
{
}

/// An iterator over the items of a [Pager], consuming the pager.
#[derive(Debug)]
pub struct IntoItems<Req, Resp> {
    pager: Pager<Req, Resp>,
    done: bool,
}

impl<Req, Resp> IntoItems<Req, Resp> {
    /// The most recently fetched page.
    pub fn response(&self) -> &Resp {
        self.pager.cursor.response()
    }
}

impl<Req, Resp> Iterator for IntoItems<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
    Resp::PageItem: Clone,
{
    type Item = Result<Resp::PageItem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.pager.next_item();
        self.done = !matches!(next, Some(Ok(_)));
        next
    }
}

impl<Req, Resp> std::iter::FusedIterator for IntoItems<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
    Resp::PageItem: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::testing::*;
    use pretty_assertions::assert_eq;

    fn pager(fake: &FakeList, first: TestResponse) -> Pager<TestRequest, TestResponse> {
        let fake = fake.clone();
        let request = TestRequest {
            parent: "projects/test-project".into(),
            page_size: 3,
            ..Default::default()
        };
        let mut options = RequestOptions::default();
        options.insert_metadata("x-goog-request-params", "parent=projects%2Ftest-project");
        Pager::new(move |r, o| fake.call(r, o), request, first, options)
    }

    #[test]
    fn flatten_items() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(0, "def")), Ok(page(1, "ghi")), Ok(page(2, ""))]);
        let pager = pager(&fake, page(3, "abc"));
        let items = pager.into_iter().collect::<Result<Vec<_>>>()?;
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
        Ok(())
    }

    #[test]
    fn pages() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(0, "def")), Ok(page(1, "ghi")), Ok(page(2, ""))]);
        let mut pager = pager(&fake, page(3, "abc"));
        let pages = pager.pages().collect::<Result<Vec<_>>>()?;
        let tokens = pages
            .iter()
            .map(|p| p.next_page_token.as_str())
            .collect::<Vec<_>>();
        assert_eq!(tokens, ["abc", "def", "ghi", ""]);
        assert_eq!(fake.call_count(), 3);
        assert_eq!(pager.state(), PagerState::Exhausted);
        Ok(())
    }

    #[test]
    fn exhausted_with_last_item() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(1, ""))]);
        let mut pager = pager(&fake, page(1, "abc"));
        assert_eq!(pager.next_item().transpose()?.as_deref(), Some("item-abc-0"));
        assert_eq!(pager.state(), PagerState::HoldingPage);
        assert_eq!(pager.next_item().transpose()?.as_deref(), Some("item--0"));
        assert_eq!(pager.state(), PagerState::Exhausted);
        assert!(pager.next_item().is_none());
        assert_eq!(fake.call_count(), 1);
        Ok(())
    }

    #[test]
    fn single_page() -> anyhow::Result<()> {
        let fake = FakeList::default();
        let mut pager = pager(&fake, page(2, ""));
        let items = pager.items().collect::<Result<Vec<_>>>()?;
        assert_eq!(items, ["item--0", "item--1"]);
        assert_eq!(fake.call_count(), 0);
        assert_eq!(pager.state(), PagerState::Exhausted);
        Ok(())
    }

    #[test]
    fn error_ends_iteration() {
        let fake = FakeList::new([Ok(page(1, "def")), Err(transport_error())]);
        let mut pager = pager(&fake, page(1, "abc"));
        let mut items = pager.items();
        assert_eq!(items.next().and_then(|r| r.ok()).as_deref(), Some("item-abc-0"));
        assert_eq!(items.next().and_then(|r| r.ok()).as_deref(), Some("item-def-0"));
        let err = items.next().and_then(|r| r.err());
        assert!(err.as_ref().is_some_and(|e| e.is_transport()), "{err:?}");
        assert!(items.next().is_none());
        assert!(items.next().is_none());
        assert_eq!(fake.sent_tokens(), ["abc", "def"]);
        // The last good page remains current.
        assert_eq!(pager.response(), &page(1, "def"));
        assert_eq!(pager.state(), PagerState::HoldingPage);
    }

    #[test]
    fn replay_from_current() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(2, "def")), Ok(page(1, ""))]);
        let mut pager = pager(&fake, page(1, "abc"));
        {
            let mut pages = pager.pages();
            assert_eq!(pages.next().transpose()?, Some(page(1, "abc")));
            assert_eq!(pages.next().transpose()?, Some(page(2, "def")));
        }
        // A new traversal starts with the current page, not the first one.
        let pages = pager.pages().collect::<Result<Vec<_>>>()?;
        assert_eq!(pages, [page(2, "def"), page(1, "")]);
        assert_eq!(fake.call_count(), 2);
        Ok(())
    }

    #[test]
    fn response_delegation() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(1, ""))]);
        let mut pager = pager(&fake, page(1, "abc"));
        assert_eq!(pager.response().unreachable, ["unreachable-abc"]);
        assert_eq!(pager.next_item().transpose()?.as_deref(), Some("item-abc-0"));
        assert_eq!(pager.response().unreachable, ["unreachable-abc"]);
        assert_eq!(pager.next_item().transpose()?.as_deref(), Some("item--0"));
        assert_eq!(pager.response().unreachable, ["unreachable-"]);
        Ok(())
    }

    #[test]
    fn metadata_and_request_fields() -> anyhow::Result<()> {
        let fake = FakeList::new([Ok(page(1, "def")), Ok(page(1, ""))]);
        let pager = pager(&fake, page(1, "abc"));
        let want_options = pager.options().clone();
        let _ = pager.into_iter().collect::<Result<Vec<_>>>()?;
        assert_eq!(fake.sent_options(), vec![want_options.clone(), want_options]);
        for request in fake.sent_requests() {
            assert_eq!(request.parent, "projects/test-project");
            assert_eq!(request.page_size, 3);
        }
        Ok(())
    }

    #[test]
    fn debug() {
        let fake = FakeList::default();
        let pager = pager(&fake, page(1, "abc"));
        let fmt = format!("{pager:?}");
        assert!(fmt.contains("item-abc-0"), "{fmt}");
        assert!(fmt.contains("HoldingPage"), "{fmt}");
    }

    #[test]
    fn is_send() {
        static_assertions::assert_impl_all!(Pager<TestRequest, TestResponse>: Send);
    }
}
