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

use super::{PageableRequest, PageableResponse, PagerState};
use crate::error::Error;
use crate::options::RequestOptions;

/// The state shared by [Pager][super::Pager] and
/// [AsyncPager][super::AsyncPager].
///
/// The cursor owns the request, the current response, and the position
/// within the current page. It decides when a new page is needed and prepares
/// the request for it, but it never calls the list method: the pagers make
/// the (blocking or async) call and hand the result back via [adopt] or
/// [fetch_failed].
///
/// [adopt]: PageCursor::adopt
/// [fetch_failed]: PageCursor::fetch_failed
#[derive(Debug)]
pub(crate) struct PageCursor<Req, Resp> {
    request: Req,
    response: Resp,
    options: RequestOptions,
    state: PagerState,
    // Set once the current page was returned, or entered via its items.
    page_returned: bool,
    next_item: usize,
    // Number of pages adopted, including the initial one.
    pages: usize,
}

impl<Req, Resp> PageCursor<Req, Resp> {
    pub fn response(&self) -> &Resp {
        &self.response
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn state(&self) -> PagerState {
        self.state
    }
}

impl<Req, Resp> PageCursor<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse,
{
    pub fn new(request: Req, response: Resp, options: RequestOptions) -> Self {
        Self {
            request,
            response,
            options,
            state: PagerState::HoldingPage,
            page_returned: false,
            next_item: 0,
            pages: 1,
        }
    }

    /// Moves the position back to the start of the current page.
    pub fn rewind(&mut self) {
        self.state = PagerState::HoldingPage;
        self.page_returned = false;
        self.next_item = 0;
    }

    /// Returns the current page, unless it was already returned.
    pub fn take_page(&mut self) -> Option<Resp>
    where
        Resp: Clone,
    {
        if self.page_returned {
            return None;
        }
        self.page_returned = true;
        self.next_item = self.response.items().len();
        self.settle();
        Some(self.response.clone())
    }

    /// Returns the next item in the current page, if any.
    pub fn take_item(&mut self) -> Option<Resp::PageItem>
    where
        Resp::PageItem: Clone,
    {
        self.page_returned = true;
        let item = self.response.items().get(self.next_item).cloned();
        if item.is_some() {
            self.next_item += 1;
        }
        self.settle();
        item
    }

    // The last page is exhausted as soon as everything in it was handed out.
    fn settle(&mut self) {
        if self.page_returned
            && self.next_item >= self.response.items().len()
            && self.response.next_page_token().is_empty()
        {
            self.state = PagerState::Exhausted;
        }
    }

    /// Prepares the request for the next page.
    ///
    /// Returns `None`, and moves to [PagerState::Exhausted], if the current
    /// page is the last one. Otherwise it updates the page token in the owned
    /// request and returns a copy of the request and the options to send.
    pub fn start_fetch(&mut self) -> Option<(Req, RequestOptions)> {
        let token = self.response.next_page_token();
        if token.is_empty() {
            tracing::trace!(pages = self.pages, "last page reached");
            self.state = PagerState::Exhausted;
            return None;
        }
        tracing::debug!(
            page_token = %token,
            previous_token = %self.request.page_token(),
            pages = self.pages,
            "fetching next page"
        );
        self.request.set_page_token(token);
        self.state = PagerState::Fetching;
        Some((self.request.clone(), self.options.clone()))
    }

    /// Replaces the current page with a newly fetched one.
    pub fn adopt(&mut self, response: Resp) {
        self.pages += 1;
        tracing::trace!(
            pages = self.pages,
            items = response.items().len(),
            "adopted new page"
        );
        self.response = response;
        self.state = PagerState::HoldingPage;
        self.page_returned = false;
        self.next_item = 0;
    }

    /// Records a failed fetch. The previous page remains current.
    pub fn fetch_failed(&mut self, error: &Error) {
        tracing::debug!(pages = self.pages, "cannot fetch next page: {error}");
        self.state = PagerState::HoldingPage;
    }
}
