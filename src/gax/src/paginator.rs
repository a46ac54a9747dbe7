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

//! List RPCs return their results one page at a time. Each response contains
//! some items and a `next_page_token`; sending the same request again with
//! `page_token` set to that value returns the following page. An empty
//! `next_page_token` marks the last page.
//!
//! The types in this module hide that protocol. They wrap the list method, the
//! original request, and the first response, and fetch further pages on
//! demand:
//!
//! - [Pager] blocks the calling thread on each page fetch and implements
//!   [Iterator] (via [Pager::pages] and [Pager::items]).
//! - [AsyncPager] awaits each page fetch and implements [futures::Stream]
//!   (via [AsyncPager::pages] and [AsyncPager::items]).
//!
//! Both fetch at most one page at a time, and only when the consumer asks for
//! an item (or page) that is not in the current page. Errors returned by the
//! list method are returned, unmodified, at the iteration step that needed
//! the failed page. There are no retries at this level.
//!
//! Both types keep only the most recent response. Use `response()` to read
//! response-level fields, such as the list of unreachable locations.
//!
//! # Replaying from the current position
//!
//! Each call to `pages()` or `items()` starts a new traversal at the
//! beginning of the *current* page, not at the first page. A pager that was
//! partially consumed replays its current page, then continues with the
//! following pages. Create a new pager (with a new initial request) to list
//! from the start.

mod async_pager;
mod cursor;
mod pager;

pub use async_pager::{AsyncPager, PagerStream};
pub use pager::{IntoItems, Items, Pager, Pages};

/// A request for a List RPC.
///
/// The pagers only change the page token, all other fields are sent exactly
/// as the application set them.
pub trait PageableRequest: Clone {
    /// The token returned by a previous call, empty for the first page.
    fn page_token(&self) -> &str;

    /// Changes the token to fetch the next page.
    fn set_page_token(&mut self, token: String);
}

/// A response for a List RPC, that is, one page of results.
pub trait PageableResponse {
    /// The type of the items in the page.
    type PageItem;

    /// The token for the next page, empty on the last page.
    fn next_page_token(&self) -> String;

    /// The items in this page, in the order returned by the service.
    fn items(&self) -> &[Self::PageItem];
}

/// The position of a pager in the List RPC protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    /// The pager holds a page and may have items (or pages) left to return.
    HoldingPage,
    /// A request for the next page is in progress.
    ///
    /// An [AsyncPager] remains in this state if the future (or stream)
    /// waiting for the page is dropped.
    Fetching,
    /// The current page is the last one and all of it has been returned.
    Exhausted,
}
