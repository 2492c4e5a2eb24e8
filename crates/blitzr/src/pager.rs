// SPDX-License-Identifier: GPL-3.0-or-later

//! Lazy pagination over Blitzr list endpoints.
//!
//! List endpoints page with `start`/`limit` query parameters and signal
//! the last page by returning fewer items than `limit`. [`Pager`] walks
//! that protocol: it fetches a page on demand, hands out items one at a
//! time (or page by page), and stops after the first short page.
//! [`SearchPager`] does the same over the search envelope, which also
//! carries the total match count when `extras` is enabled.

use std::collections::VecDeque;

use futures::Stream;
use serde::de::DeserializeOwned;

use crate::client::BlitzrClient;
use crate::error::{BlitzrError, Result};
use crate::models::SearchResults;
use crate::params::{Params, SearchQuery};

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Auto-fetching pager over a paginated list endpoint.
#[derive(Debug)]
pub struct Pager<'a, T> {
    client: &'a BlitzrClient,
    endpoint: String,
    params: Params,
    start: u32,
    limit: u32,
    buffer: VecDeque<T>,
    exhausted: bool,
}

impl<'a, T: DeserializeOwned> Pager<'a, T> {
    pub(crate) fn new(client: &'a BlitzrClient, endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            params,
            start: 0,
            limit: DEFAULT_PAGE_SIZE,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Offset to start paging from.
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Page size for each fetch.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch the next page, or `None` once the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut params = self.params.clone();
        params.push(("start".into(), self.start.to_string()));
        params.push(("limit".into(), self.limit.to_string()));

        let items: Vec<T> = self.client.get(&self.endpoint, &params).await?;
        self.start += self.limit;

        if (items.len() as u32) < self.limit {
            self.exhausted = true;
        }
        if items.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(Some(items))
    }

    /// Yield the next item, fetching a new page when the buffer runs dry.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        if self.buffer.is_empty() {
            match self.next_page().await? {
                Some(items) => self.buffer.extend(items),
                None => return Ok(None),
            }
        }
        Ok(self.buffer.pop_front())
    }

    /// Drain the remaining pages into a single vector.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        all.extend(self.buffer.drain(..));
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }

    /// Turn the pager into a lazy stream of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            match pager.try_next().await {
                Ok(Some(item)) => Ok(Some((item, pager))),
                Ok(None) => Ok(None),
                Err(err) => Err(err),
            }
        })
    }
}

/// Auto-fetching pager over a search endpoint.
///
/// With `extras` enabled (the default) the API wraps each page in a
/// `{ total, results }` envelope, and [`total`](SearchPager::total)
/// exposes the overall match count without draining the pager.
#[derive(Debug)]
pub struct SearchPager<'a, T> {
    client: &'a BlitzrClient,
    endpoint: String,
    query: SearchQuery,
    start: u32,
    limit: u32,
    total: Option<u64>,
    buffer: VecDeque<T>,
    exhausted: bool,
}

impl<'a, T: DeserializeOwned> SearchPager<'a, T> {
    pub(crate) fn new(
        client: &'a BlitzrClient,
        endpoint: impl Into<String>,
        query: SearchQuery,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            query,
            start: 0,
            limit: DEFAULT_PAGE_SIZE,
            total: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Offset to start paging from.
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Page size for each fetch.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Total number of matches, fetching the first page on demand.
    ///
    /// The page fetched here is buffered, so following up with
    /// [`try_next`](SearchPager::try_next) skips nothing and repeats no
    /// request. Fails with a configuration error when the query was
    /// built with `extras(false)`: the bare-array responses carry no
    /// count.
    pub async fn total(&mut self) -> Result<u64> {
        if !self.query.extras {
            return Err(BlitzrError::Configuration(
                "extras is disabled; the total result count is not available".to_string(),
            ));
        }

        if self.total.is_none() {
            if let Some(items) = self.next_page().await? {
                self.buffer.extend(items);
            }
        }

        self.total
            .ok_or_else(|| BlitzrError::InvalidResponse("search response missing total".to_string()))
    }

    /// Fetch the next page of results, or `None` once exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut params: Params = Vec::new();
        self.query.append_to(&mut params);
        params.push(("start".into(), self.start.to_string()));
        params.push(("limit".into(), self.limit.to_string()));

        let items: Vec<T> = if self.query.extras {
            let page: SearchResults<T> = self.client.get(&self.endpoint, &params).await?;
            self.total = Some(page.total);
            page.results
        } else {
            self.client.get(&self.endpoint, &params).await?
        };
        self.start += self.limit;

        if (items.len() as u32) < self.limit {
            self.exhausted = true;
        }
        if items.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(Some(items))
    }

    /// Yield the next result, fetching a new page when needed.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        if self.buffer.is_empty() {
            match self.next_page().await? {
                Some(items) => self.buffer.extend(items),
                None => return Ok(None),
            }
        }
        Ok(self.buffer.pop_front())
    }

    /// Drain the remaining pages into a single vector.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        all.extend(self.buffer.drain(..));
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }

    /// Turn the pager into a lazy stream of results.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            match pager.try_next().await {
                Ok(Some(item)) => Ok(Some((item, pager))),
                Ok(None) => Ok(None),
                Err(err) => Err(err),
            }
        })
    }
}
