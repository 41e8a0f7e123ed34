//! # Paginated responses
//!
//! The API returns one page of items as a plain JSON array and describes the
//! page in four response headers:
//!
//! | Header | Field |
//! |--------|-------|
//! | `x-pagenumber` | [`PaginationResult::page_number`] |
//! | `x-pagesize` | [`PaginationResult::page_size`] |
//! | `x-totalpages` | [`PaginationResult::total_pages`] |
//! | `x-totalrecords` | [`PaginationResult::total_records`] |
//!
//! [`PaginationResult::from_parts`] stitches body and headers back together.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const PAGE_NUMBER_HEADER: &str = "x-pagenumber";
pub const PAGE_SIZE_HEADER: &str = "x-pagesize";
pub const TOTAL_PAGES_HEADER: &str = "x-totalpages";
pub const TOTAL_RECORDS_HEADER: &str = "x-totalrecords";

/// One page of `T` plus its position in the full collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl<T> PaginationResult<T> {
    /// Combine a decoded body with the pagination headers of its response.
    pub fn from_parts(items: Vec<T>, headers: &HeaderMap) -> Result<Self, ApiError> {
        Ok(Self {
            items,
            page_number: header_number(headers, PAGE_NUMBER_HEADER)?,
            page_size: header_number(headers, PAGE_SIZE_HEADER)?,
            total_pages: header_number(headers, TOTAL_PAGES_HEADER)?,
            total_records: header_number(headers, TOTAL_RECORDS_HEADER)?,
        })
    }

    /// Page metadata without the items.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_records: self.total_records,
        }
    }
}

/// Page metadata as shown under a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 0,
            total_pages: 1,
            total_records: 0,
        }
    }
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

fn header_number<N: std::str::FromStr>(
    headers: &HeaderMap,
    header: &'static str,
) -> Result<N, ApiError> {
    let raw = headers.get(header).and_then(|v| v.to_str().ok()).map(str::trim);
    raw.and_then(|v| v.parse().ok()).ok_or_else(|| ApiError::Pagination {
        header,
        value: raw.map(str::to_string),
    })
}
