//! Page requests and the paged-result envelope shared by list endpoints.
//!
//! The wire shape follows the familiar Spring Data layout so existing clients
//! keep working:
//!
//! ```json
//! {
//!   "content": [ ... ],
//!   "pageable": { "pageNumber": 1, "pageSize": 25, "offset": 25 },
//!   "totalElements": 42,
//!   "totalPages": 2,
//!   "number": 1,
//!   "size": 25,
//!   "numberOfElements": 17,
//!   "first": false,
//!   "last": true,
//!   "empty": false
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Page size used when a client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page size served. Larger requests are capped to it.
pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be at least 1")]
pub struct InvalidPageSize;

/// A zero-based page index together with a page size (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, InvalidPageSize> {
        if page_size == 0 {
            return Err(InvalidPageSize);
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first element of this page in the full result set.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The `pageable` object of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    pub offset: u64,
}

impl From<PageRequest> for Pageable {
    fn from(page: PageRequest) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            offset: page.offset(),
        }
    }
}

/// One page of a larger result set.
///
/// Expected: `content.len() <= size` and `total_elements >= content.len()`.
/// Content and total are carried exactly as received; this type never
/// recomputes which slice it represents. Derived fields are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    content: Vec<T>,
    pageable: Pageable,
    total_elements: u64,
    total_pages: u64,
    /// Zero-based index of this page
    number: u32,
    /// Requested page size
    size: u32,
    /// Elements actually on this page
    number_of_elements: usize,
    first: bool,
    last: bool,
    empty: bool,
}

impl<T> PagedResult<T> {
    pub fn new(content: Vec<T>, page: PageRequest, total_elements: u64) -> Self {
        let received = content.len() as u64;
        if received > u64::from(page.page_size()) || received > total_elements {
            tracing::warn!(
                received,
                page_size = page.page_size(),
                total_elements,
                "Page content does not fit the requested page"
            );
        }
        let total_pages = total_elements.div_ceil(u64::from(page.page_size()));

        Self {
            pageable: page.into(),
            total_elements,
            total_pages,
            number: page.page_number(),
            size: page.page_size(),
            number_of_elements: content.len(),
            first: page.page_number() == 0,
            last: u64::from(page.page_number()) + 1 >= total_pages,
            empty: content.is_empty(),
            content,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn pageable(&self) -> PageRequest {
        PageRequest {
            page_number: self.number,
            page_size: self.size,
        }
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_request_rejects_zero_size() {
        assert_eq!(PageRequest::new(0, 0), Err(InvalidPageSize));
        assert!(PageRequest::new(3, 1).is_ok());
    }

    #[test]
    fn test_page_request_offset() {
        let page = PageRequest::new(2, 25).unwrap();
        assert_eq!(page.offset(), 50);

        let huge = PageRequest::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(huge.offset(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_page_request_default() {
        let page = PageRequest::default();
        assert_eq!(page.page_number(), 0);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_second_page_of_two() {
        let page = PagedResult::new(vec!["b"], PageRequest::new(1, 1).unwrap(), 2);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(page.content(), &["b"]);
        assert_eq!(page.total_elements(), 2);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(json["first"], false);
        assert_eq!(json["last"], true);
    }

    #[test]
    fn test_new_keeps_content_and_total_as_received() {
        let page = PagedResult::new(vec!["Beer1", "Beer4"], PageRequest::new(1, 1).unwrap(), 2);
        assert_eq!(page.content(), &["Beer1", "Beer4"]);
        assert_eq!(page.total_elements(), 2);
        assert_eq!(page.pageable(), PageRequest::new(1, 1).unwrap());

        let short_total = PagedResult::new(vec![1, 2], PageRequest::new(0, 5).unwrap(), 0);
        let json = serde_json::to_value(&short_total).unwrap();
        assert_eq!(json["totalElements"], 0);
        assert_eq!(json["numberOfElements"], 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty_but_keeps_total() {
        let page: PagedResult<i32> = PagedResult::new(Vec::new(), PageRequest::new(9, 10).unwrap(), 12);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["content"], json!([]));
        assert_eq!(json["totalElements"], 12);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["empty"], true);
        assert_eq!(json["last"], true);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let page = PagedResult::new(vec![json!({"id": 1})], PageRequest::new(0, 25).unwrap(), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            json!({
                "content": [{"id": 1}],
                "pageable": {"pageNumber": 0, "pageSize": 25, "offset": 0},
                "totalElements": 1,
                "totalPages": 1,
                "number": 0,
                "size": 25,
                "numberOfElements": 1,
                "first": true,
                "last": true,
                "empty": false
            })
        );
    }
}
