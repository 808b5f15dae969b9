//! Response envelopes used by the school API.
//!
//! The server is loose about what it includes, so every envelope field is
//! optional and the defaulting rule lives next to the type.

use serde::{Deserialize, Serialize};

/// `{ data: T[] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    /// Items of the response; absent or null `data` means no items
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// `{ data: T[], pagination: {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Option<Vec<T>>,
    pub pagination: Option<Pagination>,
}

impl<T> PaginatedResponse<T> {
    /// Splits into items and pagination, applying the defaults for absent fields
    pub fn into_parts(self) -> (Vec<T>, Pagination) {
        (
            self.data.unwrap_or_default(),
            self.pagination.unwrap_or_default(),
        )
    }
}

/// Server-side paging metadata of the teacher list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// 1-based page number
    pub current_page: u32,
    pub total_pages: u32,
    pub total_teachers: u64,
    /// Page size
    pub limit: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: Self::DEFAULT_PAGE,
            total_pages: 1,
            total_teachers: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// `{ message: string }` returned by the creation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}

impl MessageResponse {
    /// Message text, if the server sent a non-blank one
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_defaults_when_fields_absent() {
        let resp: PaginatedResponse<serde_json::Value> = serde_json::from_str("{}").unwrap();
        let (items, pagination) = resp.into_parts();
        assert!(items.is_empty());
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_null_data_is_empty_list() {
        let resp: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(resp.into_items().is_empty());
    }

    #[test]
    fn test_partial_pagination_keeps_defaults_for_missing_fields() {
        let p: Pagination = serde_json::from_str(r#"{"currentPage": 3, "totalTeachers": 77}"#).unwrap();
        assert_eq!(p.current_page, 3);
        assert_eq!(p.total_teachers, 77);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let m: MessageResponse = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(m.text(), None);
        let m: MessageResponse = serde_json::from_str(r#"{"message": "Đã tạo"}"#).unwrap();
        assert_eq!(m.text(), Some("Đã tạo"));
    }
}
