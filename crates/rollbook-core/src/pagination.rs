//! Pagination query parameters and list-response metadata.

use serde::{Deserialize, Serialize};

/// Page/limit pair sent as query parameters on listing endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(10),
        }
    }
}

impl PageQuery {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Page number, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10 and clamped between 1 and 100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Offset equivalent of the page/limit pair.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Metadata block the backend attaches to every list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Standard list-response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn missing_values_fall_back() {
        let query = PageQuery::new(None, None);
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn limit_clamps_into_range() {
        assert_eq!(PageQuery::new(None, Some(0)).limit(), 1);
        assert_eq!(PageQuery::new(None, Some(-3)).limit(), 1);
        assert_eq!(PageQuery::new(None, Some(150)).limit(), 100);
        assert_eq!(PageQuery::new(None, Some(100)).limit(), 100);
    }

    #[test]
    fn page_never_drops_below_one() {
        assert_eq!(PageQuery::new(Some(0), None).page(), 1);
        assert_eq!(PageQuery::new(Some(-2), None).page(), 1);
    }

    #[test]
    fn offset_derives_from_page_and_limit() {
        let query = PageQuery::new(Some(3), Some(25));
        assert_eq!(query.offset(), 50);
    }

    #[test]
    fn query_serializes_only_present_fields() {
        let query = PageQuery::new(Some(2), None);
        let encoded = serde_json::to_string(&query).unwrap();
        assert_eq!(encoded, r#"{"page":2}"#);
    }

    #[test]
    fn paginated_envelope_deserializes() {
        let body = r#"{
            "data": ["a", "b"],
            "meta": {"page": 1, "limit": 10, "total": 2, "total_pages": 1}
        }"#;
        let page: Paginated<String> = serde_json::from_str(body).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 2);
    }
}
