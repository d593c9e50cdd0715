//! Pagination primitives shared across all list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a query-string number leniently: non-numeric input becomes
/// `None` so the endpoint falls back to its default instead of erroring.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Maximum items per page.
    const MAX_PER_PAGE: i64 = 100;

    /// Default items per page.
    const DEFAULT_PER_PAGE: i64 = 20;

    pub fn limit(&self) -> i64 {
        self.per_page
            .unwrap_or(Self::DEFAULT_PER_PAGE)
            .clamp(1, Self::MAX_PER_PAGE)
    }

    /// Requested page, 1-based; values below 1 clamp to 1.
    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Saturating so an absurd `page` query value cannot overflow; the
    /// resulting slice is simply empty.
    pub fn offset(&self) -> i64 {
        (self.current_page() - 1).saturating_mul(self.limit())
    }
}

/// Page metadata returned alongside every list payload.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(total_items: i64, pagination: &Pagination) -> Self {
        let per_page = pagination.limit();
        let current_page = pagination.current_page();
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + per_page - 1) / per_page
        };
        Self {
            current_page,
            per_page,
            total_items,
            total_pages,
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
        }
    }
}

/// Paged result envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T: Serialize> PagedResult<T> {
    /// Slice an already filtered (and optionally sorted) collection into a
    /// single page. Out-of-range pages yield an empty `items`, never an
    /// error; slice bounds clamp to the collection size.
    pub fn paginate(records: Vec<T>, pagination: &Pagination) -> Self {
        let total_items = records.len() as i64;
        let meta = PageMeta::new(total_items, pagination);

        let start = pagination.offset().min(total_items) as usize;
        let end = pagination
            .offset()
            .saturating_add(pagination.limit())
            .min(total_items) as usize;
        let items = records.into_iter().take(end).skip(start).collect();

        Self {
            items,
            pagination: meta,
            meta: None,
        }
    }

    /// Attach endpoint-specific aggregate extras (e.g. average rating).
    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }
}
