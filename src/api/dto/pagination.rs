//! Pagination query parameters and the paged response shape.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 20;

/// `page` / `limit` query parameters.
///
/// Values arrive as raw strings and are parsed leniently: a missing,
/// non-numeric, or out-of-range value falls back to the default instead of
/// failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageParams {
    /// Requested page, 1-based. Defaults to 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|v| v.parse().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Page size. Defaults to 20.
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|v| v.parse().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT)
    }
}

/// One page of a filtered collection:
/// `{ items, total, page, pages }` with `pages = ceil(total / limit)`.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

impl<T> Page<T> {
    /// Slices an already-filtered collection. Filtering must happen before
    /// pagination; `total` and `pages` describe the filtered set.
    ///
    /// A page past the end yields empty `items` with unchanged `total`/`pages`.
    pub fn paginate(filtered: Vec<T>, params: &PageParams) -> Self {
        let page = params.page();
        let limit = params.limit();

        let total = filtered.len();
        let pages = total.div_ceil(limit);
        let start = (page - 1).saturating_mul(limit);
        let items: Vec<T> = filtered.into_iter().skip(start).take(limit).collect();

        Self {
            items,
            total,
            page,
            pages,
        }
    }
}
