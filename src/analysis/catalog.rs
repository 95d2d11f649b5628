use crate::models::Coin;

/// Coins whose name or symbol contains `query`, ignoring case, in their original order.
/// A blank query keeps everything.
pub fn filter<'a>(coins: &'a [Coin], query: &str) -> Vec<&'a Coin> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return coins.iter().collect();
    }
    coins
        .iter()
        .filter(|coin| {
            coin.name.to_lowercase().contains(&needle)
                || coin.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The `page`-th (1-based) window of `page_size` items. Past the end is empty, never an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_count.div_ceil(page_size)
}

/// One rendered page of the catalog table.
#[derive(Debug)]
pub struct CatalogPage<'a> {
    pub rows: Vec<&'a Coin>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl CatalogPage<'_> {
    /// Zero or one page means no pagination controls.
    pub fn needs_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Search text and current page for the catalog table.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    query: String,
    page: usize,
    page_size: usize,
}

impl CatalogQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns true if the text changed. A new query always goes back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.page = 1;
        true
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn apply<'a>(&self, coins: &'a [Coin]) -> CatalogPage<'a> {
        let filtered = filter(coins, &self.query);
        let total_pages = total_pages(filtered.len(), self.page_size);
        CatalogPage {
            rows: paginate(&filtered, self.page, self.page_size).to_vec(),
            page: self.page,
            total_pages,
            filtered_count: filtered.len(),
        }
    }
}
