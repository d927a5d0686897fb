//! List filter state turned into query parameters.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<String>,
}

impl ListQuery {
    pub fn paged(page_size: u32) -> Self {
        Self { page: Some(1), page_size: Some(page_size), ..Default::default() }
    }

    pub fn current_page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Move to a page; page numbers start at 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    /// Changing the search text goes back to the first page.
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.page = self.page.map(|_| 1);
        self
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self.page = self.page.map(|_| 1);
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.filter(|s| !s.is_empty()).map(str::to_string);
        self.page = self.page.map(|_| 1);
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page_size".to_string(), size.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(from) = self.from {
            pairs.push(("start_date".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("end_date".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_order() {
        let q = ListQuery::paged(20)
            .with_page(3)
            .with_range(NaiveDate::from_ymd_opt(2024, 1, 1), None)
            .with_status(Some("approved"));
        let pairs = q.to_pairs();
        assert_eq!(pairs[0], ("page".into(), "1".into()));
        assert!(pairs.contains(&("start_date".into(), "2024-01-01".into())));
        assert_eq!(pairs.last(), Some(&("status".into(), "approved".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "end_date"));
    }

    #[test]
    fn test_search_resets_page() {
        let q = ListQuery::paged(10).with_page(4).with_search("  ravi ");
        assert_eq!(q.current_page(), 1);
        assert_eq!(q.search.as_deref(), Some("ravi"));
        assert_eq!(ListQuery::default().with_search("  ").search, None);
    }

    #[test]
    fn test_unpaged_query_stays_unpaged() {
        let q = ListQuery::default().with_status(Some("paid"));
        assert_eq!(q.to_pairs(), vec![("status".to_string(), "paid".to_string())]);
    }
}
