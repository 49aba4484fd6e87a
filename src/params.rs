use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Common query parameters for public list endpoints. `T` names the
/// endpoint-specific sort keys.
#[derive(Deserialize, Debug, Default)]
pub struct ListParams<T> {
    limit: Option<i64>,
    offset: Option<i64>,
    sort: Option<T>,
    sort_by: Option<SortDirection>,
    search: Option<String>,
}

impl<T> ListParams<T> {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn sort(&self) -> Option<&T> {
        self.sort.as_ref()
    }

    pub fn sort_by(&self) -> SortDirection {
        self.sort_by.unwrap_or(SortDirection::Desc)
    }

    /// ILIKE pattern for the optional free-text filter.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| format!("%{}%", s))
    }
}

#[cfg(test)]
impl<T> ListParams<T> {
    /// Test constructor; route tests use it to drive query building.
    pub fn with(sort: Option<T>, sort_by: Option<SortDirection>, search: Option<&str>) -> Self {
        Self {
            limit: None,
            offset: None,
            sort,
            sort_by,
            search: search.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_clamped() {
        let params: ListParams<()> = ListParams {
            limit: Some(10_000),
            offset: Some(-5),
            ..Default::default()
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn defaults_apply_when_absent() {
        let params: ListParams<()> = ListParams::default();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
        assert!(params.search_pattern().is_none());
    }
}
