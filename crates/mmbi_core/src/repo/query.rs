//! List/search query options.
//!
//! # Invariants
//! - Options are validated before any request is built.
//! - Sort orders are emitted in declaration order as repeated `sort` pairs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SORT_PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("valid sort property regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// Entity property, optionally dotted (`fiscalYear.id`).
    pub property: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parses the `property[,asc|desc]` form used on the wire and in the CLI.
    pub fn parse(value: &str) -> Result<Self, QueryValidationError> {
        let mut parts = value.splitn(2, ',');
        let property = parts.next().unwrap_or("").trim();
        let direction = match parts.next().map(|raw| raw.trim().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(raw) if raw == "asc" => SortDirection::Asc,
            Some(raw) if raw == "desc" => SortDirection::Desc,
            Some(raw) => return Err(QueryValidationError::InvalidSortDirection(raw)),
        };
        let order = Self {
            property: property.to_string(),
            direction,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), QueryValidationError> {
        if !SORT_PROPERTY_RE.is_match(self.property.as_str()) {
            return Err(QueryValidationError::InvalidSortProperty(
                self.property.clone(),
            ));
        }
        Ok(())
    }

    fn to_wire(&self) -> String {
        format!("{},{}", self.property, self.direction.as_str())
    }
}

/// Pagination, sorting and free-text options for list and search calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Zero-based page index.
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<SortOrder>,
    /// Free-text query, required by search.
    pub query: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    pub fn sort_by(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn validate(&self) -> Result<(), QueryValidationError> {
        if self.size == Some(0) {
            return Err(QueryValidationError::ZeroPageSize);
        }
        if let Some(query) = self.query.as_deref() {
            if query.trim().is_empty() {
                return Err(QueryValidationError::BlankQuery);
            }
        }
        self.sort.iter().try_for_each(SortOrder::validate)
    }

    /// Validates and renders options as ordered query pairs.
    pub fn to_query_pairs(&self) -> Result<Vec<(String, String)>, QueryValidationError> {
        self.validate()?;

        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }
        for order in &self.sort {
            pairs.push(("sort".to_string(), order.to_wire()));
        }
        if let Some(query) = self.query.as_deref() {
            pairs.push(("query".to_string(), query.trim().to_string()));
        }
        Ok(pairs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    ZeroPageSize,
    BlankQuery,
    InvalidSortProperty(String),
    InvalidSortDirection(String),
}

impl Display for QueryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPageSize => write!(f, "page size must be greater than zero"),
            Self::BlankQuery => write!(f, "search query must not be blank"),
            Self::InvalidSortProperty(value) => write!(f, "invalid sort property `{value}`"),
            Self::InvalidSortDirection(value) => {
                write!(f, "invalid sort direction `{value}`; expected asc|desc")
            }
        }
    }
}

impl Error for QueryValidationError {}
