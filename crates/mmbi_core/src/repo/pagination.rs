//! Pagination metadata carried in list response headers.
//!
//! # Invariants
//! - `X-Total-Count` that is missing or not a number yields `None`.
//! - Link entries without a `page` parameter are ignored.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const LINK_HEADER: &str = "link";

static LINK_ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([^>]*)>\s*;\s*rel="?([a-z]+)"?"#).expect("valid link entry regex")
});
static PAGE_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]page=(\d+)").expect("valid page param regex"));

/// Page numbers advertised by the `Link` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl PageLinks {
    /// Parses `<url?page=1&size=20>; rel="next", ...`.
    pub fn parse(header: &str) -> Self {
        let mut links = Self::default();
        for entry in LINK_ENTRY_RE.captures_iter(header) {
            let page = PAGE_PARAM_RE
                .captures(&entry[1])
                .and_then(|captures| captures[1].parse::<u32>().ok());
            let Some(page) = page else {
                continue;
            };
            match &entry[2] {
                "first" => links.first = Some(page),
                "prev" => links.prev = Some(page),
                "next" => links.next = Some(page),
                "last" => links.last = Some(page),
                _ => {}
            }
        }
        links
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

pub fn parse_total_count(value: Option<&str>) -> Option<u64> {
    value.and_then(|raw| raw.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::{parse_total_count, PageLinks};

    #[test]
    fn parses_all_relations() {
        let header = concat!(
            r#"</api/fiscal-years?page=2&size=20>; rel="next","#,
            r#"</api/fiscal-years?page=0&size=20>; rel="prev","#,
            r#"</api/fiscal-years?page=5&size=20>; rel="last","#,
            r#"</api/fiscal-years?page=0&size=20>; rel="first""#,
        );
        let links = PageLinks::parse(header);
        assert_eq!(
            links,
            PageLinks {
                first: Some(0),
                prev: Some(0),
                next: Some(2),
                last: Some(5),
            }
        );
        assert!(links.has_next());
    }

    #[test]
    fn ignores_garbage() {
        assert_eq!(PageLinks::parse("nonsense"), PageLinks::default());
        assert_eq!(
            PageLinks::parse(r#"</api/x?size=20>; rel="next""#),
            PageLinks::default()
        );
    }

    #[test]
    fn total_count_tolerates_missing_values() {
        assert_eq!(parse_total_count(Some(" 42 ")), Some(42));
        assert_eq!(parse_total_count(Some("many")), None);
        assert_eq!(parse_total_count(None), None);
    }
}
