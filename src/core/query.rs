//! Query parameters and pagination for the sales-rep listing

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::rep::SalesRep;

/// Query parameters for the listing endpoint
///
/// This structure is extracted from the URL query string. All parameters
/// have defaults, so a bare `GET /api/sales-reps` is a valid request.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_sales_reps(
///     Query(params): Query<RepQuery>,
/// ) -> Json<RepPage> {
///     // params.page defaults to 1
///     // params.page_size defaults to 10
/// }
///
/// // Usage:
/// GET /api/sales-reps?page=2&page_size=5
/// GET /api/sales-reps?region=europe&sort_by=name&sort_order=desc
/// GET /api/sales-reps?role=manager&id=3
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RepQuery {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Field to sort by: one of id, name, role, region
    ///
    /// Any other value compares every record as equal, which leaves the
    /// filtered order untouched.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Sort direction: `asc` (default) or `desc`, case-insensitive
    #[serde(default = "default_sort_order")]
    pub sort_order: String,

    /// Exact-match filter on `id`
    pub id: Option<i64>,

    /// Case-insensitive substring filter on `name`
    pub name: Option<String>,

    /// Case-insensitive substring filter on `role`
    pub role: Option<String>,

    /// Case-insensitive substring filter on `region`
    pub region: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_order() -> String {
    "asc".to_string()
}

impl Default for RepQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
            id: None,
            name: None,
            role: None,
            region: None,
        }
    }
}

impl RepQuery {
    /// Get page number, ensuring a minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, ensuring a minimum of 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// One page of the filtered, sorted record collection
#[derive(Debug, Serialize)]
pub struct RepPage {
    /// Total number of records matching the filters
    pub total_data: usize,

    /// Total number of pages at the requested page size (0 when nothing matches)
    pub total_page: usize,

    /// The page this response carries (starts at 1)
    pub current_page: usize,

    /// Number of records per page
    pub page_size: usize,

    /// The records for this page
    pub sales_reps: Vec<SalesRep>,
}

/// Run one listing query over the record collection.
///
/// Filters combine with logical AND and are applied before sorting. The
/// sort is stable, so records with equal keys keep their relative input
/// order. A `page` beyond the last page yields an empty slice with the
/// pagination metadata still correct — never an error.
///
/// The input is never mutated; each invocation works on a fresh set of
/// references and clones only the records on the returned page.
pub fn run(records: &[SalesRep], params: &RepQuery) -> RepPage {
    let mut matched: Vec<&SalesRep> = records
        .iter()
        .filter(|rep| {
            params.id.is_none_or(|id| rep.id == id)
                && matches_substring(&rep.name, params.name.as_deref())
                && matches_substring(&rep.role, params.role.as_deref())
                && matches_substring(&rep.region, params.region.as_deref())
        })
        .collect();

    sort_records(&mut matched, &params.sort_by, &params.sort_order);

    let page = params.page();
    let page_size = params.page_size();
    let total_data = matched.len();
    let total_page = if total_data == 0 {
        0
    } else {
        total_data.div_ceil(page_size)
    };

    let start = (page - 1).saturating_mul(page_size).min(total_data);
    let end = start.saturating_add(page_size).min(total_data);

    RepPage {
        total_data,
        total_page,
        current_page: page,
        page_size,
        sales_reps: matched[start..end].iter().map(|rep| (*rep).clone()).collect(),
    }
}

/// Case-insensitive substring match. An absent or empty filter matches everything.
fn matches_substring(field: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) if f.is_empty() => true,
        Some(f) => field.to_lowercase().contains(&f.to_lowercase()),
    }
}

/// Stable sort by the named field.
///
/// `id` compares numerically; the string fields compare on the raw field
/// value (byte order, not case-normalized). An unrecognized field name
/// treats every key as equal, so the input order survives.
fn sort_records(records: &mut [&SalesRep], sort_by: &str, sort_order: &str) {
    let compare: fn(&SalesRep, &SalesRep) -> Ordering = match sort_by {
        "id" => |a, b| a.id.cmp(&b.id),
        "name" => |a, b| a.name.cmp(&b.name),
        "role" => |a, b| a.role.cmp(&b.role),
        "region" => |a, b| a.region.cmp(&b.region),
        _ => return,
    };

    if sort_order.eq_ignore_ascii_case("desc") {
        records.sort_by(|a, b| compare(a, b).reverse());
    } else {
        records.sort_by(|a, b| compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn rep(id: i64, name: &str, role: &str, region: &str) -> SalesRep {
        SalesRep {
            id,
            name: name.to_string(),
            role: role.to_string(),
            region: region.to_string(),
            extra: Map::new(),
        }
    }

    fn sample() -> Vec<SalesRep> {
        vec![
            rep(1, "Alice", "Rep", "East"),
            rep(2, "bob", "Manager", "West"),
            rep(3, "Carol", "Rep", "East"),
            rep(4, "Dave", "Director", "North"),
            rep(5, "Erin", "Rep", "West"),
        ]
    }

    fn names(page: &RepPage) -> Vec<String> {
        page.sales_reps.iter().map(|r| r.name.clone()).collect()
    }

    // === defaults ===

    #[test]
    fn test_query_defaults() {
        let params = RepQuery::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.sort_by, "id");
        assert_eq!(params.sort_order, "asc");
    }

    #[test]
    fn test_default_query_returns_everything() {
        let page = run(&sample(), &RepQuery::default());
        assert_eq!(page.total_data, 5);
        assert_eq!(page.total_page, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.sales_reps.len(), 5);
    }

    // === filtering ===

    #[test]
    fn test_filter_id_exact_match() {
        let params = RepQuery {
            id: Some(1),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(page.total_data, 1);
        assert_eq!(page.sales_reps[0].id, 1);
    }

    #[test]
    fn test_filter_name_case_insensitive_substring() {
        let params = RepQuery {
            name: Some("ALI".to_string()),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(names(&page), vec!["Alice"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let params = RepQuery {
            role: Some("rep".to_string()),
            region: Some("west".to_string()),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(names(&page), vec!["Erin"]);
    }

    #[test]
    fn test_empty_filter_string_is_inactive() {
        let params = RepQuery {
            name: Some(String::new()),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(page.total_data, 5);
    }

    #[test]
    fn test_filtered_is_subset_satisfying_predicates() {
        let records = sample();
        let params = RepQuery {
            region: Some("east".to_string()),
            ..RepQuery::default()
        };
        let page = run(&records, &params);

        assert!(page.total_data < records.len());
        for rep in &page.sales_reps {
            assert!(rep.region.to_lowercase().contains("east"));
            assert!(records.iter().any(|r| r.id == rep.id));
        }
    }

    // === sorting ===

    #[test]
    fn test_sort_name_desc_uses_raw_byte_order() {
        // Lowercase 'b' sorts after uppercase 'A' in byte order, so desc
        // puts bob first.
        let records = vec![
            rep(1, "Alice", "Rep", "East"),
            rep(2, "bob", "Manager", "West"),
        ];
        let params = RepQuery {
            sort_by: "name".to_string(),
            sort_order: "desc".to_string(),
            ..RepQuery::default()
        };
        let page = run(&records, &params);
        assert_eq!(names(&page), vec!["bob", "Alice"]);
    }

    #[test]
    fn test_sort_order_flag_is_case_insensitive() {
        let params = RepQuery {
            sort_by: "id".to_string(),
            sort_order: "DESC".to_string(),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(page.sales_reps[0].id, 5);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let params = RepQuery {
            sort_by: "region".to_string(),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        // East: Alice(1) before Carol(3); West: bob(2) before Erin(5)
        assert_eq!(names(&page), vec!["Alice", "Carol", "Dave", "bob", "Erin"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let params = RepQuery {
            sort_by: "role".to_string(),
            ..RepQuery::default()
        };
        let once = run(&sample(), &params);
        let twice = run(&once.sales_reps, &params);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_unknown_sort_field_preserves_input_order() {
        let params = RepQuery {
            sort_by: "deals".to_string(),
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(
            page.sales_reps.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_sorting_does_not_mutate_input() {
        let records = sample();
        let params = RepQuery {
            sort_by: "name".to_string(),
            sort_order: "desc".to_string(),
            ..RepQuery::default()
        };
        let _ = run(&records, &params);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[4].id, 5);
    }

    // === pagination ===

    #[test]
    fn test_pages_partition_the_filtered_set() {
        let records = sample();
        let mut seen = Vec::new();

        let first = run(
            &records,
            &RepQuery {
                page_size: 2,
                ..RepQuery::default()
            },
        );
        assert_eq!(first.total_page, 3);

        for page_no in 1..=first.total_page {
            let page = run(
                &records,
                &RepQuery {
                    page: page_no,
                    page_size: 2,
                    ..RepQuery::default()
                },
            );
            assert!(page.sales_reps.len() <= 2);
            seen.extend(page.sales_reps.iter().map(|r| r.id));
        }

        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_beyond_total_is_empty_not_an_error() {
        let params = RepQuery {
            page: 99,
            page_size: 2,
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert!(page.sales_reps.is_empty());
        assert_eq!(page.total_data, 5);
        assert_eq!(page.total_page, 3);
        assert_eq!(page.current_page, 99);
    }

    #[test]
    fn test_last_page_is_partial() {
        let params = RepQuery {
            page: 3,
            page_size: 2,
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(page.sales_reps.len(), 1);
        assert_eq!(page.sales_reps[0].id, 5);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let page = run(&[], &RepQuery::default());
        assert_eq!(page.total_data, 0);
        assert_eq!(page.total_page, 0);
        assert!(page.sales_reps.is_empty());
    }

    #[test]
    fn test_non_positive_page_and_size_clamp_to_one() {
        let params = RepQuery {
            page: 0,
            page_size: 0,
            ..RepQuery::default()
        };
        let page = run(&sample(), &params);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.sales_reps.len(), 1);
        assert_eq!(page.total_page, 5);
    }
}
