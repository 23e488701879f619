//! Filter/sort/paginate helpers for the admin list views.
//!
//! Every list view loads its full row set once per request and applies
//! these steps in memory, in order: substring filter, status filter,
//! sort, page slice. Row counts are hundreds at most, so the full scans
//! stay cheap. A larger dataset would push all of this into the queries
//! instead.

use std::cmp::Ordering;

use serde::Deserialize;
use time::Date;

pub const CUSTOMER_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    Desc,
}

impl Default for SortDir {
    fn default() -> Self {
        SortDir::Asc
    }
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Query-string shape shared by the admin list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<SortDir>,
    pub page: Option<usize>,
}

/// Case-insensitive substring match of `query` against any of the row's
/// searchable fields. An empty query keeps every row.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_rows<T, F>(rows: Vec<T>, query: Option<&str>, fields: F) -> Vec<T>
where
    F: Fn(&T) -> Vec<String>,
{
    match query {
        Some(q) if !q.trim().is_empty() => rows
            .into_iter()
            .filter(|row| {
                let fields = fields(row);
                let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
                matches_query(q, &refs)
            })
            .collect(),
        _ => rows,
    }
}

/// Case-insensitive string ordering; ties fall back to the raw bytes so
/// the sort stays stable across repeated renders.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn sort_rows<T, K>(rows: &mut [T], dir: SortDir, key: K)
where
    K: Fn(&T) -> String,
{
    rows.sort_by(|a, b| {
        let ordering = compare_text(&key(a), &key(b));
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

/// Fixed-size page slice; pages are 1-based and an out-of-range page is
/// empty rather than an error.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1) * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Builds CSV text with a header row plus one row per record. Every cell
/// is wrapped in double quotes and nothing more; a cell containing a
/// double quote produces malformed CSV. Known limitation, kept as is.
pub fn csv_export(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_row(headers.iter().map(|h| h.to_string()).collect()));
    for row in rows {
        lines.push(csv_row(row.clone()));
    }
    lines.join("\n")
}

fn csv_row(cells: Vec<String>) -> String {
    cells
        .into_iter()
        .map(|cell| format!("\"{}\"", cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Download filename stamped with the export date.
pub fn csv_filename(prefix: &str, today: Date) -> String {
    format!("{}-{}.csv", prefix, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        created_at: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Bob".into(),
                created_at: "2024-01-01".into(),
            },
            Row {
                name: "Ann".into(),
                created_at: "2024-06-01".into(),
            },
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let kept = filter_rows(rows(), Some("bo"), |r| vec![r.name.clone()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Bob");

        let all = filter_rows(rows(), Some("  "), |r| vec![r.name.clone()]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn sort_ascending_then_toggled_reverses() {
        let mut data = rows();
        sort_rows(&mut data, SortDir::Asc, |r| r.name.clone());
        assert_eq!(data[0].name, "Ann");
        assert_eq!(data[1].name, "Bob");

        sort_rows(&mut data, SortDir::Asc.toggled(), |r| r.name.clone());
        assert_eq!(data[0].name, "Bob");
        assert_eq!(data[1].name, "Ann");
    }

    #[test]
    fn pagination_slices_fixed_pages() {
        let data: Vec<i32> = (0..60).collect();
        assert_eq!(paginate(&data, 1, 25).len(), 25);
        assert_eq!(paginate(&data, 3, 25), &data[50..60]);
        assert!(paginate(&data, 4, 25).is_empty());
        assert_eq!(page_count(60, 25), 3);
        assert_eq!(page_count(0, 25), 1);
    }

    #[test]
    fn csv_quotes_every_cell() {
        let csv = csv_export(
            &["name", "email"],
            &[vec!["O'Brien".into(), "x@y.com".into()]],
        );
        assert_eq!(csv, "\"name\",\"email\"\n\"O'Brien\",\"x@y.com\"");
    }

    #[test]
    fn csv_filename_carries_the_date() {
        assert_eq!(
            csv_filename("customers", date!(2025 - 07 - 01)),
            "customers-2025-07-01.csv"
        );
    }
}
