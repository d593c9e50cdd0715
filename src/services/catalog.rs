//! Query-Filter-Paginate primitives shared by every listing service.
//!
//! Filtering is stable (source order is preserved), text search is a
//! case-insensitive substring test ORed across the designated fields, and
//! sorting uses the standard library's stable sort so ties keep their
//! pre-sort relative order.

use serde::{Deserialize, Serialize};

/// Sort direction; listing endpoints default to descending because the
/// sortable fields are rating/popularity-like.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// True when any designated text field contains the query, ignoring case.
/// An empty query matches everything.
pub fn matches_search(query: &str, fields: &[Option<&str>]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Stable sort by an `Ord` key.
pub fn sort_by_key<T, K, F>(records: &mut [T], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    records.sort_by(|a, b| match order {
        SortOrder::Asc => key(a).cmp(&key(b)),
        SortOrder::Desc => key(b).cmp(&key(a)),
    });
}

/// Stable sort by a floating-point key (ratings).
pub fn sort_by_f64<T, F>(records: &mut [T], order: SortOrder, key: F)
where
    F: Fn(&T) -> f64,
{
    records.sort_by(|a, b| match order {
        SortOrder::Asc => key(a).total_cmp(&key(b)),
        SortOrder::Desc => key(b).total_cmp(&key(a)),
    });
}

/// Confirmation payload for delete operations.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: String,
    pub id: String,
}

impl Deleted {
    pub fn new(what: &str, id: &str) -> Self {
        Self {
            message: format!("{what} deleted"),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_search("batman", &[Some("The Batman")]));
        assert!(matches_search("BAT", &[Some("the batman")]));
        assert!(!matches_search("superman", &[Some("The Batman")]));
    }

    #[test]
    fn search_ors_across_fields() {
        assert!(matches_search("noir", &[Some("The Batman"), Some("A noir take")]));
        assert!(matches_search("noir", &[None, Some("A noir take")]));
        assert!(!matches_search("noir", &[None, None]));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_search("", &[None]));
        assert!(matches_search("   ", &[Some("anything")]));
    }

    #[test]
    fn sort_desc_is_stable_on_ties() {
        let mut records = vec![("a", 2), ("b", 1), ("c", 2), ("d", 1)];
        sort_by_key(&mut records, SortOrder::Desc, |r| r.1);
        let names: Vec<&str> = records.iter().map(|r| r.0).collect();
        assert_eq!(names, ["a", "c", "b", "d"]);
    }

    #[test]
    fn sort_f64_descending_by_default() {
        let mut ratings = vec![7.0, 9.0, 8.0];
        sort_by_f64(&mut ratings, SortOrder::default(), |r| *r);
        assert_eq!(ratings, [9.0, 8.0, 7.0]);
    }
}
