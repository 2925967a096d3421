//! Category index.
//!
//! Derives the distinct first- and second-level category values present in
//! the catalog, sorted lexicographically for deterministic display. Pure
//! functions of the catalog; admission already guarantees non-empty values.

use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// All distinct `category1` values, sorted.
pub fn category1_values(catalog: &Catalog) -> Vec<String> {
    catalog
        .entries()
        .iter()
        .map(|e| e.category1.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// All distinct `category2` values among entries with the given
/// `category1`, sorted. Empty when nothing matches.
pub fn category2_values(catalog: &Catalog, category1: &str) -> Vec<String> {
    catalog
        .entries()
        .iter()
        .filter(|e| e.category1 == category1)
        .map(|e| e.category2.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_rows(vec![
            vec!["category1".into(), "category2".into(), "name".into()],
            vec!["Korean".into(), "Soup".into(), "Gukbap Alley".into()],
            vec!["Korean".into(), "BBQ".into(), "Charcoal House".into()],
            vec!["Japanese".into(), "Ramen".into(), "Ramen Spot".into()],
            vec!["Korean".into(), "Soup".into(), "Seolleongtang Place".into()],
        ])
    }

    #[test]
    fn category1_values_are_distinct_and_sorted() {
        assert_eq!(category1_values(&sample()), vec!["Japanese", "Korean"]);
    }

    #[test]
    fn category2_values_only_cooccur_with_their_category1() {
        let catalog = sample();
        assert_eq!(category2_values(&catalog, "Korean"), vec!["BBQ", "Soup"]);
        assert_eq!(category2_values(&catalog, "Japanese"), vec!["Ramen"]);
    }

    #[test]
    fn unknown_category1_yields_no_facets() {
        assert!(category2_values(&sample(), "Fusion").is_empty());
    }
}
