//! Random selection.
//!
//! Filters the catalog by an optional two-level category constraint and
//! chooses one eligible entry uniformly at random. The RNG is supplied by
//! the caller so tests can seed a deterministic generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Entry};

/// Partial filter on category1/category2. Both absent = whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    pub category1: Option<String>,
    pub category2: Option<String>,
}

impl Constraint {
    /// The unconstrained filter: every entry is eligible.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.category1.as_deref().map_or(true, |c| c == entry.category1)
            && self.category2.as_deref().map_or(true, |c| c == entry.category2)
    }
}

/// Pick one eligible entry uniformly at random, or `None` when nothing
/// matches. A zero-match constraint is a normal outcome, not an error.
/// Every call draws independently; repeats are expected on re-roll.
pub fn pick<'a, R: Rng>(
    catalog: &'a Catalog,
    constraint: &Constraint,
    rng: &mut R,
) -> Option<&'a Entry> {
    let eligible: Vec<&Entry> = catalog
        .entries()
        .iter()
        .filter(|e| constraint.matches(e))
        .collect();
    eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Catalog {
        Catalog::from_rows(vec![
            vec!["category1".into(), "category2".into(), "name".into()],
            vec!["A".into(), "1".into(), "Kimchi House".into()],
            vec!["A".into(), "2".into(), "Ramen Spot".into(), "u".into(), "spicy".into()],
        ])
    }

    fn constraint(c1: Option<&str>, c2: Option<&str>) -> Constraint {
        Constraint {
            category1: c1.map(str::to_string),
            category2: c2.map(str::to_string),
        }
    }

    #[test]
    fn single_entry_catalog_is_deterministic() {
        let catalog = Catalog::from_rows(vec![
            vec!["h".into(), "h".into(), "h".into()],
            vec!["A".into(), "1".into(), "Only One".into()],
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let picked = pick(&catalog, &Constraint::any(), &mut rng).unwrap();
            assert_eq!(picked.name, "Only One");
        }
    }

    #[test]
    fn unconstrained_pick_reaches_every_entry() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..64 {
            seen.insert(pick(&catalog, &Constraint::any(), &mut rng).unwrap().name.clone());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn two_level_constraint_narrows_to_one() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(0);
        let picked = pick(&catalog, &constraint(Some("A"), Some("2")), &mut rng).unwrap();
        assert_eq!(picked.name, "Ramen Spot");
        assert_eq!(picked.keywords, vec!["spicy"]);
    }

    #[test]
    fn zero_match_constraint_returns_none() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick(&catalog, &constraint(Some("B"), None), &mut rng).is_none());
        assert!(pick(&catalog, &constraint(Some("A"), Some("3")), &mut rng).is_none());
    }

    #[test]
    fn empty_catalog_returns_none() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick(&catalog, &Constraint::any(), &mut rng).is_none());
    }
}
