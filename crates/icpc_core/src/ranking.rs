//! Total order over teams and the sorted board.
//!
//! Priority: more solved problems, then lower penalty, then the
//! descending solve-time lists compared element by element (a missing
//! entry sits below every real time, so fewer solves at the comparison
//! index loses), then team name ascending as the deterministic final
//! tie-break.

use crate::models::Team;
use crate::store::TeamStore;
use std::cmp::Ordering;

/// `Less` means `a` ranks ahead of `b`.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    if a.solved != b.solved {
        return b.solved.cmp(&a.solved);
    }
    if a.penalty != b.penalty {
        return a.penalty.cmp(&b.penalty);
    }
    let len = a.solve_times_desc.len().max(b.solve_times_desc.len());
    for i in 0..len {
        // None orders below every Some, which is exactly the missing-entry
        // sentinel the tie-break needs.
        let ta = a.solve_times_desc.get(i).copied();
        let tb = b.solve_times_desc.get(i).copied();
        if ta != tb {
            return ta.cmp(&tb);
        }
    }
    a.name.cmp(&b.name)
}

/// Team indices sorted by the board comparator.
pub fn ranking_order(store: &TeamStore) -> Vec<usize> {
    let mut order: Vec<usize> = store.indices().collect();
    order.sort_by(|&a, &b| compare(store.team(a), store.team(b)));
    order
}

/// Team indices sorted by name only. Used for ranking queries before any
/// board has been published.
pub fn lexicographic_order(store: &TeamStore) -> Vec<usize> {
    let mut order: Vec<usize> = store.indices().collect();
    order.sort_by(|&a, &b| store.team(a).name.cmp(&store.team(b).name));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, solved: u32, penalty: u64, times_desc: &[u32]) -> Team {
        let mut t = Team::new(name, 0);
        t.solved = solved;
        t.penalty = penalty;
        t.solve_times_desc = times_desc.to_vec();
        t
    }

    #[test]
    fn test_more_solved_ranks_first() {
        let a = team("a", 3, 500, &[200, 150, 100]);
        let b = team("b", 2, 100, &[80, 50]);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_lower_penalty_breaks_solved_tie() {
        let a = team("a", 2, 120, &[80, 40]);
        let b = team("b", 2, 100, &[70, 30]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_solve_times_compared_from_largest_down() {
        // Same solved/penalty; the larger maximum time ranks behind.
        let a = team("a", 2, 100, &[90, 10]);
        let b = team("b", 2, 100, &[60, 40]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_missing_entry_is_smallest() {
        // Identical up to the shorter list's end; the shorter list wins
        // the comparison at the first missing index.
        let a = team("a", 1, 100, &[100]);
        let b = team("b", 1, 100, &[100, 1]);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_name_is_final_tie_break() {
        let a = team("alpha", 1, 100, &[100]);
        let b = team("beta", 1, 100, &[100]);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_lexicographic_order_ignores_metrics() {
        let mut store = TeamStore::new();
        store.add("zju", 0).unwrap();
        store.add("fudan", 0).unwrap();
        let order = lexicographic_order(&store);
        assert_eq!(store.team(order[0]).name, "fudan");
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_team() -> impl Strategy<Value = Team> {
            (
                "[a-d]{1,4}",
                0u32..4,
                0u64..200,
                proptest::collection::vec(1u32..300, 0..4),
            )
                .prop_map(|(name, solved, penalty, mut times)| {
                    times.sort_unstable_by(|a, b| b.cmp(a));
                    team(&name, solved, penalty, &times)
                })
        }

        proptest! {
            /// Property: the comparator is antisymmetric.
            #[test]
            fn prop_antisymmetric(a in arb_team(), b in arb_team()) {
                prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
            }

            /// Property: the comparator is transitive over any triple.
            #[test]
            fn prop_transitive(a in arb_team(), b in arb_team(), c in arb_team()) {
                if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
                    prop_assert_ne!(compare(&a, &c), Ordering::Greater);
                }
            }

            /// Property: only equal names can compare equal.
            #[test]
            fn prop_equal_means_same_name(a in arb_team(), b in arb_team()) {
                if compare(&a, &b) == Ordering::Equal {
                    prop_assert_eq!(&a.name, &b.name);
                }
            }
        }
    }
}
