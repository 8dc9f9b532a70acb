//! Shortlist assembly: orders a roster against a job description.
//!
//! Output is every match in roster order (truncated to the cap), then, if there
//! is room, non-matches in roster order as filler. Filler never precedes a match
//! and never repeats one.

use std::collections::HashSet;

use crate::matching::predicate::PreparedQuery;
use crate::models::consultant::ConsultantRecord;

/// Shortlist size used when nothing else is configured.
pub const DEFAULT_SHORTLIST_CAP: usize = 10;

/// A ranked shortlist borrowing from the roster it was built from.
#[derive(Debug, Clone, Default)]
pub struct Shortlist<'a> {
    pub consultants: Vec<&'a ConsultantRecord>,
    /// How many leading entries are genuine matches; the rest are filler.
    pub matched: usize,
}

impl Shortlist<'_> {
    pub fn filler(&self) -> usize {
        self.consultants.len() - self.matched
    }
}

/// Builds the shortlist for `query` over `roster`, at most `cap` long.
pub fn build_shortlist<'a>(
    query: &str,
    roster: &'a [ConsultantRecord],
    cap: usize,
) -> Shortlist<'a> {
    let prepared = PreparedQuery::new(query);
    if prepared.is_blank() {
        return Shortlist::default();
    }

    let mut consultants: Vec<&ConsultantRecord> = roster
        .iter()
        .filter(|c| prepared.matches(c))
        .take(cap)
        .collect();
    let matched = consultants.len();

    if matched < cap {
        let selected: HashSet<&str> = consultants.iter().map(|c| c.id.as_str()).collect();
        let filler = roster
            .iter()
            .filter(|c| !selected.contains(c.id.as_str()))
            .take(cap - matched);
        consultants.extend(filler);
    }

    Shortlist {
        consultants,
        matched,
    }
}

/// Ranked consultants for `query`: matches first, then filler, at most `cap`.
#[allow(dead_code)]
pub fn rank<'a>(
    query: &str,
    roster: &'a [ConsultantRecord],
    cap: usize,
) -> Vec<&'a ConsultantRecord> {
    build_shortlist(query, roster, cap).consultants
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_consultant(id: &str, role: &str, skills: &[&str], bio: &str) -> ConsultantRecord {
        ConsultantRecord {
            id: id.to_string(),
            name: format!("Consultant {id}"),
            role: role.to_string(),
            location: "Remote".to_string(),
            years_of_exp: 3,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            bio: bio.to_string(),
        }
    }

    /// Fifteen consultants where only c03, c07 and c12 know Rust.
    fn fifteen_with_three_rustaceans() -> Vec<ConsultantRecord> {
        (1..=15)
            .map(|i| {
                let id = format!("c{i:02}");
                if [3, 7, 12].contains(&i) {
                    make_consultant(&id, "Developer", &["Rust"], "")
                } else {
                    make_consultant(&id, "Accountant", &["Excel"], "Prepares quarterly reports")
                }
            })
            .collect()
    }

    fn ids<'a>(consultants: &[&'a ConsultantRecord]) -> Vec<&'a str> {
        consultants.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_empty() {
        let roster = fifteen_with_three_rustaceans();
        assert!(rank("", &roster, 10).is_empty());
        assert!(rank("  \t ", &roster, 10).is_empty());
    }

    #[test]
    fn test_three_matches_then_seven_filler() {
        let roster = fifteen_with_three_rustaceans();
        let shortlist = build_shortlist("Rust engineer wanted", &roster, 10);

        assert_eq!(shortlist.matched, 3);
        assert_eq!(shortlist.filler(), 7);
        assert_eq!(
            ids(&shortlist.consultants),
            vec!["c03", "c07", "c12", "c01", "c02", "c04", "c05", "c06", "c08", "c09"]
        );
    }

    #[test]
    fn test_more_matches_than_cap_truncates_without_filler() {
        let roster: Vec<_> = (0..12)
            .map(|i| make_consultant(&format!("m{i}"), "Developer", &["Go"], ""))
            .collect();
        let shortlist = build_shortlist("go developer", &roster, 10);

        assert_eq!(shortlist.matched, 10);
        assert_eq!(shortlist.filler(), 0);
        assert_eq!(ids(&shortlist.consultants)[9], "m9");
    }

    #[test]
    fn test_small_roster_is_returned_whole() {
        let roster = vec![
            make_consultant("a", "Accountant", &[], ""),
            make_consultant("b", "Developer", &["Rust"], ""),
        ];
        assert_eq!(ids(&rank("rust", &roster, 10)), vec!["b", "a"]);
    }

    #[test]
    fn test_no_matches_returns_roster_prefix() {
        let roster = fifteen_with_three_rustaceans();
        let result = rank("pastry chef", &roster, 4);
        assert_eq!(ids(&result), vec!["c01", "c02", "c03", "c04"]);
    }

    #[test]
    fn test_zero_cap_returns_nothing() {
        let roster = fifteen_with_three_rustaceans();
        assert!(rank("rust", &roster, 0).is_empty());
    }

    #[test]
    fn test_empty_roster_returns_nothing() {
        assert!(rank("rust", &[], 10).is_empty());
    }

    const VOCAB: &[&str] = &[
        "rust", "react", "cloud", "data", "engineer", "designer", "kafka", "aws", "python", "lead",
    ];

    fn arb_word() -> impl Strategy<Value = String> {
        prop::sample::select(VOCAB).prop_map(str::to_string)
    }

    fn arb_roster() -> impl Strategy<Value = Vec<ConsultantRecord>> {
        prop::collection::vec(
            (
                prop::collection::vec(arb_word(), 1..3),
                prop::collection::vec(arb_word(), 0..3),
                prop::collection::vec(arb_word(), 0..5),
            ),
            0..25,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (role, skills, bio))| ConsultantRecord {
                    id: format!("id-{i}"),
                    name: format!("Consultant {i}"),
                    role: role.join(" "),
                    location: "Remote".to_string(),
                    years_of_exp: i as u32,
                    skills,
                    bio: bio.join(" "),
                })
                .collect()
        })
    }

    fn arb_query() -> impl Strategy<Value = String> {
        prop::collection::vec(arb_word(), 1..4).prop_map(|words| words.join(" "))
    }

    fn roster_position(roster: &[ConsultantRecord], id: &str) -> usize {
        roster.iter().position(|c| c.id == id).unwrap()
    }

    proptest! {
        #[test]
        fn prop_blank_query_is_always_empty(roster in arb_roster(), spaces in "[ \t\n]{0,4}") {
            prop_assert!(rank(&spaces, &roster, DEFAULT_SHORTLIST_CAP).is_empty());
        }

        #[test]
        fn prop_length_follows_cap_and_roster_size(
            roster in arb_roster(),
            query in arb_query(),
            cap in 0usize..15,
        ) {
            let shortlist = build_shortlist(&query, &roster, cap);
            prop_assert_eq!(shortlist.consultants.len(), cap.min(roster.len()));
            prop_assert!(shortlist.matched <= cap);
        }

        #[test]
        fn prop_no_duplicate_ids(roster in arb_roster(), query in arb_query()) {
            let result = rank(&query, &roster, DEFAULT_SHORTLIST_CAP);
            let unique: HashSet<&str> = result.iter().map(|c| c.id.as_str()).collect();
            prop_assert_eq!(unique.len(), result.len());
        }

        #[test]
        fn prop_matches_precede_filler_in_roster_order(roster in arb_roster(), query in arb_query()) {
            let shortlist = build_shortlist(&query, &roster, DEFAULT_SHORTLIST_CAP);
            let prepared = PreparedQuery::new(&query);
            let (head, tail) = shortlist.consultants.split_at(shortlist.matched);

            prop_assert!(head.iter().all(|c| prepared.matches(c)));
            prop_assert!(tail.iter().all(|c| !prepared.matches(c)));

            for part in [head, tail] {
                let positions: Vec<usize> =
                    part.iter().map(|c| roster_position(&roster, &c.id)).collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn prop_rank_is_deterministic(roster in arb_roster(), query in arb_query()) {
            let first = ids(&rank(&query, &roster, DEFAULT_SHORTLIST_CAP));
            let second = ids(&rank(&query, &roster, DEFAULT_SHORTLIST_CAP));
            prop_assert_eq!(first, second);
        }
    }
}
