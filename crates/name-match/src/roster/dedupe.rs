use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use super::RosterEntry;
use crate::matching::{similarity_breakdown, MatchMethod, NameMatcher};

/// Two roster entries the matcher believes name the same person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePair {
    pub left: RosterEntry,
    pub right: RosterEntry,
    pub score: f64,
    pub method: MatchMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DedupeReport {
    pub total: usize,
    pub threshold: f64,
    pub pairs: Vec<DuplicatePair>,
    /// Entries grouped by pivot; each inner list holds row numbers.
    pub clusters: Vec<Vec<usize>>,
}

pub fn dedupe(entries: &[RosterEntry], matcher: &NameMatcher) -> DedupeReport {
    let pairs = find_duplicate_pairs(entries, matcher);
    let clusters = cluster_entries(entries, matcher)
        .into_iter()
        .map(|members| members.into_iter().map(|idx| entries[idx].row).collect())
        .collect();

    DedupeReport {
        total: entries.len(),
        threshold: matcher.threshold().value(),
        pairs,
        clusters,
    }
}

/// Every unordered pair scoring at or above the matcher's threshold,
/// strongest first.
pub fn find_duplicate_pairs(entries: &[RosterEntry], matcher: &NameMatcher) -> Vec<DuplicatePair> {
    let threshold = matcher.threshold().value();
    let mut pairs = Vec::new();

    for (i, left) in entries.iter().enumerate() {
        for right in &entries[i + 1..] {
            let breakdown = similarity_breakdown(&left.name, &right.name);
            if breakdown.score < threshold {
                continue;
            }

            debug!(
                left = %left.name,
                right = %right.name,
                score = breakdown.score,
                method = breakdown.method.label(),
                "possible duplicate"
            );
            pairs.push(DuplicatePair {
                left: left.clone(),
                right: right.clone(),
                score: breakdown.score,
                method: breakdown.method,
            });
        }
    }

    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.left.row.cmp(&b.left.row))
            .then_with(|| a.right.row.cmp(&b.right.row))
    });
    pairs
}

/// Greedy pivot clustering over entry indices.
///
/// An entry joins the first cluster whose first member it duplicates, so the
/// result depends on input order and is not transitive.
pub fn cluster_entries(entries: &[RosterEntry], matcher: &NameMatcher) -> Vec<Vec<usize>> {
    let mut clusters: Vec<Vec<usize>> = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        let home = clusters
            .iter_mut()
            .find(|cluster| matcher.is_duplicate(&entries[cluster[0]].name, &entry.name));
        match home {
            Some(cluster) => cluster.push(idx),
            None => clusters.push(vec![idx]),
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::DuplicateThreshold;
    use crate::roster::entries_from_names;

    fn crew() -> Vec<RosterEntry> {
        entries_from_names([
            "Eben Woodall",
            "Dan Howard",
            "Eben W",
            "Daniel Howard",
            "Michell Ladue",
            "Michell LaDie",
            "Brandon L.",
        ])
    }

    #[test]
    fn pairs_are_sorted_strongest_first() {
        let pairs = find_duplicate_pairs(&crew(), &NameMatcher::default());
        let rows: Vec<_> = pairs.iter().map(|p| (p.left.row, p.right.row)).collect();

        assert_eq!(rows, vec![(2, 4), (1, 3), (5, 6)]);
        assert_eq!(pairs[0].score, 1.0);
        assert_eq!(pairs[1].method, MatchMethod::Containment);
        assert_eq!(pairs[2].method, MatchMethod::Blended);
    }

    #[test]
    fn stricter_threshold_drops_weaker_pairs() {
        let matcher = NameMatcher::new(DuplicateThreshold::new(0.95).expect("valid threshold"));
        let pairs = find_duplicate_pairs(&crew(), &matcher);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].right.name, "Daniel Howard");
    }

    #[test]
    fn clusters_group_by_pivot() {
        let clusters = cluster_entries(&crew(), &NameMatcher::default());
        assert_eq!(clusters, vec![vec![0, 2], vec![1, 3], vec![4, 5], vec![6]]);
    }

    #[test]
    fn report_uses_row_numbers() {
        let report = dedupe(&crew(), &NameMatcher::default());
        assert_eq!(report.total, 7);
        assert_eq!(report.threshold, 0.7);
        assert_eq!(report.clusters[0], vec![1, 3]);
        assert_eq!(report.clusters.last(), Some(&vec![7]));
    }

    #[test]
    fn empty_roster_produces_empty_report() {
        let report = dedupe(&[], &NameMatcher::default());
        assert_eq!(report.total, 0);
        assert!(report.pairs.is_empty());
        assert!(report.clusters.is_empty());
    }
}
