//! Batch ranking

use crate::processing::document::ScoredResult;

/// One scored resume before rank assignment.
#[derive(Debug, Clone)]
pub struct Unranked {
    pub name: String,
    pub score: f32,
    pub summary: String,
}

/// Sort descending by score and assign 1-based ranks.
///
/// The sort is stable, so equal scores keep their original input order.
/// Ranks are contiguous 1..=N even with duplicate scores.
pub fn rank(mut results: Vec<Unranked>) -> Vec<ScoredResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    results
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ScoredResult {
            rank: index + 1,
            name: entry.name,
            score: entry.score,
            summary: entry.summary,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: f32) -> Unranked {
        Unranked {
            name: name.to_string(),
            score,
            summary: String::new(),
        }
    }

    #[test]
    fn test_sorts_descending_by_score() {
        let ranked = rank(vec![entry("low", 2.0), entry("high", 9.0), entry("mid", 5.0)]);

        assert_eq!(ranked[0].name, "high");
        assert_eq!(ranked[1].name, "mid");
        assert_eq!(ranked[2].name, "low");
    }

    #[test]
    fn test_ranks_are_dense_and_contiguous() {
        let ranked = rank(vec![
            entry("a", 5.0),
            entry("b", 5.0),
            entry("c", 5.0),
            entry("d", 1.0),
        ]);

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let ranked = rank(vec![
            entry("first", 7.0),
            entry("second", 7.0),
            entry("third", 7.0),
        ]);

        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
        assert_eq!(ranked[2].name, "third");
    }

    #[test]
    fn test_single_entry_batch() {
        let ranked = rank(vec![entry("only", 0.0)]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
    }
}
