use std::cmp::Ordering;

/// One entry of a ranked result list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument {
    pub doc_id: String,
    pub score: f64,
}

/// Orders documents by rank: a higher score is greater, and on equal scores
/// the lexicographically smaller document id is greater.
#[derive(Debug, PartialEq)]
pub struct FloatDoc(pub RankedDocument);

impl Eq for FloatDoc {}

impl Ord for FloatDoc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .score
            .total_cmp(&other.0.score)
            .then_with(|| other.0.doc_id.cmp(&self.0.doc_id))
    }
}

impl PartialOrd for FloatDoc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(doc_id: &str, score: f64) -> FloatDoc {
        FloatDoc(RankedDocument {
            doc_id: doc_id.to_string(),
            score,
        })
    }

    #[test]
    fn test_higher_score_ranks_higher() {
        assert!(doc("z", 0.9) > doc("a", 0.1));
    }

    #[test]
    fn test_tie_broken_by_ascending_doc_id() {
        assert!(doc("a", 0.5) > doc("b", 0.5));
        assert!(doc("B", 0.0) > doc("a", 0.0));
        assert_eq!(doc("a", 0.5).cmp(&doc("a", 0.5)), Ordering::Equal);
    }
}
