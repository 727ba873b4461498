//! Keyword intent classifier

use std::collections::BTreeSet;

use super::category::SpecialistCategory;

/// Maps a raw query to the set of specialist categories it mentions.
///
/// Classification is a membership test, not a ranking: a query may hit
/// zero, one or several categories, and the same text always yields the
/// same set.
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn classify(query: &str) -> BTreeSet<SpecialistCategory> {
        let lower = query.to_lowercase();
        SpecialistCategory::ALL
            .into_iter()
            .filter(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
            .collect()
    }

    /// Keywords from the query that triggered each category, for logs
    pub fn explain(query: &str) -> Vec<(SpecialistCategory, Vec<&'static str>)> {
        let lower = query.to_lowercase();
        SpecialistCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let hits: Vec<&'static str> = category
                    .keywords()
                    .iter()
                    .copied()
                    .filter(|kw| lower.contains(kw))
                    .collect();
                (!hits.is_empty()).then_some((category, hits))
            })
            .collect()
    }
}
