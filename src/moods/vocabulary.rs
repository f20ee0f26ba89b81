// Mood vocabulary: the shared dimension space for brand vectors.

use std::collections::{BTreeSet, HashMap};

use crate::dataset::Dataset;

/// Every distinct mood in a dataset, sorted, with a reverse index.
///
/// The sorted order fixes the meaning of each vector dimension, so two
/// vectors built against the same vocabulary are always comparable.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the distinct moods across every record's main and sub tags.
    /// Empty tag slots are ignored.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let distinct: BTreeSet<&str> = dataset
            .records()
            .iter()
            .flat_map(|record| record.moods())
            .filter(|mood| !mood.is_empty())
            .collect();

        let labels: Vec<String> = distinct.into_iter().map(String::from).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        Self { labels, index }
    }

    /// The dimension a mood occupies, if it is in the vocabulary.
    pub fn index_of(&self, mood: &str) -> Option<usize> {
        self.index.get(mood).copied()
    }

    /// Mood labels in dimension order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
