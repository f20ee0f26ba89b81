// Weighted mood vectors: each brand as a point in vocabulary space.

use tracing::debug;

use crate::dataset::{BrandRecord, Dataset};
use crate::moods::vocabulary::Vocabulary;

/// Weight of the main mood dimension.
pub const MAIN_MOOD_WEIGHT: f64 = 3.0;
/// Weight of the first sub mood dimension.
pub const FIRST_SUB_WEIGHT: f64 = 2.0;
/// Weight of the second sub mood dimension.
pub const SECOND_SUB_WEIGHT: f64 = 1.0;

/// Encode one brand as a weighted multi-hot vector over the vocabulary.
///
/// Assignments run in priority order (main 3.0, first sub 2.0, second sub
/// 1.0) and each one overwrites the dimension outright, so if a record
/// repeats a mood across tiers the last assignment wins. Tags missing from
/// the vocabulary are skipped without failing the record.
pub fn mood_vector(record: &BrandRecord, vocabulary: &Vocabulary) -> Vec<f64> {
    let mut vector = vec![0.0; vocabulary.len()];
    assign(&mut vector, vocabulary, &record.main_mood, MAIN_MOOD_WEIGHT);
    assign(&mut vector, vocabulary, &record.sub_mood_1, FIRST_SUB_WEIGHT);
    assign(&mut vector, vocabulary, &record.sub_mood_2, SECOND_SUB_WEIGHT);
    vector
}

fn assign(vector: &mut [f64], vocabulary: &Vocabulary, mood: &str, weight: f64) {
    if mood.is_empty() {
        return;
    }
    match vocabulary.index_of(mood) {
        Some(dimension) => vector[dimension] = weight,
        None => debug!(mood, "Mood not in vocabulary, skipping"),
    }
}

/// Vectorize every record in dataset order. Row `i` belongs to record `i`,
/// the index space the similarity matrix and graph share.
pub fn vectorize_all(dataset: &Dataset, vocabulary: &Vocabulary) -> Vec<Vec<f64>> {
    dataset
        .records()
        .iter()
        .map(|record| mood_vector(record, vocabulary))
        .collect()
}
