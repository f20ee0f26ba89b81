// Cosine similarity over mood vectors and the pairwise matrix.

use tracing::debug;

/// Cosine similarity between two weighted mood vectors.
///
/// Returns a score in [0.0, 1.0]. Mismatched lengths, empty vectors, and
/// zero vectors all come back as 0.0 rather than NaN, so a brand whose
/// tags never made it into the vocabulary simply matches nothing.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denominator = mag_a * mag_b;
    if denominator < f64::EPSILON {
        return 0.0;
    }

    // Weights are non-negative, so cosine lands in [0, 1]; the clamp only
    // swallows float drift at the top end.
    (dot / denominator).clamp(0.0, 1.0)
}

/// The full pairwise similarity matrix for a set of vectors.
///
/// Symmetric by construction. The diagonal is pinned to 1.0 for any vector
/// with mass (a brand is always identical to itself) and left at 0.0 for
/// zero vectors, matching what `cosine_similarity` would say.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute every pairwise score. Each unordered pair is computed once
    /// and mirrored.
    pub fn compute(vectors: &[Vec<f64>]) -> Self {
        let n = vectors.len();
        let mut values = vec![vec![0.0; n]; n];

        for i in 0..n {
            if vectors[i].iter().any(|&w| w != 0.0) {
                values[i][i] = 1.0;
            }
            for j in (i + 1)..n {
                let score = cosine_similarity(&vectors[i], &vectors[j]);
                values[i][j] = score;
                values[j][i] = score;
            }
        }

        debug!(brands = n, "Computed similarity matrix");
        Self { values }
    }

    /// Wrap precomputed rows. The caller is responsible for the rows being
    /// square and symmetric; nothing downstream re-checks.
    pub fn from_rows(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One above-threshold pair, by matrix index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarPair {
    pub a: usize,
    pub b: usize,
    pub similarity: f64,
}

/// Every pair strictly above the threshold, in row-major order (ascending
/// `a`, then ascending `b` with `b > a`). A score exactly at the threshold
/// does not qualify. This is the one place the cutoff comparison lives;
/// the graph builder and the report both take their pairs from here.
pub fn pairs_above(matrix: &SimilarityMatrix, threshold: f64) -> Vec<SimilarPair> {
    let n = matrix.len();
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            let similarity = matrix.get(a, b);
            if similarity > threshold {
                pairs.push(SimilarPair { a, b, similarity });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![3.0, 2.0, 1.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = vec![3.0, 0.0];
        let b = vec![0.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_not_nan() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![3.0, 2.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn proportional_vectors_score_one() {
        let a = vec![3.0, 2.0, 1.0];
        let b = vec![6.0, 4.0, 2.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = vec![3.0, 2.0, 0.0];
        let b = vec![1.0, 0.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let vectors = vec![
            vec![3.0, 2.0, 0.0],
            vec![0.0, 3.0, 1.0],
            vec![1.0, 0.0, 3.0],
        ];
        let matrix = SimilarityMatrix::compute(&vectors);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn zero_vector_row_has_zero_diagonal() {
        let vectors = vec![vec![0.0, 0.0], vec![3.0, 0.0]];
        let matrix = SimilarityMatrix::compute(&vectors);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(1, 1), 1.0);
        assert_eq!(matrix.get(0, 1), 0.0);
    }

    #[test]
    fn pairs_above_is_strictly_greater_than() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.3, 0.30001],
            vec![0.3, 1.0, 0.0],
            vec![0.30001, 0.0, 1.0],
        ]);
        let pairs = pairs_above(&matrix, 0.3);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a, pairs[0].b), (0, 2));
    }

    #[test]
    fn pairs_above_is_row_major_without_duplicates() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.8],
            vec![0.9, 1.0, 0.7],
            vec![0.8, 0.7, 1.0],
        ]);
        let pairs = pairs_above(&matrix, 0.3);
        let order: Vec<(usize, usize)> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn empty_matrix_has_no_pairs() {
        let matrix = SimilarityMatrix::compute(&[]);
        assert!(matrix.is_empty());
        assert!(pairs_above(&matrix, 0.3).is_empty());
    }
}
