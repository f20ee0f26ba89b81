// Mood analysis: vocabulary, weighted vectors, and cosine similarity.

pub mod similarity;
pub mod vectorize;
pub mod vocabulary;
