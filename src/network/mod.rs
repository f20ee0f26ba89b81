// Similarity network: thresholded graph, communities, and layout.

pub mod community;
pub mod graph;
pub mod layout;
