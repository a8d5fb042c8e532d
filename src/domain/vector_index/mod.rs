//! Vector index domain models and traits
//!
//! The index is an external collaborator: it owns embeddings and the
//! distance metric. Callers only add documents and ask for neighbours.

mod repository;

pub use repository::{AddRequest, Metadata, QueryRequest, QueryResponse, VectorIndex};
