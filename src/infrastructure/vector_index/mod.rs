//! Vector index implementations

mod factory;
mod in_memory;
mod remote;

pub use factory::VectorIndexFactory;
pub use in_memory::InMemoryVectorIndex;
pub use remote::RemoteVectorIndex;
