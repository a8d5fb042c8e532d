//! Model backend domain models and traits

mod provider;
mod request;
mod response;

pub use provider::ModelBackend;
pub use request::GenerateRequest;
pub use response::GenerateResponse;

#[cfg(test)]
pub use provider::mock::MockModelBackend;
