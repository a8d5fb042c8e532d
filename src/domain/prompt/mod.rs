//! Prompt construction

mod template;

pub use template::{PromptTemplate, CUSTOMER_SUPPORT_INSTRUCTIONS};
