pub mod client;
pub mod component;
pub mod decorator;

pub use crate::domain::ports::Component;
pub use crate::utils::error::Result;
