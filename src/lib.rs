pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::demo::run_demo;
pub use crate::core::client::client_code;
pub use crate::core::component::ConcreteComponent;
pub use crate::core::decorator::{ConcreteDecoratorA, ConcreteDecoratorB, Decorator};
pub use crate::domain::ports::Component;
pub use crate::utils::error::{DecoratorError, Result};
