use crate::domain::ports::Component;
use crate::utils::error::Result;

pub const CONCRETE_COMPONENT: &str = "ConcreteComponent";

/// 基礎元件，沒有任何狀態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteComponent;

impl ConcreteComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ConcreteComponent {
    fn operation(&self) -> Result<String> {
        tracing::debug!("ConcreteComponent::operation");
        Ok(CONCRETE_COMPONENT.to_string())
    }
}
