use crate::utils::error::{DecoratorError, Result};

/// The capability shared by the base component and every decorator.
///
/// Anything implementing `Component` can stand wherever a component is expected,
/// including inside another decorator. Implementors are expected to override
/// [`Component::operation`]; the provided body only reports the missing override.
pub trait Component {
    fn operation(&self) -> Result<String> {
        Err(DecoratorError::not_implemented::<Self>("operation"))
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn operation(&self) -> Result<String> {
        (**self).operation()
    }
}

impl<C: Component + ?Sized> Component for &C {
    fn operation(&self) -> Result<String> {
        (**self).operation()
    }
}
