use crate::domain::ports::Component;
use crate::utils::error::Result;

/// Base decorator: owns the wrapped component and forwards `operation` unchanged.
///
/// Concrete decorators embed a `Decorator` for the storage and delegation plumbing
/// and only add their own transformation on top of [`Decorator::operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator<C: Component> {
    component: C,
}

impl<C: Component> Decorator<C> {
    pub fn new(component: C) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn into_inner(self) -> C {
        self.component
    }
}

impl<C: Component> Component for Decorator<C> {
    fn operation(&self) -> Result<String> {
        self.component.operation()
    }
}

/// Renders `name(inner)`, the marker every concrete decorator puts around its wrapped result.
fn wrap(name: &str, inner: &str) -> String {
    format!("{}({})", name, inner)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteDecoratorA<C: Component> {
    base: Decorator<C>,
}

impl<C: Component> ConcreteDecoratorA<C> {
    pub const NAME: &'static str = "ConcreteDecoratorA";

    pub fn new(component: C) -> Self {
        Self {
            base: Decorator::new(component),
        }
    }

    pub fn component(&self) -> &C {
        self.base.component()
    }

    pub fn into_inner(self) -> C {
        self.base.into_inner()
    }
}

impl<C: Component> Component for ConcreteDecoratorA<C> {
    fn operation(&self) -> Result<String> {
        let inner = self.base.operation()?;
        tracing::debug!("{} wrapping: {}", Self::NAME, inner);
        Ok(wrap(Self::NAME, &inner))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteDecoratorB<C: Component> {
    base: Decorator<C>,
}

impl<C: Component> ConcreteDecoratorB<C> {
    pub const NAME: &'static str = "ConcreteDecoratorB";

    pub fn new(component: C) -> Self {
        Self {
            base: Decorator::new(component),
        }
    }

    pub fn component(&self) -> &C {
        self.base.component()
    }

    pub fn into_inner(self) -> C {
        self.base.into_inner()
    }
}

impl<C: Component> Component for ConcreteDecoratorB<C> {
    fn operation(&self) -> Result<String> {
        let inner = self.base.operation()?;
        tracing::debug!("{} wrapping: {}", Self::NAME, inner);
        Ok(wrap(Self::NAME, &inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::ConcreteComponent;
    use crate::utils::error::DecoratorError;

    struct Unfinished;

    impl Component for Unfinished {}

    #[test]
    fn test_base_decorator_forwards_unchanged() {
        let decorator = Decorator::new(ConcreteComponent);
        assert_eq!(decorator.operation().unwrap(), "ConcreteComponent");

        let nested = Decorator::new(ConcreteDecoratorA::new(ConcreteComponent));
        assert_eq!(nested.operation().unwrap(), "ConcreteDecoratorA(ConcreteComponent)");
    }

    #[test]
    fn test_decorator_wraps_inner_result() {
        let a = ConcreteDecoratorA::new(ConcreteComponent);
        let b = ConcreteDecoratorB::new(ConcreteComponent);

        assert_eq!(a.operation().unwrap(), "ConcreteDecoratorA(ConcreteComponent)");
        assert_eq!(b.operation().unwrap(), "ConcreteDecoratorB(ConcreteComponent)");
    }

    #[test]
    fn test_wrapping_order_changes_nesting() {
        let ab = ConcreteDecoratorA::new(ConcreteDecoratorB::new(ConcreteComponent));
        let ba = ConcreteDecoratorB::new(ConcreteDecoratorA::new(ConcreteComponent));

        assert_eq!(
            ab.operation().unwrap(),
            "ConcreteDecoratorA(ConcreteDecoratorB(ConcreteComponent))"
        );
        assert_eq!(
            ba.operation().unwrap(),
            "ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))"
        );
        assert_ne!(ab.operation().unwrap(), ba.operation().unwrap());
    }

    #[test]
    fn test_same_decorator_can_stack() {
        let aa = ConcreteDecoratorA::new(ConcreteDecoratorA::new(ConcreteComponent));
        assert_eq!(
            aa.operation().unwrap(),
            "ConcreteDecoratorA(ConcreteDecoratorA(ConcreteComponent))"
        );
    }

    #[test]
    fn test_accessors_expose_wrapped_component() {
        let a = ConcreteDecoratorA::new(ConcreteComponent);
        assert_eq!(a.component(), &ConcreteComponent);

        let b = ConcreteDecoratorB::new(a.clone());
        assert_eq!(b.component(), &a);
        assert_eq!(b.into_inner(), a);
    }

    #[test]
    fn test_missing_override_propagates_through_chain() {
        let chain = ConcreteDecoratorB::new(ConcreteDecoratorA::new(Unfinished));
        let err = chain.operation().unwrap_err();
        assert!(matches!(
            err,
            DecoratorError::NotImplemented { ref type_name, method: "operation" } if type_name == "Unfinished"
        ));
    }
}
