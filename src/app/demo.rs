use crate::core::client::client_code;
use crate::core::component::ConcreteComponent;
use crate::core::decorator::{ConcreteDecoratorA, ConcreteDecoratorB};
use crate::utils::error::Result;
use std::io::Write;

pub const SIMPLE_INTRO: &str = "Cliente: Eu tenho um componente simples:";
pub const DECORATED_INTRO: &str = "Cliente: Agora eu tenho um componente decorator:";

/// 示範：先用簡單元件，再用兩層裝飾的元件呼叫同一個 client_code
pub fn run_demo<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let simple = ConcreteComponent::new();
    writeln!(out, "{}", SIMPLE_INTRO)?;
    client_code(&simple, out)?;
    write!(out, "\n\n")?;

    // 裝飾器不只能包簡單元件，也能包其他裝飾器
    let decorator1 = ConcreteDecoratorA::new(simple);
    let decorator2 = ConcreteDecoratorB::new(decorator1);
    tracing::debug!("Built chain: {:?}", decorator2);

    writeln!(out, "{}", DECORATED_INTRO)?;
    client_code(&decorator2, out)?;

    out.flush()?;
    Ok(())
}
