use crate::domain::ports::Component;
use crate::utils::error::Result;
use std::io::Write;

pub const RESULT_LABEL: &str = "RESULTADO: ";

/// Runs `component` and writes its result after [`RESULT_LABEL`], without a trailing newline.
///
/// The driver only sees the `Component` capability, so bare components and
/// decorator chains of any depth go through the same path.
pub fn client_code<W: Write + ?Sized>(component: &dyn Component, out: &mut W) -> Result<()> {
    let result = component.operation()?;
    tracing::debug!("Client received: {}", result);

    write!(out, "{}{}", RESULT_LABEL, result)?;
    out.flush()?;
    Ok(())
}
