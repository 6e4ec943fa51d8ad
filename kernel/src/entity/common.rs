mod flag;

pub use self::flag::*;

use error_stack::Report;

use crate::KernelError;

/// Trims the input and rejects it when nothing is left.
pub(crate) fn required(
    field: &str,
    value: impl Into<String>,
) -> error_stack::Result<String, KernelError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Report::new(KernelError::InvalidInput)
            .attach_printable(format!("`{field}` must not be empty")));
    }
    Ok(trimmed.to_string())
}
