use serde_json::Value;
use thiserror::Error;

use super::value::{InputValue, InputVariant};

/// Failure to apply an edited control value back onto an input.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("{0} inputs cannot be set from the control panel")]
    Unsupported(InputVariant),
    #[error("value does not fit the input: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Write an edited control value onto the input's `current` field.
///
/// The payload must deserialize to the input's native shape; bounds are not
/// enforced here, clamping is the widget's job. Byte inputs keep their length
/// and only the common prefix is overwritten, so a short payload leaves the
/// tail intact.
pub fn apply_update(input: &mut InputValue, value: &Value) -> Result<(), UpdateError> {
    match input {
        InputValue::Float { current, .. } => {
            *current = serde_json::from_value(value.clone())?;
        }
        InputValue::Int { current, .. } => {
            *current = serde_json::from_value(value.clone())?;
        }
        InputValue::Point { current, .. } => {
            *current = serde_json::from_value(value.clone())?;
        }
        InputValue::Bool { current, .. } => {
            *current = serde_json::from_value(value.clone())?;
        }
        InputValue::Color { current, .. } => {
            *current = serde_json::from_value(value.clone())?;
        }
        InputValue::RawBytes { bytes } => {
            let incoming: Vec<u8> = serde_json::from_value(value.clone())?;
            let len = usize::min(bytes.len(), incoming.len());
            bytes[..len].copy_from_slice(&incoming[..len]);
        }
        InputValue::Image { .. } | InputValue::Unsupported => {
            return Err(UpdateError::Unsupported(input.variant()));
        }
    }
    Ok(())
}
