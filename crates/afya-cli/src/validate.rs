//! Input validation for command arguments.

use anyhow::Result;

use afya_core::ValidationError;

/// Reject empty or whitespace-only values before they reach the backend.
pub fn not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(afya_core::Error::from(ValidationError::Field {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        })
        .into());
    }
    Ok(())
}
