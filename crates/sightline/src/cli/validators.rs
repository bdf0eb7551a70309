//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a dataset name argument.
///
/// Names are matched exactly against snapshot records, so the only
/// rules here are that the trimmed value is non-empty and printable.
pub fn validate_dataset_name(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Dataset name cannot be empty".to_string());
    }

    if s.contains('\n') || s.contains('\r') {
        return Err("Dataset name cannot contain newline characters".to_string());
    }

    if let Some(pos) = s.chars().position(|c| {
        let code = c as u32;
        // Control characters excluding tab (0x09)
        (code < 0x20 && code != 0x09) || (0x7F..=0x9F).contains(&code)
    }) {
        return Err(format!(
            "Dataset name contains invalid control character at position {pos}"
        ));
    }

    Ok(s.to_string())
}

/// Validate a dataset ARN argument.
///
/// ARNs are opaque identifiers, so no structure is enforced beyond the
/// value being non-empty and free of whitespace.
pub fn validate_dataset_arn(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Dataset ARN cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err("Dataset ARN cannot contain whitespace".to_string());
    }

    if s.chars().any(char::is_control) {
        return Err("Dataset ARN cannot contain control characters".to_string());
    }

    Ok(s.to_string())
}
