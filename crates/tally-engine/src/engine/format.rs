use crate::error::Result;

/// Format an evaluation outcome for display.
///
/// A blank formula (`None`) shows as the empty string; errors show as their
/// sentinel token.
pub fn format_value(value: &Result<Option<i64>>) -> String {
    match value {
        Ok(Some(n)) => n.to_string(),
        Ok(None) => String::new(),
        Err(e) => e.sentinel().to_string(),
    }
}

/// True for the display strings produced by a failed evaluation.
pub fn is_error_display(display: &str) -> bool {
    display == crate::error::ERROR_TOKEN || display == crate::error::CIRCULAR_TOKEN
}
