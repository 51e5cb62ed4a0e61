//! Concise rendering of MongoDB driver errors.
//!
//! The exporter reports every failure as a single human-readable line, so
//! driver errors are reduced to their most useful fields (error class,
//! server code, message) using the driver's typed error structures rather
//! than string parsing.

use std::fmt;

/// Format a MongoDB error as a single descriptive line.
///
/// Intended to be used by the parent module's `Display` implementation for
/// `CardexError::MongoDb`.
pub fn format_mongodb_error(
    f: &mut fmt::Formatter<'_>,
    error: &mongodb::error::Error,
) -> fmt::Result {
    write!(f, "{}", concise_message(error))
}

/// Extract a concise one-line message from a MongoDB error.
///
/// Uses the driver's typed `ErrorKind` directly; falls back to the error's
/// `Display` representation for kinds without structured fields.
pub fn concise_message(error: &mongodb::error::Error) -> String {
    use mongodb::error::ErrorKind;

    match error.kind.as_ref() {
        ErrorKind::ServerSelection { message, .. } => {
            format!("Server selection failed: {}", first_line(message))
        }
        ErrorKind::Authentication { message, .. } => {
            format!("Authentication failed: {}", first_line(message))
        }
        ErrorKind::InvalidArgument { message, .. } => {
            format!("Invalid argument: {}", first_line(message))
        }
        ErrorKind::Command(command_error) => {
            let name = error_name(command_error.code);
            match name {
                Some(name) => format!(
                    "Command failed ({name}, code {}): {}",
                    command_error.code,
                    first_line(&command_error.message)
                ),
                None => format!(
                    "Command failed (code {}): {}",
                    command_error.code,
                    first_line(&command_error.message)
                ),
            }
        }
        ErrorKind::Io(io_err) => format!("Network error: {io_err}"),
        _ => first_line(&error.to_string()),
    }
}

/// Get a human-readable error name from a MongoDB server error code.
fn error_name(code: i32) -> Option<&'static str> {
    let name = match code {
        13 => "Unauthorized",
        18 => "AuthenticationFailed",
        26 => "NamespaceNotFound",
        50 => "MaxTimeMSExpired",
        _ => return None,
    };

    Some(name)
}

/// Collapse a possibly multi-line message to its first line.
fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or(message).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_name_known_codes() {
        assert_eq!(error_name(13), Some("Unauthorized"));
        assert_eq!(error_name(18), Some("AuthenticationFailed"));
        assert_eq!(error_name(26), Some("NamespaceNotFound"));
        assert_eq!(error_name(99999), None);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("one line"), "one line");
        assert_eq!(first_line("first\nsecond\nthird"), "first");
        assert_eq!(first_line("  padded  \nrest"), "padded");
    }
}
