use crate::shared::api_client::ApiError;

/// Shown when a submission fails without a message from the server
pub const CONNECTION_FAILURE: &str = "Không thể kết nối đến máy chủ.";

/// User-facing result of a form submission.
///
/// Screens keep only the latest one and decide how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    /// Submission blocked by client-side validation
    Warning(String),
    Error(String),
}

impl Outcome {
    /// Error outcome for a rejected submission, preferring the server's own words.
    ///
    /// A 2xx answer other than 200/201 means the server accepted the request
    /// but did not confirm the creation; `unconfirmed_fallback` covers that
    /// case when the server says nothing.
    pub fn from_submit_error(err: &ApiError, unconfirmed_fallback: &str) -> Self {
        match err {
            ApiError::Status { status, message } if (200..300).contains(status) => {
                Outcome::Error(format!(
                    "Lỗi: {}",
                    message.as_deref().unwrap_or(unconfirmed_fallback)
                ))
            }
            _ => Outcome::Error(format!(
                "Thất bại: {}",
                err.server_message().unwrap_or(CONNECTION_FAILURE)
            )),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(m) | Outcome::Warning(m) | Outcome::Error(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Modifier class for the outcome banner
    pub fn variant(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::Warning(_) => "warning",
            Outcome::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_uses_connection_fallback() {
        let outcome =
            Outcome::from_submit_error(&ApiError::Network("offline".into()), "unused");
        assert_eq!(
            outcome,
            Outcome::Error("Thất bại: Không thể kết nối đến máy chủ.".to_string())
        );
    }

    #[test]
    fn test_rejection_prefers_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Email đã tồn tại".into()),
        };
        let outcome = Outcome::from_submit_error(&err, "unused");
        assert_eq!(outcome.message(), "Thất bại: Email đã tồn tại");
        assert_eq!(outcome.variant(), "error");
    }

    #[test]
    fn test_unconfirmed_2xx_uses_its_own_fallback() {
        let err = ApiError::Status {
            status: 202,
            message: None,
        };
        let outcome = Outcome::from_submit_error(&err, "Có lỗi xảy ra.");
        assert_eq!(outcome.message(), "Lỗi: Có lỗi xảy ra.");
        assert!(!outcome.is_success());
    }
}
