//! Error types for the fortune pipeline.

use thiserror::Error;

/// Main error type for fetching and normalizing horoscopes.
///
/// Field-level extraction failures are never errors; they degrade to fallback
/// content. Only whole-request failures show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FortuneError {
    /// The API body was not a JSON object
    #[error("Invalid horoscope payload")]
    InvalidPayload,

    /// The API answered with a non-2xx status
    #[error("Failed to fetch horoscope: {status}")]
    FetchFailure { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded its deadline and was cancelled
    #[error("Request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// No birthdate was given
    #[error("Birthdate is required")]
    MissingBirthdate,

    /// The birthdate text could not be parsed into a month and day
    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(String),

    /// No sign matched the date or key
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
}

impl FortuneError {
    /// Text shown to the user alongside fallback content.
    pub fn user_message(&self) -> &'static str {
        match self {
            FortuneError::Timeout { .. } => {
                "リクエストがタイムアウトしました。時間をおいて再度お試しください。"
            }
            FortuneError::FetchFailure { .. } | FortuneError::Transport(_) => {
                "占いAPIへの接続に失敗しました。時間をおいて再度お試しください。"
            }
            FortuneError::MissingBirthdate => "生年月日を入力してください。",
            FortuneError::InvalidBirthdate(_) => "生年月日の形式が正しくありません。",
            FortuneError::UnknownSign(_) => {
                "星座が判定できませんでした。入力内容をご確認ください。"
            }
            FortuneError::InvalidPayload => {
                "占い結果の取得に失敗しました。時間をおいて再度お試しください。"
            }
        }
    }

    /// Whether this error came from the network leg of a request.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FortuneError::FetchFailure { .. } | FortuneError::Transport(_) | FortuneError::Timeout { .. }
        )
    }
}

/// Result type alias for fortune operations
pub type Result<T> = std::result::Result<T, FortuneError>;

impl From<serde_json::Error> for FortuneError {
    fn from(_err: serde_json::Error) -> Self {
        FortuneError::InvalidPayload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_has_its_own_message() {
        let timeout = FortuneError::Timeout { after_ms: 8000 };
        let failure = FortuneError::FetchFailure { status: 503 };
        assert_ne!(timeout.user_message(), failure.user_message());
        assert!(timeout.user_message().contains("タイムアウト"));
    }

    #[test]
    fn transport_and_status_failures_share_a_message() {
        let transport = FortuneError::Transport("connection refused".into());
        let failure = FortuneError::FetchFailure { status: 500 };
        assert_eq!(transport.user_message(), failure.user_message());
        assert!(transport.is_network());
        assert!(!FortuneError::InvalidPayload.is_network());
    }

    #[test]
    fn display_includes_status() {
        let err = FortuneError::FetchFailure { status: 404 };
        assert_eq!(err.to_string(), "Failed to fetch horoscope: 404");
    }
}
