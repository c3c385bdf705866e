use thiserror::Error;

/// Maximum number of characters surfaced to the UI from any error message.
const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// True when the server rejected the caller's session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401 | 403, .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message safe to render in an alert or error banner.
    pub fn user_message(&self) -> String {
        let message = match self {
            AppError::Config(message) => message.clone(),
            AppError::Timeout(_) => "O servidor demorou para responder. Tente novamente.".to_string(),
            AppError::Network(_) => "Não foi possível contatar o servidor.".to_string(),
            AppError::Http { status, message } => format!("Falha na requisição ({status}): {message}"),
            AppError::Cancelled => "Operação cancelada.".to_string(),
            AppError::Parse(_) | AppError::Serialization(_) => {
                "Resposta inesperada do servidor.".to_string()
            }
        };
        message.chars().take(MAX_MESSAGE_CHARS).collect()
    }
}
