use mk_model::Notice;
use thiserror::Error;

pub const MSG_UNAUTHORIZED: &str = "Unauthorized, please sign in again";
pub const MSG_FORBIDDEN: &str = "Access denied";
pub const MSG_NOT_FOUND: &str = "The requested resource does not exist";
pub const MSG_SERVER: &str = "Server error";
pub const MSG_GENERIC: &str = "Request failed";
pub const MSG_NETWORK: &str = "Network error, please check your connection";
pub const MSG_CONFIG: &str = "Request configuration error";

/// Every way a gateway call can fail.
///
/// None of these are fatal; callers turn them into exactly one [`Notice`]
/// via [`GatewayError::notice`] and keep whatever state they had.
#[derive(Debug, Error)]
pub enum GatewayError {
    // ── Transport ───────────────────────────────────────────────────
    #[error("no response from server: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request could not be built: {0}")]
    Config(String),

    // ── Server-side ─────────────────────────────────────────────────
    #[error("HTTP {status}{}", msg.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, msg: Option<String> },

    /// The envelope arrived but carried a non-zero `status`.
    #[error("backend returned status {status}{}", msg.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Business { status: i64, msg: Option<String> },

    #[error("successful response carried no data")]
    MissingData,

    // ── Data ────────────────────────────────────────────────────────
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => MSG_NETWORK.to_string(),
            Self::Config(_) => MSG_CONFIG.to_string(),
            Self::Http { status, msg } => match status {
                401 => MSG_UNAUTHORIZED.to_string(),
                403 => MSG_FORBIDDEN.to_string(),
                404 => MSG_NOT_FOUND.to_string(),
                500 => MSG_SERVER.to_string(),
                _ => non_blank(msg).unwrap_or(MSG_GENERIC).to_string(),
            },
            Self::Business { msg, .. } => non_blank(msg).unwrap_or(MSG_GENERIC).to_string(),
            Self::MissingData | Self::Decode(_) => MSG_GENERIC.to_string(),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }

    /// HTTP status code, if the server answered with a non-2xx.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Config(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

fn non_blank(msg: &Option<String>) -> Option<&str> {
    msg.as_deref().map(str::trim).filter(|m| !m.is_empty())
}
