//! Application layer errors

use thiserror::Error;

use crate::domain::entities::SkillResponse;

/// Skill execution errors. Each variant carries the user-facing message and
/// maps onto one HTTP-style response code at the dispatch boundary.
#[derive(Error, Debug)]
pub enum SkillError {
    /// Missing or malformed parameters (400).
    #[error("{0}")]
    Validation(String),

    /// Sender is not allowed to perform the operation (403).
    #[error("{0}")]
    Authorization(String),

    /// Resolution returned no match (404).
    #[error("{0}")]
    NotFound(String),

    /// External call failed, timed out, or returned malformed data (500).
    #[error("{0}")]
    Upstream(String),
}

impl SkillError {
    pub fn status_code(&self) -> u16 {
        match self {
            SkillError::Validation(_) => 400,
            SkillError::Authorization(_) => 403,
            SkillError::NotFound(_) => 404,
            SkillError::Upstream(_) => 500,
        }
    }

    pub fn into_response(self) -> SkillResponse {
        let code = self.status_code();
        SkillResponse::new(code, self.to_string())
    }
}

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_follow_http_conventions() {
        assert_eq!(SkillError::Validation("x".into()).status_code(), 400);
        assert_eq!(SkillError::Authorization("x".into()).status_code(), 403);
        assert_eq!(SkillError::NotFound("x".into()).status_code(), 404);
        assert_eq!(SkillError::Upstream("x".into()).status_code(), 500);
    }

    #[test]
    fn into_response_carries_the_message() {
        let resp = SkillError::NotFound("Domain not found.".into()).into_response();
        assert_eq!(resp, SkillResponse::new(404, "Domain not found."));
    }
}
