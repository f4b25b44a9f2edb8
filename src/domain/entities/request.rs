use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// An inbound skill invocation: a skill name plus a bag of named parameters.
#[derive(Debug, Clone)]
pub struct SkillRequest {
    pub id: String,
    pub skill: String,
    pub params: HashMap<String, String>,
    pub sender_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SkillRequest {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            skill: skill.into(),
            params: HashMap::new(),
            sender_address: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_sender(mut self, address: impl Into<String>) -> Self {
        self.sender_address = Some(address.into());
        self
    }

    pub fn with_sender_opt(mut self, address: Option<impl Into<String>>) -> Self {
        self.sender_address = address.map(|a| a.into());
        self
    }

    /// Look up a parameter, treating an empty string as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// The structured outcome of one skill invocation. Codes follow HTTP
/// conventions: 200 ok, 400 bad input, 403 forbidden, 404 not found,
/// 500 upstream failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillResponse {
    pub code: u16,
    pub message: String,
}

impl SkillResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }

    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_treats_empty_as_missing() {
        let req = SkillRequest::new("check")
            .with_param("domain", "")
            .with_param("other", "x");
        assert_eq!(req.param("domain"), None);
        assert_eq!(req.param("other"), Some("x"));
        assert_eq!(req.param("absent"), None);
    }

    #[test]
    fn response_helpers() {
        assert!(SkillResponse::ok("done").is_success());
        assert!(!SkillResponse::new(404, "nope").is_success());
    }
}
