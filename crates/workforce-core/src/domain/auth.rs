//! Login payloads

use serde::{Deserialize, Serialize};

use super::wire;
use crate::validation::{require_text, Validate, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> ValidationResult {
        require_text("email", &self.email, "Please enter your email")?;
        require_text("password", &self.password, "Please enter your password")
    }
}

/// `data` of a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    #[serde(alias = "access_token")]
    pub access: String,
    #[serde(default, alias = "refresh_token")]
    pub refresh: Option<String>,
    pub role: String,
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "wire::opt_id_string")]
    pub organization_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_data_numeric_ids() {
        let data: LoginData = serde_json::from_str(
            r#"{"access_token": "a", "refresh_token": "r", "role": "admin", "user_id": 12, "organization_id": null}"#,
        )
        .unwrap();
        assert_eq!(data.access, "a");
        assert_eq!(data.user_id, "12");
        assert_eq!(data.organization_id, None);
    }
}
