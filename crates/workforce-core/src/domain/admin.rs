//! Admin Entity
//!
//! Tenant accounts managed by an organization.

use serde::{Deserialize, Serialize};

use super::{wire, EntityId};
use crate::validation::{require_text, Validate, ValidationError, ValidationResult};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub email: String,
    pub phone: Option<String>,
}

impl Admin {
    pub fn to_draft(&self) -> AdminDraft {
        AdminDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: None,
            require_password: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Set for new admins; edits may leave the password untouched.
    #[serde(skip)]
    pub require_password: bool,
}

impl Validate for AdminDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a name")?;
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::new("email", "Please enter a valid email"));
        }
        match self.password.as_deref() {
            None if self.require_password => Err(ValidationError::new("password", "Please enter a password")),
            Some(p) if p.chars().count() < MIN_PASSWORD_LEN => Err(ValidationError::new(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AdminDraft {
        AdminDraft { name: "North Branch".into(), email: "north@example.com".into(), ..Default::default() }
    }

    #[test]
    fn test_new_admin_needs_password() {
        let mut d = draft();
        d.require_password = true;
        assert_eq!(d.validate().unwrap_err().field, "password");
        d.password = Some("longenough".into());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_edit_without_password() {
        let admin = Admin { id: 2, name: "North".into(), email: "n@example.com".into(), phone: None };
        let d = admin.to_draft();
        assert!(d.validate().is_ok());
        assert!(serde_json::to_value(&d).unwrap().get("password").is_none());
    }

    #[test]
    fn test_email_shape() {
        let mut d = draft();
        d.email = "north".into();
        assert_eq!(d.validate().unwrap_err().field, "email");
    }
}
