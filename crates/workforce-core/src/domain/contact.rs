//! Contact Entity

use serde::{Deserialize, Serialize};

use super::{wire, EntityId};
use crate::validation::{require_text, Validate, ValidationResult};

/// A CRM contact owned by one admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub phone: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Contact {
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl Validate for ContactDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a contact name")?;
        require_text("phone", &self.phone, "Please enter a phone number")?;
        Ok(())
    }
}
