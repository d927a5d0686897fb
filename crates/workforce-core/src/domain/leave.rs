//! Leave Entities
//!
//! Leave types, the policies granting quotas for them, and employee
//! applications awaiting a decision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{status_key, wire, EntityId};
use crate::validation::{require_some, require_text, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: EntityId,
    pub name: String,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub is_paid: bool,
    pub description: Option<String>,
}

impl LeaveType {
    pub fn to_draft(&self) -> LeaveTypeDraft {
        LeaveTypeDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            is_paid: self.is_paid,
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaveTypeDraft {
    pub name: String,
    pub code: Option<String>,
    pub is_paid: bool,
    pub description: Option<String>,
}

impl Validate for LeaveTypeDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a leave type name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePolicy {
    pub id: EntityId,
    pub name: String,
    pub leave_type: EntityId,
    pub leave_type_name: Option<String>,
    #[serde(deserialize_with = "wire::number")]
    pub annual_quota: f64,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub carry_forward: bool,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub max_carry_forward: Option<f64>,
    pub description: Option<String>,
}

impl LeavePolicy {
    pub fn to_draft(&self) -> LeavePolicyDraft {
        LeavePolicyDraft {
            name: self.name.clone(),
            leave_type: Some(self.leave_type),
            annual_quota: Some(self.annual_quota),
            carry_forward: self.carry_forward,
            max_carry_forward: self.max_carry_forward,
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeavePolicyDraft {
    pub name: String,
    pub leave_type: Option<EntityId>,
    pub annual_quota: Option<f64>,
    pub carry_forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_carry_forward: Option<f64>,
    pub description: Option<String>,
}

impl Validate for LeavePolicyDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a policy name")?;
        require_some("leave_type", &self.leave_type, "Please select a leave type")?;
        match self.annual_quota {
            None => return Err(ValidationError::new("annual_quota", "Please enter the annual quota")),
            Some(q) if q < 0.0 => {
                return Err(ValidationError::new("annual_quota", "Annual quota cannot be negative"))
            }
            Some(_) => {}
        }
        if self.carry_forward && self.max_carry_forward.is_some_and(|m| m < 0.0) {
            return Err(ValidationError::new("max_carry_forward", "Carry forward limit cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<String> for LeaveStatus {
    fn from(raw: String) -> Self {
        match status_key(&raw).as_str() {
            "approved" => LeaveStatus::Approved,
            "rejected" | "declined" => LeaveStatus::Rejected,
            "cancelled" | "canceled" => LeaveStatus::Cancelled,
            _ => LeaveStatus::Pending,
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: EntityId,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub employee_name: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub leave_type_name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub status: LeaveStatus,
}

impl LeaveApplication {
    /// Calendar days covered, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days().max(0) + 1
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

/// Body of the approve/reject call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Validate for LeaveStatusUpdate {
    fn validate(&self) -> ValidationResult {
        match self.status {
            LeaveStatus::Approved | LeaveStatus::Rejected => Ok(()),
            _ => Err(ValidationError::new("status", "A leave can only be approved or rejected")),
        }
    }
}
