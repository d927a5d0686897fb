//! Visit Entity
//!
//! A scheduled field visit assigned to an employee, with optional
//! geotagged check-in and check-out.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{status_key, wire, EntityId};
use crate::validation::{require_some, require_text, Validate, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisitStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub const ALL: [VisitStatus; 4] = [
        VisitStatus::Pending,
        VisitStatus::InProgress,
        VisitStatus::Completed,
        VisitStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "pending",
            VisitStatus::InProgress => "in_progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "Pending",
            VisitStatus::InProgress => "In progress",
            VisitStatus::Completed => "Completed",
            VisitStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<String> for VisitStatus {
    fn from(raw: String) -> Self {
        match status_key(&raw).as_str() {
            "in_progress" | "checked_in" | "started" => VisitStatus::InProgress,
            "completed" | "checked_out" | "done" => VisitStatus::Completed,
            "cancelled" | "canceled" => VisitStatus::Cancelled,
            _ => VisitStatus::Pending,
        }
    }
}

impl From<VisitStatus> for String {
    fn from(status: VisitStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub schedule_date: NaiveDate,
    #[serde(default, with = "wire::opt_hm_time")]
    pub schedule_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub address: String,
    pub assigned_employee: Option<EntityId>,
    pub assigned_employee_name: Option<String>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub status: VisitStatus,
    #[serde(default, deserialize_with = "wire::opt_timestamp", skip_serializing)]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_timestamp", skip_serializing)]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub check_in_latitude: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub check_in_longitude: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub check_out_latitude: Option<f64>,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub check_out_longitude: Option<f64>,
}

impl Visit {
    pub fn can_check_in(&self) -> bool {
        self.check_in_time.is_none() && self.status == VisitStatus::Pending
    }

    pub fn can_check_out(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }

    pub fn to_draft(&self) -> VisitDraft {
        VisitDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            schedule_date: Some(self.schedule_date),
            schedule_time: self.schedule_time,
            address: self.address.clone(),
            assigned_employee: self.assigned_employee,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisitDraft {
    pub title: String,
    pub description: Option<String>,
    pub schedule_date: Option<NaiveDate>,
    #[serde(with = "wire::opt_hm_time")]
    pub schedule_time: Option<NaiveTime>,
    pub address: String,
    pub assigned_employee: Option<EntityId>,
    pub status: VisitStatus,
}

impl Validate for VisitDraft {
    fn validate(&self) -> ValidationResult {
        require_text("title", &self.title, "Please enter a visit title")?;
        require_some("schedule_date", &self.schedule_date, "Please select a schedule date")?;
        require_text("address", &self.address, "Please enter an address")?;
        require_some("assigned_employee", &self.assigned_employee, "Please assign an employee")?;
        Ok(())
    }
}
