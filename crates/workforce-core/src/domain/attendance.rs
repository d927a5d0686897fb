//! Attendance and Employee Entities
//!
//! Both are read-only from the console.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{wire, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: EntityId,
    pub employee_id: Option<EntityId>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub employee_name: String,
    pub date: NaiveDate,
    #[serde(default, with = "wire::opt_hm_time")]
    pub check_in: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_hm_time")]
    pub check_out: Option<NaiveTime>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub working_hours: Option<f64>,
}

impl AttendanceRecord {
    /// Worked duration in hours, from the backend or from the clock times.
    pub fn hours_worked(&self) -> Option<f64> {
        self.working_hours.or_else(|| match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end > start => Some((end - start).num_minutes() as f64 / 60.0),
            _ => None,
        })
    }
}

/// An employee under an admin, used for assignment pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_from_clock_times() {
        let rec: AttendanceRecord = serde_json::from_str(
            r#"{"id": 1, "employee_name": "Asha", "date": "2024-02-01", "check_in": "09:00", "check_out": "17:30:00", "status": "present"}"#,
        )
        .unwrap();
        assert_eq!(rec.hours_worked(), Some(8.5));
    }

    #[test]
    fn test_open_record_has_no_hours() {
        let rec: AttendanceRecord =
            serde_json::from_str(r#"{"id": 1, "date": "2024-02-01", "check_in": "09:00", "check_out": null}"#).unwrap();
        assert_eq!(rec.hours_worked(), None);
        assert_eq!(rec.employee_name, "");
    }
}
