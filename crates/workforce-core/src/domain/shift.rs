//! Shift Entity

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{wire, EntityId};
use crate::validation::{require_some, require_text, Validate, ValidationError, ValidationResult};

/// A named working window. `end_time` before `start_time` means the shift
/// runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: EntityId,
    pub name: String,
    #[serde(with = "wire::hm_time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire::hm_time")]
    pub end_time: NaiveTime,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub grace_minutes: u32,
}

impl Shift {
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Length in minutes, wrapping past midnight.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if minutes < 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }

    pub fn to_draft(&self) -> ShiftDraft {
        ShiftDraft {
            name: self.name.clone(),
            start_time: Some(self.start_time),
            end_time: Some(self.end_time),
            grace_minutes: self.grace_minutes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShiftDraft {
    pub name: String,
    #[serde(with = "wire::opt_hm_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "wire::opt_hm_time")]
    pub end_time: Option<NaiveTime>,
    pub grace_minutes: u32,
}

impl Validate for ShiftDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a shift name")?;
        require_some("start_time", &self.start_time, "Please select a start time")?;
        require_some("end_time", &self.end_time, "Please select an end time")?;
        if self.start_time == self.end_time {
            return Err(ValidationError::new("end_time", "Start and end time cannot be the same"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str) -> Shift {
        serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Night", "start_time": start, "end_time": end
        }))
        .unwrap()
    }

    #[test]
    fn test_overnight_duration() {
        let s = shift("22:00:00", "06:00");
        assert!(s.is_overnight());
        assert_eq!(s.duration_minutes(), 8 * 60);
        assert_eq!(s.grace_minutes, 0);
    }

    #[test]
    fn test_day_duration() {
        let s = shift("09:00", "17:30");
        assert!(!s.is_overnight());
        assert_eq!(s.duration_minutes(), 510);
    }

    #[test]
    fn test_same_start_and_end_rejected() {
        let mut draft = shift("09:00", "17:00").to_draft();
        draft.end_time = draft.start_time;
        assert_eq!(draft.validate().unwrap_err().field, "end_time");
    }
}
