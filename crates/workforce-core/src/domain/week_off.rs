//! Week-off Entity

use serde::{Deserialize, Serialize};

use super::{wire, EntityId};
use crate::validation::{require_text, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    #[serde(alias = "Monday", alias = "mon")]
    Monday,
    #[serde(alias = "Tuesday", alias = "tue")]
    Tuesday,
    #[serde(alias = "Wednesday", alias = "wed")]
    Wednesday,
    #[serde(alias = "Thursday", alias = "thu")]
    Thursday,
    #[serde(alias = "Friday", alias = "fri")]
    Friday,
    #[serde(alias = "Saturday", alias = "sat")]
    Saturday,
    #[serde(alias = "Sunday", alias = "sun")]
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn short(&self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
            Day::Saturday => "Sat",
            Day::Sunday => "Sun",
        }
    }
}

/// Named set of weekly rest days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekOff {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub days: Vec<Day>,
}

impl WeekOff {
    pub fn days_label(&self) -> String {
        self.days.iter().map(Day::short).collect::<Vec<_>>().join(", ")
    }

    pub fn to_draft(&self) -> WeekOffDraft {
        WeekOffDraft { name: self.name.clone(), days: self.days.clone() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekOffDraft {
    pub name: String,
    pub days: Vec<Day>,
}

impl WeekOffDraft {
    /// Add or remove a day, keeping Monday-first order.
    pub fn toggle(&mut self, day: Day) {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
            self.days.sort();
        }
    }
}

impl Validate for WeekOffDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a name")?;
        if self.days.is_empty() {
            return Err(ValidationError::new("days", "Please select at least one day"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_decode_aliases() {
        let w: WeekOff = serde_json::from_str(r#"{"id": 1, "name": "Weekend", "days": ["Saturday", "sun"]}"#).unwrap();
        assert_eq!(w.days, vec![Day::Saturday, Day::Sunday]);
        assert_eq!(w.days_label(), "Sat, Sun");
    }

    #[test]
    fn test_toggle_keeps_order() {
        let mut draft = WeekOffDraft { name: "Custom".into(), days: vec![] };
        draft.toggle(Day::Sunday);
        draft.toggle(Day::Monday);
        assert_eq!(draft.days, vec![Day::Monday, Day::Sunday]);
        draft.toggle(Day::Sunday);
        assert_eq!(draft.days, vec![Day::Monday]);
    }

    #[test]
    fn test_needs_a_day() {
        let draft = WeekOffDraft { name: "Empty".into(), days: vec![] };
        assert_eq!(draft.validate().unwrap_err().field, "days");
    }
}
