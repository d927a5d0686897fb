//! Invoice Entity
//!
//! Invoices may carry a file attachment, which switches the create/update
//! request from JSON to multipart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{status_key, wire, EntityId};
use crate::validation::{require_some, require_text, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match status_key(&raw).as_str() {
            "sent" | "issued" | "unpaid" => InvoiceStatus::Sent,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            "cancelled" | "canceled" | "void" => InvoiceStatus::Cancelled,
            _ => InvoiceStatus::Draft,
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: EntityId,
    pub invoice_number: String,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub client_name: String,
    #[serde(deserialize_with = "wire::number")]
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::null_default")]
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    /// URL of the uploaded file, if any.
    pub attachment: Option<String>,
}

impl Invoice {
    pub fn amount_label(&self) -> String {
        format!("{:.2}", self.amount)
    }

    pub fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: self.invoice_number.clone(),
            client_name: self.client_name.clone(),
            amount: Some(self.amount),
            issue_date: Some(self.issue_date),
            due_date: self.due_date,
            status: self.status,
            notes: self.notes.clone(),
            attachment: None,
        }
    }
}

/// A file picked in the browser, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client_name: String,
    pub amount: Option<f64>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    /// Sent as the `attachment` multipart part, never as JSON.
    #[serde(skip)]
    pub attachment: Option<Attachment>,
}

impl Validate for InvoiceDraft {
    fn validate(&self) -> ValidationResult {
        require_text("invoice_number", &self.invoice_number, "Please enter an invoice number")?;
        require_text("client_name", &self.client_name, "Please enter a client name")?;
        match self.amount {
            None => return Err(ValidationError::new("amount", "Please enter an amount")),
            Some(a) if a <= 0.0 => return Err(ValidationError::new("amount", "Amount must be greater than zero")),
            Some(_) => {}
        }
        require_some("issue_date", &self.issue_date, "Please select an issue date")?;
        if let (Some(issue), Some(due)) = (self.issue_date, self.due_date) {
            if due < issue {
                return Err(ValidationError::new("due_date", "Due date cannot be before the issue date"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: "INV-001".into(),
            client_name: "Acme".into(),
            amount: Some(250.0),
            issue_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_amount_positive() {
        let mut d = draft();
        d.amount = Some(0.0);
        assert_eq!(d.validate().unwrap_err().message, "Amount must be greater than zero");
    }

    #[test]
    fn test_due_before_issue() {
        let mut d = draft();
        d.due_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(d.validate().unwrap_err().field, "due_date");
    }

    #[test]
    fn test_attachment_not_in_json() {
        let mut d = draft();
        d.attachment = Some(Attachment { file_name: "a.pdf".into(), mime_type: "application/pdf".into(), bytes: vec![1] });
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("attachment").is_none());
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn test_decodes_decimal_amount() {
        let inv: Invoice = serde_json::from_str(
            r#"{"id": 8, "invoice_number": "INV-8", "client_name": "Acme", "amount": "1999.5", "issue_date": "2024-04-01", "status": "PAID"}"#,
        )
        .unwrap();
        assert_eq!(inv.amount_label(), "1999.50");
        assert_eq!(inv.status, InvoiceStatus::Paid);
    }
}
