//! Core types for the Sendlix client.
//!
//! This module defines the request and response types exchanged with the
//! email and group APIs, independent of their wire representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An email address with an optional display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => write!(f, "{} <{}>", name, self.email),
            _ => f.write_str(&self.email),
        }
    }
}

impl From<&str> for EmailAddress {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for EmailAddress {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

/// Body of an email. At least one of `html` and `text` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailContent {
    pub html: String,
    pub text: String,
    /// Enable open/click tracking
    pub tracking: bool,
}

impl MailContent {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.text.is_empty()
    }
}

/// A file attached by reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// URL the server fetches the content from
    pub content_url: String,
    pub filename: String,
    /// MIME type, e.g. `application/pdf`
    pub content_type: String,
}

/// Options for a single email send
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailOptions {
    pub from: EmailAddress,
    pub to: Vec<EmailAddress>,
    #[serde(default)]
    pub cc: Vec<EmailAddress>,
    #[serde(default)]
    pub bcc: Vec<EmailAddress>,
    pub subject: String,
    #[serde(default)]
    pub reply_to: Option<EmailAddress>,
    pub content: MailContent,
}

/// Options shared by regular and EML sends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalOptions {
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub category: String,
    /// Schedule delivery instead of sending immediately
    #[serde(default)]
    pub send_at: Option<DateTime<Utc>>,
}

/// Result of any send operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    /// Message IDs assigned by the server
    pub message_list: Vec<String>,
    /// Remaining send quota
    pub emails_left: i64,
}

/// An email sent to every member of a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMailData {
    pub from: EmailAddress,
    pub group_id: String,
    pub subject: String,
    #[serde(default)]
    pub category: String,
    pub content: MailContent,
}

/// A group member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailData {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl EmailData {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertEmailToGroupResponse {
    pub success: bool,
    pub message: String,
    pub affected_rows: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveEmailFromGroupResponse {
    pub success: bool,
    pub message: String,
    pub affected_rows: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEmailInGroupResponse {
    pub exists: bool,
}
