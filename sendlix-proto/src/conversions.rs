//! Type conversions between protobuf messages and SDK types
//!
//! Requests flow from `sendlix_core` types into messages; responses flow
//! back. Conversions that can observe missing or out-of-range fields are
//! `TryFrom` and report a [`ConversionError`].

use crate::{auth, email, group};
use chrono::{DateTime, Utc};
use sendlix_core as sdk;
use std::convert::TryFrom;

/// Error type for conversion failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid timestamp: seconds={seconds}, nanos={nanos}")]
    InvalidTimestamp { seconds: i64, nanos: i32 },
}

/// Convert a protobuf timestamp to a UTC instant
pub fn timestamp_to_datetime(ts: &prost_types::Timestamp) -> Result<DateTime<Utc>, ConversionError> {
    let invalid = || ConversionError::InvalidTimestamp {
        seconds: ts.seconds,
        nanos: ts.nanos,
    };
    let nanos = u32::try_from(ts.nanos).map_err(|_| invalid())?;
    DateTime::from_timestamp(ts.seconds, nanos).ok_or_else(invalid)
}

/// Convert a UTC instant to a protobuf timestamp
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

/// A token and its absolute expiry, as returned by `Auth.GetJwtToken`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TryFrom<auth::AuthResponse> for IssuedToken {
    type Error = ConversionError;

    fn try_from(resp: auth::AuthResponse) -> Result<Self, Self::Error> {
        if resp.token.is_empty() {
            return Err(ConversionError::MissingField("token"));
        }
        let expires = resp.expires.ok_or(ConversionError::MissingField("expires"))?;
        Ok(IssuedToken {
            token: resp.token,
            expires_at: timestamp_to_datetime(&expires)?,
        })
    }
}

impl From<sdk::EmailAddress> for email::EmailData {
    fn from(addr: sdk::EmailAddress) -> Self {
        email::EmailData {
            email: addr.email,
            name: addr.name.unwrap_or_default(),
        }
    }
}

impl From<sdk::EmailData> for email::EmailData {
    fn from(data: sdk::EmailData) -> Self {
        email::EmailData {
            email: data.email,
            name: data.name,
        }
    }
}

impl From<sdk::MailContent> for email::MailContent {
    fn from(content: sdk::MailContent) -> Self {
        email::MailContent {
            html: content.html,
            text: content.text,
            tracking: content.tracking,
        }
    }
}

impl From<sdk::Attachment> for email::AttachmentData {
    fn from(att: sdk::Attachment) -> Self {
        email::AttachmentData {
            content_url: att.content_url,
            filename: att.filename,
            r#type: att.content_type,
        }
    }
}

impl From<sdk::AdditionalOptions> for email::AdditionalInfos {
    fn from(opts: sdk::AdditionalOptions) -> Self {
        email::AdditionalInfos {
            attachments: opts.attachments.into_iter().map(Into::into).collect(),
            category: opts.category,
            send_at: opts.send_at.map(datetime_to_timestamp),
        }
    }
}

fn address_list(addrs: Vec<sdk::EmailAddress>) -> Vec<email::EmailData> {
    addrs.into_iter().map(Into::into).collect()
}

impl From<sdk::MailOptions> for email::SendMailRequest {
    fn from(options: sdk::MailOptions) -> Self {
        email::SendMailRequest {
            from: Some(options.from.into()),
            to: address_list(options.to),
            cc: address_list(options.cc),
            bcc: address_list(options.bcc),
            subject: options.subject,
            reply_to: options.reply_to.map(Into::into),
            additional_infos: None,
            body: Some(email::send_mail_request::Body::TextContent(
                options.content.into(),
            )),
        }
    }
}

impl From<sdk::GroupMailData> for email::GroupMailData {
    fn from(data: sdk::GroupMailData) -> Self {
        email::GroupMailData {
            group_id: data.group_id,
            subject: data.subject,
            from: Some(data.from.into()),
            category: data.category,
            body: Some(email::group_mail_data::Body::TextContent(data.content.into())),
        }
    }
}

impl From<email::SendEmailResponse> for sdk::SendEmailResponse {
    fn from(resp: email::SendEmailResponse) -> Self {
        sdk::SendEmailResponse {
            message_list: resp.message,
            emails_left: resp.emails_left,
        }
    }
}

impl From<group::UpdateResponse> for sdk::InsertEmailToGroupResponse {
    fn from(resp: group::UpdateResponse) -> Self {
        sdk::InsertEmailToGroupResponse {
            success: resp.success,
            message: resp.message,
            affected_rows: resp.affected_rows,
        }
    }
}

impl From<group::UpdateResponse> for sdk::RemoveEmailFromGroupResponse {
    fn from(resp: group::UpdateResponse) -> Self {
        sdk::RemoveEmailFromGroupResponse {
            success: resp.success,
            message: resp.message,
            affected_rows: resp.affected_rows,
        }
    }
}

impl From<group::CheckEmailInGroupResponse> for sdk::CheckEmailInGroupResponse {
    fn from(resp: group::CheckEmailInGroupResponse) -> Self {
        sdk::CheckEmailInGroupResponse {
            exists: resp.exists,
        }
    }
}
