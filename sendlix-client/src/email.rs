//! Client for the `Email` service.

use sendlix_core::{
    AdditionalOptions, GroupMailData, MailContent, MailOptions, SendEmailResponse,
};
use sendlix_proto::email as pb;
use sendlix_proto::email::email_client::EmailClient as EmailStub;
use std::time::Duration;
use tonic::transport::Channel;
use tracing::debug;

use crate::auth::{AuthService, BoxedAuthProvider};
use crate::base::BaseClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Sends transactional, raw EML and group emails.
///
/// # Example
///
/// ```no_run
/// use sendlix_client::{ApiKeyAuth, EmailClient};
/// use sendlix_core::{MailContent, MailOptions};
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = Arc::new(ApiKeyAuth::new("secret.123")?);
/// let client = EmailClient::new(auth, None)?;
///
/// let response = client
///     .send_email(
///         MailOptions {
///             from: "sender@example.com".into(),
///             to: vec!["recipient@example.com".into()],
///             subject: "Hello".to_string(),
///             content: MailContent {
///                 text: "Hi there".to_string(),
///                 ..Default::default()
///             },
///             ..Default::default()
///         },
///         None,
///     )
///     .await?;
/// println!("{} emails left", response.emails_left);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmailClient {
    base: BaseClient,
    client: EmailStub<AuthService<Channel>>,
}

impl EmailClient {
    pub fn new(auth: BoxedAuthProvider, config: Option<ClientConfig>) -> ClientResult<Self> {
        Ok(Self::from_base(BaseClient::new(auth, config)?))
    }

    pub fn from_base(base: BaseClient) -> Self {
        let client = EmailStub::new(base.channel());
        Self { base, client }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// Bound each call, token exchange included. Without a timeout a call
    /// ends only when it completes or its future is dropped.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.base = self.base.with_request_timeout(timeout);
        self
    }

    /// Send an email to one or more recipients.
    ///
    /// Requires a sender address, at least one recipient, a subject, and
    /// HTML or text content.
    pub async fn send_email(
        &self,
        options: MailOptions,
        additional: Option<AdditionalOptions>,
    ) -> ClientResult<SendEmailResponse> {
        validate_mail_options(&options)?;

        let mut request = pb::SendMailRequest::from(options);
        request.additional_infos = additional.map(Into::into);
        debug!(recipients = request.to.len(), "sending email");

        let response = self
            .client
            .clone()
            .send_email(self.base.request(request))
            .await
            .map_err(|status| ClientError::rpc("send email", status))?;
        Ok(response.into_inner().into())
    }

    /// Send a complete RFC 5322 message as-is
    pub async fn send_eml_email(
        &self,
        eml: impl Into<Vec<u8>>,
        additional: Option<AdditionalOptions>,
    ) -> ClientResult<SendEmailResponse> {
        let request = pb::EmlMailRequest {
            mail: eml.into(),
            additional_infos: additional.map(Into::into),
        };
        debug!(size = request.mail.len(), "sending EML email");

        let response = self
            .client
            .clone()
            .send_eml_email(self.base.request(request))
            .await
            .map_err(|status| ClientError::rpc("send EML email", status))?;
        Ok(response.into_inner().into())
    }

    /// Send one email to every member of a group
    pub async fn send_group_email(&self, data: GroupMailData) -> ClientResult<SendEmailResponse> {
        validate_group_mail(&data)?;
        debug!(group_id = %data.group_id, "sending group email");

        let response = self
            .client
            .clone()
            .send_group_email(self.base.request(pb::GroupMailData::from(data)))
            .await
            .map_err(|status| ClientError::rpc("send group email", status))?;
        Ok(response.into_inner().into())
    }
}

fn validate_mail_options(options: &MailOptions) -> ClientResult<()> {
    if options.from.email.is_empty() {
        return Err(ClientError::MissingField("from email"));
    }
    if options.to.is_empty() {
        return Err(ClientError::NoRecipients);
    }
    if options.subject.is_empty() {
        return Err(ClientError::MissingField("subject"));
    }
    validate_content(&options.content)
}

fn validate_group_mail(data: &GroupMailData) -> ClientResult<()> {
    if data.group_id.is_empty() {
        return Err(ClientError::MissingField("group ID"));
    }
    if data.from.email.is_empty() {
        return Err(ClientError::MissingField("from email"));
    }
    if data.subject.is_empty() {
        return Err(ClientError::MissingField("subject"));
    }
    validate_content(&data.content)
}

fn validate_content(content: &MailContent) -> ClientResult<()> {
    if content.is_empty() {
        return Err(ClientError::EmptyContent);
    }
    Ok(())
}
