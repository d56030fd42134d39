//! Client for the `Group` service.

use sendlix_core::{
    CheckEmailInGroupResponse, EmailData, InsertEmailToGroupResponse,
    RemoveEmailFromGroupResponse,
};
use sendlix_proto::group as pb;
use sendlix_proto::group::group_client::GroupClient as GroupStub;
use std::collections::HashMap;
use std::time::Duration;
use tonic::transport::Channel;
use tracing::debug;

use crate::auth::{AuthService, BoxedAuthProvider};
use crate::base::BaseClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Manages the members of email groups.
#[derive(Debug, Clone)]
pub struct GroupClient {
    base: BaseClient,
    client: GroupStub<AuthService<Channel>>,
}

impl GroupClient {
    pub fn new(auth: BoxedAuthProvider, config: Option<ClientConfig>) -> ClientResult<Self> {
        Ok(Self::from_base(BaseClient::new(auth, config)?))
    }

    pub fn from_base(base: BaseClient) -> Self {
        let client = GroupStub::new(base.channel());
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

    /// Add addresses to a group.
    ///
    /// `substitutions` are template values applied to the inserted members.
    /// Every entry needs a non-empty address; the error names the first
    /// offending index.
    pub async fn insert_emails_to_group(
        &self,
        group_id: &str,
        emails: Vec<EmailData>,
        substitutions: HashMap<String, String>,
    ) -> ClientResult<InsertEmailToGroupResponse> {
        if group_id.is_empty() {
            return Err(ClientError::MissingField("group ID"));
        }
        if emails.is_empty() {
            return Err(ClientError::NoEmails);
        }
        if let Some(index) = emails.iter().position(|e| e.email.is_empty()) {
            return Err(ClientError::EmptyEmailAtIndex(index));
        }

        let request = pb::InsertEmailToGroupRequest {
            emails: emails.into_iter().map(Into::into).collect(),
            group_id: group_id.to_string(),
            substitutions,
        };
        debug!(group_id, count = request.emails.len(), "inserting emails to group");

        let response = self
            .client
            .clone()
            .insert_email_to_group(self.base.request(request))
            .await
            .map_err(|status| ClientError::rpc("insert emails to group", status))?;
        Ok(response.into_inner().into())
    }

    /// Add a single address to a group
    pub async fn insert_email_to_group(
        &self,
        group_id: &str,
        email: EmailData,
        substitutions: HashMap<String, String>,
    ) -> ClientResult<InsertEmailToGroupResponse> {
        self.insert_emails_to_group(group_id, vec![email], substitutions)
            .await
    }

    pub async fn remove_email_from_group(
        &self,
        group_id: &str,
        email: &str,
    ) -> ClientResult<RemoveEmailFromGroupResponse> {
        validate_member(group_id, email)?;
        debug!(group_id, "removing email from group");

        let request = pb::RemoveEmailFromGroupRequest {
            email: email.to_string(),
            group_id: group_id.to_string(),
        };
        let response = self
            .client
            .clone()
            .remove_email_from_group(self.base.request(request))
            .await
            .map_err(|status| ClientError::rpc("remove email from group", status))?;
        Ok(response.into_inner().into())
    }

    pub async fn check_email_in_group(
        &self,
        group_id: &str,
        email: &str,
    ) -> ClientResult<CheckEmailInGroupResponse> {
        validate_member(group_id, email)?;

        let request = pb::CheckEmailInGroupRequest {
            email: email.to_string(),
            group_id: group_id.to_string(),
        };
        let response = self
            .client
            .clone()
            .check_email_in_group(self.base.request(request))
            .await
            .map_err(|status| ClientError::rpc("check email in group", status))?;
        Ok(response.into_inner().into())
    }
}

fn validate_member(group_id: &str, email: &str) -> ClientResult<()> {
    if group_id.is_empty() {
        return Err(ClientError::MissingField("group ID"));
    }
    if email.is_empty() {
        return Err(ClientError::MissingField("email address"));
    }
    Ok(())
}
