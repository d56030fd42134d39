//! Messages and client stub for the `sendlix.api.v1.Email` service.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmailData {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MailContent {
    #[prost(string, tag = "1")]
    pub html: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub tracking: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttachmentData {
    #[prost(string, tag = "1")]
    pub content_url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub filename: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub r#type: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdditionalInfos {
    #[prost(message, repeated, tag = "1")]
    pub attachments: ::prost::alloc::vec::Vec<AttachmentData>,
    #[prost(string, tag = "2")]
    pub category: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub send_at: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendMailRequest {
    #[prost(message, optional, tag = "1")]
    pub from: ::core::option::Option<EmailData>,
    #[prost(message, repeated, tag = "2")]
    pub to: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(message, repeated, tag = "3")]
    pub cc: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(message, repeated, tag = "4")]
    pub bcc: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(string, tag = "5")]
    pub subject: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub reply_to: ::core::option::Option<EmailData>,
    #[prost(message, optional, tag = "8")]
    pub additional_infos: ::core::option::Option<AdditionalInfos>,
    #[prost(oneof = "send_mail_request::Body", tags = "7")]
    pub body: ::core::option::Option<send_mail_request::Body>,
}

/// Nested message and enum types in `SendMailRequest`.
pub mod send_mail_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Body {
        #[prost(message, tag = "7")]
        TextContent(super::MailContent),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmlMailRequest {
    /// Raw RFC 5322 message
    #[prost(bytes = "vec", tag = "1")]
    pub mail: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub additional_infos: ::core::option::Option<AdditionalInfos>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupMailData {
    #[prost(string, tag = "1")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub subject: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub from: ::core::option::Option<EmailData>,
    #[prost(string, tag = "4")]
    pub category: ::prost::alloc::string::String,
    #[prost(oneof = "group_mail_data::Body", tags = "5")]
    pub body: ::core::option::Option<group_mail_data::Body>,
}

/// Nested message and enum types in `GroupMailData`.
pub mod group_mail_data {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Body {
        #[prost(message, tag = "5")]
        TextContent(super::MailContent),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendEmailResponse {
    #[prost(string, repeated, tag = "1")]
    pub message: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub emails_left: i64,
}

/// Generated client implementations.
pub mod email_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct EmailClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> EmailClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub async fn send_email(
            &mut self,
            request: impl tonic::IntoRequest<super::SendMailRequest>,
        ) -> std::result::Result<tonic::Response<super::SendEmailResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/sendlix.api.v1.Email/SendEmail");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Email", "SendEmail"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn send_eml_email(
            &mut self,
            request: impl tonic::IntoRequest<super::EmlMailRequest>,
        ) -> std::result::Result<tonic::Response<super::SendEmailResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/sendlix.api.v1.Email/SendEmlEmail");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Email", "SendEmlEmail"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn send_group_email(
            &mut self,
            request: impl tonic::IntoRequest<super::GroupMailData>,
        ) -> std::result::Result<tonic::Response<super::SendEmailResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/sendlix.api.v1.Email/SendGroupEmail");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Email", "SendGroupEmail"));
            self.inner.unary(req, path, codec).await
        }
    }
}
