//! Messages and client stub for the `sendlix.api.v1.Group` service.

pub use super::email::EmailData;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertEmailToGroupRequest {
    #[prost(message, repeated, tag = "1")]
    pub emails: ::prost::alloc::vec::Vec<EmailData>,
    #[prost(string, tag = "2")]
    pub group_id: ::prost::alloc::string::String,
    /// Per-recipient template values
    #[prost(map = "string, string", tag = "3")]
    pub substitutions:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveEmailFromGroupRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub group_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckEmailInGroupRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub group_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub affected_rows: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckEmailInGroupResponse {
    #[prost(bool, tag = "1")]
    pub exists: bool,
}

/// Generated client implementations.
pub mod group_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct GroupClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> GroupClient<T>
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

        pub async fn insert_email_to_group(
            &mut self,
            request: impl tonic::IntoRequest<super::InsertEmailToGroupRequest>,
        ) -> std::result::Result<tonic::Response<super::UpdateResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/sendlix.api.v1.Group/InsertEmailToGroup");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Group", "InsertEmailToGroup"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn remove_email_from_group(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveEmailFromGroupRequest>,
        ) -> std::result::Result<tonic::Response<super::UpdateResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/sendlix.api.v1.Group/RemoveEmailFromGroup");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Group", "RemoveEmailFromGroup"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn check_email_in_group(
            &mut self,
            request: impl tonic::IntoRequest<super::CheckEmailInGroupRequest>,
        ) -> std::result::Result<tonic::Response<super::CheckEmailInGroupResponse>, tonic::Status>
        {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/sendlix.api.v1.Group/CheckEmailInGroup");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Group", "CheckEmailInGroup"));
            self.inner.unary(req, path, codec).await
        }
    }
}
