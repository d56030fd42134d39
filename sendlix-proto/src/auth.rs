//! Messages and client stub for the `sendlix.api.v1.Auth` service.

/// Credentials exchanged for a short-lived token
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiKey {
    #[prost(string, tag = "1")]
    pub secret: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub key_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthRequest {
    #[prost(oneof = "auth_request::Key", tags = "1")]
    pub key: ::core::option::Option<auth_request::Key>,
}

/// Nested message and enum types in `AuthRequest`.
pub mod auth_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Key {
        #[prost(message, tag = "1")]
        ApiKey(super::ApiKey),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthResponse {
    #[prost(string, tag = "1")]
    pub token: ::prost::alloc::string::String,
    /// Absolute expiry of `token`
    #[prost(message, optional, tag = "2")]
    pub expires: ::core::option::Option<::prost_types::Timestamp>,
}

impl AuthRequest {
    /// Build a request carrying an API key
    pub fn api_key(secret: impl Into<String>, key_id: i64) -> Self {
        Self {
            key: Some(auth_request::Key::ApiKey(ApiKey {
                secret: secret.into(),
                key_id,
            })),
        }
    }
}

/// Generated client implementations.
pub mod auth_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct AuthClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> AuthClient<T>
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

        /// Exchange an API key for a bearer token
        pub async fn get_jwt_token(
            &mut self,
            request: impl tonic::IntoRequest<super::AuthRequest>,
        ) -> std::result::Result<tonic::Response<super::AuthResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/sendlix.api.v1.Auth/GetJwtToken");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("sendlix.api.v1.Auth", "GetJwtToken"));
            self.inner.unary(req, path, codec).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_api_key_request_wire_shape() {
        let request = AuthRequest::api_key("abc123", 456);
        let bytes = request.encode_to_vec();

        let decoded = AuthRequest::decode(bytes.as_slice()).unwrap();
        match decoded.key {
            Some(auth_request::Key::ApiKey(key)) => {
                assert_eq!(key.secret, "abc123");
                assert_eq!(key.key_id, 456);
            }
            None => panic!("api key was dropped"),
        }
    }

    #[test]
    fn test_response_without_expiry_decodes_as_none() {
        let response = AuthResponse {
            token: "xyz".to_string(),
            expires: None,
        };
        let decoded = AuthResponse::decode(response.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.token, "xyz");
        assert!(decoded.expires.is_none());
    }
}
