use crate::extractors::RejectionType;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use log::*;
use service::config::ApiVersion;

/// Checks the `x-version` request header against the API versions this
/// server exposes. Requests without the header are served by the default
/// version.
pub(crate) struct CompareApiVersion(pub String);

impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header_value) = parts.headers.get(ApiVersion::field_name()) else {
            return Ok(CompareApiVersion(ApiVersion::default_version().to_string()));
        };

        let version = header_value
            .to_str()
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid x-version header".to_string(),
                )
            })?
            .trim();

        if ApiVersion::versions().contains(&version) {
            Ok(CompareApiVersion(version.to_string()))
        } else {
            debug!("Rejecting request for unsupported API version {version}");
            Err((
                StatusCode::BAD_REQUEST,
                format!("Unsupported API version: {version}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(version: Option<&str>) -> Result<CompareApiVersion, RejectionType> {
        let mut builder = Request::builder().uri("/analyze");
        if let Some(version) = version {
            builder = builder.header("x-version", version);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CompareApiVersion::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_supported_version() {
        let CompareApiVersion(version) = extract(Some("0.1.0")).await.unwrap();
        assert_eq!(version, "0.1.0");
    }

    #[tokio::test]
    async fn missing_header_uses_default_version() {
        let CompareApiVersion(version) = extract(None).await.unwrap();
        assert_eq!(version, ApiVersion::default_version());
    }

    #[tokio::test]
    async fn rejects_unknown_version() {
        let (status, message) = extract(Some("9.9.9")).await.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Unsupported API version: 9.9.9");
    }
}
