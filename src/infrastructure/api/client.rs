//! Candidate API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{CandidateEnvelope, ErrorResponse, UpdateProfileRequest};
use crate::domain::entities::{AuthToken, ProfileUpdate, UserProfile};
use crate::domain::errors::ApiError;
use crate::domain::ports::ProfilePort;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
const USER_AGENT: &str = concat!("dialdesk/", env!("CARGO_PKG_VERSION"));
const ME_PATH: &str = "/api/auth/candidate/me";
const UPDATE_PATH: &str = "/api/auth/candidate/update";

/// REST client for the signed-in candidate's profile.
pub struct CandidateApiClient {
    client: Client,
    base_url: String,
}

impl CandidateApiClient {
    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ApiError {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED => ApiError::rejected("invalid or expired token"),
            StatusCode::FORBIDDEN => ApiError::rejected(format!("access denied: {error_message}")),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                ApiError::network("candidate API is temporarily unavailable")
            }
            _ => ApiError::http(status.as_u16(), error_message),
        }
    }
}

fn map_send_error(e: &reqwest::Error) -> ApiError {
    warn!(error = %e, "Failed to reach candidate API");
    if e.is_timeout() {
        ApiError::network("request timed out")
    } else if e.is_connect() {
        ApiError::network("failed to connect to server")
    } else {
        ApiError::network(e.to_string())
    }
}

#[async_trait]
impl ProfilePort for CandidateApiClient {
    async fn fetch_current_user(&self, token: &AuthToken) -> Result<UserProfile, ApiError> {
        debug!("Fetching current candidate");

        let response = self
            .client
            .get(self.url(ME_PATH))
            .header(header::AUTHORIZATION, token.bearer_header())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let envelope: CandidateEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse candidate response");
            ApiError::decode(e.to_string())
        })?;

        let profile = UserProfile::from(envelope.data);
        debug!(user_id = %profile.id(), "Candidate fetched");
        Ok(profile)
    }

    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        debug!("Updating candidate profile");

        let response = self
            .client
            .put(self.url(UPDATE_PATH))
            .header(header::AUTHORIZATION, token.bearer_header())
            .json(&UpdateProfileRequest::from(update))
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::entities::{DEFAULT_FULL_NAME, DEFAULT_ROLE, ProfileStatus};

    fn client(server: &MockServer) -> CandidateApiClient {
        CandidateApiClient::with_base_url(server.uri(), Duration::from_secs(5))
            .expect("http client")
    }

    fn token() -> AuthToken {
        AuthToken::new_unchecked("secret-token")
    }

    #[tokio::test]
    async fn test_fetches_profile_with_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ME_PATH))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "_id": "664a1f",
                    "fullName": "Priya Nair",
                    "email": "priya@example.com",
                    "mobile": "+91 90000 11111",
                    "status": "Busy",
                    "profilePicture": "https://cdn.example.com/p.png",
                    "role": "Senior Caller"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = client(&server).fetch_current_user(&token()).await.unwrap();

        assert_eq!(profile.id(), "664a1f");
        assert_eq!(profile.full_name(), "Priya Nair");
        assert_eq!(profile.status(), ProfileStatus::Busy);
        assert_eq!(profile.avatar_url(), "https://cdn.example.com/p.png");
        assert_eq!(profile.role(), "Senior Caller");
    }

    #[tokio::test]
    async fn test_missing_fields_fall_back_to_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ME_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "_id": "1", "phone": "+1 555 0100", "fullName": "" }
            })))
            .mount(&server)
            .await;

        let profile = client(&server).fetch_current_user(&token()).await.unwrap();

        assert_eq!(profile.full_name(), DEFAULT_FULL_NAME);
        assert_eq!(profile.mobile(), "+1 555 0100");
        assert_eq!(profile.role(), DEFAULT_ROLE);
        assert_eq!(profile.status(), ProfileStatus::Available);
    }

    #[tokio::test]
    async fn test_unauthorized_is_token_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch_current_user(&token())
            .await
            .unwrap_err();

        assert!(err.requires_sign_in());
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch_current_user(&token())
            .await
            .unwrap_err();

        assert!(
            matches!(err, ApiError::Http { status: 500, ref message } if message == "db down")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch_current_user(&token())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_update_sends_one_put_with_edited_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(UPDATE_PATH))
            .and(header("authorization", "Bearer secret-token"))
            .and(body_json(json!({
                "fullName": "Priya Nair",
                "email": "priya@example.com",
                "mobile": "+91 90000 11111",
                "status": "Do Not Disturb"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let update = ProfileUpdate {
            full_name: "Priya Nair".to_string(),
            email: "priya@example.com".to_string(),
            mobile: "+91 90000 11111".to_string(),
            status: ProfileStatus::DoNotDisturb,
        };

        client(&server)
            .update_profile(&token(), &update)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client =
            CandidateApiClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(2))
                .expect("http client");

        let err = client.fetch_current_user(&token()).await.unwrap_err();

        assert!(err.is_network_error());
    }
}
