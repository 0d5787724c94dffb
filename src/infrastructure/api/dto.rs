use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    DEFAULT_AVATAR_URL, DEFAULT_EMAIL, DEFAULT_FULL_NAME, DEFAULT_MOBILE, DEFAULT_ROLE,
    ProfileStatus, ProfileUpdate, UserProfile,
};

/// Envelope of `GET /api/auth/candidate/me`.
#[derive(Debug, Deserialize)]
pub struct CandidateEnvelope {
    pub data: CandidateResponse,
}

/// Candidate record as the server sends it. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub profile_picture: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CandidateResponse> for UserProfile {
    fn from(dto: CandidateResponse) -> Self {
        let status = dto
            .status
            .as_deref()
            .and_then(ProfileStatus::from_label)
            .unwrap_or_default();

        Self::new(
            present(dto.id).unwrap_or_default(),
            present(dto.full_name).unwrap_or_else(|| DEFAULT_FULL_NAME.to_string()),
            present(dto.email).unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            present(dto.mobile)
                .or_else(|| present(dto.phone))
                .unwrap_or_else(|| DEFAULT_MOBILE.to_string()),
            status,
            present(dto.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        )
        .with_avatar_url(
            present(dto.profile_picture)
                .or_else(|| present(dto.avatar))
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        )
    }
}

/// Body of `PUT /api/auth/candidate/update`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub mobile: &'a str,
    pub status: ProfileStatus,
}

impl<'a> From<&'a ProfileUpdate> for UpdateProfileRequest<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            full_name: &update.full_name,
            email: &update.email,
            mobile: &update.mobile,
            status: update.status,
        }
    }
}

/// Error body the API uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
