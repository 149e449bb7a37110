//! Latest-version lookup handler

use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use updaters_core::{lookup, App, LookupError, Release};

/// Query parameter naming the application (`zen` or `teams`)
pub const NAME_PARAM: &str = "name";

/// Lookup failure mapped to an empty-bodied status response.
///
/// Details are logged and never sent to the caller.
#[derive(Debug)]
pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Release lookup failed: {}", self.0);
        } else {
            tracing::debug!("Rejected request: {}", self.0);
        }
        status.into_response()
    }
}

/// Latest release of an application with its AppImage download URL
pub async fn get_versions(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Release>, ApiError> {
    let Query(params) =
        query.map_err(|rejection| LookupError::InvalidRequest(rejection.body_text()))?;

    // Repeated parameters resolve to the first occurrence
    let name = params
        .iter()
        .find(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    let app: App = name.parse()?;

    let release = lookup(state.releases.as_ref(), app).await?;
    tracing::info!(
        app = %app,
        tag = %release.tag_name,
        matched = !release.app_image_url.is_empty(),
        "Resolved latest release"
    );

    Ok(Json(release))
}
