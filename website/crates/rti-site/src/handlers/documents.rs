//! Template Download Handler

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::state::AppState;

/// Serve the template document for a department.
///
/// 404 when the department has no mapping, or when it is mapped but the file
/// is not under the documents directory.
pub async fn download(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Response, StatusCode> {
    let Some(relative) = rti_catalog::resolve_path(&department) else {
        debug!("No template mapped for {:?}", department);
        return Err(StatusCode::NOT_FOUND);
    };

    let path = state.documents_dir().join(relative);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Template for {:?} missing at {}: {}", department, path.display(), e);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let file_name = relative.rsplit('/').next().unwrap_or(relative);
    let disposition = format!("attachment; filename=\"{}\"", file_name.replace('"', ""));
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
