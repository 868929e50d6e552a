//! REST handlers for the exchange.
//!
//! Two surfaces share one router: the submitter endpoints under
//! `/exchange`, keyed only by the access code, and the operator endpoints
//! under `/admin`, gated by the shared admin key. The retention sweep runs
//! as middleware ahead of every request, mirroring the original
//! sweep-per-render behaviour.

use axum::body::Bytes;
use axum::extract::{Path, Query, Request, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use deckdrop_store::{Area, ExchangeStore, StoreError, StoredFile};
use deckdrop_types::AccessCode;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::{AdminGuard, AuthError};

/// Minimum raw length of an access code, enforced here at the presentation
/// boundary, never by the store.
pub const MIN_CODE_LEN: usize = 3;

/// Upper bound on upload bodies.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Header carrying the admin key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Query parameter carrying the admin key (the original URL-keyed entry).
pub const ADMIN_KEY_PARAM: &str = "key";

const PDF_MIME: &str = "application/pdf";
const DECK_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Application state shared across handlers
///
/// Holds the partition store and the admin guard. Both are cheap to clone
/// or shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: ExchangeStore,
    pub guard: Arc<AdminGuard>,
}

type HandlerError = (StatusCode, &'static str);

#[derive(serde::Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(serde::Serialize, ToSchema)]
pub struct FileRes {
    pub name: String,
    pub size_bytes: u64,
    pub modified: DateTime<Utc>,
}

impl From<StoredFile> for FileRes {
    fn from(file: StoredFile) -> Self {
        Self {
            name: file.name,
            size_bytes: file.size_bytes,
            modified: file.modified,
        }
    }
}

#[derive(serde::Serialize, ToSchema)]
pub struct ListFilesRes {
    pub files: Vec<FileRes>,
}

#[derive(serde::Serialize, ToSchema)]
pub struct UploadRes {
    pub code: String,
    pub name: String,
    pub size_bytes: u64,
}

#[derive(serde::Serialize, ToSchema)]
pub struct ExchangesRes {
    pub codes: Vec<String>,
}

#[derive(serde::Serialize, ToSchema)]
pub struct WipeRes {
    pub ok: bool,
}

/// Parses a raw access code, applying the minimum-length policy.
fn parse_code(raw: &str) -> Result<AccessCode, HandlerError> {
    if raw.chars().count() < MIN_CODE_LEN {
        return Err((StatusCode::BAD_REQUEST, "Access code too short"));
    }
    AccessCode::new(raw)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Access code must contain letters or digits"))
}

/// Maps store failures onto HTTP responses, logging the unexpected ones.
fn store_error(e: StoreError) -> HandlerError {
    match e {
        StoreError::FileNotFound(_) => (StatusCode::NOT_FOUND, "File not found"),
        StoreError::InvalidFilename(_) => (StatusCode::BAD_REQUEST, "Invalid filename"),
        other => {
            tracing::error!("Store error: {:?}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

fn attachment(mime: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    let headers: [(HeaderName, String); 2] = [
        (header::CONTENT_TYPE, mime.to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    (headers, bytes).into_response()
}

/// Runs the retention sweep ahead of every request.
///
/// A sweep failure aborts the request with a generic 500, matching the
/// original behaviour of an unhandled cleanup error aborting the render.
pub async fn sweep_before(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match state.store.sweep_expired(Utc::now()) {
        Ok(removed) if !removed.is_empty() => {
            tracing::info!(count = removed.len(), "sweep removed expired partitions");
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Sweep failed: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    }
    next.run(req).await
}

/// Gates the operator surface on the shared admin key.
///
/// The key is accepted either as the `x-admin-key` header or as the `key`
/// query parameter.
pub async fn require_admin(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Response {
    let header_key = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    let provided = header_key.or_else(|| params.get(ADMIN_KEY_PARAM).map(String::as_str));

    let Some(provided) = provided else {
        return (StatusCode::UNAUTHORIZED, "Admin key required").into_response();
    };

    match state.guard.check(provided, Utc::now()) {
        Ok(()) => next.run(req).await,
        Err(AuthError::RateLimited) => {
            tracing::warn!("Admin auth rate limited");
            (StatusCode::TOO_MANY_REQUESTS, "Too many failed attempts").into_response()
        }
        Err(AuthError::InvalidKey) => {
            tracing::warn!("Admin auth failed");
            (StatusCode::UNAUTHORIZED, "Invalid admin key").into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "DeckDrop is alive".into(),
    })
}

#[utoipa::path(
    put,
    path = "/exchange/{code}/inbound/{filename}",
    params(
        ("code" = String, Path, description = "Access code"),
        ("filename" = String, Path, description = "Name of the uploaded file")
    ),
    responses(
        (status = 201, description = "File stored", body = UploadRes),
        (status = 400, description = "Bad access code or filename")
    )
)]
/// Submitter upload: deposit a source PDF under an access code
///
/// Creates the partition on first use. A filename that is already taken is
/// stored under a timestamp-prefixed name rather than overwriting.
pub async fn submit_file(
    State(state): State<AppState>,
    Path((code, filename)): Path<(String, String)>,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadRes>), HandlerError> {
    let code = parse_code(&code)?;
    let stored = state
        .store
        .save_file(&code, Area::Inbound, &filename, &body)
        .map_err(store_error)?;
    tracing::info!(code = %code, name = %stored.name, "submitter upload");
    Ok((
        StatusCode::CREATED,
        Json(UploadRes {
            code: code.to_string(),
            name: stored.name,
            size_bytes: stored.size_bytes,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/exchange/{code}/outbound",
    params(("code" = String, Path, description = "Access code")),
    responses(
        (status = 200, description = "Converted results awaiting retrieval", body = ListFilesRes),
        (status = 400, description = "Bad access code")
    )
)]
/// Submitter listing: converted results for an access code
///
/// A code that has never been used yields an empty list.
pub async fn list_results(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ListFilesRes>, HandlerError> {
    let code = parse_code(&code)?;
    let files = state
        .store
        .list_files(&code, Area::Outbound)
        .map_err(store_error)?;
    Ok(Json(ListFilesRes {
        files: files.into_iter().map(FileRes::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/exchange/{code}/outbound/{filename}",
    params(
        ("code" = String, Path, description = "Access code"),
        ("filename" = String, Path, description = "Result file to download")
    ),
    responses(
        (status = 200, description = "Result file, original name, slide-deck MIME type"),
        (status = 404, description = "File not found")
    )
)]
/// Submitter download: retrieve a converted result
///
/// The file keeps its original name and is served with the slide-deck MIME
/// type.
pub async fn download_result(
    State(state): State<AppState>,
    Path((code, filename)): Path<(String, String)>,
) -> Result<Response, HandlerError> {
    let code = parse_code(&code)?;
    let bytes = state
        .store
        .read_file(&code, Area::Outbound, &filename)
        .map_err(store_error)?;
    Ok(attachment(DECK_MIME, &filename, bytes))
}

#[utoipa::path(
    get,
    path = "/admin/exchanges",
    responses(
        (status = 200, description = "Every known partition code", body = ExchangesRes),
        (status = 401, description = "Missing or invalid admin key")
    )
)]
/// Operator listing: every known partition
pub async fn list_exchanges(
    State(state): State<AppState>,
) -> Result<Json<ExchangesRes>, HandlerError> {
    let codes = state.store.partitions().map_err(store_error)?;
    Ok(Json(ExchangesRes {
        codes: codes.iter().map(|c| c.as_str().to_owned()).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/admin/exchanges/{code}/inbound",
    params(("code" = String, Path, description = "Access code")),
    responses(
        (status = 200, description = "Submitted files awaiting conversion", body = ListFilesRes),
        (status = 401, description = "Missing or invalid admin key")
    )
)]
/// Operator listing: submitted files for one partition
pub async fn list_inbound(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ListFilesRes>, HandlerError> {
    let code = parse_code(&code)?;
    let files = state
        .store
        .list_files(&code, Area::Inbound)
        .map_err(store_error)?;
    Ok(Json(ListFilesRes {
        files: files.into_iter().map(FileRes::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/admin/exchanges/{code}/inbound/{filename}",
    params(
        ("code" = String, Path, description = "Access code"),
        ("filename" = String, Path, description = "Submitted file to download")
    ),
    responses(
        (status = 200, description = "Submitted file, renamed `{code}_{filename}`, PDF MIME type"),
        (status = 404, description = "File not found")
    )
)]
/// Operator download: retrieve a submitted file
///
/// The download is renamed to embed the code as a prefix so saved files sort
/// by partition on the operator's machine.
pub async fn download_inbound(
    State(state): State<AppState>,
    Path((code, filename)): Path<(String, String)>,
) -> Result<Response, HandlerError> {
    let code = parse_code(&code)?;
    let bytes = state
        .store
        .read_file(&code, Area::Inbound, &filename)
        .map_err(store_error)?;
    let download_name = format!("{}_{}", code, filename);
    Ok(attachment(PDF_MIME, &download_name, bytes))
}

#[utoipa::path(
    put,
    path = "/admin/exchanges/{code}/outbound/{filename}",
    params(
        ("code" = String, Path, description = "Access code"),
        ("filename" = String, Path, description = "Name of the result file")
    ),
    responses(
        (status = 201, description = "Result stored", body = UploadRes),
        (status = 401, description = "Missing or invalid admin key")
    )
)]
/// Operator upload: deposit a converted result into a partition
pub async fn upload_result(
    State(state): State<AppState>,
    Path((code, filename)): Path<(String, String)>,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadRes>), HandlerError> {
    let code = parse_code(&code)?;
    let stored = state
        .store
        .save_file(&code, Area::Outbound, &filename, &body)
        .map_err(store_error)?;
    tracing::info!(code = %code, name = %stored.name, "operator upload");
    Ok((
        StatusCode::CREATED,
        Json(UploadRes {
            code: code.to_string(),
            name: stored.name,
            size_bytes: stored.size_bytes,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/admin/exchanges",
    responses(
        (status = 200, description = "Storage root wiped and recreated empty", body = WipeRes),
        (status = 401, description = "Missing or invalid admin key")
    )
)]
/// Operator emergency reset: wipe the entire storage root
///
/// Destroys every partition regardless of age. No confirmation, no undo.
pub async fn wipe_exchanges(State(state): State<AppState>) -> Result<Json<WipeRes>, HandlerError> {
    state.store.wipe_all().map_err(store_error)?;
    Ok(Json(WipeRes { ok: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes_are_rejected_before_the_store() {
        assert!(parse_code("ab").is_err());
        assert!(parse_code("").is_err());
        assert!(parse_code("abc").is_ok());
    }

    #[test]
    fn separator_only_codes_are_rejected() {
        // Long enough raw input, but nothing survives sanitization.
        assert!(parse_code("../..").is_err());
    }

    #[test]
    fn codes_are_sanitized_at_the_boundary() {
        let code = parse_code("abc-123").unwrap();
        assert_eq!(code.as_str(), "abc123");
    }

    #[test]
    fn store_errors_map_to_statuses() {
        let (status, _) = store_error(StoreError::FileNotFound("x".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = store_error(StoreError::InvalidFilename("a/b".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = store_error(StoreError::Io(std::io::Error::other("disk full")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
