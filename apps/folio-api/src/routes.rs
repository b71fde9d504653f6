use axum::{
	Json, Router,
	extract::{
		Path, Request, State,
		rejection::{JsonRejection, PathRejection},
	},
	http::{StatusCode, header},
	middleware::{self, Next},
	response::{IntoResponse, Response},
	routing::{get, post},
};

use folio_domain::Collection;
use folio_service::{Error as ServiceError, SearchRequest};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/{collection}", post(search))
		.layer(middleware::from_fn(log_request))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

/// One endpoint per collection slug. Body parse failures are reported before
/// any engine call is attempted.
async fn search(
	State(state): State<AppState>,
	collection: Result<Path<Collection>, PathRejection>,
	payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
	let Path(collection) = collection.map_err(|_| ApiError::unknown_collection())?;
	let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
	let body = state.service.search(collection, &request).await?;

	Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn log_request(request: Request, next: Next) -> Response {
	let method = request.method().clone();
	let path = request.uri().path().to_string();
	let response = next.run(request).await;

	tracing::info!(%method, path, status = response.status().as_u16(), "Handled request.");

	response
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}

	fn unknown_collection() -> Self {
		Self::new(StatusCode::NOT_FOUND, "Unknown collection.")
	}

	fn bad_request(message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, message)
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, err.to_string()),
			ServiceError::Backend(_) | ServiceError::Serialization(_) =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, self.message).into_response()
	}
}
