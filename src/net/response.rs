use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::geocode::ResolveError;

pub struct ResponseError(Response);

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl<E> From<E> for ResponseError
where
    E: Into<color_eyre::eyre::Error>,
{
    fn from(value: E) -> Self {
        Self(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Into::<color_eyre::eyre::Error>::into(value).to_string(),
            )
                .into_response(),
        )
    }
}

impl ResponseError {
    pub fn with_status<T>(status_code: StatusCode, data: T) -> Self
    where
        (StatusCode, T): IntoResponse,
    {
        ResponseError((status_code, data).into_response())
    }

    pub fn bad_request<T>(data: T) -> Self
    where
        (StatusCode, T): IntoResponse,
    {
        ResponseError((StatusCode::BAD_REQUEST, data).into_response())
    }

    /// Caller mistakes are 4xx, anything the provider did wrong is a bad gateway
    pub fn resolve_failure(err: ResolveError) -> Self {
        let status = match err {
            ResolveError::EmptyInput => StatusCode::BAD_REQUEST,
            ResolveError::NoResults { .. } | ResolveError::NoReverseResults => {
                StatusCode::NOT_FOUND
            }
            ResolveError::Transport(_)
            | ResolveError::Http { .. }
            | ResolveError::EmptyBody { .. }
            | ResolveError::LatitudeParse
            | ResolveError::LongitudeParse => StatusCode::BAD_GATEWAY,
        };
        Self::with_status(status, err.to_string())
    }
}

pub type Result<T, E = ResponseError> = axum::response::Result<T, E>;
