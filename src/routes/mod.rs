use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod api;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a service failure onto the JSON error response returned to callers.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) | ServiceError::Pagination(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Repository(_) => HttpResponse::InternalServerError().json(ErrorBody {
            error: "internal error".to_string(),
        }),
    }
}
