use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
    NoContent,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageQuery {
    /// Zero-based page, per_page clamped to [1, 100], defaulting to 10.
    pub fn clamp(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(0);
        let per_page = self.per_page.unwrap_or(10).clamp(1, 100);
        (page, per_page)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Paginated<T> {
    pub count: u64,
    pub page: u64,
    pub per_page: u64,
    pub results: Vec<T>,
}
