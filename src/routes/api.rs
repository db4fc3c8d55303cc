use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::opportunities::{
    AddOpportunityForm, ChangeStatusForm, OpportunityQueryForm, RecordPaymentForm,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::opportunities as opportunity_service;

#[get("/v1/opportunities")]
pub async fn api_v1_opportunities(
    params: web::Query<OpportunityQueryForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match opportunity_service::list_opportunities(
        repo.get_ref(),
        params.into_inner(),
        server_config.default_page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/opportunities/{id}")]
pub async fn api_v1_opportunity(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match opportunity_service::get_opportunity(repo.get_ref(), path.into_inner()) {
        Ok(opportunity) => HttpResponse::Ok().json(opportunity),
        Err(err) => error_response(&err),
    }
}

#[post("/v1/opportunities")]
pub async fn api_v1_add_opportunity(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddOpportunityForm>,
) -> impl Responder {
    match opportunity_service::create_opportunity(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => error_response(&err),
    }
}

#[post("/v1/opportunities/{id}/status")]
pub async fn api_v1_change_status(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ChangeStatusForm>,
) -> impl Responder {
    match opportunity_service::change_status(repo.get_ref(), path.into_inner(), form) {
        Ok(opportunity) => HttpResponse::Ok().json(opportunity),
        Err(err) => error_response(&err),
    }
}

#[post("/v1/opportunities/{id}/payments")]
pub async fn api_v1_record_payment(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RecordPaymentForm>,
) -> impl Responder {
    match opportunity_service::record_payment(repo.get_ref(), path.into_inner(), form) {
        Ok(opportunity) => HttpResponse::Ok().json(opportunity),
        Err(err) => error_response(&err),
    }
}

#[delete("/v1/opportunities/{id}")]
pub async fn api_v1_delete_opportunity(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match opportunity_service::delete_opportunity(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}

/// Registers every opportunity endpoint on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_v1_opportunities)
        .service(api_v1_opportunity)
        .service(api_v1_add_opportunity)
        .service(api_v1_change_status)
        .service(api_v1_record_payment)
        .service(api_v1_delete_opportunity);
}
