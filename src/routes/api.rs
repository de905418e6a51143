use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::{CompaniesQuery, ErrorResponse};
use crate::forms::company::AddCompanyForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, company as company_service};

#[get("/companies")]
pub async fn list_companies(
    params: web::Query<CompaniesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match company_service::list_companies(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        // Detail is logged by the service and never sent to the caller.
        Err(_) => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Failed to fetch companies")),
    }
}

#[post("/companies")]
pub async fn create_company(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCompanyForm>,
) -> impl Responder {
    match company_service::create_company(repo.get_ref(), form) {
        Ok(company) => HttpResponse::Created().json(company),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        Err(_) => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Failed to create company")),
    }
}
