//! Employee endpoints

use crate::server::middleware::get_claims;
use crate::server::state::AppState;
use crate::services::{
    CreateEmployeeRequest, EmployeeListItem, EmployeeQueryParams, EmployeeResponse,
    PagedResponse, UpdateEmployeeRequest,
};
use crate::utils::error::ServiceError;
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::info;

/// Configure employee routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_employees))
        .route("", web::post().to(create_employee))
        .route("/department/{department}", web::get().to(get_by_department))
        .route("/{id}", web::get().to(get_employee))
        .route("/{id}", web::put().to(update_employee))
        .route("/{id}", web::delete().to(delete_employee));
}

/// Paged, filtered employee listing
pub async fn list_employees(
    state: web::Data<AppState>,
    query: web::Query<EmployeeQueryParams>,
) -> ActixResult<HttpResponse> {
    let filter = query.into_inner().into_filter();
    let page = state.employees.get_paged(&filter).await?;

    let response: PagedResponse<EmployeeListItem> = PagedResponse::from_page(page, &filter);
    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_employee(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Employee with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

pub async fn get_by_department(
    state: web::Data<AppState>,
    department: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let employees = state.employees.get_by_department(&department).await?;

    let response: Vec<EmployeeListItem> =
        employees.into_iter().map(EmployeeListItem::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

pub async fn create_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CreateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    let employee = state.employees.create(request.into_inner()).await?;
    info!(
        "Employee {} created by {}",
        employee.id,
        acting_user(&req)
    );

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/api/employees/{}", employee.id)))
        .json(EmployeeResponse::from(employee)))
}

pub async fn update_employee(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    request: web::Json<UpdateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    state
        .employees
        .update(id.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    state.employees.delete(id).await?;
    info!("Employee {} deleted by {}", id, acting_user(&req));

    Ok(HttpResponse::NoContent().finish())
}

/// Username from the bearer token, or `anonymous` on unprotected routes
fn acting_user(req: &HttpRequest) -> String {
    get_claims(req)
        .map(|claims| claims.username)
        .unwrap_or_else(|| "anonymous".to_string())
}
