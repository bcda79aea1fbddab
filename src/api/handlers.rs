//! HTTP request handlers for the salary report API.
//!
//! This module contains the handler functions for all API endpoints, plus
//! the store-level operations they wrap.

use std::time::Instant;

use axum::{
    Form, Json, Router,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, NewDesignation};
use crate::store::{EmployeeFilter, Store};

use super::request::{DesignationFilter, IntakeForm, ReportQuery};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeSalary, IntakeFormContext, ReportTotals, SalaryReport,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(report_handler))
        .route("/form/", get(intake_form_handler).post(intake_handler))
        .route(
            "/designations/",
            get(list_designations_handler).post(create_designation_handler),
        )
        .route("/designations/:id", delete(delete_designation_handler))
        .with_state(state)
}

/// Validates an intake submission and stores the employee.
///
/// A designation that cannot be found, including one deleted between the
/// lookup and the insert, is reported as `UnknownDesignation` carrying the
/// reference exactly as submitted. Nothing is written on rejection.
pub async fn perform_intake(store: &Store, form: IntakeForm) -> PayrollResult<Employee> {
    let reference = form.designation.clone().unwrap_or_default();
    let designation_id = form.designation_id()?;
    let new = form.into_new_employee(designation_id);

    store
        .employees()
        .create(new)
        .await
        .map_err(|err| match err {
            PayrollError::DesignationNotFound { .. } => {
                PayrollError::UnknownDesignation { reference }
            }
            other => other,
        })
}

/// Builds the salary report for the given query.
///
/// Salary fields are computed on every call. The designation list is always
/// complete, whatever the filter.
pub async fn build_report(
    store: &Store,
    query: &ReportQuery,
    overtime_hourly_rate: Decimal,
) -> PayrollResult<SalaryReport> {
    let employees = match query.filter() {
        DesignationFilter::All => store.employees().list(EmployeeFilter::all()).await?,
        DesignationFilter::Only(id) => {
            store
                .employees()
                .list(EmployeeFilter::by_designation(id))
                .await?
        }
        DesignationFilter::NoMatch => Vec::new(),
    };

    let rows: Vec<EmployeeSalary> = employees
        .iter()
        .map(|employee| EmployeeSalary::from_employee(employee, overtime_hourly_rate))
        .collect();
    let designations = store.designations().list().await?;

    Ok(SalaryReport {
        generated_at: Utc::now(),
        designation_filter: query.applied_filter(),
        totals: ReportTotals::from_rows(&rows),
        employees: rows,
        designations,
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET / endpoint.
///
/// Returns every employee (or those of one designation) with their computed
/// salaries, along with all designations.
async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid report query"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_parameter(rejection.body_text()),
            );
        }
    };
    info!(
        correlation_id = %correlation_id,
        designation = ?query.designation,
        "Building salary report"
    );

    let start_time = Instant::now();
    match build_report(state.store(), &query, state.overtime_hourly_rate()).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employees = report.totals.employee_count,
                gross_salary = %report.totals.gross_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary report built"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary report failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /form/ endpoint.
async fn intake_form_handler(State(state): State<AppState>) -> Response {
    match state.store().designations().list().await {
        Ok(designations) => json_response(
            StatusCode::OK,
            IntakeFormContext {
                designations,
                error: None,
            },
        ),
        Err(err) => {
            warn!(error = %err, "Failed to load designations for intake form");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /form/ endpoint.
///
/// Stores the employee and redirects to the report. A rejected submission
/// returns the form context with the reason attached.
async fn intake_handler(
    State(state): State<AppState>,
    form: Result<Form<IntakeForm>, FormRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee intake");

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Form rejected"
            );
            let error = match rejection {
                FormRejection::InvalidFormContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/x-www-form-urlencoded",
                ),
                _ => ApiError::malformed_form(body_text),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    match perform_intake(state.store(), form).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                designation_id = ?employee.designation_id(),
                overtime_hours = employee.overtime_hours,
                "Employee created"
            );
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee intake rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            if api_error.status != StatusCode::UNPROCESSABLE_ENTITY {
                return api_error.into_response();
            }

            match state.store().designations().list().await {
                Ok(designations) => json_response(
                    api_error.status,
                    IntakeFormContext {
                        designations,
                        error: Some(api_error.error),
                    },
                ),
                Err(err) => ApiErrorResponse::from(err).into_response(),
            }
        }
    }
}

/// Handler for GET /designations/ endpoint.
async fn list_designations_handler(State(state): State<AppState>) -> Response {
    match state.store().designations().list().await {
        Ok(designations) => json_response(StatusCode::OK, designations),
        Err(err) => {
            warn!(error = %err, "Failed to list designations");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /designations/ endpoint.
async fn create_designation_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewDesignation>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing designation create");

    let new = match payload {
        Ok(Json(new)) => new,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    match state.store().designations().create(new).await {
        Ok(designation) => {
            info!(
                correlation_id = %correlation_id,
                designation_id = designation.id,
                name = ?designation.name,
                "Designation created"
            );
            json_response(StatusCode::CREATED, designation)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Designation create rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /designations/:id endpoint.
///
/// Refuses with 409 while any employee still references the designation.
async fn delete_designation_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid designation id"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_parameter(rejection.body_text()),
            );
        }
    };

    match state.store().designations().delete(id).await {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                designation_id = id,
                "Designation deleted"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                designation_id = id,
                error = %err,
                "Designation delete refused"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SalaryConfig;
    use crate::models::Designation;
    use axum::body::Body;
    use axum::http::Request;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn manager() -> NewDesignation {
        NewDesignation {
            name: Some("Manager".to_string()),
            basic_salary: Some(dec("1000.00")),
            hra_percent: Some(dec("10")),
            da_percent: Some(dec("5")),
            ta_percent: Some(Decimal::ZERO),
            bonus: Some(dec("50.00")),
        }
    }

    async fn create_test_state() -> (AppState, Designation) {
        let store = Store::in_memory().await.unwrap();
        let designation = store.designations().create(manager()).await.unwrap();
        (AppState::new(store, SalaryConfig::default()), designation)
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/form/")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_intake_redirects_to_report() {
        let (state, designation) = create_test_state().await;
        let router = create_router(state.clone());

        let response = router
            .oneshot(form_request(&format!(
                "designation={}&name=Asha&contact=555-0100&overtime_hours=2",
                designation.id
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/");
        assert_eq!(state.store().employees().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_intake_missing_designation_returns_422() {
        let (state, _) = create_test_state().await;
        let router = create_router(state.clone());

        let response = router
            .oneshot(form_request("name=Asha&overtime_hours=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let context: IntakeFormContext = read_json(response).await;
        assert_eq!(context.error.unwrap().code, "MISSING_DESIGNATION");
        assert_eq!(context.designations.len(), 1);
        assert_eq!(state.store().employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_intake_unknown_designation_returns_422() {
        let (state, designation) = create_test_state().await;
        let router = create_router(state.clone());

        let response = router
            .oneshot(form_request(&format!(
                "designation={}&name=Ghost",
                designation.id + 100
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let context: IntakeFormContext = read_json(response).await;
        assert_eq!(context.error.unwrap().code, "UNKNOWN_DESIGNATION");
        assert_eq!(state.store().employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_intake_with_json_body_returns_400() {
        let (state, _) = create_test_state().await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/form/")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"designation":"1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_intake_form_lists_designations() {
        let (state, designation) = create_test_state().await;
        let router = create_router(state);

        let response = router.oneshot(get_request("/form/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let context: IntakeFormContext = read_json(response).await;
        assert_eq!(context.designations, vec![designation]);
        assert!(context.error.is_none());
    }

    #[tokio::test]
    async fn test_perform_intake_coerces_bad_overtime() {
        let (state, designation) = create_test_state().await;

        let employee = perform_intake(
            state.store(),
            IntakeForm {
                designation: Some(designation.id.to_string()),
                name: Some("Asha".to_string()),
                contact: None,
                overtime_hours: Some("abc".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(employee.overtime_hours, 0);
    }

    #[tokio::test]
    async fn test_report_manager_scenario() {
        let (state, designation) = create_test_state().await;
        perform_intake(
            state.store(),
            IntakeForm {
                designation: Some(designation.id.to_string()),
                name: Some("Asha".to_string()),
                contact: None,
                overtime_hours: Some("2".to_string()),
            },
        )
        .await
        .unwrap();
        let router = create_router(state);

        let response = router.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let report: SalaryReport = read_json(response).await;
        assert_eq!(report.employees.len(), 1);
        let row = &report.employees[0];
        assert_eq!(row.salary.hra, dec("100.00"));
        assert_eq!(row.salary.da, dec("50.00"));
        assert_eq!(row.salary.ta, Decimal::ZERO);
        assert_eq!(row.salary.overtime, dec("200"));
        assert_eq!(row.salary.gross_salary, dec("1400.00"));
        assert_eq!(report.totals.gross_salary, dec("1400.00"));
    }

    #[tokio::test]
    async fn test_report_non_numeric_filter_is_empty() {
        let (state, designation) = create_test_state().await;
        perform_intake(
            state.store(),
            IntakeForm {
                designation: Some(designation.id.to_string()),
                ..IntakeForm::default()
            },
        )
        .await
        .unwrap();

        let report = build_report(
            state.store(),
            &ReportQuery {
                designation: Some("manager".to_string()),
            },
            state.overtime_hourly_rate(),
        )
        .await
        .unwrap();

        assert!(report.employees.is_empty());
        assert_eq!(report.designations.len(), 1);
        assert_eq!(report.designation_filter.as_deref(), Some("manager"));
    }

    #[tokio::test]
    async fn test_create_designation_returns_201() {
        let (state, _) = create_test_state().await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/designations/")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Clerk","basic_salary":"500.00"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let designation: Designation = read_json(response).await;
        assert_eq!(designation.name.as_deref(), Some("Clerk"));
        assert_eq!(designation.hra_percent, Some(Decimal::ZERO));
    }

    #[tokio::test]
    async fn test_create_designation_malformed_json_returns_400() {
        let (state, _) = create_test_state().await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/designations/")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_delete_missing_designation_returns_404() {
        let (state, _) = create_test_state().await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/designations/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "DESIGNATION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_with_non_numeric_id_returns_400() {
        let (state, _) = create_test_state().await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/designations/manager")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_PARAMETER");
    }
}
