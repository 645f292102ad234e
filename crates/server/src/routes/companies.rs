use axum::{extract::State, http::StatusCode, Json};
use models::company;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::ApiError, extract::CompanyPayload, state::ServerState};

/// Public JSON shape of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompanyResponse {
    pub name: String,
    pub status: String,
    pub application_link: String,
    pub notes: String,
}

impl From<company::Model> for CompanyResponse {
    fn from(m: company::Model) -> Self {
        Self {
            name: m.name,
            status: m.status.as_str().to_string(),
            application_link: m.application_link,
            notes: m.notes,
        }
    }
}

#[utoipa::path(
    get, path = "/companies/", tag = "companies",
    responses(
        (status = 200, description = "List OK", body = [CompanyResponse]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CompanyResponse>>, ApiError> {
    let rows = state.companies.list().await?;
    info!(count = rows.len(), "list companies");
    Ok(Json(rows.into_iter().map(CompanyResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/companies/", tag = "companies",
    request_body = crate::openapi::CreateCompanyRequestDoc,
    responses(
        (status = 201, description = "Created", body = CompanyResponse),
        (status = 400, description = "Validation Error: field name -> list of messages"),
        (status = 413, description = "Payload Too Large"),
        (status = 415, description = "Unsupported Media Type"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    CompanyPayload(input): CompanyPayload,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let created = state.companies.create(input).await?;
    info!(name = %created.name, status = %created.status, "created company");
    Ok((StatusCode::CREATED, Json(created.into())))
}
