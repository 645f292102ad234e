use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Every field is optional on the wire; a missing `name` is reported as a field error.
#[derive(ToSchema)]
pub struct CreateCompanyRequestDoc {
    pub name: Option<String>,
    /// One of `Layoffs`, `Hiring Freeze`, `Hiring`; defaults to `Hiring`
    pub status: Option<String>,
    pub application_link: Option<String>,
    pub notes: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
    ),
    components(
        schemas(
            HealthResponse,
            CreateCompanyRequestDoc,
            crate::routes::companies::CompanyResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies")
    )
)]
pub struct ApiDoc;
