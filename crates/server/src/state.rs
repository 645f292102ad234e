use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{
    repository::CompanyRepository, service::DynCompanyService, CompanyService, SeaOrmCompanyRepository,
    StatusChoices,
};

#[derive(Clone)]
pub struct ServerState {
    pub companies: Arc<DynCompanyService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CompanyRepository>, choices: StatusChoices) -> Self {
        Self { companies: Arc::new(CompanyService::new(repo, choices)) }
    }

    /// Companies backed by the given database connection.
    pub fn from_db(db: DatabaseConnection, choices: StatusChoices) -> Self {
        Self::new(Arc::new(SeaOrmCompanyRepository::new(db)), choices)
    }
}
