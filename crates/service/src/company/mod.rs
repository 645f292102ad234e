pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{CreateCompanyInput, StatusChoices};
pub use repository::{CompanyRepository, SeaOrmCompanyRepository};
pub use service::CompanyService;
