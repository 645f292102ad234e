use std::sync::Arc;

use common::metrics::{COMPANIES_CREATED_TOTAL, COMPANIES_VALIDATION_FAILURES_TOTAL};
use models::company;
use tracing::{debug, info, instrument};

use crate::company::domain::{self, CreateCompanyInput, StatusChoices};
use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;

/// Application service for company records: validate, then hand off to the store.
pub struct CompanyService<R: CompanyRepository + ?Sized> {
    repo: Arc<R>,
    choices: StatusChoices,
}

pub type DynCompanyService = CompanyService<dyn CompanyRepository>;

impl<R: CompanyRepository + ?Sized> CompanyService<R> {
    pub fn new(repo: Arc<R>, choices: StatusChoices) -> Self { Self { repo, choices } }

    pub fn choices(&self) -> &StatusChoices { &self.choices }

    pub async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Nothing is written unless every field passes and the name is free.
    #[instrument(skip(self, input), fields(name = input.name.as_deref().unwrap_or("")))]
    pub async fn create(&self, input: CreateCompanyInput) -> Result<company::Model, ServiceError> {
        let new = match domain::validate(&input, &self.choices) {
            Ok(new) => new,
            Err(errs) => {
                COMPANIES_VALIDATION_FAILURES_TOTAL.inc();
                debug!(errors = %errs, "company_create_rejected");
                return Err(ServiceError::Validation(errs));
            }
        };

        match self.repo.insert(new).await {
            Ok(created) => {
                COMPANIES_CREATED_TOTAL.inc();
                info!(id = created.id, status = %created.status, "company_created");
                Ok(created)
            }
            Err(ServiceError::Validation(errs)) => {
                COMPANIES_VALIDATION_FAILURES_TOTAL.inc();
                debug!(errors = %errs, "company_create_conflict");
                Err(ServiceError::Validation(errs))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::repository::{memory::InMemoryCompanyRepository, SeaOrmCompanyRepository};
    use crate::test_support::get_db;
    use models::company::CompanyStatus;

    fn memory_service() -> DynCompanyService {
        let repo: Arc<dyn CompanyRepository> = Arc::new(InMemoryCompanyRepository::new());
        CompanyService::new(repo, StatusChoices::default())
    }

    fn expect_validation(err: ServiceError) -> crate::validation::ValidationErrors {
        match err {
            ServiceError::Validation(e) => e,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_reflects_every_successful_create() -> anyhow::Result<()> {
        let svc = memory_service();
        let inputs = vec![
            CreateCompanyInput::named("Amazon"),
            CreateCompanyInput::named("Google").with_status("Layoffs"),
            CreateCompanyInput {
                name: Some("Netflix".into()),
                status: Some("Hiring Freeze".into()),
                application_link: Some("https://jobs.netflix.com".into()),
                notes: Some("referral".into()),
            },
        ];
        for i in &inputs {
            svc.create(i.clone()).await?;
        }

        let all = svc.list().await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].status, CompanyStatus::Hiring);
        assert_eq!(all[1].status, CompanyStatus::Layoffs);
        assert_eq!(all[2].application_link, "https://jobs.netflix.com");
        assert_eq!(all[2].notes, "referral");
        Ok(())
    }

    #[tokio::test]
    async fn failed_validation_persists_nothing() -> anyhow::Result<()> {
        let svc = memory_service();

        let errs = expect_validation(svc.create(CreateCompanyInput::default()).await.unwrap_err());
        assert_eq!(errs.field("name").unwrap(), ["This field is required."]);

        let errs = expect_validation(
            svc.create(CreateCompanyInput::named("Test Company").with_status("Wrong status")).await.unwrap_err(),
        );
        let msg = &errs.field("status").unwrap()[0];
        assert!(msg.contains("Wrong status") && msg.contains("is not a valid choice."));

        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_leaves_existing_record_unchanged() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo: Arc<dyn CompanyRepository> = Arc::new(SeaOrmCompanyRepository::new(db));
        let svc: DynCompanyService = CompanyService::new(repo, StatusChoices::default());

        let original = svc.create(CreateCompanyInput::named("Apple")).await?;
        let mut again = CreateCompanyInput::named("Apple").with_status("Layoffs");
        again.notes = Some("should not land".into());
        let errs = expect_validation(svc.create(again).await.unwrap_err());
        assert_eq!(errs.field("name").unwrap(), ["company with this name already exists."]);

        let all = svc.list().await?;
        assert_eq!(all, vec![original]);
        Ok(())
    }
}
