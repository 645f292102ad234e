use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::company::{self, NewCompany};

use crate::errors::ServiceError;

/// Persistence for company rows. `insert` must reject a taken name atomically.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError>;
    async fn insert(&self, input: NewCompany) -> Result<company::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        Ok(company::list(&self.db).await?)
    }

    async fn insert(&self, input: NewCompany) -> Result<company::Model, ServiceError> {
        // unique index 冲突会被映射为 name 字段的重复错误
        Ok(company::create(&self.db, input).await?)
    }
}

/// In-memory repository keyed by name.
pub mod memory {
    use super::*;
    use chrono::Utc;
    use dashmap::{mapref::entry::Entry, DashMap};
    use std::sync::atomic::{AtomicI32, Ordering};

    #[derive(Default)]
    pub struct InMemoryCompanyRepository {
        rows: DashMap<String, company::Model>,
        next_id: AtomicI32,
    }

    impl InMemoryCompanyRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl CompanyRepository for InMemoryCompanyRepository {
        async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
            let mut all: Vec<_> = self.rows.iter().map(|r| r.value().clone()).collect();
            all.sort_by_key(|m| m.id);
            Ok(all)
        }

        async fn insert(&self, input: NewCompany) -> Result<company::Model, ServiceError> {
            // entry 持有分片写锁，检查与插入是同一个原子步骤
            match self.rows.entry(input.name.clone()) {
                Entry::Occupied(_) => Err(ServiceError::duplicate_name()),
                Entry::Vacant(slot) => {
                    let model = company::Model {
                        id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                        name: input.name,
                        status: input.status,
                        application_link: input.application_link,
                        notes: input.notes,
                        last_update: Utc::now().into(),
                    };
                    slot.insert(model.clone());
                    Ok(model)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryCompanyRepository;
    use super::*;
    use crate::test_support::get_db;
    use std::sync::Arc;

    async fn exercise(repo: Arc<dyn CompanyRepository>) -> anyhow::Result<()> {
        assert!(repo.list().await?.is_empty());

        let a = repo.insert(NewCompany::named("Apple")).await?;
        repo.insert(NewCompany::named("Amazon")).await?;

        let err = repo.insert(NewCompany::named("Apple")).await.unwrap_err();
        match err {
            ServiceError::Validation(e) => {
                assert_eq!(e.field("name").unwrap(), ["company with this name already exists."])
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let all = repo.list().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], a);
        assert_eq!(all[1].name, "Amazon");
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_enforces_unique_name() -> anyhow::Result<()> {
        let db = get_db().await?;
        exercise(Arc::new(SeaOrmCompanyRepository::new(db))).await
    }

    #[tokio::test]
    async fn memory_repository_enforces_unique_name() -> anyhow::Result<()> {
        exercise(Arc::new(InMemoryCompanyRepository::new())).await
    }

    async fn race_same_name(repo: Arc<dyn CompanyRepository>) -> anyhow::Result<()> {
        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let mut input = NewCompany::named("Contended");
                input.notes = format!("writer {i}");
                repo.insert(input).await
            }));
        }
        let mut ok = 0;
        for h in handles {
            match h.await? {
                Ok(_) => ok += 1,
                Err(ServiceError::Validation(e)) => {
                    assert_eq!(e.field("name").unwrap(), ["company with this name already exists."])
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_inserts_only_one_wins() -> anyhow::Result<()> {
        race_same_name(Arc::new(InMemoryCompanyRepository::new())).await
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_inserts_on_sqlite_only_one_wins() -> anyhow::Result<()> {
        let db = get_db().await?;
        race_same_name(Arc::new(SeaOrmCompanyRepository::new(db))).await
    }
}
