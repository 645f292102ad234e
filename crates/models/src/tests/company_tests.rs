use crate::company::{self, CompanyStatus, NewCompany};
use crate::db::connect_memory;
use crate::errors::ModelError;
use anyhow::Result;
use sea_orm::{EntityTrait, TransactionTrait};

#[tokio::test]
async fn test_create_with_defaults() -> Result<()> {
    let db = connect_memory().await?;

    let created = company::create(&db, NewCompany::named("Amazon")).await?;
    assert_eq!(created.name, "Amazon");
    assert_eq!(created.status, CompanyStatus::Hiring);
    assert_eq!(created.application_link, "");
    assert_eq!(created.notes, "");

    let found = company::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|m| m.name), Some("Amazon".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_status_round_trips_through_column() -> Result<()> {
    let db = connect_memory().await?;

    let mut input = NewCompany::named("Meta");
    input.status = CompanyStatus::HiringFreeze;
    company::create(&db, input).await?;

    let found = company::find_by_name(&db, "Meta").await?.expect("row");
    assert_eq!(found.status, CompanyStatus::HiringFreeze);
    Ok(())
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_name() -> Result<()> {
    let db = connect_memory().await?;

    let original = company::create(&db, NewCompany::named("Apple")).await?;
    let mut dup = NewCompany::named("Apple");
    dup.notes = "second".into();
    let err = company::create(&db, dup).await.unwrap_err();
    assert!(matches!(err, ModelError::DuplicateName(ref n) if n == "Apple"), "got {err:?}");

    let all = company::list(&db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], original);
    Ok(())
}

#[tokio::test]
async fn test_name_match_is_case_sensitive() -> Result<()> {
    let db = connect_memory().await?;

    company::create(&db, NewCompany::named("Apple")).await?;
    company::create(&db, NewCompany::named("apple")).await?;
    assert_eq!(company::list(&db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_list_is_ordered_by_insertion() -> Result<()> {
    let db = connect_memory().await?;
    assert!(company::list(&db).await?.is_empty());

    for name in ["Zeta", "Alpha", "Mid"] {
        company::create(&db, NewCompany::named(name)).await?;
    }
    let names: Vec<_> = company::list(&db).await?.into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    Ok(())
}

#[tokio::test]
async fn test_rolled_back_insert_leaves_no_row() -> Result<()> {
    let db = connect_memory().await?;

    let txn = db.begin().await?;
    company::create(&txn, NewCompany::named("Ghost")).await?;
    txn.rollback().await?;

    assert!(company::find_by_name(&db, "Ghost").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_blank_name_rejected_before_insert() -> Result<()> {
    let db = connect_memory().await?;
    let err = company::create(&db, NewCompany::named("  ")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(company::list(&db).await?.is_empty());
    Ok(())
}

#[test]
fn status_labels_parse_exactly() {
    assert_eq!("Layoffs".parse::<CompanyStatus>().unwrap(), CompanyStatus::Layoffs);
    assert_eq!("Hiring Freeze".parse::<CompanyStatus>().unwrap(), CompanyStatus::HiringFreeze);
    assert!("hiring".parse::<CompanyStatus>().is_err());
    assert!("Wrong status".parse::<CompanyStatus>().is_err());
    assert_eq!(CompanyStatus::default().to_string(), "Hiring");
}
