use std::{fmt, str::FromStr};

use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, QueryOrder, Set, SqlErr};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Hiring status of a company. Stored as its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum CompanyStatus {
    #[sea_orm(string_value = "Layoffs")]
    #[serde(rename = "Layoffs")]
    Layoffs,
    #[sea_orm(string_value = "Hiring Freeze")]
    #[serde(rename = "Hiring Freeze")]
    HiringFreeze,
    #[sea_orm(string_value = "Hiring")]
    #[serde(rename = "Hiring")]
    Hiring,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Layoffs => "Layoffs",
            CompanyStatus::HiringFreeze => "Hiring Freeze",
            CompanyStatus::Hiring => "Hiring",
        }
    }
}

impl Default for CompanyStatus {
    fn default() -> Self { CompanyStatus::Hiring }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyStatus {
    type Err = errors::ModelError;

    /// Exact, case-sensitive match on the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Layoffs" => Ok(CompanyStatus::Layoffs),
            "Hiring Freeze" => Ok(CompanyStatus::HiringFreeze),
            "Hiring" => Ok(CompanyStatus::Hiring),
            other => Err(errors::ModelError::Validation(format!("unknown status {other:?}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub status: CompanyStatus,
    pub application_link: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub last_update: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fully validated field set ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub status: CompanyStatus,
    pub application_link: String,
    pub notes: String,
}

impl NewCompany {
    /// Only `name` given; everything else takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CompanyStatus::default(),
            application_link: String::new(),
            notes: String::new(),
        }
    }
}

/// All companies, oldest first.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert a row. A clash on the unique `name` index surfaces as `DuplicateName`.
pub async fn create<C: ConnectionTrait>(db: &C, input: NewCompany) -> Result<Model, errors::ModelError> {
    if input.name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let name = input.name.clone();
    let am = ActiveModel {
        name: Set(input.name),
        status: Set(input.status),
        application_link: Set(input.application_link),
        notes: Set(input.notes),
        last_update: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::DuplicateName(name),
        _ => errors::ModelError::Db(e.to_string()),
    })
}
