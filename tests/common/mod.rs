//! Shared helpers for integration tests.

use chrono::NaiveDate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use visa_crm::db::{DbPool, establish_connection_pool};
use visa_crm::domain::opportunity::NewOpportunity;
use visa_crm::domain::types::{
    Amount, CaseTypeAction, OpportunityCategory, PersonName, Province, RegistrationNumber,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database living in a temporary directory for the duration of a test.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[allow(dead_code)]
pub fn new_opportunity(
    category: OpportunityCategory,
    province: &str,
    date: NaiveDate,
    number: &str,
    first_name: &str,
    last_name: &str,
) -> NewOpportunity {
    NewOpportunity::new(
        category,
        CaseTypeAction::new("first_application").unwrap(),
        Province::new(province).unwrap(),
        date,
        RegistrationNumber::new(number).unwrap(),
        PersonName::new(first_name).unwrap(),
        PersonName::new(last_name).unwrap(),
        None,
        Amount::new(100_000).unwrap(),
    )
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
