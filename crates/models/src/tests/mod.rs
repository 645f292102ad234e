/// Entity CRUD against an in-memory SQLite database
pub mod company_tests;
