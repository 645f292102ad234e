//! Service layer for company records.
//! - Field validation lives in `company::domain`, persistence behind `CompanyRepository`.
//! - Name uniqueness is enforced by the store itself, not by a lookup before insert.

pub mod errors;
pub mod validation;
pub mod company;
#[cfg(test)]
pub mod test_support;
