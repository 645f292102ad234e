//! Per-field validation error collection.
//!
//! Serializes as `{"<field>": ["<message>", ...]}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const DUPLICATE_NAME: &str = "company with this name already exists.";
pub const INVALID_URL: &str = "Enter a valid URL.";
pub const NOT_A_STRING: &str = "Not a valid string.";

pub fn invalid_choice(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errs = Self::new();
        errs.add(field, message);
        errs
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msgs) in &self.0 {
            if !first { f.write_str("; ")?; }
            first = false;
            write!(f, "{field}: {}", msgs.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_field_map() {
        let mut e = ValidationErrors::single("name", REQUIRED);
        e.add("status", invalid_choice("Wrong status"));
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "name": ["This field is required."],
                "status": ["\"Wrong status\" is not a valid choice."]
            })
        );
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut e = ValidationErrors::new();
        assert!(e.clone().into_result().is_ok());
        e.add("name", "a");
        e.add("name", "b");
        assert_eq!(e.field("name").unwrap(), ["a", "b"]);
        assert_eq!(e.to_string(), "name: a b");
    }
}
