use models::company::{CompanyStatus, NewCompany};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors};

/// Raw create request. Every field may be missing; `null` counts as missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateCompanyInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub application_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateCompanyInput {
    pub fn named(name: &str) -> Self {
        Self { name: Some(name.to_string()), ..Default::default() }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// Accepted status values and the one applied when a request omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChoices {
    allowed: Vec<CompanyStatus>,
    default: CompanyStatus,
}

impl StatusChoices {
    pub fn new(allowed: Vec<CompanyStatus>, default: CompanyStatus) -> anyhow::Result<Self> {
        if !allowed.contains(&default) {
            anyhow::bail!("default status {default} is not among the allowed statuses");
        }
        Ok(Self { allowed, default })
    }

    pub fn from_config(cfg: &configs::CompaniesConfig) -> anyhow::Result<Self> {
        let allowed = cfg
            .statuses
            .iter()
            .map(|s| s.parse::<CompanyStatus>())
            .collect::<Result<Vec<_>, _>>()?;
        let default = cfg.default_status.parse::<CompanyStatus>()?;
        Self::new(allowed, default)
    }

    pub fn default_status(&self) -> CompanyStatus { self.default }

    pub fn allowed(&self) -> &[CompanyStatus] { &self.allowed }

    /// Missing → default; otherwise the label must be allowed, exact match.
    pub fn resolve(&self, raw: Option<&str>) -> Result<CompanyStatus, String> {
        let Some(raw) = raw else { return Ok(self.default) };
        match raw.parse::<CompanyStatus>() {
            Ok(s) if self.allowed.contains(&s) => Ok(s),
            _ => Err(validation::invalid_choice(raw)),
        }
    }
}

impl Default for StatusChoices {
    fn default() -> Self {
        Self {
            allowed: vec![CompanyStatus::Layoffs, CompanyStatus::HiringFreeze, CompanyStatus::Hiring],
            default: CompanyStatus::Hiring,
        }
    }
}

fn is_valid_url(u: &str) -> bool {
    let rest = match u.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => rest,
        _ => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && !u.chars().any(char::is_whitespace)
}

fn check_name(raw: Option<&str>) -> Result<String, &'static str> {
    match raw.map(str::trim) {
        None => Err(validation::REQUIRED),
        Some("") => Err(validation::BLANK),
        Some(n) => Ok(n.to_string()),
    }
}

fn check_application_link(raw: Option<&str>) -> Result<String, &'static str> {
    let link = raw.map(str::trim).unwrap_or("");
    if !link.is_empty() && !is_valid_url(link) {
        return Err(validation::INVALID_URL);
    }
    Ok(link.to_string())
}

/// Check every field and collect all failures; on success return the row to insert.
/// `name`, `application_link` and `notes` are trimmed; `status` must match a label exactly.
pub fn validate(input: &CreateCompanyInput, choices: &StatusChoices) -> Result<NewCompany, ValidationErrors> {
    let name = check_name(input.name.as_deref());
    let status = choices.resolve(input.status.as_deref());
    let application_link = check_application_link(input.application_link.as_deref());
    let notes = input.notes.as_deref().map(str::trim).unwrap_or("").to_string();

    match (name, status, application_link) {
        (Ok(name), Ok(status), Ok(application_link)) => Ok(NewCompany { name, status, application_link, notes }),
        (name, status, application_link) => {
            let mut errs = ValidationErrors::new();
            if let Err(msg) = name { errs.add("name", msg); }
            if let Err(msg) = status { errs.add("status", msg); }
            if let Err(msg) = application_link { errs.add("application_link", msg); }
            Err(errs)
        }
    }
}

/// Build the input from a decoded JSON body. Scalars are coerced to text;
/// arrays and objects are reported against their field.
pub fn input_from_json(value: serde_json::Value) -> Result<CreateCompanyInput, ValidationErrors> {
    use serde_json::Value;

    let mut obj = match value {
        Value::Object(obj) => obj,
        other => {
            let kind = match other {
                Value::Array(_) => "list",
                Value::String(_) => "str",
                Value::Number(_) => "int",
                Value::Bool(_) => "bool",
                _ => "NoneType",
            };
            return Err(ValidationErrors::single(
                "non_field_errors",
                format!("Invalid data. Expected a dictionary, but got {kind}."),
            ));
        }
    };

    let mut errs = ValidationErrors::new();
    let mut take = |field: &str| match obj.remove(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(if b { "True" } else { "False" }.to_string()),
        Some(_) => { errs.add(field, validation::NOT_A_STRING); None }
    };
    let input = CreateCompanyInput {
        name: take("name"),
        status: take("status"),
        application_link: take("application_link"),
        notes: take("notes"),
    };
    errs.into_result()?;
    Ok(input)
}
