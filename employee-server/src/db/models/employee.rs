//! Employee Store Model
//!
//! Documents live in the `employees` table. SurrealDB reserves the `id`
//! field for the record id, so the business identifier is stored under
//! `emp_no` and every other wire field maps to a snake_case column.

use serde::{Deserialize, Serialize};
use shared::models::{Employee, EmployeePatch};
use surrealdb::RecordId;

/// Wire-name to store-column mapping for every document field
///
/// Search filters interpolate the column name into the query text, so
/// lookups must go through this table; anything not listed here is not
/// filterable.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("id", "emp_no"),
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("email", "email"),
    ("password", "password"),
    ("phoneNo", "phone_no"),
    ("role", "role"),
    ("salary", "salary"),
];

/// Resolve a wire field name to its store column
pub fn store_column(wire_field: &str) -> Option<&'static str> {
    FIELD_MAP
        .iter()
        .find(|(wire, _)| *wire == wire_field)
        .map(|(_, column)| *column)
}

/// Stored employee document as read back from the store
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    pub id: RecordId,
    pub emp_no: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: i64,
    pub role: String,
    pub salary: f64,
}

/// Document content for inserts; the store generates the record id
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeContent {
    pub emp_no: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: i64,
    pub role: String,
    pub salary: f64,
}

/// Merge payload for partial updates; absent fields stay untouched
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeeRecord {
    /// Convert a stored document into its wire shape
    pub fn into_wire(self) -> Employee {
        Employee {
            id: self.emp_no,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone_no: self.phone_no,
            role: self.role,
            salary: self.salary,
        }
    }

    /// Hash a password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Verify a password against a stored argon2 hash
    pub fn verify_password(hash: &str, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl EmployeeContent {
    /// Build insert content from a wire employee
    ///
    /// The password is copied as-is; hashing happens in the repository
    /// before the document is written.
    pub fn from_wire(employee: Employee) -> Self {
        Self {
            emp_no: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            password: employee.password,
            phone_no: employee.phone_no,
            role: employee.role,
            salary: employee.salary,
        }
    }
}

impl EmployeeMerge {
    /// Build a merge payload from a wire patch
    pub fn from_patch(patch: EmployeePatch) -> Self {
        Self {
            emp_no: patch.id,
            first_name: patch.first_name,
            last_name: patch.last_name,
            email: patch.email,
            password: patch.password,
            phone_no: patch.phone_no,
            role: patch.role,
            salary: patch.salary,
        }
    }
}

/// Typed operand for an equality filter
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Parse a raw query-string value into the operand type of a store column
///
/// Numeric columns that fail to parse return `None`; a mistyped operand
/// can never equal a stored value, so the filter matches nothing.
pub fn parse_filter_value(column: &str, raw: &str) -> Option<FilterValue> {
    match column {
        "emp_no" | "phone_no" => raw.parse::<i64>().ok().map(FilterValue::Int),
        "salary" => raw.parse::<f64>().ok().map(FilterValue::Float),
        _ => Some(FilterValue::Text(raw.to_string())),
    }
}
