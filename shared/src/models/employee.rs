//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee wire record
///
/// JSON field names are the API contract:
/// `id, firstName, lastName, email, password, phoneNo, role, salary`.
///
/// `id` is the business identifier, decoupled from the store's own document
/// id. `password` carries the plaintext on create requests and the stored
/// hash on responses; plaintext is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: i64,
    pub role: String,
    pub salary: f64,
}

/// Partial update payload
///
/// Every field is optional; absent fields are left untouched by the merge.
/// Unknown fields are rejected at deserialization instead of being passed
/// through to the store untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_wire_field_names() {
        let emp = Employee {
            id: 7,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            phone_no: 5551234,
            role: "Engineer".into(),
            salary: 1200.50,
        };
        let value = serde_json::to_value(&emp).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id", "firstName", "lastName", "email", "password", "phoneNo", "role", "salary",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn patch_skips_absent_fields() {
        let patch = EmployeePatch {
            role: Some("Manager".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["role"], "Manager");
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let err = serde_json::from_str::<EmployeePatch>(r#"{"nickname":"Lord Byron"}"#);
        assert!(err.is_err());
    }
}
