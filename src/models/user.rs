use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User document stored in MongoDB, identified by email.
///
/// The schema is deliberately open: `email` is the only required field, `name`
/// is the one well-known optional field, and anything else the caller sends is
/// captured verbatim in `extra` and persisted alongside.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Escape hatch for caller-supplied fields outside the declared contract.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Payload for the lookup and delete operations: `{ "email": ... }`.
///
/// `email` is optional at the serde level so that its absence surfaces as a
/// 400 "Email is required" instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: Option<String>,
}

/// Payload for the update operation: `email` selects the document, every other
/// field is merged into it. `email` itself is never part of the update set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub email: Option<String>,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_captures_unknown_fields() {
        let json = r#"{"email":"a@x.com","name":"A","age":30,"tags":["x","y"]}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name.as_deref(), Some("A"));
        assert_eq!(user.extra.get_i64("age").unwrap(), 30);
        assert!(user.extra.get_array("tags").is_ok());
    }

    #[test]
    fn test_user_without_name_serializes_without_null() {
        let user: User = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json, serde_json::json!({ "email": "a@x.com" }));
    }

    #[test]
    fn test_user_missing_email_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"name":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_email_request_tolerates_missing_email() {
        let req: EmailRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
    }

    #[test]
    fn test_update_request_splits_email_from_fields() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"a@x.com","name":"B","age":31}"#).unwrap();

        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert_eq!(req.fields.get_str("name").unwrap(), "B");
        assert_eq!(req.fields.get_i64("age").unwrap(), 31);
        assert!(!req.fields.contains_key("email"));
    }
}
