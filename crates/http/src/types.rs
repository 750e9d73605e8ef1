//! Request and response resources exchanged with the portal API

use serde::{Deserialize, Serialize};

/// Hypermedia link attached to every resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Student registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Student registration response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResource {
    pub message: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Student login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Student login response carrying both bearer tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResource {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Body shared by the logout and token refresh endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResource {
    pub message: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Token refresh response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResource {
    pub access_token: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Current user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResource {
    pub id: String,
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub role: i32,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Error body returned by the API on non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResource {
    pub message: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_resource_accepts_missing_links() {
        let user: UserResource = serde_json::from_value(json!({
            "id": "42",
            "name": "Ada",
            "email": "ada@example.com",
            "birth_date": "1990-12-10",
            "role": 1
        }))
        .unwrap();

        assert_eq!(user.role, 1);
        assert!(user.links.is_empty());
    }

    #[test]
    fn link_without_href_omits_field() {
        let link = Link {
            rel: "self".to_string(),
            href: None,
        };
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({ "rel": "self" }));
    }
}
