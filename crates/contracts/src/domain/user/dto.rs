use serde::{Deserialize, Serialize};

/// A platform user. Referrals are users with `verified == false`; the
/// customers tab shows the verified ones. Field names follow the API wire
/// format (snake_case except the two legacy camelCase flags).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserRecord {
    pub mobile: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub refered_by_mobile: Option<String>,

    #[serde(default)]
    pub refered_by_name: Option<String>,

    #[serde(default)]
    pub verified: bool,

    #[serde(rename = "isFormFilled", default)]
    pub is_form_filled: bool,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateUserRequest {
    pub mobile: String,
    pub first_name: String,
    pub last_name: String,
    pub refered_by_mobile: String,
    pub refered_by_name: String,
}

/// Mobile is the user key and cannot be changed; it travels in the URL, not
/// the body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub refered_by_mobile: String,
    pub refered_by_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserResponse {
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_defaults_to_empty() {
        let empty: UsersResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.users.is_empty());
    }

    #[test]
    fn test_minimal_record() {
        let user: UserRecord = serde_json::from_str(r#"{"mobile": "9876543210"}"#).unwrap();
        assert_eq!(user.mobile, "9876543210");
        assert!(!user.verified);
        assert!(!user.is_form_filled);
        assert_eq!(user.full_name(), "");
    }

    #[test]
    fn test_full_name_trims() {
        let user = UserRecord {
            mobile: "1".into(),
            first_name: "Asha".into(),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Asha");
    }
}
