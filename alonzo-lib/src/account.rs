use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A Monzo account
///
/// Accounts are only ever constructed by decoding an API response, and are
/// immutable from then on.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// The unique ID of the account
    pub id: String,

    /// A human-readable description of the account
    pub description: String,

    /// When the account was created
    pub created: DateTime<Utc>,

    /// The kind of account, e.g. `uk_retail`
    #[serde(rename = "type")]
    pub account_type: String,

    closed: bool,

    /// The users who own this account, in the order the API returns them
    pub owners: Vec<User>,
}

impl Account {
    /// Whether the account is open
    ///
    /// The API reports this as a `closed` flag; this is its inverse.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.closed
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monzo Account: {}", self.description)
    }
}

/// A user attached to an [`Account`]'s owner list
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// The unique ID of the user
    pub user_id: String,

    /// The user's preferred full name
    pub preferred_name: String,

    /// The user's preferred first name
    pub preferred_first_name: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preferred_name)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Account;

    static CURRENT_ACCOUNT: &str = r#"{
        "id": "acc_1",
        "description": "Current",
        "created": "2020-01-01T00:00:00Z",
        "type": "uk_retail",
        "closed": false,
        "owners": [
            {
                "user_id": "u1",
                "preferred_name": "Ada",
                "preferred_first_name": "Ada"
            }
        ]
    }"#;

    #[test]
    fn deserialise_open_account() {
        let account: Account = serde_json::from_str(CURRENT_ACCOUNT).unwrap();

        assert!(account.is_active());
        assert_eq!(account.account_type, "uk_retail");
        assert_eq!(
            account.created.date_naive(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );

        let [owner] = account.owners.as_slice() else {
            panic!("expected exactly one owner");
        };
        assert_eq!(owner.preferred_name, "Ada");
        assert_eq!(owner.to_string(), "Ada");
    }

    #[test]
    fn closed_account_is_not_active() {
        let raw = CURRENT_ACCOUNT.replace("\"closed\": false", "\"closed\": true");
        let account: Account = serde_json::from_str(&raw).unwrap();

        assert!(!account.is_active());
    }

    #[test]
    fn display_uses_the_description() {
        let account: Account = serde_json::from_str(CURRENT_ACCOUNT).unwrap();

        assert_eq!(account.to_string(), "Monzo Account: Current");
    }
}
