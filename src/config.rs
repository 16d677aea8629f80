use confy::ConfyError;
use serde::{Deserialize, Serialize};

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

/// The stored credentials for the Monzo API
#[derive(Debug, Serialize, Deserialize)]
pub struct Auth {
    pub access_token: String,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            access_token: "ACCESS_TOKEN".to_string(),
        }
    }
}

pub fn auth() -> Result<Auth, ConfyError> {
    confy::load(BIN_NAME, "auth")
}

pub fn save_auth(auth: &Auth) -> Result<(), ConfyError> {
    confy::store(BIN_NAME, "auth", auth)
}

#[cfg(test)]
mod tests {
    use super::Auth;

    #[test]
    fn deserialise_yaml() {
        let raw = "access_token: abc123";

        let auth: Auth = serde_yaml::from_str(raw).unwrap();
        assert_eq!(auth.access_token, "abc123");
    }

    #[test]
    fn round_trip_yaml() {
        let auth = Auth::default();

        let raw = serde_yaml::to_string(&auth).unwrap();
        let restored: Auth = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(restored.access_token, auth.access_token);
    }
}
