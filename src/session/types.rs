use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Proof of a logged-in user: the `data` payload of the login response,
/// kept verbatim.
///
/// The shape belongs to the server. Only `email` and `token` are read, and
/// neither is required.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Value);

impl Session {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn email(&self) -> Option<&str> {
        self.field("email")
            .or_else(|| self.0.get("user").and_then(|user| user.get("email")))
            .and_then(Value::as_str)
    }

    pub fn token(&self) -> Option<&str> {
        ["token", "accessToken", "access_token"]
            .iter()
            .find_map(|name| self.field(name))
            .and_then(Value::as_str)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email())
            .field("token", &self.token().map(|_| "••••••••"))
            .finish()
    }
}
