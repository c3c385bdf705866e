//! Session values exchanged with the backend and held in memory. Nothing here
//! is secret; the session credential itself stays in an `HttpOnly` cookie.

use serde::{Deserialize, Serialize};

/// Identity returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
}

/// Snapshot of the visitor's session as views consume it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub identity: Option<Identity>,
}

/// Result of a single "who am I" probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(Identity),
    Unauthenticated,
}

#[cfg(test)]
mod tests {
    use super::Identity;

    #[test]
    fn identity_accepts_portuguese_name_field() {
        let english: Identity =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com"}"#).expect("decode");
        let portuguese: Identity =
            serde_json::from_str(r#"{"nome":"Ana","email":"ana@x.com","cpf":"1"}"#)
                .expect("decode");

        assert_eq!(english, portuguese);
        assert_eq!(english.name, "Ana");
    }
}
