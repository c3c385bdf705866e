//! Request payloads for the login and registration endpoints. They carry the
//! plain password, so `Debug` is redacted and they must never be logged.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("cpf", &"[REDACTED]")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, RegisterRequest};
    use serde_json::json;

    #[test]
    fn payloads_use_backend_field_names() {
        let login = LoginRequest {
            email: "ana@x.com".to_string(),
            password: "segredo1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&login).expect("encode"),
            json!({ "email": "ana@x.com", "senha": "segredo1" })
        );

        let register = RegisterRequest {
            name: "Ana Souza".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@x.com".to_string(),
            password: "segredo1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&register).expect("encode"),
            json!({
                "nome": "Ana Souza",
                "cpf": "123.456.789-09",
                "email": "ana@x.com",
                "senha": "segredo1"
            })
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let register = RegisterRequest {
            name: "Ana Souza".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@x.com".to_string(),
            password: "segredo1".to_string(),
        };
        let rendered = format!("{register:?}");
        assert!(!rendered.contains("segredo1"));
        assert!(!rendered.contains("123.456"));
        assert!(rendered.contains("ana@x.com"));
    }
}
