//! Login and registration form models, their validation schemas and the input
//! helpers the register form applies while the user types.

use super::{
    types::{LoginRequest, RegisterRequest},
    validation::{FormValues, Rule, Schema},
};
use secrecy::{ExposeSecret, SecretString};

const CPF_DIGITS: usize = 11;
const CPF_PATTERN: &str = r"^\d{3}\.\d{3}\.\d{3}-\d{2}$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Name,
    Cpf,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl FormValues<LoginField> for LoginForm {
    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => self.password.expose_secret(),
        }
    }
}

impl FormValues<RegisterField> for RegisterForm {
    fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Cpf => &self.cpf,
            RegisterField::Email => &self.email,
            RegisterField::Password => self.password.expose_secret(),
            RegisterField::ConfirmPassword => self.confirm_password.expose_secret(),
        }
    }
}

impl LoginForm {
    pub(crate) fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.expose_secret().to_string(),
        }
    }
}

impl RegisterForm {
    /// The confirmation never leaves the browser.
    pub(crate) fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            cpf: self.cpf.clone(),
            email: self.email.trim().to_string(),
            password: self.password.expose_secret().to_string(),
        }
    }
}

pub fn login_schema() -> Schema<LoginField> {
    Schema::new()
        .field(
            LoginField::Email,
            vec![
                Rule::Required("Informe seu e-mail"),
                Rule::Email("E-mail inválido"),
            ],
        )
        .field(LoginField::Password, vec![Rule::Required("Informe sua senha")])
}

pub fn register_schema() -> Schema<RegisterField> {
    Schema::new()
        .field(
            RegisterField::Name,
            vec![
                Rule::Required("Nome é obrigatório"),
                Rule::MinChars(3, "Nome é obrigatório"),
            ],
        )
        .field(RegisterField::Cpf, vec![Rule::Pattern(CPF_PATTERN, "CPF inválido")])
        .field(RegisterField::Email, vec![Rule::Email("E-mail inválido")])
        .field(
            RegisterField::Password,
            vec![Rule::MinChars(6, "Mínimo de 6 caracteres")],
        )
        .field(
            RegisterField::ConfirmPassword,
            vec![Rule::SameAs(
                RegisterField::Password,
                "As senhas não coincidem",
            )],
        )
}

/// Formats whatever digits `input` holds as `000.000.000-00`, progressively,
/// keeping at most eleven of them.
pub fn mask_cpf(input: &str) -> String {
    let mut masked = String::with_capacity(14);
    for (index, digit) in input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CPF_DIGITS)
        .enumerate()
    {
        match index {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }
    masked
}

/// Names never carry digits; they are dropped as the user types.
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        LoginField, LoginForm, RegisterField, RegisterForm, login_schema, mask_cpf,
        register_schema, strip_digits,
    };
    use secrecy::SecretString;

    fn valid_register() -> RegisterForm {
        RegisterForm {
            name: "Ana Souza".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@x.com".to_string(),
            password: SecretString::from("segredo1".to_string()),
            confirm_password: SecretString::from("segredo1".to_string()),
        }
    }

    #[test]
    fn login_requires_a_well_formed_email() {
        let form = LoginForm {
            email: "ana".to_string(),
            password: SecretString::from("segredo1".to_string()),
        };
        let errors = login_schema().validate(&form).expect_err("invalid");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(LoginField::Email), Some("E-mail inválido"));

        let errors = login_schema()
            .validate(&LoginForm::default())
            .expect_err("empty");
        assert_eq!(errors.get(LoginField::Email), Some("Informe seu e-mail"));
        assert_eq!(errors.get(LoginField::Password), Some("Informe sua senha"));
    }

    #[test]
    fn register_accepts_a_complete_form() {
        assert!(register_schema().validate(&valid_register()).is_ok());
    }

    #[test]
    fn register_reports_each_invalid_field() {
        let form = RegisterForm {
            name: "Al".to_string(),
            cpf: "12345678909".to_string(),
            email: "ana@".to_string(),
            password: SecretString::from("123".to_string()),
            confirm_password: SecretString::from("123".to_string()),
        };
        let errors = register_schema().validate(&form).expect_err("invalid");

        assert_eq!(errors.get(RegisterField::Name), Some("Nome é obrigatório"));
        assert_eq!(errors.get(RegisterField::Cpf), Some("CPF inválido"));
        assert_eq!(errors.get(RegisterField::Email), Some("E-mail inválido"));
        assert_eq!(
            errors.get(RegisterField::Password),
            Some("Mínimo de 6 caracteres")
        );
        assert_eq!(errors.get(RegisterField::ConfirmPassword), None);
    }

    #[test]
    fn request_drops_confirmation_and_trims() {
        let mut form = valid_register();
        form.email = "  ana@x.com ".to_string();
        let request = form.to_request();
        assert_eq!(request.email, "ana@x.com");
        assert_eq!(request.password, "segredo1");
        assert_eq!(request.cpf, "123.456.789-09");
    }

    #[test]
    fn cpf_mask_is_progressive() {
        assert_eq!(mask_cpf(""), "");
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567"), "123.456.7");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
        assert_eq!(mask_cpf("12345678909"), "123.456.789-09");
    }

    #[test]
    fn cpf_mask_ignores_noise_and_extra_digits() {
        assert_eq!(mask_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(mask_cpf("abc123456789099999"), "123.456.789-09");
    }

    #[test]
    fn names_lose_their_digits() {
        assert_eq!(strip_digits("Ana2 Souza9"), "Ana Souza");
        assert_eq!(strip_digits("José"), "José");
    }
}
