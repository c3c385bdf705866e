//! Submission flows shared by the login and register pages. Validation runs
//! first and is all-or-nothing; only a fully valid form reaches the backend,
//! and then with exactly one request.

use super::{
    forms::{LoginField, LoginForm, RegisterField, RegisterForm, login_schema, register_schema},
    validation::FieldErrors,
};
use crate::{
    app_lib::AppError,
    features::{
        backend::PortalApi,
        session::{probe::probe_session, store::SessionSink, types::ProbeOutcome},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError<F: Ord> {
    /// Client-side validation failed; nothing was sent.
    Invalid(FieldErrors<F>),
    /// The backend refused the request or could not be reached.
    Rejected(AppError),
}

/// Logs in. The outcome depends on the login request alone; the identity
/// behind the new cookie is read afterwards by `confirm_sign_in`.
pub(crate) async fn submit_login<A: PortalApi>(
    api: &A,
    form: &LoginForm,
) -> Result<(), SubmitError<LoginField>> {
    login_schema().validate(form).map_err(SubmitError::Invalid)?;

    api.login(&form.to_request()).await.map_err(|err| {
        tracing::warn!(error = %err, "login rejected");
        SubmitError::Rejected(err)
    })?;
    tracing::info!("signed in");
    Ok(())
}

/// Resolves round `epoch` of a restarted session from a fresh `who_am_i`. A
/// failed lookup leaves a guest session and is only logged.
pub(crate) async fn confirm_sign_in<A, S>(api: &A, session: &S, epoch: u64)
where
    A: PortalApi,
    S: SessionSink + ?Sized,
{
    let outcome = probe_session(api).await;
    if matches!(outcome, ProbeOutcome::Unauthenticated) {
        tracing::warn!("login succeeded but the new session could not be read");
    }
    session.resolve_at(epoch, outcome);
}

pub(crate) async fn submit_register<A: PortalApi>(
    api: &A,
    form: &RegisterForm,
) -> Result<(), SubmitError<RegisterField>> {
    register_schema().validate(form).map_err(SubmitError::Invalid)?;

    api.register(&form.to_request()).await.map_err(|err| {
        tracing::warn!(error = %err, "registration rejected");
        SubmitError::Rejected(err)
    })?;
    tracing::info!("account registered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SubmitError, confirm_sign_in, submit_login, submit_register};
    use crate::{
        app_lib::AppError,
        features::{
            auth::forms::{LoginField, LoginForm, RegisterField, RegisterForm},
            backend::mock::MockPortal,
            session::{
                store::{SessionPhase, SessionSink, SessionStore},
                types::ProbeOutcome,
            },
        },
    };
    use secrecy::SecretString;
    use std::cell::RefCell;

    fn login_form(email: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: SecretString::from("segredo1".to_string()),
        }
    }

    fn register_form(confirm: &str) -> RegisterForm {
        RegisterForm {
            name: "Ana Souza".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@x.com".to_string(),
            password: SecretString::from("segredo1".to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
        }
    }

    #[tokio::test]
    async fn invalid_email_blocks_the_request() {
        let api = MockPortal::signed_in("Ana", "ana@x.com");

        let result = submit_login(&api, &login_form("ana@x")).await;

        match result {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.get(LoginField::Email).is_some());
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_login_sends_a_single_request() {
        let api = MockPortal::signed_in("Ana", "ana@x.com");

        submit_login(&api, &login_form(" ana@x.com "))
            .await
            .expect("signed in");

        assert_eq!(api.calls(), vec!["login"]);
        let sent = api.last_login().expect("login payload");
        assert_eq!(sent.email, "ana@x.com");
        assert_eq!(sent.password, "segredo1");
    }

    #[tokio::test]
    async fn unreadable_session_after_login_is_not_a_rejection() {
        let api = MockPortal {
            who_am_i: Err(AppError::Network("offline".to_string())),
            ..MockPortal::signed_in("Ana", "ana@x.com")
        };
        let session = RefCell::new(SessionStore::init());

        let result = submit_login(&api, &login_form("ana@x.com")).await;
        assert_eq!(result, Ok(()));

        let epoch = session.restart();
        confirm_sign_in(&api, &session, epoch).await;

        assert_eq!(session.borrow().phase(), &SessionPhase::Guest);
        assert_eq!(api.calls(), vec!["login", "who_am_i"]);
    }

    #[tokio::test]
    async fn confirmed_sign_in_authenticates_the_session() {
        let api = MockPortal::signed_in("Ana", "ana@x.com");
        let session = RefCell::new(SessionStore::init());
        session.borrow_mut().resolve(ProbeOutcome::Unauthenticated);

        let epoch = session.restart();
        assert!(session.borrow().is_resolving());
        confirm_sign_in(&api, &session, epoch).await;

        let store = session.borrow();
        assert!(store.is_authenticated());
        assert_eq!(store.identity().map(|identity| identity.name.as_str()), Some("Ana"));
    }

    #[tokio::test]
    async fn rejected_login_skips_the_identity_lookup() {
        let api = MockPortal {
            login: Err(AppError::Http {
                status: 401,
                message: "Credenciais inválidas".to_string(),
            }),
            ..MockPortal::signed_in("Ana", "ana@x.com")
        };

        let result = submit_login(&api, &login_form("ana@x.com")).await;

        assert!(matches!(result, Err(SubmitError::Rejected(ref err)) if err.status() == Some(401)));
        assert_eq!(api.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn mismatched_confirmation_flags_only_that_field() {
        let api = MockPortal::default();

        let result = submit_register(&api, &register_form("segredo2")).await;

        match result {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(
                    errors.fields().collect::<Vec<_>>(),
                    vec![RegisterField::ConfirmPassword]
                );
                assert_eq!(
                    errors.get(RegisterField::ConfirmPassword),
                    Some("As senhas não coincidem")
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_registration_posts_the_account() {
        let api = MockPortal::default();

        submit_register(&api, &register_form("segredo1"))
            .await
            .expect("registered");

        assert_eq!(api.calls(), vec!["register"]);
        let sent = api.last_register().expect("register payload");
        assert_eq!(sent.name, "Ana Souza");
        assert_eq!(sent.cpf, "123.456.789-09");
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_rejection() {
        let api = MockPortal {
            register: Err(AppError::Network("offline".to_string())),
            ..MockPortal::default()
        };

        let result = submit_register(&api, &register_form("segredo1")).await;

        assert_eq!(
            result,
            Err(SubmitError::Rejected(AppError::Network("offline".to_string())))
        );
    }
}
