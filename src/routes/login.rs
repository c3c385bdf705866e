use super::{blocking_alert, paths};
use crate::{
    components::{AppShell, Button, FieldError, INPUT_CLASS, PasswordToggle, Spinner},
    features::{
        auth::{
            forms::{LoginField, LoginForm, login_schema},
            submit::{SubmitError, confirm_sign_in, submit_login},
            validation::FieldErrors,
        },
        backend::HttpPortalApi,
        session::{GuestOnly, context::use_session, store::SessionSink},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};
use secrecy::SecretString;

const LOGIN_FAILED: &str = "Não foi possível entrar. Verifique seu e-mail e senha.";

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <GuestOnly>
                <LoginPanel />
            </GuestOnly>
        </AppShell>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let password = RwSignal::new(SecretString::default());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::<LoginField>::default());

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        async move { submit_login(&HttpPortalApi, &form).await }
    });

    Effect::new(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                let epoch = session.restart();
                navigate(paths::HOME, Default::default());
                spawn_local(async move { confirm_sign_in(&HttpPortalApi, &session, epoch).await });
            }
            Err(SubmitError::Invalid(field_errors)) => errors.set(field_errors),
            Err(SubmitError::Rejected(_)) => blocking_alert(LOGIN_FAILED),
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if login_action.pending().get_untracked() {
            tracing::debug!("login already in flight");
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(field_errors) = login_schema().validate(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        login_action.dispatch(form);
    };

    let error_for = move |field| Signal::derive(move || errors.with(|errors| errors.get(field)));

    view! {
        <div class="max-w-md mx-auto rounded-2xl border border-blue-500/20 bg-slate-900/85 p-8 shadow-2xl">
            <div class="text-center mb-8">
                <h1 class="text-2xl font-bold text-white">"Entrar"</h1>
                <p class="text-slate-400 text-sm mt-1">"Acesse o portal com seu e-mail corporativo"</p>
            </div>
            <form class="space-y-5" on:submit=on_submit novalidate>
                <div>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        placeholder="E-mail"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldError message=error_for(LoginField::Email) />
                </div>
                <div>
                    <div class="relative">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            placeholder="Senha"
                            on:input=move |event| {
                                password.set(SecretString::from(event_target_value(&event)));
                            }
                        />
                        <PasswordToggle visible=show_password />
                    </div>
                    <FieldError message=error_for(LoginField::Password) />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Entrar"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
            </form>
            <p class="mt-6 text-center text-sm text-slate-400">
                "Ainda não tem conta? "
                <A href=paths::REGISTER {..} class="text-blue-400 hover:underline">
                    "Criar conta"
                </A>
            </p>
        </div>
    }
}
