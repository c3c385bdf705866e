use super::{blocking_alert, paths};
use crate::{
    components::{AppShell, Button, FieldError, INPUT_CLASS, PasswordToggle, Spinner},
    features::{
        auth::{
            forms::{RegisterField, RegisterForm, mask_cpf, register_schema, strip_digits},
            submit::{SubmitError, submit_register},
            validation::FieldErrors,
        },
        backend::HttpPortalApi,
        session::GuestOnly,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use secrecy::SecretString;

const REGISTER_OK: &str = "Registro realizado com sucesso!";
const REGISTER_FAILED: &str = "Erro ao registrar usuário.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AppShell>
            <GuestOnly>
                <RegisterPanel />
            </GuestOnly>
        </AppShell>
    }
}

#[component]
fn RegisterPanel() -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let cpf = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(SecretString::default());
    let confirm_password = RwSignal::new(SecretString::default());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::<RegisterField>::default());

    let register_action = Action::new_local(move |form: &RegisterForm| {
        let form = form.clone();
        async move { submit_register(&HttpPortalApi, &form).await }
    });

    Effect::new(move |_| {
        let Some(result) = register_action.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                blocking_alert(REGISTER_OK);
                navigate(paths::LOGIN, Default::default());
            }
            Err(SubmitError::Invalid(field_errors)) => errors.set(field_errors),
            Err(SubmitError::Rejected(_)) => blocking_alert(REGISTER_FAILED),
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if register_action.pending().get_untracked() {
            tracing::debug!("registration already in flight");
            return;
        }

        let form = RegisterForm {
            name: name.get_untracked(),
            cpf: cpf.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(field_errors) = register_schema().validate(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        register_action.dispatch(form);
    };

    let error_for = move |field| Signal::derive(move || errors.with(|errors| errors.get(field)));
    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="max-w-md mx-auto rounded-2xl border border-blue-500/20 bg-slate-900/85 p-8 shadow-2xl">
            <div class="text-center mb-8">
                <h1 class="text-2xl font-bold text-white">"Criar Conta"</h1>
            </div>
            <form class="space-y-5" on:submit=on_submit novalidate>
                <div>
                    <input
                        id="nome"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="name"
                        placeholder="Nome completo"
                        prop:value=move || name.get()
                        on:input=move |event| name.set(strip_digits(&event_target_value(&event)))
                    />
                    <FieldError message=error_for(RegisterField::Name) />
                </div>
                <div>
                    <input
                        id="cpf"
                        type="text"
                        inputmode="numeric"
                        class=INPUT_CLASS
                        placeholder="CPF"
                        prop:value=move || cpf.get()
                        on:input=move |event| cpf.set(mask_cpf(&event_target_value(&event)))
                    />
                    <FieldError message=error_for(RegisterField::Cpf) />
                </div>
                <div>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        placeholder="E-mail"
                        on:input=move |event| email.set(event_target_value(&event))
                    />
                    <FieldError message=error_for(RegisterField::Email) />
                </div>
                <div>
                    <div class="relative">
                        <input
                            id="senha"
                            type=password_type
                            class=INPUT_CLASS
                            autocomplete="new-password"
                            placeholder="Senha"
                            on:input=move |event| {
                                password.set(SecretString::from(event_target_value(&event)));
                            }
                        />
                        <PasswordToggle visible=show_password />
                    </div>
                    <FieldError message=error_for(RegisterField::Password) />
                </div>
                <div>
                    <input
                        id="confirmar-senha"
                        type=password_type
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        placeholder="Confirmar senha"
                        on:input=move |event| {
                            confirm_password.set(SecretString::from(event_target_value(&event)));
                        }
                    />
                    <FieldError message=error_for(RegisterField::ConfirmPassword) />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Registrar"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
            </form>
            <p class="mt-6 text-center text-sm text-slate-400">
                "Já tem conta? "
                <A href=paths::LOGIN {..} class="text-blue-400 hover:underline">
                    "Entrar"
                </A>
            </p>
        </div>
    }
}
