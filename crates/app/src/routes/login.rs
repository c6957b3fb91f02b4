use crate::format_helpers::display_name_from_email;
use dioxus::prelude::*;
use shared_types::{Identity, Role, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input,
};
use std::collections::HashMap;

/// Check the sign-in form and mint the identity handed to the shell.
///
/// This is a stub: any well-formed email and non-empty password are
/// accepted. Errors are keyed by field name.
fn build_identity(
    email: &str,
    password: &str,
    role: Role,
) -> Result<Identity, HashMap<String, String>> {
    let mut errors = HashMap::new();
    let email = email.trim();

    if email.is_empty() {
        errors.insert("email".to_string(), "Email wajib diisi".to_string());
    } else if !is_plausible_email(email) {
        errors.insert("email".to_string(), "Format email tidak valid".to_string());
    }
    if password.is_empty() {
        errors.insert("password".to_string(), "Password wajib diisi".to_string());
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut name = display_name_from_email(email);
    if name.is_empty() {
        name = role.display_name().to_string();
    }
    Ok(Identity::new(
        uuid::Uuid::new_v4().to_string(),
        name,
        email,
        role.as_str(),
    ))
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Sign-in form. Calls `on_login` only when the form checks out; on any
/// error the shell stays on this screen.
#[component]
pub fn LoginForm(on_login: EventHandler<Identity>, on_back: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Talent);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        match build_identity(&email(), &password(), role()) {
            Ok(identity) => {
                field_errors.set(HashMap::new());
                on_login.call(identity);
            }
            Err(errors) => {
                let fields: Vec<&String> = errors.keys().collect();
                tracing::debug!(?fields, "Sign-in form rejected");
                field_errors.set(errors);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Masuk ke Akun Anda" }
                    CardDescription { "Pilih peran Anda lalu masukkan email dan password" }
                }

                CardContent {
                    form { onsubmit: handle_login,
                        div { class: "auth-roles",
                            for option in ALL_ROLES.iter().copied() {
                                button {
                                    key: "{option}",
                                    r#type: "button",
                                    class: "auth-role",
                                    "data-active": if role() == option { "true" } else { "false" },
                                    onclick: move |_| role.set(option),
                                    {option.display_name()}
                                }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                placeholder: "nama@contoh.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                                error: field_errors().get("email").cloned(),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                placeholder: "Masukkan password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                                error: field_errors().get("password").cloned(),
                            }
                        }
                        Button { button_type: "submit", full_width: true, "Masuk" }
                    }
                }

                CardFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_back.call(()),
                        "← Kembali ke Beranda"
                    }
                }
            }
        }
    }
}
