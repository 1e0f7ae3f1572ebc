use super::api;
use contracts::usecases::u101_contact_intake::{
    validate_phone, ContactRequest, PHONE_ERROR_MESSAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Пустую строку отправляем как отсутствующее поле
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Собирает запрос из полей формы и проверяет телефон до отправки
fn prepare_request(
    nombre: String,
    telefono: String,
    email: String,
    mensaje: String,
    recibir_sms: bool,
) -> Result<ContactRequest, String> {
    let request = ContactRequest {
        nombre: non_empty(nombre),
        telefono: non_empty(telefono),
        email: non_empty(email),
        mensaje: non_empty(mensaje),
        recibir_sms: Some(recibir_sms),
    };
    validate_phone(request.telefono.as_deref()).map_err(|_| PHONE_ERROR_MESSAGE.to_string())?;
    Ok(request)
}

#[derive(Debug, Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let (nombre, set_nombre) = signal(String::new());
    let (telefono, set_telefono) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (mensaje, set_mensaje) = signal(String::new());
    let (recibir_sms, set_recibir_sms) = signal(true);
    let (status, set_status) = signal(FormStatus::Idle);

    let is_sending = move || status.get() == FormStatus::Sending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_sending() {
            return;
        }

        let request = match prepare_request(
            nombre.get_untracked(),
            telefono.get_untracked(),
            email.get_untracked(),
            mensaje.get_untracked(),
            recibir_sms.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                set_status.set(FormStatus::Failed(e));
                return;
            }
        };

        set_status.set(FormStatus::Sending);
        spawn_local(async move {
            match api::submit_contact(&request).await {
                Ok(response) if response.success => {
                    let text = response
                        .mensaje
                        .unwrap_or_else(|| "¡Gracias! Te contactaremos pronto.".to_string());
                    set_nombre.set(String::new());
                    set_telefono.set(String::new());
                    set_email.set(String::new());
                    set_mensaje.set(String::new());
                    set_status.set(FormStatus::Sent(text));
                }
                Ok(response) => {
                    let text = response
                        .error
                        .unwrap_or_else(|| "No se pudo enviar el mensaje".to_string());
                    log::warn!("Contact form rejected: {}", text);
                    set_status.set(FormStatus::Failed(text));
                }
                Err(e) => {
                    log::error!("Contact form request failed: {}", e);
                    set_status.set(FormStatus::Failed(
                        "No se pudo enviar el mensaje. Intenta de nuevo.".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form__group">
                <label class="form__label" for="contact-nombre">"Nombre"</label>
                <input
                    id="contact-nombre"
                    class="form__input"
                    type="text"
                    autocomplete="name"
                    prop:value=nombre
                    on:input=move |ev| set_nombre.set(event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label" for="contact-telefono">"Teléfono"</label>
                <input
                    id="contact-telefono"
                    class="form__input"
                    type="tel"
                    placeholder="+51 987 654 321"
                    autocomplete="tel"
                    required=true
                    prop:value=telefono
                    on:input=move |ev| set_telefono.set(event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label" for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    class="form__input"
                    type="email"
                    autocomplete="email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label" for="contact-mensaje">"Mensaje"</label>
                <textarea
                    id="contact-mensaje"
                    class="form__input"
                    rows="4"
                    prop:value=mensaje
                    on:input=move |ev| set_mensaje.set(event_target_value(&ev))
                ></textarea>
            </div>
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=recibir_sms
                    on:change=move |ev| set_recibir_sms.set(event_target_checked(&ev))
                />
                " Quiero recibir un SMS de Macety 🌱"
            </label>

            <button class="btn-primary" type="submit" disabled=is_sending>
                {move || if is_sending() { "Enviando..." } else { "Enviar" }}
            </button>

            {move || match status.get() {
                FormStatus::Sent(text) => view! {
                    <p class="contact-form__status contact-form__status--ok">{text}</p>
                }.into_any(),
                FormStatus::Failed(text) => view! {
                    <p class="contact-form__status contact-form__status--error">{text}</p>
                }.into_any(),
                FormStatus::Idle | FormStatus::Sending => view! { <></> }.into_any(),
            }}
        </form>
    }
}
