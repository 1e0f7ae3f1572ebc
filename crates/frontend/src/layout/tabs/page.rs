//! TabPage component - контейнер `#tab-container` с контентом раздела
//!
//! Отвечает за:
//! - Показ загрузки / HTML фрагмента / блока ошибки
//! - Fade-in через opacity
//! - Форму контакта под фрагментом раздела `contact`

use crate::layout::global_context::{AppGlobalContext, TabView};
use crate::layout::tabs::Section;
use crate::usecases::u101_contact_intake::view::ContactForm;
use leptos::prelude::*;

#[component]
pub fn TabPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let content = move || match ctx.view.get() {
        TabView::Empty => view! { <></> }.into_any(),
        TabView::Loading => view! { <div class="loading">"Cargando..."</div> }.into_any(),
        TabView::Ready(html) => view! { <div class="tab-content" inner_html=html></div> }.into_any(),
        TabView::Failed(section) => view! { <ErrorMessage section=section /> }.into_any(),
    };

    let show_form = move || {
        ctx.active.get() == Section::Contact && matches!(ctx.view.get(), TabView::Ready(_))
    };

    view! {
        <main
            id="tab-container"
            data-zone="center"
            style:opacity=move || if ctx.visible.get() { "1" } else { "0" }
        >
            {content}
            <Show when=show_form>
                <ContactForm />
            </Show>
        </main>
    }
}

#[component]
fn ErrorMessage(section: Section) -> impl IntoView {
    let reload = move |_| {
        if let Some(w) = web_sys::window() {
            let _ = w.location().reload();
        }
    };

    view! {
        <div class="error-message">
            <h2>"Error al cargar el contenido"</h2>
            <p>
                "No se pudo cargar la pestaña \"" {section.key()}
                "\". Por favor, intenta de nuevo."
            </p>
            <button class="btn-primary" on:click=reload>"Recargar página"</button>
        </div>
    }
}
