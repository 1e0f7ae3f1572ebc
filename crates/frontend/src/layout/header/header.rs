use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::Section;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ctx.select(section);
            };
            view! {
                <a
                    href=format!("?seccion={}", section.key())
                    class="tab-link"
                    class:active=move || ctx.active.get() == section
                    data-tab=section.key()
                    on:click=on_click
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"🌱 Naturafy"</span>
                <nav class="header__nav">{links}</nav>
            </div>
        </header>
    }
}
