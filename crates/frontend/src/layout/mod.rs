pub mod global_context;
pub mod header;
pub mod tabs;

use leptos::prelude::*;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |   Header (логотип + ссылки разделов)     |
/// +------------------------------------------+
/// |   #tab-container (фрагмент раздела)      |
/// +------------------------------------------+
/// |   footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <tabs::TabPage />
            <footer class="footer">
                <span>"© Naturafy · Cuidado inteligente para tus plantas 🍃"</span>
            </footer>
        </div>
    }
}
