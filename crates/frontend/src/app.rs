use crate::layout::global_context::AppGlobalContext;
use crate::layout::{tabs, Shell};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    // Provide the navigator state to the whole app via context.
    provide_context(ctx);

    ctx.init_router_integration();
    tabs::input::install(ctx);

    view! {
        <Shell />
    }
}
