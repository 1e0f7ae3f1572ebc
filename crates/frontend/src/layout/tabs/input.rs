//! Глобальные обработчики ввода: колесо, клавиатура, свайп.

use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::gestures;
use crate::layout::global_context::AppGlobalContext;

/// Вешает обработчики на window. Вызывается один раз из корня приложения.
pub fn install(ctx: AppGlobalContext) {
    let _ = window_event_listener(leptos::ev::wheel, move |ev: web_sys::WheelEvent| {
        // Прокрутка внутри textarea остаётся в поле
        if targets_editable(&ev) {
            return;
        }
        if let Some(intent) = gestures::from_wheel(ev.delta_y()) {
            ctx.navigate(intent);
        }
    });

    let _ = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if targets_editable(&ev) {
            return;
        }

        if let Some(intent) = gestures::from_key(&ev.key()) {
            // Браузер не должен параллельно прокручивать страницу,
            // но только если переход действительно начался
            if ctx.navigate(intent) {
                ev.prevent_default();
            }
        }
    });

    let touch_start_y = StoredValue::new(None::<i32>);

    let _ = window_event_listener(leptos::ev::touchstart, move |ev: web_sys::TouchEvent| {
        let y = ev.touches().get(0).map(|t| t.client_y());
        touch_start_y.set_value(y);
    });

    let _ = window_event_listener(leptos::ev::touchend, move |ev: web_sys::TouchEvent| {
        let start = touch_start_y.get_value();
        touch_start_y.set_value(None);

        let end = ev.changed_touches().get(0).map(|t| t.client_y());
        if let (Some(start), Some(end)) = (start, end) {
            if let Some(intent) = gestures::from_swipe(start, end) {
                ctx.navigate(intent);
            }
        }
    });
}

fn targets_editable(ev: &web_sys::Event) -> bool {
    let Some(el) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return false;
    };
    let content_editable = el
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|html| html.is_content_editable())
        .unwrap_or(false);
    gestures::is_editable_target(&el.tag_name(), content_editable)
}
