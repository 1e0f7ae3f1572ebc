use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::cache::FragmentCache;
use crate::layout::tabs::cursor::{SectionCursor, TRANSITION_MS};
use crate::layout::tabs::gestures::Intent;
use crate::layout::tabs::loader::fetch_fragment;
use crate::layout::tabs::Section;

/// Параметр URL с ключом раздела: `?seccion=recursos`
const SECTION_PARAM: &str = "seccion";

/// Задержка перед проявлением нового контента (fade-in)
const FADE_IN_MS: u32 = 50;

/// Что сейчас показывает контейнер `#tab-container`
#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    /// До первой загрузки
    Empty,
    Loading,
    Ready(String),
    Failed(Section),
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub view: RwSignal<TabView>,
    /// false на время fade-in (opacity 0)
    pub visible: RwSignal<bool>,
    cursor: StoredValue<SectionCursor>,
    cache: StoredValue<FragmentCache>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            view: RwSignal::new(TabView::Empty),
            visible: RwSignal::new(true),
            cursor: StoredValue::new(SectionCursor::new(
                Section::ALL.len(),
                Section::default().index(),
            )),
            cache: StoredValue::new(FragmentCache::new()),
        }
    }

    /// Читает начальный раздел из `?seccion=` и зеркалит активный раздел
    /// обратно в URL через history.replaceState
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let initial = match params.get(SECTION_PARAM) {
            Some(key) => Section::from_key(key).unwrap_or_else(|| {
                log::error!("Tab file not found for: {}", key);
                Section::default()
            }),
            None => Section::default(),
        };

        self.cursor
            .set_value(SectionCursor::new(Section::ALL.len(), initial.index()));
        self.load_fragment(initial, true);

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                SECTION_PARAM.to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Клик по ссылке раздела
    pub fn select(&self, section: Section) {
        let mut started = None;
        self.cursor
            .update_value(|cursor| started = cursor.goto(section.index()));
        match started.and_then(Section::at) {
            Some(target) => self.start_transition(target),
            None => log::debug!("select '{}' ignored", section.key()),
        }
    }

    /// Колесо / свайп / клавиатура. Возвращает true, если переход начался.
    pub fn navigate(&self, intent: Intent) -> bool {
        let mut started = None;
        self.cursor.update_value(|cursor| {
            started = match intent {
                Intent::Next => cursor.next(),
                Intent::Prev => cursor.prev(),
                Intent::First => cursor.first(),
                Intent::Last => cursor.last(),
            }
        });
        match started.and_then(Section::at) {
            Some(target) => {
                self.start_transition(target);
                true
            }
            None => false,
        }
    }

    fn start_transition(&self, section: Section) {
        leptos::logging::log!("➡️ transition to '{}'", section.key());
        self.load_fragment(section, false);
        scroll_to_top();

        let cursor = self.cursor;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TRANSITION_MS).await;
            cursor.update_value(|c| c.finish_transition());
        });
    }

    /// Показывает фрагмент раздела: из кэша или загрузив по сети
    pub fn load_fragment(&self, section: Section, is_initial: bool) {
        self.active.set(section);

        let cached = self
            .cache
            .with_value(|cache| cache.get(section).map(str::to_string));
        if let Some(html) = cached {
            self.display(html, is_initial);
            return;
        }

        if !is_initial {
            self.view.set(TabView::Loading);
        }

        let this = *self;
        spawn_local(async move {
            match fetch_fragment(section).await {
                Ok(html) => {
                    this.cache
                        .update_value(|cache| cache.insert(section, html.clone()));
                    // Пока шла загрузка, пользователь мог уйти в другой раздел
                    if this.active.get_untracked() == section {
                        this.display(html, is_initial);
                    }
                }
                Err(e) => {
                    log::error!("Error loading tab content: {}", e);
                    if this.active.get_untracked() == section {
                        this.view.set(TabView::Failed(section));
                    }
                }
            }
        });
    }

    fn display(&self, html: String, is_initial: bool) {
        self.view.set(TabView::Ready(html));
        if is_initial {
            return;
        }

        self.visible.set(false);
        let visible = self.visible;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(FADE_IN_MS).await;
            visible.set(true);
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_to_top() {
    if let Some(w) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}
