//! Перевод сырого ввода (колесо, свайп, клавиши) в намерение навигации.

pub const WHEEL_THRESHOLD: f64 = 30.0;
pub const SWIPE_THRESHOLD: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Prev,
    First,
    Last,
}

pub fn from_wheel(delta_y: f64) -> Option<Intent> {
    if delta_y >= WHEEL_THRESHOLD {
        Some(Intent::Next)
    } else if delta_y <= -WHEEL_THRESHOLD {
        Some(Intent::Prev)
    } else {
        None
    }
}

/// Свайп вверх (палец ушёл вверх) = следующий раздел
pub fn from_swipe(start_y: i32, end_y: i32) -> Option<Intent> {
    let delta = start_y - end_y;
    if delta >= SWIPE_THRESHOLD {
        Some(Intent::Next)
    } else if delta <= -SWIPE_THRESHOLD {
        Some(Intent::Prev)
    } else {
        None
    }
}

/// `key` — значение `KeyboardEvent.key`
pub fn from_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowDown" | "PageDown" | " " => Some(Intent::Next),
        "ArrowUp" | "PageUp" => Some(Intent::Prev),
        "Home" => Some(Intent::First),
        "End" => Some(Intent::Last),
        _ => None,
    }
}

/// Элементы, которые сами обрабатывают клавиши и прокрутку: поля формы,
/// кнопки (Space нажимает кнопку) и contenteditable
pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT" | "BUTTON"
        )
}
