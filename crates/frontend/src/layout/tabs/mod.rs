//! Tab navigation module
//!
//! Содержит:
//! - `sections` - упорядоченный список разделов и их фрагментов
//! - `cursor` - курсор текущего раздела с защитой от повторного перехода
//! - `cache` - мемо загруженных фрагментов
//! - `gestures` - колесо / свайп / клавиши → намерение навигации
//! - `loader` - загрузка фрагментов по сети
//! - `input` - глобальные обработчики ввода на window
//! - `page` - компонент TabPage с контейнером контента

pub mod cache;
pub mod cursor;
pub mod gestures;
pub mod input;
pub mod loader;
pub mod page;
pub mod sections;

pub use page::TabPage;
pub use sections::Section;
