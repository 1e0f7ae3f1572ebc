use std::collections::HashMap;

use super::sections::Section;

/// Мемо загруженных фрагментов. Без вытеснения: разделов всего пять.
#[derive(Debug, Clone, Default)]
pub struct FragmentCache {
    entries: HashMap<Section, String>,
}

impl FragmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        self.entries.get(&section).map(String::as_str)
    }

    pub fn insert(&mut self, section: Section, html: String) {
        self.entries.insert(section, html);
    }
}
