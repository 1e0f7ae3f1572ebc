//! Sections - единственный источник правды для списка разделов сайта.
//!
//! Порядок в `Section::ALL` задаёт порядок листания (колесо, свайп, клавиатура).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    Funcionalidades,
    Comunidad,
    Recursos,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Funcionalidades,
        Section::Comunidad,
        Section::Recursos,
        Section::Contact,
    ];

    /// Ключ раздела (атрибут `data-tab`, параметр `?seccion=`)
    pub fn key(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Funcionalidades => "funcionalidades",
            Section::Comunidad => "comunidad",
            Section::Recursos => "recursos",
            Section::Contact => "contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Файл фрагмента в каталоге `tabs/`
    pub fn fragment_file(self) -> &'static str {
        match self {
            Section::Hero => "inicio.html",
            Section::Funcionalidades => "productos.html",
            Section::Comunidad => "comunidad.html",
            Section::Recursos => "recursos.html",
            Section::Contact => "contacto.html",
        }
    }

    pub fn fragment_url(self) -> String {
        format!("./tabs/{}", self.fragment_file())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Inicio",
            Section::Funcionalidades => "Funcionalidades",
            Section::Comunidad => "Comunidad",
            Section::Recursos => "Recursos",
            Section::Contact => "Contacto",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn at(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip_and_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(Section::from_key(section.key()), Some(*section));
            assert_eq!(section.index(), i);
            assert_eq!(Section::at(i), Some(*section));
        }
        assert_eq!(Section::at(Section::ALL.len()), None);
    }

    #[test]
    fn test_fragment_mapping() {
        assert_eq!(Section::Hero.fragment_url(), "./tabs/inicio.html");
        assert_eq!(Section::Funcionalidades.fragment_file(), "productos.html");
        assert_eq!(Section::Contact.fragment_file(), "contacto.html");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Section::from_key("blog"), None);
        assert_eq!(Section::from_key(""), None);
        assert_eq!(Section::default(), Section::Hero);
    }
}
