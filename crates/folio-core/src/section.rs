use std::fmt;

/// Named regions of the portfolio page, in document order.
///
/// The order of the variants is the order the sections are laid out in and
/// the order the scroll tracker iterates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Stable identifier used in logs and content files.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// Look up a section by its stable identifier.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_document_order() {
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[5], Section::Contact);
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_id_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
    }
}
