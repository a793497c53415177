/// Root of the embedded website. Every section URL lives under it.
pub const SITE_ROOT: &str = "https://www.nstsdc.org/";

/// A named destination within the embedded website.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// All sections in navigation-bar order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Label shown on the segmented control. Also the name accepted by
    /// [`Section::from_name`].
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Section::Home => "https://www.nstsdc.org/",
            Section::About => "https://www.nstsdc.org/about",
            Section::Services => "https://www.nstsdc.org/services",
            Section::Contact => "https://www.nstsdc.org/contact",
        }
    }

    /// Look up a section by its label. Matching is exact, so `"about"` or
    /// `" About"` are not sections.
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label() == name)
    }

    /// Position of this section in [`Section::ALL`], i.e. its segment index.
    pub fn index(self) -> usize {
        self as usize
    }

}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a section name to its URL, falling back to the Home URL for
/// empty or unrecognized names.
#[must_use]
pub fn resolve_url(name: &str) -> &'static str {
    Section::from_name(name).unwrap_or_default().url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_url_known_sections() {
        assert_eq!(resolve_url("Home"), "https://www.nstsdc.org/");
        assert_eq!(resolve_url("About"), "https://www.nstsdc.org/about");
        assert_eq!(resolve_url("Services"), "https://www.nstsdc.org/services");
        assert_eq!(resolve_url("Contact"), "https://www.nstsdc.org/contact");
    }

    #[test]
    fn resolve_url_empty_falls_back_to_home() {
        assert_eq!(resolve_url(""), "https://www.nstsdc.org/");
    }

    #[test]
    fn resolve_url_unknown_falls_back_to_home() {
        assert_eq!(resolve_url("Leaderboard"), SITE_ROOT);
        assert_eq!(resolve_url("services"), SITE_ROOT);
    }

    #[test]
    fn resolve_url_padded_name_falls_back_to_home() {
        assert_eq!(resolve_url("  About\n"), SITE_ROOT);
        assert_eq!(resolve_url(" About"), SITE_ROOT);
    }

    #[test]
    fn every_section_url_is_under_site_root() {
        for section in Section::ALL {
            assert!(section.url().starts_with(SITE_ROOT), "{section}");
            assert!(url::Url::parse(section.url()).is_ok());
        }
    }

    #[test]
    fn label_round_trips_through_from_name() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.label()), Some(section));
        }
    }

    #[test]
    fn segment_indices_follow_navigation_order() {
        let indices: Vec<usize> = Section::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
