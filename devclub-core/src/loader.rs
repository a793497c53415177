use crate::section::{self, Section};
use crate::util;

/// The embedded web-rendering surface. The shell only ever asks it to load a
/// URL; what happens afterwards (rendering, network errors) is the surface's
/// business.
pub trait ContentSurface {
    fn load_uri(&self, uri: &str);
}

impl<S: ContentSurface + ?Sized> ContentSurface for &S {
    fn load_uri(&self, uri: &str) {
        (**self).load_uri(uri)
    }
}

impl<S: ContentSurface + ?Sized> ContentSurface for std::rc::Rc<S> {
    fn load_uri(&self, uri: &str) {
        (**self).load_uri(uri)
    }
}

/// Maps section names to the site's fixed URLs and hands them to a
/// [`ContentSurface`].
pub struct WebsiteLoader<S> {
    surface: S,
}

impl<S: ContentSurface> WebsiteLoader<S> {
    pub fn new(surface: S) -> Self {
        WebsiteLoader { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Load the section called `name`. Unknown or empty names load Home.
    /// Returns the section that was actually loaded.
    pub fn load(&self, name: &str) -> Section {
        let section = match Section::from_name(name) {
            Some(section) => section,
            None => {
                log::debug!("Unknown section '{}', falling back to Home", name);
                Section::Home
            }
        };
        self.load_section(section);
        section
    }

    pub fn load_section(&self, section: Section) {
        let uri = match util::parse_web_url(section.url()) {
            Ok(uri) => uri,
            Err(e) => {
                log::warn!("{}; loading {} instead", e, section::SITE_ROOT);
                section::SITE_ROOT.to_string()
            }
        };
        log::debug!("Loading {} ({})", section, uri);
        self.surface.load_uri(&uri);
    }
}

/// A surface that records every load request. Used by tests across the crate.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub loads: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ContentSurface for RecordingSurface {
    fn load_uri(&self, uri: &str) {
        self.loads.borrow_mut().push(uri.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_services_targets_services_url() {
        let loader = WebsiteLoader::new(RecordingSurface::default());
        assert_eq!(loader.load("Services"), Section::Services);
        assert_eq!(
            *loader.surface().loads.borrow(),
            vec!["https://www.nstsdc.org/services".to_string()]
        );
    }

    #[test]
    fn load_empty_name_targets_home_url() {
        let loader = WebsiteLoader::new(RecordingSurface::default());
        assert_eq!(loader.load(""), Section::Home);
        assert_eq!(
            *loader.surface().loads.borrow(),
            vec!["https://www.nstsdc.org/".to_string()]
        );
    }

    #[test]
    fn load_padded_name_targets_home_url() {
        let loader = WebsiteLoader::new(RecordingSurface::default());
        assert_eq!(loader.load(" Services "), Section::Home);
        assert_eq!(
            *loader.surface().loads.borrow(),
            vec!["https://www.nstsdc.org/".to_string()]
        );
    }

    #[test]
    fn load_section_issues_one_request_per_call() {
        let loader = WebsiteLoader::new(RecordingSurface::default());
        for section in Section::ALL {
            loader.load_section(section);
        }
        let loads = loader.surface().loads.borrow();
        let expected: Vec<String> = Section::ALL.iter().map(|s| s.url().to_string()).collect();
        assert_eq!(*loads, expected);
    }

    #[test]
    fn loader_works_through_shared_surface() {
        let surface = std::rc::Rc::new(RecordingSurface::default());
        let loader = WebsiteLoader::new(surface.clone());
        loader.load("Contact");
        assert_eq!(
            *surface.loads.borrow(),
            vec!["https://www.nstsdc.org/contact".to_string()]
        );
    }
}
