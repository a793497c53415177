use std::rc::Rc;

use gtk4::prelude::*;

use devclub_core::loader::WebsiteLoader;
use devclub_core::navigation::NavigationController;
use devclub_core::screen::{Screen, ScreenKind};
use devclub_core::section::Section;
use devclub_core::settings::Settings;

use crate::nav_bar;
use crate::web_surface::WebSurface;

const STACK_NAME: &str = "main";

/// Navigation bar above the embedded site.
pub struct MainScreen {
    pub widget: gtk4::Box,
    stack: gtk4::Stack,
}

impl MainScreen {
    pub fn new(stack: &gtk4::Stack, settings: &Settings) -> Self {
        let surface = WebSurface::new(settings);
        let controller = Rc::new(NavigationController::new(WebsiteLoader::new(
            surface.clone(),
        )));

        let widget = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        widget.append(&nav_bar::build_nav_bar(
            settings.nav_layout,
            controller.clone(),
        ));
        widget.append(surface.widget());

        controller.loader().load_section(Section::Home);
        stack.add_named(&widget, Some(STACK_NAME));

        MainScreen {
            widget,
            stack: stack.clone(),
        }
    }
}

impl Screen for MainScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Main
    }

    fn present(&self) {
        self.stack.set_visible_child(&self.widget);
    }

    fn dismiss(&self) {
        self.stack.remove(&self.widget);
    }
}
