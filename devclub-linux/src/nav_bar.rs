use std::rc::Rc;

use gtk4::prelude::*;

use devclub_core::navigation::{Command, NavigationController};
use devclub_core::section::Section;
use devclub_core::settings::NavLayout;

use crate::web_surface::WebSurface;

/// Build the navigation bar shown above the web view.
///
/// With [`NavLayout::Segmented`] the bar has two rows: a segmented control
/// selecting the site section, and the command buttons. [`NavLayout::ButtonRow`]
/// keeps only the command buttons.
pub fn build_nav_bar(
    layout: NavLayout,
    controller: Rc<NavigationController<WebSurface>>,
) -> gtk4::Box {
    let widget = gtk4::Box::new(gtk4::Orientation::Vertical, 10);
    widget.add_css_class("nav-bar");

    if layout == NavLayout::Segmented {
        widget.append(&build_section_control(controller.clone()));
    }
    widget.append(&build_command_row(controller));
    widget
}

fn build_section_control(controller: Rc<NavigationController<WebSurface>>) -> gtk4::Box {
    let segments = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    segments.add_css_class("linked");
    segments.add_css_class("nav-sections");
    segments.set_homogeneous(true);
    segments.set_hexpand(true);

    let mut first: Option<gtk4::ToggleButton> = None;
    for section in Section::ALL {
        let button = gtk4::ToggleButton::with_label(section.label());
        match &first {
            Some(leader) => button.set_group(Some(leader)),
            None => first = Some(button.clone()),
        }
        // Home is loaded when the main screen is built, so select it before
        // wiring up the handler.
        button.set_active(section == Section::Home);

        let controller = controller.clone();
        button.connect_toggled(move |button| {
            if !button.is_active() {
                return;
            }
            let label = button.label().map(|l| l.to_string()).unwrap_or_default();
            controller.select_section(&label);
        });
        segments.append(&button);
    }
    segments
}

fn build_command_row(controller: Rc<NavigationController<WebSurface>>) -> gtk4::Box {
    let row = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);

    for command in Command::NAVIGATION {
        row.append(&command_button(command, &controller));
    }

    let spacer = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    row.append(&spacer);

    let auth = gtk4::Box::new(gtk4::Orientation::Horizontal, 10);
    auth.add_css_class("nav-auth");
    for command in Command::AUTH {
        let button = command_button(command, &controller);
        if command == Command::SignUp {
            button.add_css_class("suggested-action");
        }
        auth.append(&button);
    }
    row.append(&auth);
    row
}

fn command_button(
    command: Command,
    controller: &Rc<NavigationController<WebSurface>>,
) -> gtk4::Button {
    let button = gtk4::Button::with_label(command.label());
    let controller = controller.clone();
    button.connect_clicked(move |_| {
        controller.activate(command);
    });
    button
}
