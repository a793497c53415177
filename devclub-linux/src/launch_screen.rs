use std::cell::RefCell;
use std::time::Duration;

use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

use devclub_core::screen::{Screen, ScreenKind};

const STACK_NAME: &str = "launch";
const LOGO_ICON: &str = "applications-internet-symbolic";
const LOGO_SIZE: i32 = 100;

/// Branding splash: logo plus a title that fades in.
pub struct LaunchScreen {
    pub widget: gtk4::Box,
    stack: gtk4::Stack,
    title_label: gtk4::Label,
    fade: RefCell<Option<adw::TimedAnimation>>,
}

impl LaunchScreen {
    pub fn new(stack: &gtk4::Stack) -> Self {
        let widget = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        widget.add_css_class("launch-screen");
        widget.set_hexpand(true);
        widget.set_vexpand(true);

        let content = gtk4::Box::new(gtk4::Orientation::Vertical, 20);
        content.set_valign(gtk4::Align::Center);
        content.set_vexpand(true);
        content.set_margin_start(20);
        content.set_margin_end(20);
        // Sits slightly above centre, leaving room for the title underneath.
        content.set_margin_bottom(100);

        let logo = gtk4::Image::from_icon_name(LOGO_ICON);
        logo.set_pixel_size(LOGO_SIZE);
        logo.add_css_class("launch-logo");

        let title_label = gtk4::Label::new(Some("DevClub"));
        title_label.add_css_class("launch-title");
        title_label.set_justify(gtk4::Justification::Center);
        title_label.set_opacity(0.0);

        content.append(&logo);
        content.append(&title_label);
        widget.append(&content);
        stack.add_named(&widget, Some(STACK_NAME));

        LaunchScreen {
            widget,
            stack: stack.clone(),
            title_label,
            fade: RefCell::new(None),
        }
    }

    /// Fade the title from transparent to opaque over `fade`.
    pub fn reveal_title(&self, fade: Duration) {
        let duration_ms = u32::try_from(fade.as_millis()).unwrap_or(u32::MAX);
        let target = adw::PropertyAnimationTarget::new(&self.title_label, "opacity");
        let animation =
            adw::TimedAnimation::new(&self.title_label, 0.0, 1.0, duration_ms, target);
        animation.set_easing(adw::Easing::EaseInOutCubic);
        animation.play();
        *self.fade.borrow_mut() = Some(animation);
    }
}

impl Screen for LaunchScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Launch
    }

    fn present(&self) {
        self.stack.set_visible_child(&self.widget);
    }

    fn dismiss(&self) {
        if let Some(animation) = self.fade.borrow_mut().take() {
            animation.skip();
        }
        // Leave the page in place until the stack's crossfade has finished.
        let stack = self.stack.clone();
        let widget = self.widget.clone();
        let delay = Duration::from_millis(u64::from(stack.transition_duration()));
        glib::timeout_add_local_once(delay, move || {
            if widget.parent().is_some() {
                stack.remove(&widget);
            }
        });
    }
}
