mod launch_screen;
mod main_screen;
mod nav_bar;
mod theme;
mod web_surface;
mod window;

use libadwaita as adw;
use libadwaita::prelude::*;

const APP_ID: &str = "org.nstsdc.DevClub";

fn main() {
    env_logger::init();
    log::info!("DevClub starting");

    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_startup(|_app| {
        let settings = devclub_core::settings::load();
        let style_manager = adw::StyleManager::default();
        style_manager.set_color_scheme(theme::color_scheme(&settings.color_scheme));
        let provider = theme::load_css(theme::get_theme(style_manager.is_dark()));
        style_manager.connect_dark_notify(move |sm| {
            log::debug!("System appearance changed (dark: {})", sm.is_dark());
            theme::reload_css(&provider, theme::get_theme(sm.is_dark()));
        });
    });

    app.connect_activate(move |app| {
        window::build_window(app);
    });

    app.run();
}
