use libadwaita as adw;

/// Colors used by the shell's own chrome (launch screen and navigation bar).
/// Web content is styled by the site itself.
pub struct ThemeColors {
    pub bg: &'static str,
    pub bg_dark: &'static str,
    pub bg_highlight: &'static str,
    pub fg: &'static str,
    pub fg_dark: &'static str,
    pub accent: &'static str,
}

pub static DARK: ThemeColors = ThemeColors {
    bg: "#1E1E24",
    bg_dark: "#16161B",
    bg_highlight: "#2C2C35",
    fg: "#E6E6EB",
    fg_dark: "#A9A9B3",
    accent: "#F2A93B",
};

pub static LIGHT: ThemeColors = ThemeColors {
    bg: "#FAFAFA",
    bg_dark: "#EFEFF2",
    bg_highlight: "#DEDEE3",
    fg: "#1F1F24",
    fg_dark: "#5C5C66",
    accent: "#C77A0A",
};

/// Map the `color_scheme` setting to libadwaita's color scheme.
pub fn color_scheme(name: &str) -> adw::ColorScheme {
    match name.to_ascii_lowercase().as_str() {
        "dark" => adw::ColorScheme::ForceDark,
        "light" => adw::ColorScheme::ForceLight,
        "system" | "" => adw::ColorScheme::Default,
        other => {
            log::warn!("Unknown color scheme '{}', following the system", other);
            adw::ColorScheme::Default
        }
    }
}

pub fn get_theme(dark: bool) -> &'static ThemeColors {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

/// Stylesheet for the shell's chrome in `theme`'s colors.
pub fn chrome_css(theme: &ThemeColors) -> String {
    format!(
        r#"
        /* --- Launch screen --- */
        .launch-screen {{
            background-color: {bg};
        }}
        .launch-logo {{
            color: {accent};
        }}
        .launch-title {{
            color: {fg};
            font-size: 32px;
            font-weight: bold;
        }}

        /* --- Navigation bar --- */
        .nav-bar {{
            background-color: {bg_dark};
            border-bottom: 1px solid {bg_highlight};
            padding: 10px 20px;
        }}
        .nav-bar button {{
            color: {fg_dark};
        }}
        .nav-bar button:hover {{
            color: {fg};
        }}
        .nav-sections button:checked {{
            color: {fg};
            background-color: {bg_highlight};
        }}
        .nav-auth button.suggested-action {{
            background-color: {accent};
            color: {bg};
        }}
        "#,
        bg = theme.bg,
        bg_dark = theme.bg_dark,
        bg_highlight = theme.bg_highlight,
        fg = theme.fg,
        fg_dark = theme.fg_dark,
        accent = theme.accent,
    )
}

pub fn load_css(theme: &ThemeColors) -> gtk4::CssProvider {
    let provider = gtk4::CssProvider::new();
    provider.load_from_string(&chrome_css(theme));
    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => log::warn!("No default display; skipping custom CSS"),
    }
    provider
}

/// Swap the palette loaded into `provider`. Used when the system switches
/// between light and dark while the shell is running.
pub fn reload_css(provider: &gtk4::CssProvider, theme: &ThemeColors) {
    provider.load_from_string(&chrome_css(theme));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_css_uses_palette() {
        let css = chrome_css(&DARK);
        assert!(css.contains(DARK.bg));
        assert!(css.contains(DARK.accent));
        assert!(!css.contains(LIGHT.bg));
    }

    #[test]
    fn get_theme_picks_palette_by_darkness() {
        assert_eq!(get_theme(true).bg, DARK.bg);
        assert_eq!(get_theme(false).bg, LIGHT.bg);
    }
}
