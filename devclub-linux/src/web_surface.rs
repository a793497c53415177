use gtk4::prelude::*;
use webkit6::prelude::*;

use devclub_core::loader::ContentSurface;
use devclub_core::section::SITE_ROOT;
use devclub_core::settings::Settings;
use devclub_core::util;

/// The WebKitGTK view that renders the site. Cheap to clone; clones share the
/// same underlying widget.
#[derive(Clone)]
pub struct WebSurface {
    webview: webkit6::WebView,
}

impl WebSurface {
    pub fn new(settings: &Settings) -> Self {
        let webview = webkit6::WebView::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        if let Some(wk_settings) = webkit6::prelude::WebViewExt::settings(&webview) {
            wk_settings.set_enable_javascript(settings.javascript_enabled);
            wk_settings.set_enable_developer_extras(settings.developer_extras);
        }

        webview.connect_decide_policy(handle_new_window);
        webview.connect_load_changed(|webview, event| {
            if event == webkit6::LoadEvent::Finished {
                log::debug!(
                    "Finished loading {}",
                    webview.uri().map(|u| u.to_string()).unwrap_or_default()
                );
            }
        });

        WebSurface { webview }
    }

    pub fn widget(&self) -> &webkit6::WebView {
        &self.webview
    }
}

impl ContentSurface for WebSurface {
    fn load_uri(&self, uri: &str) {
        self.webview.load_uri(uri);
    }
}

/// Links that ask for a new window (`target="_blank"`) stay in this view when
/// they point into the site and go to the default browser otherwise.
fn handle_new_window(
    webview: &webkit6::WebView,
    decision: &webkit6::PolicyDecision,
    decision_type: webkit6::PolicyDecisionType,
) -> bool {
    if decision_type != webkit6::PolicyDecisionType::NewWindowAction {
        return false;
    }
    let Some(navigation) = decision.downcast_ref::<webkit6::NavigationPolicyDecision>() else {
        return false;
    };
    let Some(mut action) = navigation.navigation_action() else {
        return false;
    };
    let Some(uri) = action.request().and_then(|request| request.uri()) else {
        return false;
    };

    decision.ignore();
    if util::is_within_site(&uri, SITE_ROOT) {
        webview.load_uri(&uri);
    } else if let Err(e) = open::that(uri.as_str()) {
        log::warn!("Failed to open {} externally: {}", uri, e);
    }
    true
}
