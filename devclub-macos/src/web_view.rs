use objc2::rc::Retained;
use objc2::runtime::NSObjectProtocol;
use objc2::{msg_send, sel, MainThreadMarker};
use objc2_foundation::{NSRect, NSString, NSURLRequest, NSURL};
use objc2_web_kit::{WKWebView, WKWebViewConfiguration};

use devclub_core::loader::ContentSurface;
use devclub_core::settings::Settings;

/// WKWebView rendering the site.
pub struct WkSurface {
    webview: Retained<WKWebView>,
}

impl WkSurface {
    pub fn new(mtm: MainThreadMarker, frame: NSRect, settings: &Settings) -> Self {
        let webview = unsafe {
            let configuration = WKWebViewConfiguration::new(mtm);
            let preferences = configuration.defaultWebpagePreferences();
            preferences.setAllowsContentJavaScript(settings.javascript_enabled);
            WKWebView::initWithFrame_configuration(WKWebView::alloc(mtm), frame, &configuration)
        };

        // `inspectable` only exists on macOS 13.3 and later.
        if settings.developer_extras && webview.respondsToSelector(sel!(setInspectable:)) {
            let _: () = unsafe { msg_send![&*webview, setInspectable: true] };
        }

        WkSurface { webview }
    }

    pub fn view(&self) -> &WKWebView {
        &self.webview
    }
}

impl ContentSurface for WkSurface {
    fn load_uri(&self, uri: &str) {
        let Some(url) = (unsafe { NSURL::URLWithString(&NSString::from_str(uri)) }) else {
            log::warn!("AppKit rejected URL {}", uri);
            return;
        };
        let request = unsafe { NSURLRequest::requestWithURL(&url) };
        unsafe { self.webview.loadRequest(&request) };
    }
}
