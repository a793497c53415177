use std::time::Duration;

use objc2::rc::Retained;
use objc2::{class, msg_send, MainThreadMarker, Message};
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSFont, NSImage, NSImageScaling, NSImageView, NSTextAlignment,
    NSTextField, NSView, NSWindow,
};
use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use devclub_core::screen::{Screen, ScreenKind};

use crate::window::content_bounds;

const LOGO_SYMBOL: &str = "bitcoinsign.circle.fill";
const LOGO_SIZE: f64 = 100.0;
const TITLE_HEIGHT: f64 = 40.0;
const TITLE_GAP: f64 = 20.0;
const SIDE_MARGIN: f64 = 20.0;

pub struct LaunchScreen {
    window: Retained<NSWindow>,
    view: Retained<NSView>,
    title: Retained<NSTextField>,
}

impl LaunchScreen {
    pub fn new(mtm: MainThreadMarker, window: &NSWindow) -> Self {
        let bounds = content_bounds(window);
        let mid_x = bounds.size.width / 2.0;
        let mid_y = bounds.size.height / 2.0;

        let view = NSView::initWithFrame(NSView::alloc(mtm), bounds);
        view.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewHeightSizable,
        );
        let floating = NSAutoresizingMaskOptions::ViewMinXMargin
            | NSAutoresizingMaskOptions::ViewMaxXMargin
            | NSAutoresizingMaskOptions::ViewMinYMargin
            | NSAutoresizingMaskOptions::ViewMaxYMargin;

        // Logo centre sits 50pt above the view's centre; the title hangs
        // below it. AppKit's origin is bottom-left.
        let logo_frame = NSRect::new(
            NSPoint::new(mid_x - LOGO_SIZE / 2.0, mid_y),
            NSSize::new(LOGO_SIZE, LOGO_SIZE),
        );
        let logo = NSImageView::initWithFrame(NSImageView::alloc(mtm), logo_frame);
        unsafe {
            logo.setImageScaling(NSImageScaling::ScaleProportionallyUpOrDown);
            if let Some(image) = NSImage::imageWithSystemSymbolName_accessibilityDescription(
                &NSString::from_str(LOGO_SYMBOL),
                None,
            ) {
                logo.setImage(Some(&image));
            }
        }
        logo.setAutoresizingMask(floating);

        let title_frame = NSRect::new(
            NSPoint::new(SIDE_MARGIN, mid_y - TITLE_GAP - TITLE_HEIGHT),
            NSSize::new(bounds.size.width - 2.0 * SIDE_MARGIN, TITLE_HEIGHT),
        );
        let title = NSTextField::labelWithString(&NSString::from_str("DevClub"), mtm);
        title.setFrame(title_frame);
        title.setFont(Some(&NSFont::boldSystemFontOfSize(32.0)));
        title.setAlignment(NSTextAlignment::Center);
        title.setAlphaValue(0.0);
        title.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewMinYMargin
                | NSAutoresizingMaskOptions::ViewMaxYMargin,
        );

        view.addSubview(&logo);
        view.addSubview(&title);

        LaunchScreen {
            window: window.retain(),
            view,
            title,
        }
    }

    /// Fade the title in over `fade` using the implicit animator proxy.
    pub fn reveal_title(&self, fade: Duration) {
        unsafe {
            let _: () = msg_send![class!(NSAnimationContext), beginGrouping];
            let context: Retained<objc2::runtime::AnyObject> =
                msg_send![class!(NSAnimationContext), currentContext];
            let _: () = msg_send![&*context, setDuration: fade.as_secs_f64()];
            let animator: Retained<NSTextField> = msg_send![&*self.title, animator];
            animator.setAlphaValue(1.0);
            let _: () = msg_send![class!(NSAnimationContext), endGrouping];
        }
    }
}

impl Screen for LaunchScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Launch
    }

    fn present(&self) {
        self.window.setContentView(Some(&self.view));
    }

    fn dismiss(&self) {
        self.view.removeFromSuperview();
    }
}
