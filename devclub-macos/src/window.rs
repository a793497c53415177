use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSBackingStoreType, NSWindow, NSWindowStyleMask};
use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use devclub_core::settings::Settings;

const WINDOW_TITLE: &str = "DevClub";

/// Create the single application window, centred, sized from `settings`.
pub fn create_window(mtm: MainThreadMarker, settings: &Settings) -> Retained<NSWindow> {
    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(
            f64::from(settings.window_width),
            f64::from(settings.window_height),
        ),
    );
    let style = NSWindowStyleMask::Titled
        | NSWindowStyleMask::Closable
        | NSWindowStyleMask::Miniaturizable
        | NSWindowStyleMask::Resizable;

    let window = unsafe {
        NSWindow::initWithContentRect_styleMask_backing_defer(
            NSWindow::alloc(mtm),
            frame,
            style,
            NSBackingStoreType::Buffered,
            false,
        )
    };
    // The app delegate owns the window; AppKit must not release it on close.
    unsafe { window.setReleasedWhenClosed(false) };
    window.setTitle(&NSString::from_str(WINDOW_TITLE));
    window.center();
    window
}

/// Bounds of the window's content area.
pub fn content_bounds(window: &NSWindow) -> NSRect {
    window
        .contentView()
        .map(|view| view.bounds())
        .unwrap_or(NSRect::ZERO)
}
