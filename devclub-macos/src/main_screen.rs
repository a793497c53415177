use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject, NSObjectProtocol};
use objc2::{define_class, msg_send, sel, DefinedClass, MainThreadMarker, MainThreadOnly, Message};
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSButton, NSSegmentSwitchTracking, NSSegmentedControl, NSView,
    NSWindow,
};
use objc2_foundation::{NSArray, NSPoint, NSRect, NSSize, NSString};

use devclub_core::loader::WebsiteLoader;
use devclub_core::navigation::{Command, NavigationController};
use devclub_core::screen::{Screen, ScreenKind};
use devclub_core::section::Section;
use devclub_core::settings::{NavLayout, Settings};

use crate::web_view::WkSurface;
use crate::window::content_bounds;

const NAV_BAR_HEIGHT: f64 = 100.0;
const SEGMENT_HEIGHT: f64 = 24.0;
const BUTTON_HEIGHT: f64 = 32.0;
const PADDING: f64 = 10.0;
const SIDE_MARGIN: f64 = 20.0;

pub struct NavTargetIvars {
    controller: NavigationController<WkSurface>,
}

define_class!(
    /// Action target for every navigation-bar control.
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "DevClubNavTarget"]
    #[ivars = NavTargetIvars]
    pub struct NavTarget;

    unsafe impl NSObjectProtocol for NavTarget {}

    impl NavTarget {
        #[unsafe(method(commandPressed:))]
        fn command_pressed(&self, sender: &NSButton) {
            let tag = sender.tag();
            match Command::from_tag(tag) {
                Some(command) => {
                    self.ivars().controller.activate(command);
                }
                None => log::warn!("Button with unknown command tag {}", tag),
            }
        }

        #[unsafe(method(segmentChanged:))]
        fn segment_changed(&self, sender: &NSSegmentedControl) {
            let label = sender
                .labelForSegment(sender.selectedSegment())
                .map(|label| label.to_string())
                .unwrap_or_default();
            self.ivars().controller.select_section(&label);
        }
    }
);

impl NavTarget {
    fn new(mtm: MainThreadMarker, controller: NavigationController<WkSurface>) -> Retained<Self> {
        let this = Self::alloc(mtm).set_ivars(NavTargetIvars { controller });
        unsafe { msg_send![super(this), init] }
    }
}

/// Navigation bar above the embedded site.
pub struct MainScreen {
    window: Retained<NSWindow>,
    view: Retained<NSView>,
    #[allow(dead_code)] // Controls hold their target weakly
    target: Retained<NavTarget>,
}

impl MainScreen {
    pub fn new(mtm: MainThreadMarker, window: &NSWindow, settings: &Settings) -> Self {
        let bounds = content_bounds(window);
        let width = bounds.size.width;
        let height = bounds.size.height;

        let view = NSView::initWithFrame(NSView::alloc(mtm), bounds);
        view.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewHeightSizable,
        );

        let web_frame = NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(width, (height - NAV_BAR_HEIGHT).max(0.0)),
        );
        let surface = WkSurface::new(mtm, web_frame, settings);
        surface.view().setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewHeightSizable,
        );
        view.addSubview(surface.view());

        let target = NavTarget::new(
            mtm,
            NavigationController::new(WebsiteLoader::new(surface)),
        );

        let nav_bar = build_nav_bar(mtm, width, height, settings.nav_layout, &target);
        view.addSubview(&nav_bar);

        target.ivars().controller.loader().load_section(Section::Home);

        MainScreen {
            window: window.retain(),
            view,
            target,
        }
    }
}

impl Screen for MainScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Main
    }

    fn present(&self) {
        self.window.setContentView(Some(&self.view));
    }

    fn dismiss(&self) {
        self.view.removeFromSuperview();
    }
}

fn build_nav_bar(
    mtm: MainThreadMarker,
    width: f64,
    height: f64,
    layout: NavLayout,
    target: &NavTarget,
) -> Retained<NSView> {
    let target_obj: &AnyObject = target;

    let frame = NSRect::new(
        NSPoint::new(0.0, height - NAV_BAR_HEIGHT),
        NSSize::new(width, NAV_BAR_HEIGHT),
    );
    let nav_bar = NSView::initWithFrame(NSView::alloc(mtm), frame);
    nav_bar.setAutoresizingMask(
        NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewMinYMargin,
    );

    // Rows are laid out top-down from the bar's upper edge.
    let mut top = NAV_BAR_HEIGHT - PADDING;

    if layout == NavLayout::Segmented {
        let labels: Vec<Retained<NSString>> = Section::ALL
            .iter()
            .map(|section| NSString::from_str(section.label()))
            .collect();
        let labels = NSArray::from_retained_slice(&labels);
        let segments = unsafe {
            NSSegmentedControl::segmentedControlWithLabels_trackingMode_target_action(
                &labels,
                NSSegmentSwitchTracking::SelectOne,
                Some(target_obj),
                Some(sel!(segmentChanged:)),
                mtm,
            )
        };
        segments.setSelectedSegment(Section::Home.index() as isize);
        segments.setFrame(NSRect::new(
            NSPoint::new(SIDE_MARGIN, top - SEGMENT_HEIGHT),
            NSSize::new(width - 2.0 * SIDE_MARGIN, SEGMENT_HEIGHT),
        ));
        segments.setAutoresizingMask(NSAutoresizingMaskOptions::ViewWidthSizable);
        nav_bar.addSubview(&segments);
        top -= SEGMENT_HEIGHT + PADDING;
    } else {
        top = (NAV_BAR_HEIGHT + BUTTON_HEIGHT) / 2.0;
    }

    let row_y = top - BUTTON_HEIGHT;

    let mut x = SIDE_MARGIN;
    for command in Command::NAVIGATION {
        let button = command_button(mtm, command, target_obj);
        let size = button.frame().size;
        button.setFrame(NSRect::new(
            NSPoint::new(x, row_y),
            NSSize::new(size.width, BUTTON_HEIGHT),
        ));
        nav_bar.addSubview(&button);
        x += size.width + PADDING;
    }

    // Auth buttons hug the right edge.
    let mut right = width - SIDE_MARGIN;
    for command in Command::AUTH.into_iter().rev() {
        let button = command_button(mtm, command, target_obj);
        let size = button.frame().size;
        right -= size.width;
        button.setFrame(NSRect::new(
            NSPoint::new(right, row_y),
            NSSize::new(size.width, BUTTON_HEIGHT),
        ));
        button.setAutoresizingMask(NSAutoresizingMaskOptions::ViewMinXMargin);
        nav_bar.addSubview(&button);
        right -= PADDING;
    }

    nav_bar
}

fn command_button(
    mtm: MainThreadMarker,
    command: Command,
    target: &AnyObject,
) -> Retained<NSButton> {
    let button = unsafe {
        NSButton::buttonWithTitle_target_action(
            &NSString::from_str(command.label()),
            Some(target),
            Some(sel!(commandPressed:)),
            mtm,
        )
    };
    button.setTag(command.tag());
    button.sizeToFit();
    button
}
