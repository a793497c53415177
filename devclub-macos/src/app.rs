use std::cell::RefCell;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject, NSObjectProtocol, ProtocolObject};
use objc2::{class, define_class, msg_send, sel, DefinedClass, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate, NSWindow,
    NSWindowDelegate,
};
use objc2_foundation::NSNotification;

use devclub_core::screen;
use devclub_core::screen_flow::{Cue, Fired, Pending, ScreenFlow};
use devclub_core::settings::{self, Settings};

use crate::launch_screen::LaunchScreen;
use crate::main_screen::MainScreen;
use crate::window;

/// Everything the delegate owns once the app has finished launching.
struct Shell {
    window: Retained<NSWindow>,
    launch: LaunchScreen,
    #[allow(dead_code)] // Keeps the NavTarget alive; controls hold their target weakly
    main: Option<MainScreen>,
    flow: ScreenFlow,
    settings: Settings,
}

#[derive(Default)]
pub struct AppDelegateIvars {
    shell: RefCell<Option<Shell>>,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "DevClubAppDelegate"]
    #[ivars = AppDelegateIvars]
    pub struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn did_finish_launching(&self, _notification: &NSNotification) {
            self.launch();
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn should_terminate_after_last_window_closed(&self, _sender: &NSApplication) -> bool {
            true
        }
    }

    unsafe impl NSWindowDelegate for AppDelegate {
        #[unsafe(method(windowWillClose:))]
        fn window_will_close(&self, _notification: &NSNotification) {
            self.teardown();
        }
    }

    impl AppDelegate {
        #[unsafe(method(revealTitle:))]
        fn reveal_title(&self, _arg: Option<&AnyObject>) {
            self.fire(Cue::RevealTitle);
        }

        #[unsafe(method(presentMain:))]
        fn present_main(&self, _arg: Option<&AnyObject>) {
            self.fire(Cue::PresentMain);
        }
    }
);

impl AppDelegate {
    fn new(mtm: MainThreadMarker) -> Retained<Self> {
        let this = Self::alloc(mtm).set_ivars(AppDelegateIvars::default());
        unsafe { msg_send![super(this), init] }
    }

    fn launch(&self) {
        let mtm = self.mtm();
        let settings = settings::load();

        let window = window::create_window(mtm, &settings);
        window.setDelegate(Some(ProtocolObject::from_ref(self)));

        let launch = LaunchScreen::new(mtm, &window);
        launch.present();
        window.makeKeyAndOrderFront(None);

        let mut flow = ScreenFlow::new(settings.flow_timings());
        let first = flow.start();
        *self.ivars().shell.borrow_mut() = Some(Shell {
            window,
            launch,
            main: None,
            flow,
            settings,
        });
        if let Some(pending) = first {
            self.schedule(pending);
        }
    }

    /// Deliver `pending.cue` back to this delegate on the main run loop.
    fn schedule(&self, pending: Pending) {
        let selector = match pending.cue {
            Cue::RevealTitle => sel!(revealTitle:),
            Cue::PresentMain => sel!(presentMain:),
        };
        unsafe {
            let _: () = msg_send![
                self,
                performSelector: selector,
                withObject: None::<&AnyObject>,
                afterDelay: pending.after.as_secs_f64()
            ];
        }
    }

    fn fire(&self, cue: Cue) {
        let mtm = self.mtm();
        let mut guard = self.ivars().shell.borrow_mut();
        let Some(shell) = guard.as_mut() else {
            return;
        };
        match shell.flow.fire(cue) {
            Fired::RevealTitle { fade, next } => {
                shell.launch.reveal_title(fade);
                drop(guard);
                self.schedule(next);
            }
            Fired::Transitioned => {
                let main = MainScreen::new(mtm, &shell.window, &shell.settings);
                screen::replace(&shell.launch, &main);
                shell.main = Some(main);
            }
            Fired::Ignored => {}
        }
    }

    /// Window is closing: drop pending cues and persist the window size.
    fn teardown(&self) {
        unsafe {
            let _: () = msg_send![
                class!(NSObject),
                cancelPreviousPerformRequestsWithTarget: self
            ];
        }
        let mut guard = self.ivars().shell.borrow_mut();
        let Some(shell) = guard.as_mut() else {
            return;
        };
        shell.flow.cancel();
        let size = window::content_bounds(&shell.window).size;
        shell.settings.window_width = size.width.round() as i32;
        shell.settings.window_height = size.height.round() as i32;
        settings::save(&shell.settings);
    }
}

pub fn run() {
    let Some(mtm) = MainThreadMarker::new() else {
        log::error!("The AppKit frontend must start on the main thread");
        return;
    };

    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Regular);

    let delegate = AppDelegate::new(mtm);
    app.setDelegate(Some(ProtocolObject::from_ref(&*delegate)));

    #[allow(deprecated)]
    app.activateIgnoringOtherApps(true);
    app.run();
}
