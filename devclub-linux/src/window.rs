use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

use devclub_core::screen::{self, Screen};
use devclub_core::screen_flow::{Cue, Fired, Pending, ScreenFlow};
use devclub_core::settings::{self, Settings};

use crate::launch_screen::LaunchScreen;
use crate::main_screen::MainScreen;

const WINDOW_TITLE: &str = "DevClub";
const SCREEN_TRANSITION_MS: u32 = 300;

/// State shared by the launch-sequence timer callbacks.
///
/// All fields are cheaply cloneable (Rc-wrapped or GObject references) and
/// only touched from the GTK main loop.
#[derive(Clone)]
struct FlowContext {
    flow: Rc<RefCell<ScreenFlow>>,
    /// The timeout source for the next cue, if one is scheduled.
    pending: Rc<RefCell<Option<glib::SourceId>>>,
    stack: gtk4::Stack,
    launch: Rc<LaunchScreen>,
    main: Rc<RefCell<Option<MainScreen>>>,
    settings: Rc<RefCell<Settings>>,
}

pub fn build_window(app: &adw::Application) {
    let settings = Rc::new(RefCell::new(settings::load()));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(settings.borrow().window_width)
        .default_height(settings.borrow().window_height)
        .build();

    let stack = gtk4::Stack::builder()
        .transition_type(gtk4::StackTransitionType::Crossfade)
        .transition_duration(SCREEN_TRANSITION_MS)
        .hexpand(true)
        .vexpand(true)
        .build();
    window.set_content(Some(&stack));

    let launch = Rc::new(LaunchScreen::new(&stack));
    launch.present();

    let ctx = FlowContext {
        flow: Rc::new(RefCell::new(ScreenFlow::new(
            settings.borrow().flow_timings(),
        ))),
        pending: Rc::new(RefCell::new(None)),
        stack,
        launch,
        main: Rc::new(RefCell::new(None)),
        settings: settings.clone(),
    };

    // The sequence starts once the launch screen is actually on screen.
    {
        let ctx = ctx.clone();
        window.connect_map(move |_| {
            let first = ctx.flow.borrow_mut().start();
            if let Some(pending) = first {
                schedule(&ctx, pending);
            }
        });
    }

    {
        let ctx = ctx.clone();
        window.connect_close_request(move |window| {
            ctx.flow.borrow_mut().cancel();
            if let Some(id) = ctx.pending.borrow_mut().take() {
                id.remove();
            }

            {
                let mut s = ctx.settings.borrow_mut();
                s.window_width = window.width();
                s.window_height = window.height();
            }
            settings::save(&ctx.settings.borrow());
            glib::Propagation::Proceed
        });
    }

    window.present();
}

fn schedule(ctx: &FlowContext, pending: Pending) {
    let callback_ctx = ctx.clone();
    let id = glib::timeout_add_local_once(pending.after, move || {
        // A fired one-shot source is gone; forget its id before anything
        // else can try to remove it.
        callback_ctx.pending.borrow_mut().take();
        fire(&callback_ctx, pending.cue);
    });
    if let Some(stale) = ctx.pending.borrow_mut().replace(id) {
        stale.remove();
    }
}

fn fire(ctx: &FlowContext, cue: Cue) {
    let fired = ctx.flow.borrow_mut().fire(cue);
    match fired {
        Fired::RevealTitle { fade, next } => {
            ctx.launch.reveal_title(fade);
            schedule(ctx, next);
        }
        Fired::Transitioned => {
            let main = MainScreen::new(&ctx.stack, &ctx.settings.borrow());
            screen::replace(ctx.launch.as_ref(), &main);
            *ctx.main.borrow_mut() = Some(main);
        }
        Fired::Ignored => {}
    }
}
