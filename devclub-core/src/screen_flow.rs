//! Launch → Main screen sequencing.
//!
//! The flow is a pure state machine; frontends own the timers. When the
//! launch screen is on screen the frontend calls [`ScreenFlow::start`] and
//! schedules the returned [`Pending`] cue. Each time a cue elapses it calls
//! [`ScreenFlow::fire`] and acts on the result, scheduling the next cue if
//! there is one:
//!
//! ```text
//!   start() ──title_delay──▶ RevealTitle ──title_fade + hold──▶ PresentMain
//!                            (fade title in)                   (show Main)
//! ```

use std::time::Duration;

/// Longest delay a cue may be scheduled with. Timer sources take the
/// interval as a 32-bit millisecond count.
pub const MAX_CUE_DELAY: Duration = Duration::from_millis(u32::MAX as u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Launching,
    Main,
}

/// Splash pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    /// Delay between the launch screen appearing and the title fade starting.
    pub title_delay: Duration,
    /// Duration of the title fade-in.
    pub title_fade: Duration,
    /// Pause after the fade completes before the main screen is shown.
    pub hold: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        FlowTimings {
            title_delay: Duration::from_millis(500),
            title_fade: Duration::from_millis(800),
            hold: Duration::from_millis(1000),
        }
    }
}

impl FlowTimings {
    /// Time from `start()` until the main screen is presented.
    pub fn total(&self) -> Duration {
        self.title_delay + self.title_fade + self.hold
    }
}

/// A deferred step of the launch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    RevealTitle,
    PresentMain,
}

/// A cue to fire once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub after: Duration,
    pub cue: Cue,
}

/// What the frontend should do in response to a fired cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    /// Fade the title in over `fade`, then schedule `next`.
    RevealTitle { fade: Duration, next: Pending },
    /// The flow moved to [`ScreenState::Main`]; swap the main screen in.
    Transitioned,
    /// Stale, duplicate or cancelled cue. Nothing to do.
    Ignored,
}

pub struct ScreenFlow {
    state: ScreenState,
    timings: FlowTimings,
    started: bool,
    title_revealed: bool,
    cancelled: bool,
    transitions: u32,
}

impl ScreenFlow {
    pub fn new(timings: FlowTimings) -> Self {
        ScreenFlow {
            state: ScreenState::Launching,
            timings,
            started: false,
            title_revealed: false,
            cancelled: false,
            transitions: 0,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn timings(&self) -> FlowTimings {
        self.timings
    }

    /// Number of Launching → Main transitions taken. Never exceeds one.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// The launch screen has been presented. Returns the first cue to
    /// schedule, or `None` if the flow was already started or cancelled.
    pub fn start(&mut self) -> Option<Pending> {
        if self.started || self.cancelled {
            return None;
        }
        self.started = true;
        log::debug!(
            "Launch screen presented, title in {:?}, main screen in {:?}",
            self.timings.title_delay,
            self.timings.total()
        );
        Some(Pending {
            after: self.timings.title_delay.min(MAX_CUE_DELAY),
            cue: Cue::RevealTitle,
        })
    }

    pub fn fire(&mut self, cue: Cue) -> Fired {
        if self.cancelled || !self.started || self.state == ScreenState::Main {
            log::debug!("Ignoring {:?} (state {:?})", cue, self.state);
            return Fired::Ignored;
        }
        match cue {
            Cue::RevealTitle if !self.title_revealed => {
                self.title_revealed = true;
                Fired::RevealTitle {
                    fade: self.timings.title_fade,
                    next: Pending {
                        after: (self.timings.title_fade + self.timings.hold).min(MAX_CUE_DELAY),
                        cue: Cue::PresentMain,
                    },
                }
            }
            Cue::RevealTitle => Fired::Ignored,
            Cue::PresentMain => {
                self.state = ScreenState::Main;
                self.transitions += 1;
                log::info!("Presenting main screen");
                Fired::Transitioned
            }
        }
    }

    /// Tear the flow down. Any cue still pending becomes a no-op.
    pub fn cancel(&mut self) {
        if !self.cancelled && self.state == ScreenState::Launching {
            log::debug!("Launch sequence cancelled before the main screen was shown");
        }
        self.cancelled = true;
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        ScreenFlow::new(FlowTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive `flow` the way a frontend does, against a virtual clock, and
    /// return the time at which each `Fired` result was produced.
    fn run_to_completion(flow: &mut ScreenFlow) -> Vec<(Duration, Fired)> {
        let mut clock = Duration::ZERO;
        let mut events = Vec::new();
        let mut pending = flow.start();
        while let Some(Pending { after, cue }) = pending.take() {
            clock += after;
            let fired = flow.fire(cue);
            events.push((clock, fired));
            if let Fired::RevealTitle { next, .. } = fired {
                pending = Some(next);
            }
        }
        events
    }

    #[test]
    fn starts_in_launching() {
        let flow = ScreenFlow::default();
        assert_eq!(flow.state(), ScreenState::Launching);
        assert_eq!(flow.transitions(), 0);
    }

    #[test]
    fn reaches_main_once_after_full_delay() {
        let mut flow = ScreenFlow::default();
        let events = run_to_completion(&mut flow);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, Duration::from_millis(500));
        assert!(matches!(events[0].1, Fired::RevealTitle { fade, .. } if fade == Duration::from_millis(800)));
        assert_eq!(events[1], (Duration::from_millis(2300), Fired::Transitioned));
        assert_eq!(flow.state(), ScreenState::Main);
        assert_eq!(flow.transitions(), 1);
    }

    #[test]
    fn main_is_terminal() {
        let mut flow = ScreenFlow::default();
        run_to_completion(&mut flow);
        assert_eq!(flow.fire(Cue::PresentMain), Fired::Ignored);
        assert_eq!(flow.fire(Cue::RevealTitle), Fired::Ignored);
        assert_eq!(flow.start(), None);
        assert_eq!(flow.state(), ScreenState::Main);
        assert_eq!(flow.transitions(), 1);
    }

    #[test]
    fn start_is_single_shot() {
        let mut flow = ScreenFlow::default();
        assert!(flow.start().is_some());
        assert_eq!(flow.start(), None);
    }

    #[test]
    fn cues_before_start_are_ignored() {
        let mut flow = ScreenFlow::default();
        assert_eq!(flow.fire(Cue::PresentMain), Fired::Ignored);
        assert_eq!(flow.state(), ScreenState::Launching);
    }

    #[test]
    fn duplicate_reveal_is_ignored() {
        let mut flow = ScreenFlow::default();
        flow.start();
        assert!(matches!(flow.fire(Cue::RevealTitle), Fired::RevealTitle { .. }));
        assert_eq!(flow.fire(Cue::RevealTitle), Fired::Ignored);
    }

    #[test]
    fn cancel_during_pending_transition_prevents_main() {
        let mut flow = ScreenFlow::default();
        flow.start();
        flow.fire(Cue::RevealTitle);
        flow.cancel();
        assert!(flow.is_cancelled());
        assert_eq!(flow.fire(Cue::PresentMain), Fired::Ignored);
        assert_eq!(flow.state(), ScreenState::Launching);
        assert_eq!(flow.transitions(), 0);
    }

    #[test]
    fn cancelled_flow_does_not_start() {
        let mut flow = ScreenFlow::default();
        flow.cancel();
        assert_eq!(flow.start(), None);
    }

    #[test]
    fn custom_timings_are_honoured() {
        let timings = FlowTimings {
            title_delay: Duration::from_millis(10),
            title_fade: Duration::ZERO,
            hold: Duration::from_millis(5),
        };
        assert_eq!(timings.total(), Duration::from_millis(15));
        let mut flow = ScreenFlow::new(timings);
        let events = run_to_completion(&mut flow);
        assert_eq!(events.last(), Some(&(Duration::from_millis(15), Fired::Transitioned)));
    }

    #[test]
    fn cue_delays_never_exceed_timer_range() {
        let long = Duration::from_millis(u64::from(u32::MAX));
        let mut flow = ScreenFlow::new(FlowTimings {
            title_delay: long * 2,
            title_fade: long,
            hold: long,
        });
        assert_eq!(flow.start().map(|p| p.after), Some(MAX_CUE_DELAY));
        match flow.fire(Cue::RevealTitle) {
            Fired::RevealTitle { fade, next } => {
                assert_eq!(fade, long);
                assert_eq!(next.after, MAX_CUE_DELAY);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
