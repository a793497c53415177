#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Launch,
    Main,
}

/// A full-window presentation unit, implemented per frontend.
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    /// Make this screen the window's visible content.
    fn present(&self);

    /// Detach this screen from the window and release what it holds.
    fn dismiss(&self);
}

/// Replace `outgoing` with `incoming`. The incoming screen is presented before
/// the outgoing one is dismissed so the window is never left empty.
pub fn replace(outgoing: &dyn Screen, incoming: &dyn Screen) {
    log::debug!("Replacing {:?} screen with {:?}", outgoing.kind(), incoming.kind());
    incoming.present();
    outgoing.dismiss();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeScreen {
        kind: ScreenKind,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Screen for FakeScreen {
        fn kind(&self) -> ScreenKind {
            self.kind
        }

        fn present(&self) {
            self.events.borrow_mut().push(format!("present {:?}", self.kind));
        }

        fn dismiss(&self) {
            self.events.borrow_mut().push(format!("dismiss {:?}", self.kind));
        }
    }

    #[test]
    fn replace_presents_before_dismissing() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let launch = FakeScreen {
            kind: ScreenKind::Launch,
            events: events.clone(),
        };
        let main = FakeScreen {
            kind: ScreenKind::Main,
            events: events.clone(),
        };
        replace(&launch, &main);
        assert_eq!(*events.borrow(), ["present Main", "dismiss Launch"]);
    }
}
