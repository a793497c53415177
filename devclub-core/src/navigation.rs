use crate::loader::{ContentSurface, WebsiteLoader};
use crate::section::Section;

/// A user-triggered action bound to a navigation-bar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Home,
    DevCoins,
    Members,
    Leaderboard,
    SignIn,
    SignUp,
}

impl Command {
    /// The main button row, left to right.
    pub const NAVIGATION: [Command; 4] = [
        Command::Home,
        Command::DevCoins,
        Command::Members,
        Command::Leaderboard,
    ];

    /// The account buttons grouped at the end of the button row.
    pub const AUTH: [Command; 2] = [Command::SignIn, Command::SignUp];

    pub fn label(self) -> &'static str {
        match self {
            Command::Home => "Home",
            Command::DevCoins => "Dev Coins",
            Command::Members => "Members",
            Command::Leaderboard => "Leaderboard",
            Command::SignIn => "Sign In",
            Command::SignUp => "Sign Up",
        }
    }

    /// Stable numeric id, used as the control tag by frontends that dispatch
    /// through a single action handler.
    pub fn tag(self) -> isize {
        self as isize
    }

    pub fn from_tag(tag: isize) -> Option<Command> {
        Command::NAVIGATION
            .into_iter()
            .chain(Command::AUTH)
            .find(|c| c.tag() == tag)
    }

    /// The section a command navigates to. Commands without one are reserved
    /// for features the site does not offer yet.
    pub fn target(self) -> Option<Section> {
        match self {
            Command::Home => Some(Section::Home),
            Command::DevCoins
            | Command::Members
            | Command::Leaderboard
            | Command::SignIn
            | Command::SignUp => None,
        }
    }
}

/// Routes navigation-bar input to the [`WebsiteLoader`].
pub struct NavigationController<S> {
    loader: WebsiteLoader<S>,
}

impl<S: ContentSurface> NavigationController<S> {
    pub fn new(loader: WebsiteLoader<S>) -> Self {
        NavigationController { loader }
    }

    pub fn loader(&self) -> &WebsiteLoader<S> {
        &self.loader
    }

    /// Run `command`. Returns the section loaded, or `None` for reserved
    /// commands, which do nothing.
    pub fn activate(&self, command: Command) -> Option<Section> {
        match command.target() {
            Some(section) => {
                self.loader.load(section.label());
                Some(section)
            }
            None => {
                log::debug!("'{}' is not implemented yet", command.label());
                None
            }
        }
    }

    /// Handle a segmented-control selection by its segment label.
    pub fn select_section(&self, label: &str) -> Section {
        self.loader.load(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RecordingSurface;

    fn controller() -> NavigationController<RecordingSurface> {
        NavigationController::new(WebsiteLoader::new(RecordingSurface::default()))
    }

    fn loads(controller: &NavigationController<RecordingSurface>) -> Vec<String> {
        controller.loader().surface().loads.borrow().clone()
    }

    #[test]
    fn activate_home_loads_home_once() {
        let nav = controller();
        assert_eq!(nav.activate(Command::Home), Some(Section::Home));
        assert_eq!(loads(&nav), vec!["https://www.nstsdc.org/".to_string()]);
    }

    #[test]
    fn reserved_commands_load_nothing() {
        let nav = controller();
        for command in [
            Command::DevCoins,
            Command::Members,
            Command::Leaderboard,
            Command::SignIn,
            Command::SignUp,
        ] {
            assert_eq!(nav.activate(command), None, "{:?}", command);
        }
        assert!(loads(&nav).is_empty());
    }

    #[test]
    fn select_section_loads_segment() {
        let nav = controller();
        assert_eq!(nav.select_section("Services"), Section::Services);
        assert_eq!(
            loads(&nav),
            vec!["https://www.nstsdc.org/services".to_string()]
        );
    }

    #[test]
    fn select_unknown_segment_loads_home() {
        let nav = controller();
        assert_eq!(nav.select_section(""), Section::Home);
        assert_eq!(loads(&nav), vec!["https://www.nstsdc.org/".to_string()]);
    }

    #[test]
    fn tags_map_back_to_commands() {
        for command in Command::NAVIGATION.into_iter().chain(Command::AUTH) {
            assert_eq!(Command::from_tag(command.tag()), Some(command));
        }
        assert_eq!(Command::from_tag(-1), None);
        assert_eq!(Command::from_tag(42), None);
    }

    #[test]
    fn button_labels_match_navigation_bar() {
        let labels: Vec<&str> = Command::NAVIGATION.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Home", "Dev Coins", "Members", "Leaderboard"]);
        assert_eq!(Command::SignIn.label(), "Sign In");
        assert_eq!(Command::SignUp.label(), "Sign Up");
    }
}
