pub mod loader;
pub mod navigation;
pub mod screen;
pub mod screen_flow;
pub mod section;
pub mod settings;
pub mod util;
