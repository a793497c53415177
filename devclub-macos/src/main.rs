#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
mod launch_screen;
#[cfg(target_os = "macos")]
mod main_screen;
#[cfg(target_os = "macos")]
mod web_view;
#[cfg(target_os = "macos")]
mod window;

fn main() {
    env_logger::init();
    log::info!("DevClub macOS starting");

    #[cfg(target_os = "macos")]
    app::run();

    #[cfg(not(target_os = "macos"))]
    {
        log::error!("The AppKit frontend only runs on macOS");
        eprintln!("devclub-macos: build and run on macOS, or use the `devclub` GTK frontend.");
        std::process::exit(1);
    }
}
