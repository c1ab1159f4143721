//! Storefront Studio
//!
//! Content administration desktop app.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    println!();
    println!("Storefront Studio v{}", studio_ui::VERSION);
    println!("Content administration for the storefront catalog");
    println!();

    // Launch the Dioxus desktop application
    studio_ui::launch();
}
