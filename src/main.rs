#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use uht_toolkit::{
    app,
    util::{
        logging::init_logging,
        version::{version_label, APP_NAME},
    },
};

fn main() {
    init_logging();
    tracing::info!(version = %version_label(), "starting {APP_NAME}");

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if cfg!(feature = "desktop")
        && std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}
