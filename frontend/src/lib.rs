mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then mount.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting gambit auth frontend");

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        log::debug!("runtime config initialized");
        router::mount_app();
    });
}
