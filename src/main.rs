//! CSR entry point: installs console logging and mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        use vetcare_portal::config::PortalConfig;

        console_error_panic_hook::set_once();
        let (config, config_error) = match PortalConfig::from_build_env() {
            Ok(config) => (config, None),
            Err(e) => (PortalConfig::default(), Some(e)),
        };
        let _ = console_log::init_with_level(config.log_level);
        if let Some(e) = config_error {
            log::warn!("invalid build configuration, using defaults: {e}");
        }
        log::info!("vetcare portal starting against {}", PortalConfig::current().api_base);
        leptos::mount::mount_to_body(vetcare_portal::app::App);
    }
}
