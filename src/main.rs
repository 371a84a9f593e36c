//! Smart Goal Breaker Frontend Entry Point

use goal_breaker_ui::app::App;
use goal_breaker_ui::config::ApiConfig;
use goal_breaker_ui::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_env();
    logging::init(config.log_level);
    log::info!("[App] Backend at {}", config.base_url());

    mount_to_body(move || view! { <App config=config /> });
}
