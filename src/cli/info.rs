use crate::{display, error, management::ConfigStore};

pub async fn info<S: ConfigStore>(store: &S) {
    match store.load().await {
        Ok(config) => println!("{}", display::render_info(config.as_ref())),
        Err(e) => error!("Cannot read configuration. Err: {}", e),
    }
}
