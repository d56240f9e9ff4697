use std::sync::Arc;

use crate::application::access::PasswordGate;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    gate: PasswordGate,
}

impl AppServices {
    pub fn new(gate: PasswordGate) -> Self {
        Self { gate }
    }
}

impl AppContext {
    pub fn new(cfg: Config) -> Self {
        let services = Arc::new(AppServices::new(PasswordGate::new(
            cfg.access_password.clone(),
        )));
        Self { cfg, services }
    }

    pub fn gate(&self) -> &PasswordGate {
        &self.services.gate
    }
}
