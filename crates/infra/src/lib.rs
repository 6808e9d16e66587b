mod config;
mod services;
mod system;

pub use config::Config;
use court_scheduler_sdk::CourtSchedulerSDK;
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct CourtContext {
    pub court_schedules: Arc<dyn ICourtScheduleService>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl CourtContext {
    pub fn new(
        court_schedules: Arc<dyn ICourtScheduleService>,
        config: Config,
        sys: Arc<dyn ISys>,
    ) -> Self {
        Self {
            court_schedules,
            config,
            sys,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> CourtContext {
    let config = Config::new();
    let sdk = CourtSchedulerSDK::new(config.api_address.clone(), config.api_token.clone());

    CourtContext::new(
        Arc::new(HttpCourtScheduleService::new(sdk)),
        config,
        Arc::new(RealSys {}),
    )
}
