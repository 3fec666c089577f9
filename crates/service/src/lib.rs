mod config;
mod http_server;
mod process;
mod state;

pub use config::Config as ServiceConfig;
pub use process::{spawn_service, SpawnError};
pub use state::{State as ServiceState, StateSetupError as ServiceStateSetupError};
