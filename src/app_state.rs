use std::sync::Arc;

use crate::config::Config;
use crate::database::AccountRepository;

pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub config: Config,
}
