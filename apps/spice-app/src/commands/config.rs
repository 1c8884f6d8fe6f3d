//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// The read-only startup configuration (store name, currency, tax rate).
///
/// ## When Used
/// - App startup, to configure the UI
/// - Currency formatting in the cart and admin tables
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
