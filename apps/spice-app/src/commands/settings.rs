//! # Settings Commands
//!
//! The restaurant profile shown in the site header and footer.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DataState, DbState};
use spice_core::validation::{validate_email, validate_item_name};
use spice_core::RestaurantSettings;
use spice_store::CollectionKey;

pub fn get_settings(data: &DataState) -> RestaurantSettings {
    debug!("get_settings command");
    data.with_data(|d| d.settings.clone())
}

/// Replaces the restaurant profile. The name must be non-empty and the
/// email well formed.
pub async fn update_settings(
    db: &DbState,
    data: &DataState,
    settings: RestaurantSettings,
) -> Result<RestaurantSettings, ApiError> {
    debug!(name = %settings.name, "update_settings command");

    validate_item_name(&settings.name)?;
    validate_email(&settings.email)?;

    data.commit(db.inner(), CollectionKey::Settings, |d| {
        d.settings = settings.clone();
        Ok::<_, ApiError>(())
    })
    .await?;

    info!(name = %settings.name, "Restaurant settings updated");
    Ok(settings)
}
