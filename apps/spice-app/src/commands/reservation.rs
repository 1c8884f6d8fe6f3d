//! # Reservation Commands
//!
//! Table booking form plus the admin reservation list.

use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{DataState, DbState};
use spice_core::{Reservation, ReservationRequest, ReservationStatus};
use spice_store::CollectionKey;

/// Validates the booking form and records a pending reservation.
///
/// Email, occasion, seating and special requests are checked but not stored.
pub async fn book_reservation(
    db: &DbState,
    data: &DataState,
    request: ReservationRequest,
) -> Result<Reservation, ApiError> {
    debug!(
        guests = request.guests,
        date = %request.date,
        time = %request.time,
        "book_reservation command"
    );

    let reservation = data
        .commit(db.inner(), CollectionKey::Reservations, |d| {
            d.reservations.book(request).map_err(|e| {
                warn!(error = %e, "Booking rejected");
                ApiError::from(e)
            })
        })
        .await?;

    info!(
        reservation_id = %reservation.id,
        guests = reservation.guests,
        "Table reserved"
    );
    Ok(reservation)
}

pub fn list_reservations(data: &DataState) -> Vec<Reservation> {
    debug!("list_reservations command");
    data.with_data(|d| d.reservations.list().to_vec())
}

pub async fn update_reservation_status(
    db: &DbState,
    data: &DataState,
    id: String,
    status: ReservationStatus,
) -> Result<(), ApiError> {
    debug!(id = %id, status = %status, "update_reservation_status command");

    data.commit(db.inner(), CollectionKey::Reservations, |d| {
        d.reservations.update_status(&id, status).map_err(ApiError::from)
    })
    .await?;

    info!(reservation_id = %id, status = %status, "Reservation status changed");
    Ok(())
}

/// Returns `false` if no reservation had that id.
pub async fn delete_reservation(
    db: &DbState,
    data: &DataState,
    id: String,
) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_reservation command");

    if data.with_data(|d| d.reservations.get(&id).is_none()) {
        return Ok(false);
    }

    let removed = data
        .commit(db.inner(), CollectionKey::Reservations, |d| {
            Ok::<_, ApiError>(d.reservations.delete(&id))
        })
        .await?;
    info!(reservation_id = %id, "Reservation deleted");

    Ok(removed)
}
