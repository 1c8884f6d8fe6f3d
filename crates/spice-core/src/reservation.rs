//! # Reservations
//!
//! Table bookings from the customer form, reviewed by staff.
//!
//! A booking keeps the guest's name, phone, slot and party size. The rest of
//! the form (email, occasion, requests, seating) is validated and dropped.

use crate::error::{CoreError, CoreResult};
use crate::order::TaggedSequence;
use crate::types::{Reservation, ReservationRequest, ReservationStatus, ReviewStatus};
use crate::validation::validate_reservation_request;
use crate::RESERVATION_ID_TAG;

/// Reservations, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationBook {
    reservations: Vec<Reservation>,
    sequence: TaggedSequence,
}

impl Default for ReservationBook {
    fn default() -> Self {
        Self::from_reservations(Vec::new())
    }
}

impl ReservationBook {
    pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
        let sequence = TaggedSequence::seeded_from(
            RESERVATION_ID_TAG,
            reservations.iter().map(|r| r.id.as_str()),
        );
        ReservationBook {
            reservations,
            sequence,
        }
    }

    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Validates the booking form and records a pending reservation.
    ///
    /// Nothing is recorded if any field fails validation.
    pub fn book(&mut self, request: ReservationRequest) -> CoreResult<Reservation> {
        validate_reservation_request(&request)?;

        let reservation = Reservation {
            id: self.sequence.advance(),
            customer_name: request.full_name.trim().to_string(),
            phone: request.phone,
            date: request.date.trim().to_string(),
            time: request.time.trim().to_string(),
            guests: request.guests,
            status: ReviewStatus::Pending,
        };

        self.reservations.insert(0, reservation.clone());
        Ok(reservation)
    }

    /// Any state may move to any other state.
    pub fn update_status(&mut self, id: &str, status: ReservationStatus) -> CoreResult<()> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::ReservationNotFound(id.to_string()))?;
        reservation.status = status;
        Ok(())
    }

    /// Removes a reservation. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.id != id);
        self.reservations.len() != before
    }

    pub fn into_reservations(self) -> Vec<Reservation> {
        self.reservations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::Seating;

    fn request() -> ReservationRequest {
        ReservationRequest {
            full_name: "Priya Sharma".to_string(),
            phone: "9123456780".to_string(),
            email: "priya@example.com".to_string(),
            date: "2026-03-14".to_string(),
            time: "20:30".to_string(),
            guests: 2,
            occasion: Some("Anniversary".to_string()),
            requests: None,
            seating: Seating::Outdoor,
        }
    }

    fn seeded() -> ReservationBook {
        ReservationBook::from_reservations(vec![Reservation {
            id: "RES001".to_string(),
            customer_name: "Alice Brown".to_string(),
            phone: "9876543210".to_string(),
            date: "2026-02-28".to_string(),
            time: "19:00".to_string(),
            guests: 4,
            status: ReviewStatus::Pending,
        }])
    }

    #[test]
    fn test_book_prepends_pending() {
        let mut book = seeded();
        let res = book.book(request()).unwrap();

        assert_eq!(res.id, "RES002");
        assert_eq!(res.status, ReviewStatus::Pending);
        assert_eq!(res.customer_name, "Priya Sharma");
        assert_eq!(book.list()[0].id, "RES002");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_book_rejects_short_phone_without_recording() {
        let mut book = seeded();
        let mut req = request();
        req.phone = "912345678".to_string();

        let err = book.book(req).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_book_rejects_large_party() {
        let mut book = ReservationBook::default();
        let mut req = request();
        req.guests = 21;

        assert!(book.book(req).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_update_status_and_delete() {
        let mut book = seeded();

        book.update_status("RES001", ReviewStatus::Approved).unwrap();
        assert_eq!(book.get("RES001").unwrap().status, ReviewStatus::Approved);

        book.update_status("RES001", ReviewStatus::Pending).unwrap();
        assert_eq!(book.get("RES001").unwrap().status, ReviewStatus::Pending);

        assert!(book.update_status("RES404", ReviewStatus::Rejected).is_err());

        assert!(book.delete("RES001"));
        assert!(!book.delete("RES001"));
    }
}
