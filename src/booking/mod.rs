//! # Booking Payloads
//!
//! JSON request and response bodies exchanged with the booking API.

use serde::{Deserialize, Serialize};

use crate::fixtures::FixtureRow;

/// Check-in/check-out date pair nested inside a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

/// Booking body as sent to and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    pub additionalneeds: String,
}

/// `POST /booking` response body; only the assigned id is inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBooking {
    pub bookingid: u64,
}

impl From<&FixtureRow> for Booking {
    fn from(row: &FixtureRow) -> Self {
        Booking {
            firstname: row.firstname.clone(),
            lastname: row.lastname.clone(),
            totalprice: row.totalprice,
            depositpaid: row.depositpaid,
            bookingdates: BookingDates {
                checkin: row.checkin.clone(),
                checkout: row.checkout.clone(),
            },
            additionalneeds: row.additionalneeds.clone(),
        }
    }
}
