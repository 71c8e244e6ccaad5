//! # Run Configuration
//!
//! Everything one run needs beyond the fixture file itself: the API base
//! URL, credentials for the mutating endpoints, and the replacement payload
//! applied by the update step.

use crate::booking::{Booking, BookingDates};

pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASS: &str = "password123";

/// Basic-auth credentials for `PUT` and `DELETE /booking/{id}`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Replacement booking written by the update step.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub checkin: String,
    pub checkout: String,
    pub additionalneeds: String,
}

impl Default for UpdateProfile {
    fn default() -> Self {
        UpdateProfile {
            firstname: "UpdatedFirstName".to_string(),
            lastname: "UpdatedLastName".to_string(),
            totalprice: 999,
            depositpaid: false,
            checkin: "2024-12-01".to_string(),
            checkout: "2024-12-05".to_string(),
            additionalneeds: "Lunch".to_string(),
        }
    }
}

impl UpdateProfile {
    /// The full booking body sent by the update step.
    pub fn to_booking(&self) -> Booking {
        Booking {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            totalprice: self.totalprice,
            depositpaid: self.depositpaid,
            bookingdates: BookingDates {
                checkin: self.checkin.clone(),
                checkout: self.checkout.clone(),
            },
            additionalneeds: self.additionalneeds.clone(),
        }
    }
}

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub admin: Credentials,
    pub update: UpdateProfile,
}
