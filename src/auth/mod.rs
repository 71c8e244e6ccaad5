//! # Authentication
//!
//! Authentication methods for booking API requests. Creating and reading
//! bookings is unauthenticated; updating and deleting requires Basic auth.

/// Supported authentication methods.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMethod {
    #[default]
    None,
    Basic {
        username: String,
        password: String,
    },
}

impl AuthMethod {
    /// Basic auth with the given credentials.
    pub fn basic(username: &str, password: &str) -> Self {
        AuthMethod::Basic {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
