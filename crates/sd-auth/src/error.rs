use sd_core::{AccountStatus, Role};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authenticated session {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Admin role required, current role is {role} {location}")]
    AdminRequired {
        role: Role,
        location: ErrorLocation,
    },

    #[error("Unknown user: {username} {location}")]
    UnknownUser {
        username: String,
        location: ErrorLocation,
    },

    #[error("New password and confirmation do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Password must be at least {min} characters {location}")]
    PasswordTooShort { min: usize, location: ErrorLocation },

    #[error("User {username} is {status}, not pending approval {location}")]
    NotPending {
        username: String,
        status: AccountStatus,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
