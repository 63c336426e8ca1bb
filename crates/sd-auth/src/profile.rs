use crate::error::{AuthError, Result as AuthErrorResult};
use crate::session::SessionStore;

use sd_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Profile and settings operations, applied to the identity behind the
/// current session only.
impl SessionStore {
    #[track_caller]
    fn current_identity_mut(&mut self) -> AuthErrorResult<&mut Identity> {
        let id = self
            .session()
            .map(|s| s.identity_id)
            .ok_or(AuthError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.registry_mut()
            .find_by_id_mut(id)
            .ok_or(AuthError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Update the contact address. Empty or unchanged input is a no-op.
    #[track_caller]
    pub fn update_email(&mut self, email: &str) -> AuthErrorResult<()> {
        let identity = self.current_identity_mut()?;

        if !email.is_empty() && identity.email != email {
            identity.email = email.to_string();
            info!("{} updated email", identity.username);
        }
        Ok(())
    }

    /// Change the stored password after confirmation and length checks.
    #[track_caller]
    pub fn change_password(
        &mut self,
        new: &str,
        confirm: &str,
        min_length: usize,
    ) -> AuthErrorResult<()> {
        if new != confirm {
            return Err(AuthError::PasswordMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if new.len() < min_length {
            return Err(AuthError::PasswordTooShort {
                min: min_length,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = self.current_identity_mut()?;
        identity.password = new.to_string();
        info!("{} changed password", identity.username);
        Ok(())
    }

    /// Store or replace the OpenRouter API key.
    #[track_caller]
    pub fn set_api_key(&mut self, key: &str) -> AuthErrorResult<()> {
        let identity = self.current_identity_mut()?;
        identity.api_key = Some(key.to_string());
        info!("{} updated API key", identity.username);
        Ok(())
    }
}
