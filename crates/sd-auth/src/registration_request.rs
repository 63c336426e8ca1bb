use sd_core::Role;

/// Input to self-registration.
///
/// `requested_role` is accepted in the input but never honored: new accounts
/// always start at the lowest-privilege role. Role assignment is an admin
/// operation.
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub api_key: Option<String>,
    pub requested_role: Option<Role>,
}

impl RegistrationRequest {
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            api_key: None,
            requested_role: None,
        }
    }
}
