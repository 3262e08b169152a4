//! Display identity recorded by the sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Non-authoritative: the record only labels the sidebar. It holds no secret
//! and never guards a route. Persisted in `localStorage` under
//! [`SESSION_KEY`] so a reload keeps the name.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;
use crate::util::validation::{ValidationError, is_email};

/// `localStorage` key for the signed-in user.
pub const SESSION_KEY: &str = "adminboard_user";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    /// Milliseconds since the Unix epoch, as reported by the browser clock.
    #[serde(default)]
    pub signed_in_at: u64,
}

impl SessionUser {
    /// Build a user from sign-in form input.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field: a blank name, or a blank or malformed email.
    pub fn from_form(name: &str, email: &str, signed_in_at: u64) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Name"));
        }
        if email.is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if !is_email(email) {
            return Err(ValidationError::InvalidEmail("Email"));
        }
        Ok(Self { name: name.to_owned(), email: email.to_owned(), signed_in_at })
    }

    /// Two-letter avatar initials.
    pub fn initials(&self) -> String {
        let mut initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            initials.push('?');
        }
        initials.to_uppercase()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    /// Restore the persisted user, if any.
    pub fn load() -> Self {
        Self { user: storage::load_json(SESSION_KEY) }
    }

    pub fn sign_in(&mut self, user: SessionUser) {
        storage::save_json(SESSION_KEY, &user);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        storage::remove(SESSION_KEY);
        self.user = None;
    }
}

/// Current wall-clock time in milliseconds, or 0 outside the browser.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now() as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
