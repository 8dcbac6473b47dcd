//! User profile record and its patch type.

use serde::{Deserialize, Serialize};

/// The storefront user profile.
///
/// Always fully defined: a fresh user has empty name and email and an empty
/// preference list, never absent fields, so rendering can iterate without
/// presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Favorite categories, in the order they were added.
    pub preferences: Vec<String>,
}

impl User {
    /// Apply a partial update, field by field.
    ///
    /// Fields the patch leaves as `None` keep their current value.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }
}

/// A partial update to the user profile.
///
/// Each field is optional; only the fields carried by the patch are written.
/// This replaces ad-hoc merging with an explicit record of what a profile
/// action intends to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name, if the action changes it.
    pub name: Option<String>,
    /// New contact email, if the action changes it.
    pub email: Option<String>,
    /// Full replacement preference list, if the action changes it.
    pub preferences: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            name: "Laura".to_owned(),
            email: "laura@example.com".to_owned(),
            preferences: vec!["PS5".to_owned()],
        }
    }

    #[test]
    fn test_default_user_is_fully_defined() {
        let user = User::default();
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert!(user.preferences.is_empty());
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut u = user();
        u.apply(UserPatch::default());
        assert_eq!(u, user());
    }

    #[test]
    fn test_preferences_patch_preserves_contact_fields() {
        let mut u = user();
        u.apply(UserPatch {
            preferences: Some(vec!["PS5".to_owned(), "Xbox".to_owned()]),
            ..UserPatch::default()
        });
        assert_eq!(u.name, "Laura");
        assert_eq!(u.email, "laura@example.com");
        assert_eq!(u.preferences, vec!["PS5", "Xbox"]);
    }

    #[test]
    fn test_contact_patch_preserves_preferences() {
        let mut u = user();
        u.apply(UserPatch {
            name: Some("Laura G.".to_owned()),
            email: Some("lg@example.com".to_owned()),
            ..UserPatch::default()
        });
        assert_eq!(u.name, "Laura G.");
        assert_eq!(u.email, "lg@example.com");
        assert_eq!(u.preferences, vec!["PS5"]);
    }
}
