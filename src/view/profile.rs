//! Profile edit form.

use chrono::NaiveDate;

use crate::schema::{User, UserUpdate};

/// Editable copy of the profile, prefilled from the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub name: String,
    pub lastname: String,
    pub birthday: Option<NaiveDate>,
    pub subscription: bool,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            lastname: user.lastname.clone(),
            birthday: user.birthday,
            subscription: user.subscription,
        }
    }

    /// Fields that differ from `original` and are not blank.
    pub fn changes(&self, original: &User) -> UserUpdate {
        fn text(edited: &str, original: &str) -> Option<String> {
            let edited = edited.trim();
            (!edited.is_empty() && edited != original).then(|| edited.to_string())
        }

        UserUpdate {
            username: text(&self.username, &original.username),
            email: text(&self.email, &original.email),
            name: text(&self.name, &original.name),
            lastname: text(&self.lastname, &original.lastname),
            birthday: self.birthday.filter(|b| Some(*b) != original.birthday),
            subscription: (self.subscription != original.subscription).then_some(self.subscription),
        }
    }
}
