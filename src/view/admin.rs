//! Admin user listing: client-side filter and incremental reveal.

use crate::schema::User;

/// Filter text plus how many matching users are revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListView {
    filter: String,
    shown: usize,
    increment: usize,
}

impl UserListView {
    pub fn new(increment: usize) -> Self {
        Self {
            filter: String::new(),
            shown: increment,
            increment,
        }
    }

    /// Change the filter. The reveal count starts over.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_lowercase();
        self.shown = self.increment;
    }

    pub fn load_more(&mut self) {
        self.shown = self.shown.saturating_add(self.increment);
    }

    /// Users whose username or email contains the filter, ignoring case.
    pub fn matching<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users
            .iter()
            .filter(|user| {
                self.filter.is_empty()
                    || user.username.to_lowercase().contains(&self.filter)
                    || user.email.to_lowercase().contains(&self.filter)
            })
            .collect()
    }

    /// The revealed slice of [`Self::matching`].
    pub fn visible<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut matching = self.matching(users);
        matching.truncate(self.shown);
        matching
    }

    pub fn has_more(&self, users: &[User]) -> bool {
        self.matching(users).len() > self.shown
    }
}
