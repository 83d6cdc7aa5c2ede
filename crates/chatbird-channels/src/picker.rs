use tracing::{debug, warn};

use chatbird_types::User;

use crate::directory::{DEFAULT_PAGE_SIZE, UserDirectory, UserListQuery};
use crate::error::DirectoryError;
use crate::setup::ChannelParams;

/// State behind the "new conversation" screen: a paged list of users to
/// pick from and the users picked so far.
///
/// The current user never appears in the list.
pub struct UserPicker<D: UserDirectory> {
    directory: D,
    current_user_id: String,
    page_size: usize,
    query: Option<UserListQuery>,
    has_next: bool,
    users: Vec<User>,
    selected: Vec<User>,
}

impl<D: UserDirectory> UserPicker<D> {
    pub fn new(directory: D, current_user_id: impl Into<String>) -> Self {
        Self {
            directory,
            current_user_id: current_user_id.into(),
            page_size: DEFAULT_PAGE_SIZE,
            query: None,
            has_next: true,
            users: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected(&self) -> &[User] {
        &self.selected
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Starts the listing over from the first page, replacing the current list.
    pub fn refresh(&mut self) -> Result<(), DirectoryError> {
        self.query = Some(UserListQuery::new(self.page_size));
        self.has_next = true;
        self.load(true)
    }

    /// Appends the next page, if the directory has one.
    pub fn load_more(&mut self) -> Result<(), DirectoryError> {
        if self.query.is_none() {
            self.query = Some(UserListQuery::new(self.page_size));
            self.has_next = true;
        }
        self.load(false)
    }

    /// Replaces the list with users whose id matches `text`. Empty text
    /// goes back to the full listing.
    pub fn search(&mut self, text: &str) -> Result<(), DirectoryError> {
        let text = text.trim();
        if text.is_empty() {
            return self.refresh();
        }
        self.query = Some(UserListQuery::new(self.page_size).with_user_ids(vec![text.to_string()]));
        self.has_next = true;
        self.load(true)
    }

    /// Whether reaching row `index` should trigger `load_more`.
    pub fn should_load_more(&self, index: usize) -> bool {
        self.has_next && !self.users.is_empty() && index + 1 == self.users.len()
    }

    fn load(&mut self, replace: bool) -> Result<(), DirectoryError> {
        if !self.has_next {
            return Ok(());
        }
        let Some(query) = self.query.as_mut() else {
            return Ok(());
        };

        let page = self.directory.load_page(query).inspect_err(|e| {
            warn!(error = %e, "failed to load user list");
        })?;

        query.cursor = page.next_cursor;
        self.has_next = query.cursor.is_some();

        if replace {
            self.users.clear();
        }
        let before = self.users.len();
        self.users.extend(
            page.users
                .into_iter()
                .filter(|u| u.user_id != self.current_user_id),
        );
        debug!(
            added = self.users.len() - before,
            total = self.users.len(),
            has_next = self.has_next,
            "loaded user page"
        );
        Ok(())
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.selected.iter().any(|u| u.user_id == user_id)
    }

    /// Selects or deselects the listed user at `index`. Returns whether the
    /// user is selected afterwards; out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(user) = self.users.get(index) else {
            return false;
        };
        if self.is_selected(&user.user_id) {
            let user_id = user.user_id.clone();
            self.deselect(&user_id);
            false
        } else {
            self.selected.push(user.clone());
            true
        }
    }

    pub fn deselect(&mut self, user_id: &str) {
        self.selected.retain(|u| u.user_id != user_id);
    }

    /// Removes the `position`-th entry of the selection strip.
    pub fn remove_selected(&mut self, position: usize) -> Option<User> {
        (position < self.selected.len()).then(|| self.selected.remove(position))
    }

    /// The "next" step is available once somebody is picked.
    pub fn can_proceed(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Parameters for creating a channel with the current selection.
    pub fn channel_params(&self, name: impl Into<String>) -> ChannelParams {
        ChannelParams::new(name, self.selected.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticDirectory;

    fn picker(n: usize) -> UserPicker<StaticDirectory> {
        let mut users: Vec<User> = (0..n).map(|i| User::new(format!("u{}", i))).collect();
        users.insert(1, User::new("me"));
        UserPicker::new(StaticDirectory::new(users), "me").with_page_size(3)
    }

    fn ids(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.user_id.as_str()).collect()
    }

    #[test]
    fn refresh_and_paging_skip_current_user() {
        let mut p = picker(4);
        p.refresh().unwrap();
        assert_eq!(ids(p.users()), vec!["u0", "u1"]);
        assert!(p.has_next());
        assert!(p.should_load_more(1));

        p.load_more().unwrap();
        assert_eq!(ids(p.users()), vec!["u0", "u1", "u2", "u3"]);
        assert!(!p.has_next());

        p.load_more().unwrap();
        assert_eq!(p.users().len(), 4);
        assert!(!p.should_load_more(3));
    }

    #[test]
    fn load_more_without_refresh_starts_listing() {
        let mut p = picker(2);
        p.load_more().unwrap();
        assert_eq!(ids(p.users()), vec!["u0", "u1"]);
    }

    #[test]
    fn search_replaces_and_empty_search_resets() {
        let mut p = picker(4);
        p.refresh().unwrap();
        p.search("u3").unwrap();
        assert_eq!(ids(p.users()), vec!["u3"]);

        p.search("me").unwrap();
        assert!(p.users().is_empty());

        p.search("  ").unwrap();
        assert_eq!(ids(p.users()), vec!["u0", "u1"]);
    }

    #[test]
    fn selection_toggles() {
        let mut p = picker(4);
        p.refresh().unwrap();
        assert!(!p.can_proceed());

        assert!(p.toggle(0));
        assert!(p.toggle(1));
        assert!(p.can_proceed());
        assert_eq!(ids(p.selected()), vec!["u0", "u1"]);

        assert!(!p.toggle(0));
        assert_eq!(ids(p.selected()), vec!["u1"]);
        assert!(!p.toggle(42));

        assert_eq!(p.remove_selected(0).map(|u| u.user_id), Some("u1".to_string()));
        assert_eq!(p.remove_selected(0), None);
        assert!(!p.can_proceed());
    }

    struct FailingDirectory;

    impl UserDirectory for FailingDirectory {
        fn load_page(&mut self, _query: &UserListQuery) -> Result<crate::directory::UserPage, DirectoryError> {
            Err(DirectoryError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn directory_errors_propagate_and_keep_list() {
        let mut p = UserPicker::new(FailingDirectory, "me");
        assert_eq!(p.refresh(), Err(DirectoryError::Unavailable("offline".into())));
        assert!(p.users().is_empty());
    }
}
