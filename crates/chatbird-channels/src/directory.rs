use serde::{Deserialize, Serialize};

use chatbird_types::User;

use crate::error::DirectoryError;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page request against the application user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListQuery {
    pub limit: usize,
    /// Restricts results to these user ids when non-empty.
    #[serde(default)]
    pub user_ids_filter: Vec<String>,
    /// Opaque position returned by the previous page; `None` starts from the top.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl UserListQuery {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            user_ids_filter: Vec::new(),
            cursor: None,
        }
    }

    pub fn with_user_ids(mut self, ids: Vec<String>) -> Self {
        self.user_ids_filter = ids;
        self
    }
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    /// `None` once the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// Source of application users. Implemented over the messaging backend;
/// network work happens behind this call.
pub trait UserDirectory {
    fn load_page(&mut self, query: &UserListQuery) -> Result<UserPage, DirectoryError>;
}

impl<D: UserDirectory + ?Sized> UserDirectory for &mut D {
    fn load_page(&mut self, query: &UserListQuery) -> Result<UserPage, DirectoryError> {
        (**self).load_page(query)
    }
}

/// In-memory directory, paging over a fixed user list. Useful for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: Vec<User>,
}

impl StaticDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserDirectory for StaticDirectory {
    fn load_page(&mut self, query: &UserListQuery) -> Result<UserPage, DirectoryError> {
        let start = match &query.cursor {
            None => 0,
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|_| DirectoryError::InvalidCursor(cursor.clone()))?,
        };

        let matching: Vec<&User> = self
            .users
            .iter()
            .filter(|u| query.user_ids_filter.is_empty() || query.user_ids_filter.contains(&u.user_id))
            .collect();

        let end = start
            .saturating_add(query.limit.max(1))
            .min(matching.len());
        let users = matching
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|u| (*u).clone())
            .collect();
        let next_cursor = (end < matching.len()).then(|| end.to_string());

        Ok(UserPage { users, next_cursor })
    }
}
