//! The favorites list: pinned oracles in user-chosen order.
//!
//! Favorites are an explicitly owned ordered collection of locator
//! tokens. Drag-reorder is expressed as pure moves on a staged copy that
//! the caller commits or discards — there is no shared mutable ordering
//! state behind the scenes.

use serde::{Deserialize, Serialize};

/// The committed favorites list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    tokens: Vec<String>,
}

impl Favorites {
    /// Create an empty favorites list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tokens in display order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if the token is already pinned.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Pin a token at the end of the list. Returns false if already pinned.
    pub fn add(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if self.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Unpin a token. Returns false if it was not pinned.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Number of pinned tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if nothing is pinned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Begin a reorder: a working copy the UI mutates during the drag.
    pub fn stage(&self) -> FavoritesDraft {
        FavoritesDraft {
            tokens: self.tokens.clone(),
        }
    }

    /// Replace the committed order with a finished draft.
    pub fn commit(&mut self, draft: FavoritesDraft) {
        self.tokens = draft.tokens;
    }
}

/// An in-progress reorder of the favorites list.
///
/// Dropping the draft discards the reorder; only [`Favorites::commit`]
/// makes it visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesDraft {
    tokens: Vec<String>,
}

impl FavoritesDraft {
    /// The draft order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Move the element at `from` so it ends up at index `to`.
    ///
    /// Returns false (and changes nothing) if either index is out of
    /// range.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tokens.len() || to >= self.tokens.len() {
            return false;
        }
        let token = self.tokens.remove(from);
        self.tokens.insert(to, token);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Favorites {
        let mut favorites = Favorites::new();
        favorites.add("oracle-0-0");
        favorites.add("oracle-1-2");
        favorites.add("oracle-table-2-0");
        favorites
    }

    #[test]
    fn add_ignores_duplicates() {
        let mut favorites = sample();
        assert!(!favorites.add("oracle-0-0"));
        assert_eq!(favorites.len(), 3);
    }

    #[test]
    fn remove_unpins() {
        let mut favorites = sample();
        assert!(favorites.remove("oracle-1-2"));
        assert!(!favorites.remove("oracle-1-2"));
        assert_eq!(favorites.tokens(), ["oracle-0-0", "oracle-table-2-0"]);
    }

    #[test]
    fn staged_moves_do_not_touch_the_committed_list() {
        let favorites = sample();
        let mut draft = favorites.stage();
        assert!(draft.move_to(0, 2));
        assert_eq!(
            draft.tokens(),
            ["oracle-1-2", "oracle-table-2-0", "oracle-0-0"]
        );
        // Draft dropped without commit: order unchanged.
        assert_eq!(
            favorites.tokens(),
            ["oracle-0-0", "oracle-1-2", "oracle-table-2-0"]
        );
    }

    #[test]
    fn commit_applies_the_draft() {
        let mut favorites = sample();
        let mut draft = favorites.stage();
        draft.move_to(2, 0);
        favorites.commit(draft);
        assert_eq!(
            favorites.tokens(),
            ["oracle-table-2-0", "oracle-0-0", "oracle-1-2"]
        );
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let favorites = sample();
        let mut draft = favorites.stage();
        assert!(!draft.move_to(0, 3));
        assert!(!draft.move_to(5, 0));
        assert_eq!(draft.tokens(), favorites.tokens());
    }
}
