use super::store::{RatingOutcome, StoreError, StoreResult};
use super::MAX_RATINGS;

/// One entry in a user's rating table, keyed by movie title.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEntry {
    pub title: String,
    pub value: f32,
}

/// A registered user and the ratings they have given.
///
/// The table keeps insertion order. The first entry a user ever made stays
/// first, which is the order recommendation tie-breaks rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub ratings: Vec<RatingEntry>,
}

impl User {
    pub fn new(id: i32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            ratings: Vec::new(),
        }
    }

    /// Record a rating for `title`, updating in place when the user already
    /// rated it. Value validation happens at the catalogue boundary.
    pub(crate) fn rate(&mut self, title: &str, value: f32) -> StoreResult<RatingOutcome> {
        if let Some(entry) = self.ratings.iter_mut().find(|e| e.title == title) {
            entry.value = value;
            return Ok(RatingOutcome::Updated);
        }
        if self.ratings.len() >= MAX_RATINGS {
            return Err(StoreError::CapacityExceeded("ratings"));
        }
        self.ratings.push(RatingEntry {
            title: title.to_string(),
            value,
        });
        Ok(RatingOutcome::Added)
    }

    /// The rating this user gave `title`, if any.
    pub fn rating_for(&self, title: &str) -> Option<f32> {
        self.ratings
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.value)
    }

    pub fn has_rated(&self, title: &str) -> bool {
        self.rating_for(title).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_adds_then_updates() {
        let mut user = User::new(1, "Alice");
        assert_eq!(user.rate("Heat", 8.0).unwrap(), RatingOutcome::Added);
        assert_eq!(user.rating_for("Heat"), Some(8.0));

        assert_eq!(user.rate("Heat", 9.5).unwrap(), RatingOutcome::Updated);
        assert_eq!(user.rating_for("Heat"), Some(9.5));
        assert_eq!(user.ratings.len(), 1);
    }

    #[test]
    fn test_rate_preserves_insertion_order() {
        let mut user = User::new(1, "Alice");
        user.rate("First", 5.0).unwrap();
        user.rate("Second", 6.0).unwrap();
        user.rate("First", 7.0).unwrap();

        let titles: Vec<&str> = user.ratings.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_rate_full_table() {
        let mut user = User::new(1, "Alice");
        for i in 0..MAX_RATINGS {
            user.rate(&format!("Movie {}", i), 5.0).unwrap();
        }
        assert!(matches!(
            user.rate("One more", 5.0),
            Err(StoreError::CapacityExceeded("ratings"))
        ));
        // Updating an existing entry still works when the table is full.
        assert_eq!(user.rate("Movie 0", 9.0).unwrap(), RatingOutcome::Updated);
    }

    #[test]
    fn test_has_rated() {
        let mut user = User::new(1, "Alice");
        assert!(!user.has_rated("Heat"));
        user.rate("Heat", 8.0).unwrap();
        assert!(user.has_rated("Heat"));
    }
}
