use tracing::debug;

use super::item::Movie;
use super::sort::{self, SortAlgorithm};
use super::user::User;
use super::{MAX_MOVIES, MAX_USERS};

/// In-memory catalogue of movies and users.
///
/// Both collections are plain vectors with an explicit capacity check at the
/// boundary. Storage order is observable: searches return it, sorts
/// rearrange it, and removal closes the gap without disturbing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
    users: Vec<User>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Rebuild a catalogue from already-decoded records, enforcing the
    /// capacity bounds. User ids are taken as-is.
    pub fn from_records(movies: Vec<Movie>, users: Vec<User>) -> StoreResult<Catalog> {
        if movies.len() > MAX_MOVIES {
            return Err(StoreError::CapacityExceeded("movies"));
        }
        if users.len() > MAX_USERS {
            return Err(StoreError::CapacityExceeded("users"));
        }
        Ok(Catalog { movies, users })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Append a movie. Duplicate titles are allowed; later title lookups
    /// resolve to the earlier record.
    pub fn add_movie(&mut self, movie: Movie) -> StoreResult<()> {
        if self.movies.len() >= MAX_MOVIES {
            return Err(StoreError::CapacityExceeded("movies"));
        }
        debug!("Adding movie: {}", movie.title);
        self.movies.push(movie);
        Ok(())
    }

    /// Remove the first movie with exactly this title and return it.
    /// User rating tables are left alone, so entries for the removed title
    /// survive as danglers.
    pub fn remove_movie(&mut self, title: &str) -> StoreResult<Movie> {
        let index = self
            .movies
            .iter()
            .position(|m| m.title == title)
            .ok_or_else(|| StoreError::MovieNotFound(title.to_string()))?;
        debug!("Removing movie: {}", title);
        Ok(self.movies.remove(index))
    }

    pub fn movie_by_title(&self, title: &str) -> StoreResult<&Movie> {
        self.movies
            .iter()
            .find(|m| m.title == title)
            .ok_or_else(|| StoreError::MovieNotFound(title.to_string()))
    }

    /// Register a user under the next free id (`len + 1`). Whatever id the
    /// caller put in the record is overwritten.
    pub fn add_user(&mut self, mut user: User) -> StoreResult<i32> {
        if self.users.len() >= MAX_USERS {
            return Err(StoreError::CapacityExceeded("users"));
        }
        let id = self.users.len() as i32 + 1;
        user.id = id;
        debug!("Adding user {} with id {}", user.name, id);
        self.users.push(user);
        Ok(id)
    }

    /// Register a fresh user by name and return the assigned id.
    pub fn create_user(&mut self, name: &str) -> StoreResult<i32> {
        self.add_user(User::new(0, name))
    }

    pub fn user_by_id(&self, id: i32) -> StoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))
    }

    /// Record `value` as `user_id`'s rating of the movie called `title`.
    ///
    /// Checks run in a fixed order: the value must be in range, the movie
    /// must exist, the user must exist, and only then is the rating table
    /// touched.
    pub fn rate_movie(
        &mut self,
        user_id: i32,
        title: &str,
        value: f32,
    ) -> StoreResult<RatingOutcome> {
        if !(0.0..=10.0).contains(&value) {
            return Err(StoreError::InvalidRating(value));
        }
        self.movie_by_title(title)?;
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;
        user.rate(title, value)
    }

    /// Reorder the movie collection by rating, highest first. The reordering
    /// is visible to every later view and is what gets persisted.
    pub fn sort_by_rating(&mut self, algorithm: SortAlgorithm) {
        debug!("Sorting {} movies with {} sort", self.movies.len(), algorithm.as_str());
        sort::by_rating_desc(&mut self.movies, algorithm);
    }
}

/// How [`Catalog::rate_movie`] changed the user's rating table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingOutcome {
    Added,
    Updated,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(&'static str),
    #[error("Movie not found: {0}")]
    MovieNotFound(String),
    #[error("User not found: id {0}")]
    UserNotFound(i32),
    #[error("Invalid rating {0}: must be between 0 and 10")]
    InvalidRating(f32),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f32) -> Movie {
        Movie::new(title, 2000, "Director", &["Lead"], "Drama", rating, 100)
    }

    #[test]
    fn test_add_and_find_movie() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("Heat", 8.3)).unwrap();
        assert_eq!(catalog.movie_by_title("Heat").unwrap().rating, 8.3);
        assert!(matches!(
            catalog.movie_by_title("heat"),
            Err(StoreError::MovieNotFound(_))
        ));
    }

    #[test]
    fn test_movie_capacity() {
        let mut catalog = Catalog::new();
        for i in 0..MAX_MOVIES {
            catalog.add_movie(movie(&format!("Movie {}", i), 5.0)).unwrap();
        }
        assert!(matches!(
            catalog.add_movie(movie("Overflow", 5.0)),
            Err(StoreError::CapacityExceeded("movies"))
        ));
        assert_eq!(catalog.movies().len(), MAX_MOVIES);
    }

    #[test]
    fn test_remove_movie_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("A", 1.0)).unwrap();
        catalog.add_movie(movie("B", 2.0)).unwrap();
        catalog.add_movie(movie("C", 3.0)).unwrap();

        let removed = catalog.remove_movie("B").unwrap();
        assert_eq!(removed.title, "B");

        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_missing_movie() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("A", 1.0)).unwrap();
        assert!(catalog.remove_movie("Z").is_err());
        assert_eq!(catalog.movies().len(), 1);
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("Twin", 1.0)).unwrap();
        catalog.add_movie(movie("Twin", 2.0)).unwrap();

        assert_eq!(catalog.movie_by_title("Twin").unwrap().rating, 1.0);
        let removed = catalog.remove_movie("Twin").unwrap();
        assert_eq!(removed.rating, 1.0);
        assert_eq!(catalog.movie_by_title("Twin").unwrap().rating, 2.0);
    }

    #[test]
    fn test_user_ids_count_up_from_one() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.create_user("Alice").unwrap(), 1);
        assert_eq!(catalog.create_user("Bob").unwrap(), 2);
        assert_eq!(catalog.user_by_id(2).unwrap().name, "Bob");
        assert!(catalog.user_by_id(3).is_err());
    }

    #[test]
    fn test_user_capacity() {
        let mut catalog = Catalog::new();
        for i in 0..MAX_USERS {
            catalog.create_user(&format!("User {}", i)).unwrap();
        }
        assert!(matches!(
            catalog.create_user("Overflow"),
            Err(StoreError::CapacityExceeded("users"))
        ));
    }

    #[test]
    fn test_rate_movie_validation_order() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("Heat", 8.3)).unwrap();
        catalog.create_user("Alice").unwrap();

        // Out-of-range value wins even when movie and user are both missing.
        assert!(matches!(
            catalog.rate_movie(99, "Nope", 11.0),
            Err(StoreError::InvalidRating(_))
        ));
        // Missing movie is reported before missing user.
        assert!(matches!(
            catalog.rate_movie(99, "Nope", 5.0),
            Err(StoreError::MovieNotFound(_))
        ));
        assert!(matches!(
            catalog.rate_movie(99, "Heat", 5.0),
            Err(StoreError::UserNotFound(99))
        ));
        assert_eq!(
            catalog.rate_movie(1, "Heat", 5.0).unwrap(),
            RatingOutcome::Added
        );
    }

    #[test]
    fn test_rate_movie_boundary_values() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("Heat", 8.3)).unwrap();
        catalog.create_user("Alice").unwrap();

        assert!(catalog.rate_movie(1, "Heat", 0.0).is_ok());
        assert!(catalog.rate_movie(1, "Heat", 10.0).is_ok());
        assert!(catalog.rate_movie(1, "Heat", -0.1).is_err());
        assert!(catalog.rate_movie(1, "Heat", 10.1).is_err());
        assert!(catalog.rate_movie(1, "Heat", f32::NAN).is_err());
    }

    #[test]
    fn test_rating_survives_movie_removal() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("Heat", 8.3)).unwrap();
        catalog.create_user("Alice").unwrap();
        catalog.rate_movie(1, "Heat", 9.0).unwrap();

        catalog.remove_movie("Heat").unwrap();
        // The dangling entry stays, but re-rating the gone title now fails.
        assert_eq!(catalog.user_by_id(1).unwrap().rating_for("Heat"), Some(9.0));
        assert!(matches!(
            catalog.rate_movie(1, "Heat", 5.0),
            Err(StoreError::MovieNotFound(_))
        ));
    }

    #[test]
    fn test_sort_then_delete() {
        let mut catalog = Catalog::new();
        catalog.add_movie(movie("B", 9.2)).unwrap();
        catalog.add_movie(movie("C", 8.9)).unwrap();
        catalog.add_movie(movie("A", 9.3)).unwrap();

        catalog.sort_by_rating(SortAlgorithm::Selection);
        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);

        catalog.remove_movie("B").unwrap();
        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_from_records_rejects_oversize() {
        let movies: Vec<Movie> = (0..MAX_MOVIES + 1)
            .map(|i| movie(&format!("M{}", i), 5.0))
            .collect();
        assert!(Catalog::from_records(movies, Vec::new()).is_err());

        let users: Vec<User> = (0..MAX_USERS + 1)
            .map(|i| User::new(i as i32 + 1, "U"))
            .collect();
        assert!(Catalog::from_records(Vec::new(), users).is_err());
    }

    #[test]
    fn test_from_records_keeps_ids() {
        let users = vec![User::new(7, "Greta")];
        let catalog = Catalog::from_records(Vec::new(), users).unwrap();
        assert_eq!(catalog.user_by_id(7).unwrap().name, "Greta");
    }
}
