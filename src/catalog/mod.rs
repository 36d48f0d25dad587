pub mod item;
pub mod search;
pub mod similar;
pub mod sort;
pub mod store;
pub mod user;

pub use item::Movie;
pub use similar::{Recommendation, SimilarMovie};
pub use sort::SortAlgorithm;
pub use store::{Catalog, RatingOutcome, StoreError, StoreResult};
pub use user::{RatingEntry, User};

/// Capacity bounds, matching the fixed record counts of the database file
/// format. The collections are ordinary vectors but refuse to grow past
/// these.
pub const MAX_MOVIES: usize = 50;
pub const MAX_USERS: usize = 20;
pub const MAX_CAST: usize = 5;
/// One rating slot per catalogue slot, so a user can rate every movie once.
pub const MAX_RATINGS: usize = MAX_MOVIES;
