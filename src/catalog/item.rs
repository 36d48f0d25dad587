use super::MAX_CAST;

/// A single movie record.
///
/// Titles act as the lookup key by convention: nothing enforces uniqueness,
/// and every title-based operation matches the first occurrence in storage
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub cast: Vec<String>,
    pub genre: String,
    pub rating: f32,
    pub duration: i32,
}

impl Movie {
    /// Build a movie from its field list. Cast lists longer than
    /// [`MAX_CAST`] keep only the leading entries.
    pub fn new(
        title: &str,
        year: i32,
        director: &str,
        cast: &[&str],
        genre: &str,
        rating: f32,
        duration: i32,
    ) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            director: director.to_string(),
            cast: cast.iter().take(MAX_CAST).map(|s| s.to_string()).collect(),
            genre: genre.to_string(),
            rating,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_cast() {
        let movie = Movie::new(
            "Ensemble",
            2001,
            "Someone",
            &["A", "B", "C", "D", "E", "F", "G"],
            "Drama",
            7.0,
            120,
        );
        assert_eq!(movie.cast, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_new_keeps_short_cast() {
        let movie = Movie::new("Solo", 2001, "Someone", &["A"], "Drama", 7.0, 120);
        assert_eq!(movie.cast, vec!["A"]);
    }
}
