//! Linear-scan filters over the movie collection.
//!
//! Every filter is a full pass that borrows the matching records in storage
//! order. All comparisons are case-sensitive.

use super::item::Movie;

/// Movies whose title contains `pattern` as a substring. The empty pattern
/// matches everything.
pub fn by_title<'a>(movies: &'a [Movie], pattern: &str) -> Vec<&'a Movie> {
    movies.iter().filter(|m| m.title.contains(pattern)).collect()
}

/// Movies released exactly in `year`.
pub fn by_year(movies: &[Movie], year: i32) -> Vec<&Movie> {
    movies.iter().filter(|m| m.year == year).collect()
}

/// Movies whose genre matches `genre` exactly.
pub fn by_genre<'a>(movies: &'a [Movie], genre: &str) -> Vec<&'a Movie> {
    movies.iter().filter(|m| m.genre == genre).collect()
}

/// Movies whose director matches `director` exactly.
pub fn by_director<'a>(movies: &'a [Movie], director: &str) -> Vec<&'a Movie> {
    movies.iter().filter(|m| m.director == director).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Vec<Movie> {
        vec![
            Movie::new("The Matrix", 1999, "Lana Wachowski", &[], "Sci-Fi", 8.7, 136),
            Movie::new("The Matrix Reloaded", 2003, "Lana Wachowski", &[], "Sci-Fi", 7.2, 138),
            Movie::new("Heat", 1995, "Michael Mann", &[], "Crime", 8.3, 170),
            Movie::new("Collateral", 2004, "Michael Mann", &[], "Crime", 7.5, 120),
        ]
    }

    #[test]
    fn test_title_substring() {
        let movies = fixtures();
        let hits = by_title(&movies, "Matrix");
        let titles: Vec<&str> = hits.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Matrix", "The Matrix Reloaded"]);
    }

    #[test]
    fn test_title_is_case_sensitive() {
        let movies = fixtures();
        assert!(by_title(&movies, "matrix").is_empty());
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        let movies = fixtures();
        assert_eq!(by_title(&movies, "").len(), movies.len());
    }

    #[test]
    fn test_year_exact() {
        let movies = fixtures();
        let hits = by_year(&movies, 1999);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Matrix");
        assert!(by_year(&movies, 1990).is_empty());
    }

    #[test]
    fn test_genre_exact_and_case_sensitive() {
        let movies = fixtures();
        assert_eq!(by_genre(&movies, "Crime").len(), 2);
        assert!(by_genre(&movies, "crime").is_empty());
        assert!(by_genre(&movies, "Sci").is_empty());
    }

    #[test]
    fn test_director_preserves_storage_order() {
        let movies = fixtures();
        let hits = by_director(&movies, "Michael Mann");
        let titles: Vec<&str> = hits.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Collateral"]);
    }

    #[test]
    fn test_empty_collection() {
        let movies: Vec<Movie> = Vec::new();
        assert!(by_title(&movies, "x").is_empty());
        assert!(by_year(&movies, 2000).is_empty());
        assert!(by_genre(&movies, "Drama").is_empty());
        assert!(by_director(&movies, "Anyone").is_empty());
    }
}
