//! Rating-descending reorderings of the movie collection.
//!
//! Two quadratic textbook algorithms, selectable by the caller. Both are
//! stable, so equal-rated movies keep their relative storage order and the
//! two variants produce identical results on every input.

use super::item::Movie;

/// Which sort implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
}

impl SortAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
        }
    }
}

/// Reorder `movies` by rating, highest first.
pub fn by_rating_desc(movies: &mut [Movie], algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Bubble => bubble(movies),
        SortAlgorithm::Selection => selection(movies),
    }
}

/// Adjacent-swap passes. Swapping only on a strict comparison leaves
/// equal-rated neighbours untouched, which is what makes this stable.
fn bubble(movies: &mut [Movie]) {
    let n = movies.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if movies[j].rating < movies[j + 1].rating {
                movies.swap(j, j + 1);
            }
        }
    }
}

/// Repeated max extraction. The first maximum of the unsorted tail is
/// rotated to the tail's front instead of swapped there, so the displaced
/// run keeps its order and the sort stays stable.
fn selection(movies: &mut [Movie]) {
    let n = movies.len();
    for i in 0..n {
        let mut max_index = i;
        for j in i + 1..n {
            if movies[j].rating > movies[max_index].rating {
                max_index = j;
            }
        }
        if max_index != i {
            movies[i..=max_index].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f32) -> Movie {
        Movie::new(title, 2000, "Director", &[], "Drama", rating, 100)
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_bubble_sorts_descending() {
        let mut movies = vec![movie("Low", 2.0), movie("High", 9.0), movie("Mid", 5.0)];
        by_rating_desc(&mut movies, SortAlgorithm::Bubble);
        assert_eq!(titles(&movies), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_selection_sorts_descending() {
        let mut movies = vec![movie("Low", 2.0), movie("High", 9.0), movie("Mid", 5.0)];
        by_rating_desc(&mut movies, SortAlgorithm::Selection);
        assert_eq!(titles(&movies), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_bubble_is_stable() {
        let mut movies = vec![
            movie("A", 7.0),
            movie("B", 9.0),
            movie("C", 7.0),
            movie("D", 7.0),
        ];
        by_rating_desc(&mut movies, SortAlgorithm::Bubble);
        assert_eq!(titles(&movies), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_selection_is_stable() {
        let mut movies = vec![
            movie("A", 7.0),
            movie("B", 9.0),
            movie("C", 7.0),
            movie("D", 9.0),
            movie("E", 7.0),
        ];
        by_rating_desc(&mut movies, SortAlgorithm::Selection);
        assert_eq!(titles(&movies), vec!["B", "D", "A", "C", "E"]);
    }

    #[test]
    fn test_algorithms_agree() {
        let input = vec![
            movie("A", 5.5),
            movie("B", 5.5),
            movie("C", 9.9),
            movie("D", 0.0),
            movie("E", 5.5),
            movie("F", 7.1),
            movie("G", 9.9),
        ];
        let mut bubbled = input.clone();
        let mut selected = input;
        by_rating_desc(&mut bubbled, SortAlgorithm::Bubble);
        by_rating_desc(&mut selected, SortAlgorithm::Selection);
        assert_eq!(bubbled, selected);
    }

    #[test]
    fn test_empty_and_single() {
        let mut none: Vec<Movie> = Vec::new();
        by_rating_desc(&mut none, SortAlgorithm::Bubble);
        assert!(none.is_empty());

        let mut one = vec![movie("Only", 5.0)];
        by_rating_desc(&mut one, SortAlgorithm::Selection);
        assert_eq!(titles(&one), vec!["Only"]);
    }

    #[test]
    fn test_already_sorted_is_untouched() {
        let mut movies = vec![movie("A", 9.0), movie("B", 8.0), movie("C", 7.0)];
        let before = movies.clone();
        by_rating_desc(&mut movies, SortAlgorithm::Bubble);
        assert_eq!(movies, before);
    }
}
