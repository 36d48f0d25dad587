//! The interactive console menu.
//!
//! All input parsing and output formatting lives here; the handlers call
//! into the catalogue API and render whatever comes back. Operational
//! errors are printed and the loop carries on, only IO failures on the
//! console itself abort it.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::catalog::{
    search, similar, Catalog, Movie, RatingOutcome, SortAlgorithm, StoreError, MAX_CAST,
};
use crate::config::Config;
use crate::db;
use crate::session::Session;

/// Run the menu loop on the process console until the user exits.
pub fn run(catalog: &mut Catalog, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(catalog, config, &mut stdin.lock(), &mut stdout.lock())
}

fn run_loop<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let mut session = Session::new();

    loop {
        print_menu(out)?;
        let choice = match read_line(input)? {
            Some(line) => line,
            // End of input counts as an exit request.
            None => return exit(catalog, config, out),
        };

        if let Some(user) = session.user(catalog) {
            writeln!(out, "[Currently logged in as: {}]", user.name)?;
        }

        debug!("Menu choice: {}", choice.trim());
        match choice.trim() {
            "1" => search_title(catalog, input, out)?,
            "2" => search_year(catalog, input, out)?,
            "3" => add_movie(catalog, input, out)?,
            "4" => delete_movie(catalog, input, out)?,
            "5" => view_all(catalog, out)?,
            "6" => search_genre(catalog, input, out)?,
            "7" => search_director(catalog, input, out)?,
            "8" => sort_movies(catalog, SortAlgorithm::Bubble, out)?,
            "9" => sort_movies(catalog, SortAlgorithm::Selection, out)?,
            "10" => login_menu(catalog, &mut session, input, out)?,
            "11" => rate_movie(catalog, &session, input, out)?,
            "12" => view_ratings(catalog, &session, out)?,
            "13" => recommendations(catalog, &session, config, out)?,
            "14" => similar_movies(catalog, config, input, out)?,
            "15" => save_database(catalog, config, out)?,
            "16" => return exit(catalog, config, out),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn exit<W: Write>(catalog: &Catalog, config: &Config, out: &mut W) -> io::Result<()> {
    writeln!(out, "Saving database before exiting...")?;
    save_database(catalog, config, out)?;
    writeln!(out, "Exiting...")
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Movie Database Search System")?;
    writeln!(out, "1. Search by Title")?;
    writeln!(out, "2. Search by Release Year")?;
    writeln!(out, "3. Add Movie")?;
    writeln!(out, "4. Delete Movie")?;
    writeln!(out, "5. View All Movies")?;
    writeln!(out, "6. Search by Genre")?;
    writeln!(out, "7. Search by Director")?;
    writeln!(out, "8. Sort by Rating (Bubble Sort)")?;
    writeln!(out, "9. Sort by Rating (Selection Sort)")?;
    writeln!(out, "10. User Login/Switch")?;
    writeln!(out, "11. Rate a Movie")?;
    writeln!(out, "12. View My Ratings")?;
    writeln!(out, "13. Get Movie Recommendations")?;
    writeln!(out, "14. Find Similar Movies")?;
    writeln!(out, "15. Save Database")?;
    writeln!(out, "16. Exit")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

fn search_title<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let pattern = match prompt(input, out, "Enter movie title: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let results = search::by_title(catalog.movies(), &pattern);
    if results.is_empty() {
        writeln!(out, "No movies found with title: {}", pattern)?;
    }
    for movie in results {
        print_movie(out, movie)?;
    }
    Ok(())
}

fn search_year<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let year = match prompt_parse::<i32, _, _>(input, out, "Enter release year: ")? {
        Some(year) => year,
        None => return Ok(()),
    };
    let results = search::by_year(catalog.movies(), year);
    if results.is_empty() {
        writeln!(out, "No movies found with release year: {}", year)?;
    }
    for movie in results {
        print_movie(out, movie)?;
    }
    Ok(())
}

fn search_genre<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let genre = match prompt(input, out, "Enter genre: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let results = search::by_genre(catalog.movies(), &genre);
    if results.is_empty() {
        writeln!(out, "No movies found with genre: {}", genre)?;
    }
    for movie in results {
        print_movie(out, movie)?;
    }
    Ok(())
}

fn search_director<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let director = match prompt(input, out, "Enter director: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let results = search::by_director(catalog.movies(), &director);
    if results.is_empty() {
        writeln!(out, "No movies found with director: {}", director)?;
    }
    for movie in results {
        print_movie(out, movie)?;
    }
    Ok(())
}

fn add_movie<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let title = match prompt(input, out, "Enter movie title: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let year = match prompt_parse::<i32, _, _>(input, out, "Enter release year: ")? {
        Some(year) => year,
        None => return Ok(()),
    };
    let director = match prompt(input, out, "Enter director: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let genre = match prompt(input, out, "Enter genre: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let rating = match prompt_parse::<f32, _, _>(input, out, "Enter rating: ")? {
        Some(rating) => rating,
        None => return Ok(()),
    };
    let duration = match prompt_parse::<i32, _, _>(input, out, "Enter duration (in minutes): ")? {
        Some(duration) => duration,
        None => return Ok(()),
    };
    let count = match prompt_parse::<i32, _, _>(input, out, "Enter number of cast members (max 5): ")? {
        Some(count) => count.clamp(0, MAX_CAST as i32) as usize,
        None => return Ok(()),
    };

    let mut cast = Vec::with_capacity(count);
    for i in 0..count {
        let member = match prompt(input, out, &format!("Enter cast member {}: ", i + 1))? {
            Some(line) => line,
            None => return Ok(()),
        };
        cast.push(member);
    }
    let cast: Vec<&str> = cast.iter().map(|s| s.as_str()).collect();

    let movie = Movie::new(&title, year, &director, &cast, &genre, rating, duration);
    match catalog.add_movie(movie) {
        Ok(()) => writeln!(out, "Movie added successfully!"),
        Err(_) => writeln!(out, "Error: Database is full."),
    }
}

fn delete_movie<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let title = match prompt(input, out, "Enter movie title to delete: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    match catalog.remove_movie(&title) {
        Ok(_) => writeln!(out, "Movie deleted successfully!"),
        Err(_) => writeln!(out, "Movie not found!"),
    }
}

fn view_all<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    if catalog.movies().is_empty() {
        return writeln!(out, "No movies in the database.");
    }
    for movie in catalog.movies() {
        print_movie(out, movie)?;
    }
    Ok(())
}

fn sort_movies<W: Write>(
    catalog: &mut Catalog,
    algorithm: SortAlgorithm,
    out: &mut W,
) -> io::Result<()> {
    catalog.sort_by_rating(algorithm);
    match algorithm {
        SortAlgorithm::Bubble => writeln!(out, "Movies sorted by rating (Bubble Sort)!")?,
        SortAlgorithm::Selection => writeln!(out, "Movies sorted by rating (Selection Sort)!")?,
    }
    view_all(catalog, out)
}

fn login_menu<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "1. Login as existing user")?;
    writeln!(out, "2. Create new user")?;
    let option = match prompt(input, out, "Enter option: ")? {
        Some(line) => line,
        None => return Ok(()),
    };

    match option.trim() {
        "1" => {
            writeln!(out, "Available users:")?;
            for user in catalog.users() {
                writeln!(out, "{}: {}", user.id, user.name)?;
            }
            let id = match prompt_parse::<i32, _, _>(input, out, "Enter user ID: ")? {
                Some(id) => id,
                None => return Ok(()),
            };
            match session.login(catalog, id) {
                Ok(()) => {
                    if let Some(user) = session.user(catalog) {
                        writeln!(out, "Logged in as {}", user.name)?;
                    }
                }
                Err(_) => writeln!(out, "User not found!")?,
            }
        }
        "2" => {
            let name = match prompt(input, out, "Enter username: ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            match catalog.create_user(&name) {
                Ok(id) => {
                    // A freshly created user is logged in right away.
                    if let Err(e) = session.login(catalog, id) {
                        warn!("Login after user creation failed: {}", e);
                    }
                    writeln!(out, "Created user {} with ID {}", name, id)?;
                }
                Err(_) => writeln!(out, "Error: Maximum users reached.")?,
            }
        }
        _ => {}
    }
    Ok(())
}

fn rate_movie<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let user_id = match session.user_id() {
        Some(id) => id,
        None => return writeln!(out, "Please login first!"),
    };

    writeln!(out, "Available movies:")?;
    for movie in catalog.movies() {
        writeln!(out, "- {}", movie.title)?;
    }

    let title = match prompt(input, out, "Enter movie title: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let value = match prompt_parse::<f32, _, _>(input, out, "Enter rating (0-10): ")? {
        Some(value) => value,
        None => return Ok(()),
    };

    match catalog.rate_movie(user_id, &title, value) {
        Ok(RatingOutcome::Added) => writeln!(out, "Rating added successfully!"),
        Ok(RatingOutcome::Updated) => writeln!(out, "Rating updated successfully!"),
        Err(StoreError::InvalidRating(_)) => {
            writeln!(out, "Invalid rating! Please enter a rating between 0 and 10.")
        }
        Err(StoreError::MovieNotFound(_)) => writeln!(out, "Movie not found!"),
        Err(StoreError::CapacityExceeded(_)) => writeln!(out, "Error: Maximum ratings reached."),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}

fn view_ratings<W: Write>(catalog: &Catalog, session: &Session, out: &mut W) -> io::Result<()> {
    let user = match session.user(catalog) {
        Some(user) => user,
        None => return writeln!(out, "Please login first!"),
    };
    if user.ratings.is_empty() {
        return writeln!(out, "No ratings yet.");
    }
    writeln!(out, "Ratings by {}:", user.name)?;
    for entry in &user.ratings {
        writeln!(out, "{}: {}/10", entry.title, entry.value)?;
    }
    Ok(())
}

fn recommendations<W: Write>(
    catalog: &Catalog,
    session: &Session,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    let user = match session.user(catalog) {
        Some(user) => user,
        None => return writeln!(out, "Please login first!"),
    };

    match similar::recommend(catalog.movies(), user, config.similar_limit) {
        Ok(Some(rec)) => {
            writeln!(out)?;
            writeln!(out, "--- Recommendations for {} ---", user.name)?;
            writeln!(out, "Based on your highest rated movie ({}):", rec.based_on)?;
            for entry in &rec.matches {
                print_movie(out, entry.movie)?;
            }
            Ok(())
        }
        Ok(None) => writeln!(out, "Please rate some movies first to get recommendations."),
        Err(StoreError::MovieNotFound(_)) => writeln!(out, "Movie not found!"),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}

fn similar_movies<R: BufRead, W: Write>(
    catalog: &Catalog,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let title = match prompt(input, out, "Enter movie title to find similar movies: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    match similar::find_similar(catalog.movies(), &title, config.similar_limit) {
        Ok(matches) => {
            writeln!(out, "Similar movies to {}:", title)?;
            for entry in &matches {
                print_movie(out, entry.movie)?;
            }
            Ok(())
        }
        Err(StoreError::MovieNotFound(_)) => writeln!(out, "Movie not found!"),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}

fn save_database<W: Write>(catalog: &Catalog, config: &Config, out: &mut W) -> io::Result<()> {
    writeln!(out, "Attempting to save database to {}", config.database)?;
    writeln!(
        out,
        "Current movies: {}, Current users: {}",
        catalog.movies().len(),
        catalog.users().len()
    )?;
    match db::save(catalog, &config.database) {
        Ok(bytes) => writeln!(
            out,
            "Database saved successfully to {} ({} bytes)",
            config.database, bytes
        ),
        Err(e) => writeln!(out, "Error: Could not save database: {}", e),
    }
}

fn print_movie<W: Write>(out: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(out, "Title: {}", movie.title)?;
    writeln!(out, "Release Year: {}", movie.year)?;
    writeln!(out, "Director: {}", movie.director)?;
    writeln!(out, "Cast: {}", movie.cast.join(", "))?;
    writeln!(out, "Genre: {}", movie.genre)?;
    writeln!(out, "Rating: {}", movie.rating)?;
    writeln!(out, "Duration: {} minutes", movie.duration)?;
    writeln!(out, "--------------------------------------")
}

/// Read one line, without its terminator. `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

/// Prompt for a value parsed from one line. A line that does not parse is
/// reported and the whole action is abandoned.
fn prompt_parse<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<T>> {
    let line = match prompt(input, out, message)? {
        Some(line) => line,
        None => return Ok(None),
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid number: {}", line.trim())?;
            Ok(None)
        }
    }
}
