//! The fixed-width binary layout of the database file.
//!
//! Every field is written explicitly in little-endian order with no
//! alignment padding, so the encoded form never depends on in-memory
//! layout:
//!
//! ```text
//! signature    8 bytes   "MVDB100\0"
//! movie count  i32       then that many movie records
//! user count   i32       then that many user records
//!
//! movie record (816 bytes):
//!   title       string field
//!   year        i32
//!   director    string field
//!   cast count  i32, 0..=5
//!   cast        5 string fields, unused slots zeroed
//!   genre       string field
//!   rating      f32
//!   duration    i32
//!
//! user record (5358 bytes):
//!   id            i32
//!   name          string field
//!   rating table  50 slots of 105 bytes each:
//!                   title string field, value f32, used flag u8
//!   rating count  i32, 0..=50
//! ```
//!
//! A string field is a fixed 100-byte buffer holding NUL-padded UTF-8.
//! Values that do not fit are truncated on a character boundary, keeping
//! room for a terminating NUL.
//!
//! Decoding validates as it goes and reports the first anomaly as
//! [`DbError::Corrupt`]; nothing partial ever escapes. Bytes after the last
//! user record are ignored.

use std::io::{self, Read, Write};

use crate::catalog::{Catalog, Movie, RatingEntry, User};
use crate::catalog::{MAX_CAST, MAX_MOVIES, MAX_RATINGS, MAX_USERS};

use super::{DbError, DbResult};

/// Magic bytes at the start of every database file. Readers check only the
/// first seven; the trailing NUL is written but never inspected.
pub const SIGNATURE: [u8; 8] = *b"MVDB100\0";

/// Fixed width of every string field.
pub const STRING_FIELD: usize = 100;

/// Encoded size of one movie record.
pub const MOVIE_RECORD: usize = STRING_FIELD * 3 + STRING_FIELD * MAX_CAST + 4 * 4;

const RATING_SLOT: usize = STRING_FIELD + 4 + 1;

/// Encoded size of one user record.
pub const USER_RECORD: usize = 4 + STRING_FIELD + MAX_RATINGS * RATING_SLOT + 4;

/// Encode the whole catalogue into `w`. Returns the number of bytes
/// written, which is fully determined by the record counts.
pub fn encode<W: Write>(w: &mut W, catalog: &Catalog) -> DbResult<u64> {
    w.write_all(&SIGNATURE)?;

    write_i32(w, catalog.movies().len() as i32)?;
    for movie in catalog.movies() {
        encode_movie(w, movie)?;
    }

    write_i32(w, catalog.users().len() as i32)?;
    for user in catalog.users() {
        encode_user(w, user)?;
    }

    let total = SIGNATURE.len()
        + 4
        + catalog.movies().len() * MOVIE_RECORD
        + 4
        + catalog.users().len() * USER_RECORD;
    Ok(total as u64)
}

/// Decode a catalogue from `r`. The catalogue is only built once every
/// record has decoded cleanly.
pub fn decode<R: Read>(r: &mut R) -> DbResult<Catalog> {
    let mut signature = [0u8; 8];
    read_field(r, &mut signature, "signature")?;
    if signature[..7] != SIGNATURE[..7] {
        return Err(DbError::Corrupt("bad signature".to_string()));
    }

    let movie_count = read_count(r, MAX_MOVIES, "movie count")?;
    let mut movies = Vec::with_capacity(movie_count);
    for _ in 0..movie_count {
        movies.push(decode_movie(r)?);
    }

    let user_count = read_count(r, MAX_USERS, "user count")?;
    let mut users = Vec::with_capacity(user_count);
    for _ in 0..user_count {
        users.push(decode_user(r)?);
    }

    Catalog::from_records(movies, users).map_err(|e| DbError::Corrupt(e.to_string()))
}

fn encode_movie<W: Write>(w: &mut W, movie: &Movie) -> io::Result<()> {
    write_str(w, &movie.title)?;
    write_i32(w, movie.year)?;
    write_str(w, &movie.director)?;
    write_i32(w, movie.cast.len().min(MAX_CAST) as i32)?;
    for slot in 0..MAX_CAST {
        write_str(w, movie.cast.get(slot).map(|s| s.as_str()).unwrap_or(""))?;
    }
    write_str(w, &movie.genre)?;
    write_f32(w, movie.rating)?;
    write_i32(w, movie.duration)
}

fn decode_movie<R: Read>(r: &mut R) -> DbResult<Movie> {
    let title = read_str(r, "movie title")?;
    let year = read_i32(r, "movie year")?;
    let director = read_str(r, "movie director")?;
    let cast_count = read_count(r, MAX_CAST, "cast count")?;
    let mut cast = Vec::with_capacity(cast_count);
    for slot in 0..MAX_CAST {
        let name = read_str(r, "cast member")?;
        if slot < cast_count {
            cast.push(name);
        }
    }
    let genre = read_str(r, "movie genre")?;
    let rating = read_f32(r, "movie rating")?;
    let duration = read_i32(r, "movie duration")?;
    Ok(Movie {
        title,
        year,
        director,
        cast,
        genre,
        rating,
        duration,
    })
}

fn encode_user<W: Write>(w: &mut W, user: &User) -> io::Result<()> {
    write_i32(w, user.id)?;
    write_str(w, &user.name)?;
    for slot in 0..MAX_RATINGS {
        match user.ratings.get(slot) {
            Some(entry) => {
                write_str(w, &entry.title)?;
                write_f32(w, entry.value)?;
                w.write_all(&[1])?;
            }
            None => {
                write_str(w, "")?;
                write_f32(w, 0.0)?;
                w.write_all(&[0])?;
            }
        }
    }
    write_i32(w, user.ratings.len().min(MAX_RATINGS) as i32)
}

fn decode_user<R: Read>(r: &mut R) -> DbResult<User> {
    let id = read_i32(r, "user id")?;
    let name = read_str(r, "user name")?;
    let mut ratings = Vec::new();
    for _ in 0..MAX_RATINGS {
        let title = read_str(r, "rating title")?;
        let value = read_f32(r, "rating value")?;
        let mut used = [0u8; 1];
        read_field(r, &mut used, "rating flag")?;
        // Any nonzero flag marks the slot as used.
        if used[0] != 0 {
            ratings.push(RatingEntry { title, value });
        }
    }
    let rating_count = read_count(r, MAX_RATINGS, "rating count")?;
    if rating_count != ratings.len() {
        return Err(DbError::Corrupt(format!(
            "rating count {} does not match {} used slots",
            rating_count,
            ratings.len()
        )));
    }
    Ok(User { id, name, ratings })
}

fn write_i32<W: Write>(w: &mut W, value: i32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn write_f32<W: Write>(w: &mut W, value: f32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

/// Write one NUL-padded string field, truncating oversized values on a
/// character boundary.
fn write_str<W: Write>(w: &mut W, value: &str) -> io::Result<()> {
    let mut field = [0u8; STRING_FIELD];
    let mut len = value.len().min(STRING_FIELD - 1);
    while !value.is_char_boundary(len) {
        len -= 1;
    }
    field[..len].copy_from_slice(&value.as_bytes()[..len]);
    w.write_all(&field)
}

/// Fill `buf` or fail. A short read means the file ended mid-field, which
/// is corruption, not an IO error.
fn read_field<R: Read>(r: &mut R, buf: &mut [u8], what: &str) -> DbResult<()> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => DbError::Corrupt(format!("truncated {}", what)),
        _ => DbError::Io(e),
    })
}

fn read_i32<R: Read>(r: &mut R, what: &str) -> DbResult<i32> {
    let mut buf = [0u8; 4];
    read_field(r, &mut buf, what)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_f32<R: Read>(r: &mut R, what: &str) -> DbResult<f32> {
    let mut buf = [0u8; 4];
    read_field(r, &mut buf, what)?;
    Ok(f32::from_le_bytes(buf))
}

fn read_count<R: Read>(r: &mut R, max: usize, what: &str) -> DbResult<usize> {
    let count = read_i32(r, what)?;
    if count < 0 || count as usize > max {
        return Err(DbError::Corrupt(format!("{} {} out of range", what, count)));
    }
    Ok(count as usize)
}

fn read_str<R: Read>(r: &mut R, what: &str) -> DbResult<String> {
    let mut buf = [0u8; STRING_FIELD];
    read_field(r, &mut buf, what)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(STRING_FIELD);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}
