//! The built-in sample catalogue, used when no database file can be loaded.

use tracing::warn;

use crate::catalog::{Catalog, Movie};

const SAMPLE_USERS: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// A catalogue seeded with the sample movie set and the sample users.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for movie in sample_movies() {
        if let Err(e) = catalog.add_movie(movie) {
            warn!("Skipping sample movie: {}", e);
        }
    }
    ensure_sample_users(&mut catalog);
    catalog
}

/// Top up a userless catalogue with the sample users. A catalogue that
/// already has users, say from a loaded file, is left alone.
pub fn ensure_sample_users(catalog: &mut Catalog) {
    if !catalog.users().is_empty() {
        return;
    }
    for name in SAMPLE_USERS {
        if let Err(e) = catalog.create_user(name) {
            warn!("Skipping sample user {}: {}", name, e);
        }
    }
}

/// Five classics plus twenty English and Hindi releases from 2020-2025.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new(
            "The Shawshank Redemption",
            1994,
            "Frank Darabont",
            &["Tim Robbins", "Morgan Freeman", "Bob Gunton"],
            "Drama",
            9.3,
            142,
        ),
        Movie::new(
            "The Godfather",
            1972,
            "Francis Ford Coppola",
            &["Marlon Brando", "Al Pacino", "James Caan"],
            "Crime",
            9.2,
            175,
        ),
        Movie::new(
            "The Dark Knight",
            2008,
            "Christopher Nolan",
            &["Christian Bale", "Heath Ledger", "Aaron Eckhart"],
            "Action",
            8.9,
            152,
        ),
        Movie::new(
            "Pulp Fiction",
            1994,
            "Quentin Tarantino",
            &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
            "Crime",
            8.5,
            154,
        ),
        Movie::new(
            "Inception",
            2010,
            "Christopher Nolan",
            &["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"],
            "Sci-Fi",
            8.8,
            148,
        ),
        Movie::new(
            "Dune",
            2021,
            "Denis Villeneuve",
            &["Timothee Chalamet", "Rebecca Ferguson", "Zendaya", "Oscar Isaac", "Jason Momoa"],
            "Sci-Fi",
            8.0,
            155,
        ),
        Movie::new(
            "No Time To Die",
            2021,
            "Cary Joji Fukunaga",
            &["Daniel Craig", "Lea Seydoux", "Rami Malek", "Lashana Lynch", "Ana de Armas"],
            "Action",
            7.3,
            163,
        ),
        Movie::new(
            "Oppenheimer",
            2023,
            "Christopher Nolan",
            &["Cillian Murphy", "Emily Blunt", "Matt Damon", "Robert Downey Jr.", "Florence Pugh"],
            "Drama",
            8.4,
            180,
        ),
        Movie::new(
            "Barbie",
            2023,
            "Greta Gerwig",
            &["Margot Robbie", "Ryan Gosling", "America Ferrera", "Kate McKinnon", "Issa Rae"],
            "Comedy",
            7.0,
            114,
        ),
        Movie::new(
            "Inside Out 2",
            2024,
            "Kelsey Mann",
            &["Amy Poehler", "Maya Hawke", "Kensington Tallman", "Liza Lapira", "Lewis Black"],
            "Animation",
            7.9,
            96,
        ),
        Movie::new(
            "Tenet",
            2020,
            "Christopher Nolan",
            &["John David Washington", "Robert Pattinson", "Elizabeth Debicki", "Kenneth Branagh", "Dimple Kapadia"],
            "Sci-Fi",
            7.3,
            150,
        ),
        Movie::new(
            "The Batman",
            2022,
            "Matt Reeves",
            &["Robert Pattinson", "Zoe Kravitz", "Paul Dano", "Jeffrey Wright", "Colin Farrell"],
            "Action",
            7.8,
            176,
        ),
        Movie::new(
            "Everything Everywhere All at Once",
            2022,
            "Daniel Kwan, Daniel Scheinert",
            &["Michelle Yeoh", "Ke Huy Quan", "Stephanie Hsu", "Jamie Lee Curtis", "James Hong"],
            "Sci-Fi",
            7.8,
            139,
        ),
        Movie::new(
            "Killers of the Flower Moon",
            2023,
            "Martin Scorsese",
            &["Leonardo DiCaprio", "Robert De Niro", "Lily Gladstone", "Jesse Plemons", "Tantoo Cardinal"],
            "Crime",
            7.7,
            206,
        ),
        Movie::new(
            "Dune: Part Two",
            2024,
            "Denis Villeneuve",
            &["Timothee Chalamet", "Zendaya", "Rebecca Ferguson", "Austin Butler", "Florence Pugh"],
            "Sci-Fi",
            8.6,
            166,
        ),
        Movie::new(
            "Pathaan",
            2023,
            "Siddharth Anand",
            &["Shah Rukh Khan", "Deepika Padukone", "John Abraham", "Dimple Kapadia", "Ashutosh Rana"],
            "Action",
            5.9,
            146,
        ),
        Movie::new(
            "Brahmastra: Part One",
            2022,
            "Ayan Mukerji",
            &["Ranbir Kapoor", "Alia Bhatt", "Amitabh Bachchan", "Nagarjuna Akkineni", "Mouni Roy"],
            "Fantasy",
            5.5,
            167,
        ),
        Movie::new(
            "RRR",
            2022,
            "S.S. Rajamouli",
            &["N.T. Rama Rao Jr.", "Ram Charan", "Ajay Devgn", "Alia Bhatt", "Shriya Saran"],
            "Action",
            7.8,
            187,
        ),
        Movie::new(
            "Animal",
            2023,
            "Sandeep Reddy Vanga",
            &["Ranbir Kapoor", "Anil Kapoor", "Bobby Deol", "Rashmika Mandanna", "Tripti Dimri"],
            "Crime",
            6.1,
            201,
        ),
        Movie::new(
            "Jawan",
            2023,
            "Atlee Kumar",
            &["Shah Rukh Khan", "Nayanthara", "Vijay Sethupathi", "Deepika Padukone", "Priyamani"],
            "Action",
            6.4,
            169,
        ),
        Movie::new(
            "Bhool Bhulaiyaa 2",
            2022,
            "Anees Bazmee",
            &["Kartik Aaryan", "Kiara Advani", "Tabu", "Rajpal Yadav", "Sanjay Mishra"],
            "Comedy",
            5.7,
            143,
        ),
        Movie::new(
            "Gangubai Kathiawadi",
            2022,
            "Sanjay Leela Bhansali",
            &["Alia Bhatt", "Shantanu Maheshwari", "Vijay Raaz", "Indira Tiwari", "Seema Pahwa"],
            "Drama",
            7.0,
            157,
        ),
        Movie::new(
            "Laal Singh Chaddha",
            2022,
            "Advait Chandan",
            &["Aamir Khan", "Kareena Kapoor", "Naga Chaitanya", "Mona Singh", "Manav Vij"],
            "Drama",
            5.3,
            159,
        ),
        Movie::new(
            "The Kerala Story",
            2023,
            "Sudipto Sen",
            &["Adah Sharma", "Yogita Bihani", "Sonia Balani", "Siddhi Idnani", "Devadarshini"],
            "Drama",
            7.2,
            138,
        ),
        Movie::new(
            "Rocky Aur Rani Kii Prem Kahaani",
            2023,
            "Karan Johar",
            &["Ranveer Singh", "Alia Bhatt", "Dharmendra", "Jaya Bachchan", "Shabana Azmi"],
            "Romance",
            6.5,
            168,
        ),
    ]
}
