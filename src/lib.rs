pub mod catalog;
pub mod config;
pub mod db;
pub mod menu;
pub mod seed;
pub mod session;

use std::io::ErrorKind;

use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

/// Options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Optional YAML config file.
    pub config: Option<String>,
    /// Database path override.
    pub database: Option<String>,
}

/// Load (or seed) the catalogue, run the menu until exit.
pub fn run(options: Options) -> Result<(), AppError> {
    let mut config = config::Config::load(options.config.as_deref())?;
    if let Some(database) = options.database {
        config.database = database;
    }

    info!("Using database file: {}", config.database);

    let mut catalog = match db::load(&config.database) {
        Ok(catalog) => {
            println!("Database loaded successfully from {}", config.database);
            println!(
                "Loaded {} movies and {} users.",
                catalog.movies().len(),
                catalog.users().len()
            );
            catalog
        }
        Err(e) => {
            match &e {
                db::DbError::Io(io) if io.kind() == ErrorKind::NotFound => {
                    println!(
                        "Warning: Could not open database file for reading. Creating a new database."
                    );
                }
                _ => {
                    warn!("Failed to load {}: {}", config.database, e);
                    println!("Error: {}. Creating a new database.", e);
                }
            }
            if config.seed {
                println!("Initializing database with sample data...");
                seed::sample_catalog()
            } else {
                catalog::Catalog::new()
            }
        }
    };
    if config.seed {
        // A loaded file with no users still gets the starter accounts.
        seed::ensure_sample_users(&mut catalog);
    }

    menu::run(&mut catalog, &config)?;
    Ok(())
}
