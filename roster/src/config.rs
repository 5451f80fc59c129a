//! Configuration for the roster CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable.

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/roster/data";
const DEV_DATA_DIR: &str = "./data";

/// Default database file name inside the data directory.
const DEFAULT_DB_FILE: &str = "student-db.sqlite";

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// Get the data directory for the database.
///
/// Priority:
/// 1. `ROSTER_DATA_DIR` env variable if set
/// 2. `$HOME/.config/roster/data` if a home directory is known
/// 3. `./data` as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROSTER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Get the database file name.
///
/// Priority:
/// 1. `ROSTER_DB_FILE` env variable if set
/// 2. `student-db.sqlite` as fallback
pub fn get_db_file_name() -> String {
    std::env::var("ROSTER_DB_FILE").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string())
}

/// Full path of the database, unless overridden on the command line.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join(get_db_file_name())
}

/// Get the directory the log file is written to.
///
/// Priority:
/// 1. `ROSTER_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROSTER_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}
