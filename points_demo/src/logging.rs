//! Logger setup shared by every consumer of the crate.

use std::fs::File;

/// Environment variable naming a file that receives log output.
pub const LOG_FILE_ENV: &str = "POINTS_DEMO_LOG";

/// Installs `env_logger` configured from `RUST_LOG`.
///
/// When [`LOG_FILE_ENV`] is set the output goes to that file instead of
/// stderr. Calling this again after a logger is installed does nothing.
pub fn init() {
    let _ = builder().try_init();
}

/// Logger builder from the environment, with the file target applied.
///
/// Falls back to stderr when the file named by [`LOG_FILE_ENV`] cannot be
/// created.
fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
            }
        }
    }
    builder
}
