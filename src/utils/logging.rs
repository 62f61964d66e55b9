use crate::core::library::{LibraryError, LibraryResult};

// Installs a JSON formatter as the global subscriber. Fails when a subscriber has
// already been installed for the process.
pub fn setup_tracing() -> LibraryResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // hosts that collect the output add their own timestamps.
        .without_time()
        .json()
        .try_init()
        .map_err(|err| LibraryError::runtime(format!("tracing setup {:?}", err).as_str(), None))
}
