use crate::circulation::domain::service::Library;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub fn create_library(config: &Configuration) -> Library {
    let publisher = create_publisher(config.events_via);
    Library::new(config, publisher)
}
