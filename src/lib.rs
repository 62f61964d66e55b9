pub mod core;
pub mod items;
pub mod patrons;
pub mod circulation;
pub mod catalog;
pub mod gateway;
pub mod utils;
