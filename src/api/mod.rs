pub mod client;
pub mod ddragon;
pub mod endpoints;
pub mod models;
