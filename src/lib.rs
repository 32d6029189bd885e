pub mod describe;
pub mod encoder;
pub mod errors;
pub mod mime;
pub mod models;
pub mod payload;
pub mod providers;
