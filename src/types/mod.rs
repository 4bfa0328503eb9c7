pub mod archive;
pub mod configuration;
pub mod geometry;
pub mod identifier;
pub mod request;
pub mod series;
