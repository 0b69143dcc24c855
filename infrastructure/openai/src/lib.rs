pub mod client;
pub mod disabled;
pub mod label_extractor;
