pub mod clips;
pub mod compose;
pub mod config;
pub mod crop;
pub mod info;
pub mod share;
