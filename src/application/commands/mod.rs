pub mod actors;
pub mod articles;
