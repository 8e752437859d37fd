pub mod clipboard;
pub mod config;
pub mod day;
pub mod messages;
pub mod note;
pub mod opener;
pub mod workspace;
