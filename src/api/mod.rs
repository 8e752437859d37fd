//! API client modules for external service integrations.
//!
//! Gists are the only remote collaborator: today's entry can be published
//! as a gist, and a gist can be imported back as the yesterday file.

pub mod gist;

pub use gist::GistClient;
