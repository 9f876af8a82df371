//! Domain services used by the HTTP routes and background tasks.
//!
//! ARCHITECTURE
//! ============
//! Services turn backend records into dashboard views and run the command
//! assistant, so route handlers stay focused on extraction and status codes.

pub mod command;
pub mod map;
pub mod news;
pub mod orders;
pub mod poller;
pub mod stats;
