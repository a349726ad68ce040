#![deny(clippy::all, clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod app;
pub mod broadcast;
pub mod config;
pub mod domain;
pub mod email_client;
pub mod error;
pub mod groups;
pub mod routes;
pub mod store;
pub mod telemetry;
