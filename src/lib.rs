pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod plot;
pub mod present;
pub mod schema;
pub mod stats;
