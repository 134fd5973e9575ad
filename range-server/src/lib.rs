//! Station range search server.
//!
//! A web application that answers: "Which stations can I reach from these
//! base stations within these many minutes?" by delegating the route
//! search to the Ekispert multiple-range API, plus autocomplete of station
//! names.

pub mod autocomplete;
pub mod config;
pub mod directory;
pub mod domain;
pub mod ekispert;
pub mod search;
pub mod web;

#[cfg(test)]
mod testing;
