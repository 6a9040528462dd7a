//! Async search client for the advocate directory.
//!
//! Mirrors the behaviour a browser front end needs from the query endpoint:
//! a state container owning the current search parameters and the last
//! result ([`state::SearchState`]), a pluggable HTTP transport
//! ([`transport::SearchTransport`]), and a session that debounces free-text
//! input, de-duplicates identical in-flight requests and cancels superseded
//! ones ([`session::SearchSession`]).

pub mod session;
pub mod state;
pub mod transport;
