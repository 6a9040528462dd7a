//! Wire-format types shared by the HTTP routes and the search client.

pub mod api;
