//! Networking: the single REST call to the planning endpoint.

pub mod api;
