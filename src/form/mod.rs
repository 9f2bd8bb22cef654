//! Client side of the generator: the form state a UI edits and the client that
//! submits it to the proxy.

pub mod client;
pub mod errors;
pub mod models;
