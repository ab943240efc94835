//! HTTP Layer
//!
//! Glue between axum and the statistics subsystems.
//!
//! ## Responsibilities
//! - **Routing**: assembling every endpoint into one `Router` with its shared state.
//! - **Requests**: decoding JSON bodies with the service's own error messages.
//! - **Responses**: per-dataset JSON objects that keep the order the client asked for.
//! - **Fan-out**: running one backend query per dataset concurrently under a deadline.

pub mod fanout;
pub mod request;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests;
