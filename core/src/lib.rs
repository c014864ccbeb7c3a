//! Synchronization core for the todo client.
//!
//! # Overview
//! Mirrors the server's todo collection in memory and issues one REST call
//! per user action, followed by a full list refetch. The crate never touches
//! the network itself: `TodoClient` builds `HttpRequest` values and parses
//! `HttpResponse` values, and a [`Transport`] implementation supplied by the
//! caller performs the round-trip.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - `TodoSession` owns the mirrored list and the two draft fields and
//!   sequences call → refetch → replace after every mutation.
//! - All failures collapse into a single `RequestFailed` kind; session
//!   operations log it and carry on with the state they had.

pub mod client;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::RequestFailed;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use session::TodoSession;
pub use types::{NewTodo, Todo};
