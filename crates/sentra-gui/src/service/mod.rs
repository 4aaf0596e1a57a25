//! Background tasks: API calls and native dialogs.
//!
//! Every function here is a plain `async fn` run through `Task::perform`
//! by a handler. Each takes its own clone of the client, so tasks never
//! borrow application state across an await.

pub mod auth;
pub mod companies;
pub mod file_dialog;
pub mod questions;
pub mod stats;
pub mod users;
pub mod videos;
