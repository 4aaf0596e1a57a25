//! Sentra Admin Studio - GUI Library
//!
//! Core application types and modules for the Sentra Admin Studio
//! desktop application: the admin console for companies, users,
//! training videos, and their quizzes.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

// Application shell
pub mod app;

// Core modules
pub mod component;
pub mod constants;
pub mod error;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Message handlers for the update loop
pub mod handler;

// Service modules for background tasks
pub mod service;
