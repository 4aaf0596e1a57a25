//! Reusable UI components for Sentra Admin Studio.
//!
//! Building blocks shared by the screens:
//!
//! - **Form**: [`TextField`] with label, character count, and validation
//! - **Overlays**: `modal`, `confirm_modal`, `danger_confirm_modal`
//! - **Display**: `status_badge`, `role_badge`, `video_status_badge`, `StatCard`
//! - **Feedback**: `EmptyState`, `LoadingState`, `ErrorState`, `view_toast`
//! - **Headers**: [`PageHeader`]
//! - **Icons**: use `iced_fonts::lucide::*` directly
//!
//! Components use the builder pattern and return `Element<M>`. All colors
//! resolve through the theme inside style closures, so every component
//! follows light/dark mode switches without replumbing.

#![allow(unused_imports)]

mod badge;
mod empty_state;
mod modal;
mod page_header;
mod stat_card;
mod text_field;
mod toast;

pub use badge::{role_badge, status_badge, video_status_badge, Status};
pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use modal::{confirm_modal, danger_confirm_modal, modal};
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use text_field::TextField;
pub use toast::view_toast;

// Re-export font bytes for convenience (loaded in main.rs)
pub use iced_fonts::LUCIDE_FONT_BYTES;
