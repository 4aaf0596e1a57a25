//! View layer for Sentra Admin Studio.
//!
//! Views are pure functions that render UI from application state. Each
//! screen renders from the cache entries the navigation handler fetches
//! for it, plus the screen's own edit buffers.
//!
//! ## Module Structure
//!
//! - `sidebar.rs` - Navigation sidebar shell
//! - `auth.rs` - Sign-in, domain access check, and access-denied screens
//! - `dashboard.rs` - Platform statistics dashboard
//! - `company/` - Company list, create form, and detail screens
//! - `user/` - User list, create form, and detail screens
//! - `video/` - Video list, upload form, detail, and quiz editor screens

pub mod auth;
pub mod company;
pub mod dashboard;
pub mod sidebar;
pub mod user;
pub mod video;

pub use auth::{view_access_denied, view_check_access, view_sign_in};
pub use company::{view_companies, view_company_detail, view_company_new};
pub use dashboard::view_dashboard;
pub use sidebar::view_sidebar;
pub use user::{view_user_detail, view_user_new, view_users};
pub use video::{view_video_detail, view_video_new, view_videos};
