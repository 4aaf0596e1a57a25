//! Application state: screens, edit buffers, settings, and the session.

pub mod app_state;
pub mod editor;
pub mod settings;
pub mod view_state;

pub use app_state::{AppState, Toast, ToastKind};
pub use editor::{reorder_after_move, AnswerDraft, EditState, QuestionDraft, QuestionEditor};
pub use settings::{ApiSettings, DisplaySettings, Settings};
pub use view_state::{
    AccessDeniedReason, AccessDeniedState, CheckAccessPhase, CheckAccessState, CompaniesState,
    CompanyDetailConfirm, CompanyDetailState, CompanyNewState, NavSection, PickedFile,
    QuestionMutations, SignInState, UserDetailState, UserNewState, UsersState, VideoDetailState,
    VideoNewState, VideosState, ViewState, Visibility,
};
