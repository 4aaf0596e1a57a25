//! View state - current screen and its associated UI state.
//!
//! # Architecture
//!
//! Instead of a flat route enum plus a separate UI-state container, each
//! view variant holds its own UI state:
//! - Navigation replaces the entire `ViewState`
//! - Transient state (drafts, confirm targets, mutation lifecycles) dies
//!   with the screen that owns it
//! - Server data never lives here; screens read it from the resource
//!   cache and only keep edit buffers locally

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use sentra_api::schema::{
    Company, Domain, Role, StatsPeriod, UpdateVideoInput, User, Video,
};
use sentra_store::{MutationState, UserFilters};

use super::editor::QuestionEditor;

// =============================================================================
// VIEW STATE (Current screen + its UI state)
// =============================================================================

/// Current screen and its associated UI state.
///
/// When navigating, the entire view state is replaced, which automatically
/// clears any transient UI state the previous screen held.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum ViewState {
    /// Token entry screen shown before any session exists.
    SignIn(SignInState),

    /// Pre-signup domain check, reachable from the sign-in screen.
    CheckAccess(CheckAccessState),

    /// Terminal screen for sessions that may not use the console.
    AccessDenied(AccessDeniedState),

    /// Statistics overview.
    Dashboard {
        /// Selected reporting period.
        period: StatsPeriod,
    },

    /// Company list.
    Companies(CompaniesState),

    /// Company creation form.
    CompanyNew(CompanyNewState),

    /// One company with inline edits and domain management.
    CompanyDetail(CompanyDetailState),

    /// User list with server-side filters.
    Users(UsersState),

    /// User creation form.
    UserNew(UserNewState),

    /// One user with role management.
    UserDetail(UserDetailState),

    /// Video list.
    Videos(VideosState),

    /// Video upload form.
    VideoNew(VideoNewState),

    /// One video with metadata edits and the question editor.
    VideoDetail(VideoDetailState),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::sign_in()
    }
}

impl ViewState {
    pub fn sign_in() -> Self {
        Self::SignIn(SignInState::default())
    }

    pub fn check_access() -> Self {
        Self::CheckAccess(CheckAccessState::default())
    }

    pub fn access_denied(reason: AccessDeniedReason) -> Self {
        Self::AccessDenied(AccessDeniedState { reason })
    }

    pub fn dashboard() -> Self {
        Self::Dashboard {
            period: StatsPeriod::default(),
        }
    }

    pub fn companies() -> Self {
        Self::Companies(CompaniesState::default())
    }

    pub fn company_new() -> Self {
        Self::CompanyNew(CompanyNewState::default())
    }

    pub fn company_detail(company_id: impl Into<String>) -> Self {
        Self::CompanyDetail(CompanyDetailState::new(company_id))
    }

    pub fn users() -> Self {
        Self::Users(UsersState::default())
    }

    pub fn users_filtered(filters: UserFilters) -> Self {
        Self::Users(UsersState {
            filters,
            ..Default::default()
        })
    }

    pub fn user_new() -> Self {
        Self::UserNew(UserNewState::default())
    }

    pub fn user_detail(user_id: impl Into<String>) -> Self {
        Self::UserDetail(UserDetailState::new(user_id))
    }

    pub fn videos() -> Self {
        Self::Videos(VideosState::default())
    }

    pub fn video_new() -> Self {
        Self::VideoNew(VideoNewState::new())
    }

    pub fn video_detail(video_id: impl Into<String>) -> Self {
        Self::VideoDetail(VideoDetailState::new(video_id))
    }

    /// Whether this screen sits inside the navigation shell.
    pub fn shows_sidebar(&self) -> bool {
        !matches!(
            self,
            Self::SignIn(_) | Self::CheckAccess(_) | Self::AccessDenied(_)
        )
    }

    /// The sidebar section this screen belongs to, if any.
    pub fn nav_section(&self) -> Option<NavSection> {
        match self {
            Self::Dashboard { .. } => Some(NavSection::Dashboard),
            Self::Companies(_) | Self::CompanyNew(_) | Self::CompanyDetail(_) => {
                Some(NavSection::Companies)
            }
            Self::Users(_) | Self::UserNew(_) | Self::UserDetail(_) => Some(NavSection::Users),
            Self::Videos(_) | Self::VideoNew(_) | Self::VideoDetail(_) => Some(NavSection::Videos),
            _ => None,
        }
    }
}

// =============================================================================
// NAVIGATION SECTIONS
// =============================================================================

/// Top-level sections of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Companies,
    Users,
    Videos,
}

impl NavSection {
    /// All sections in display order.
    pub const ALL: [NavSection; 4] = [
        Self::Dashboard,
        Self::Companies,
        Self::Users,
        Self::Videos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Companies => "Companies",
            Self::Users => "Users",
            Self::Videos => "Videos",
        }
    }

    /// Position within [`NavSection::ALL`], used for sidebar highlighting.
    pub fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Companies => 1,
            Self::Users => 2,
            Self::Videos => 3,
        }
    }
}

// =============================================================================
// AUTH SCREENS
// =============================================================================

/// UI state for the sign-in screen.
#[derive(Debug, Clone, Default)]
pub struct SignInState {
    /// Bearer token pasted by the operator.
    pub token: String,
    /// Work email, only consulted when the account does not exist yet
    /// and has to be registered.
    pub email: String,
    /// Whether the session is being verified against the API.
    pub verifying: bool,
    /// Error from the last failed verification attempt.
    pub error: Option<String>,
}

impl SignInState {
    pub fn can_submit(&self) -> bool {
        !self.token.trim().is_empty() && !self.verifying
    }
}

/// Outcome of the domain check, driving the screen's feedback area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckAccessPhase {
    #[default]
    Idle,
    Checking,
    /// Domain is authorized; `company_name` is shown when the API sent it.
    Allowed { company_name: Option<String> },
    /// Domain was rejected with a reason.
    Denied { message: String },
    /// The request itself failed.
    Failed { message: String },
}

/// UI state for the pre-signup access check.
#[derive(Debug, Clone, Default)]
pub struct CheckAccessState {
    pub email: String,
    pub phase: CheckAccessPhase,
}

impl CheckAccessState {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty()
            && !matches!(
                self.phase,
                CheckAccessPhase::Checking | CheckAccessPhase::Allowed { .. }
            )
    }
}

/// Why the session may not use the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDeniedReason {
    /// No account exists and the email domain is not authorized.
    DomainRejected { message: String },
    /// An account exists but lacks the superadmin role. The email is
    /// shown so the operator knows which account was created.
    InsufficientRole { email: String },
}

/// UI state for the terminal access-denied screen.
#[derive(Debug, Clone)]
pub struct AccessDeniedState {
    pub reason: AccessDeniedReason,
}

// =============================================================================
// COMPANY SCREENS
// =============================================================================

/// UI state for the company list.
#[derive(Debug, Clone, Default)]
pub struct CompaniesState {
    /// Company awaiting delete confirmation, if any.
    pub confirm_delete: Option<Company>,
    pub delete: MutationState,
}

/// UI state for the company creation form.
#[derive(Debug, Clone)]
pub struct CompanyNewState {
    pub name: String,
    pub timezone: String,
    pub create: MutationState,
}

impl Default for CompanyNewState {
    fn default() -> Self {
        Self {
            name: String::new(),
            timezone: "UTC".to_string(),
            create: MutationState::Idle,
        }
    }
}

impl CompanyNewState {
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.create.is_pending()
    }
}

/// Pending confirmation on the company detail screen.
#[derive(Debug, Clone)]
pub enum CompanyDetailConfirm {
    RemoveDomain(Domain),
    DeleteCompany,
}

/// UI state for the company detail screen.
///
/// The name and timezone rows edit in place: `Some` holds the buffer
/// while editing, `None` shows the stored value. Cancelling drops the
/// buffer without touching the cache.
#[derive(Debug, Clone)]
pub struct CompanyDetailState {
    pub company_id: String,
    /// Name edit buffer, present only while editing.
    pub name_edit: Option<String>,
    /// Timezone edit buffer, present only while editing.
    pub timezone_edit: Option<String>,
    /// Domain entry field above the domain list.
    pub domain_input: String,
    /// Name and timezone saves share one lifecycle; the two rows are
    /// never edited simultaneously.
    pub save: MutationState,
    pub add_domain: MutationState,
    pub remove_domain: MutationState,
    pub delete: MutationState,
    pub confirm: Option<CompanyDetailConfirm>,
}

impl CompanyDetailState {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            name_edit: None,
            timezone_edit: None,
            domain_input: String::new(),
            save: MutationState::Idle,
            add_domain: MutationState::Idle,
            remove_domain: MutationState::Idle,
            delete: MutationState::Idle,
            confirm: None,
        }
    }
}

// =============================================================================
// USER SCREENS
// =============================================================================

/// UI state for the user list.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    /// Server-side filters, part of the cache key.
    pub filters: UserFilters,
    /// Client-side search over the fetched page.
    pub search: String,
    pub confirm_delete: Option<User>,
    pub delete: MutationState,
}

impl UsersState {
    /// Applies the client-side search to a fetched user list.
    ///
    /// Matches against email, first name, last name, and company name,
    /// case-insensitively. An empty query passes everything through.
    pub fn filtered<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let query = self.search.trim().to_lowercase();
        users
            .iter()
            .filter(|user| {
                if query.is_empty() {
                    return true;
                }
                user.email.to_lowercase().contains(&query)
                    || user
                        .first_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
                    || user
                        .last_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
                    || user
                        .company
                        .as_ref()
                        .is_some_and(|company| company.name.to_lowercase().contains(&query))
            })
            .collect()
    }
}

/// UI state for the user creation form.
#[derive(Debug, Clone)]
pub struct UserNewState {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// `None` until a company is picked; the form cannot submit without one.
    pub company_id: Option<String>,
    pub create: MutationState,
}

impl Default for UserNewState {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::User,
            company_id: None,
            create: MutationState::Idle,
        }
    }
}

impl UserNewState {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && self.company_id.is_some() && !self.create.is_pending()
    }
}

/// UI state for the user detail screen.
#[derive(Debug, Clone)]
pub struct UserDetailState {
    pub user_id: String,
    /// Role picker selection. `None` until the user record first arrives;
    /// it is then filled once and never overwritten by later refetches,
    /// so an in-progress selection survives a background refresh.
    pub selected_role: Option<Role>,
    pub save: MutationState,
    pub delete: MutationState,
    pub confirm_delete: bool,
}

impl UserDetailState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            selected_role: None,
            save: MutationState::Idle,
            delete: MutationState::Idle,
            confirm_delete: false,
        }
    }

    /// Fills the role picker from a freshly loaded record, only once.
    pub fn sync_from(&mut self, user: &User) {
        if self.selected_role.is_none() {
            self.selected_role = Some(user.role);
        }
    }

    /// Whether the picker differs from the stored role. Save stays
    /// disabled until it does.
    pub fn role_changed(&self, user: &User) -> bool {
        self.selected_role
            .is_some_and(|selected| selected != user.role)
    }
}

// =============================================================================
// VIDEO SCREENS
// =============================================================================

/// A file chosen through the native picker, held in memory until upload.
#[derive(Clone)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl PickedFile {
    /// Consumes the pick into the client's upload body type.
    pub fn into_body(self) -> sentra_api::client::FileBody {
        sentra_api::client::FileBody {
            filename: self.name,
            bytes: self.bytes,
            content_type: self.content_type,
        }
    }

    /// Filename without its extension, used to derive a default title.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }

    /// Human-readable size, binary units.
    pub fn size_label(&self) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
        let bytes = self.bytes.len() as f64;
        if bytes <= 0.0 {
            return "0 Bytes".to_string();
        }
        let exponent = (bytes.log2() / 10.0).floor().min(3.0) as usize;
        let value = bytes / f64::powi(1024.0, exponent as i32);
        if exponent == 0 {
            format!("{} {}", self.bytes.len(), UNITS[0])
        } else {
            format!("{value:.2} {}", UNITS[exponent])
        }
    }
}

// The byte buffer is elided; a video can be gigabytes.
impl std::fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// UI state for the video list.
#[derive(Debug, Clone, Default)]
pub struct VideosState {
    pub confirm_delete: Option<Video>,
    pub delete: MutationState,
}

/// Audience toggle on the video forms.
///
/// The toggle and the company picker are separate: switching to
/// `Company` shows the picker, but until a company is actually chosen
/// the effective audience is still everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Everyone,
    Company,
}

impl Visibility {
    pub const ALL: [Visibility; 2] = [Self::Everyone, Self::Company];

    pub fn label(self) -> &'static str {
        match self {
            Self::Everyone => "Everyone",
            Self::Company => "Specific Org",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Everyone => "This video will be visible to all users.",
            Self::Company => "Only users from the selected organization can view this video.",
        }
    }
}

/// UI state for the video upload form.
#[derive(Debug, Clone)]
pub struct VideoNewState {
    pub file: Option<PickedFile>,
    pub title: String,
    /// Publish timestamp as `YYYY-MM-DDTHH:MM`, interpreted as UTC.
    pub publish_date: String,
    pub visibility: Visibility,
    /// Company chosen in the picker. Only effective when `visibility`
    /// is `Company`.
    pub company_id: Option<String>,
    pub upload: MutationState,
}

impl VideoNewState {
    pub fn new() -> Self {
        Self {
            file: None,
            title: String::new(),
            publish_date: Utc::now().format(INPUT_DATE_FORMAT).to_string(),
            visibility: Visibility::Everyone,
            company_id: None,
            upload: MutationState::Idle,
        }
    }

    /// Stores the picked file and derives a title from its name if the
    /// title field is still empty.
    pub fn set_file(&mut self, file: PickedFile) {
        if self.title.is_empty() {
            self.title = file.stem().to_string();
        }
        self.file = Some(file);
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some()
            && !self.title.trim().is_empty()
            && self.publish_date_rfc3339().is_some()
            && !self.upload.is_pending()
    }

    /// The audience the upload will carry: `None` unless the toggle is
    /// on `Company` and a company is actually chosen.
    pub fn effective_company_id(&self) -> Option<String> {
        match self.visibility {
            Visibility::Everyone => None,
            Visibility::Company => self.company_id.clone(),
        }
    }

    /// The publish date as an RFC 3339 timestamp, if the field parses.
    pub fn publish_date_rfc3339(&self) -> Option<String> {
        parse_input_date(&self.publish_date)
    }
}

impl Default for VideoNewState {
    fn default() -> Self {
        Self::new()
    }
}

/// In-flight question writes for the editor on the video detail screen.
///
/// Delete is one shared lifecycle: while any question delete is pending,
/// every delete button in the list is disabled.
#[derive(Debug, Clone, Default)]
pub struct QuestionMutations {
    pub create: MutationState,
    pub update: MutationState,
    pub delete: MutationState,
    pub reorder: MutationState,
}

impl QuestionMutations {
    /// Whether any question write is in flight.
    pub fn is_busy(&self) -> bool {
        self.create.is_pending()
            || self.update.is_pending()
            || self.delete.is_pending()
            || self.reorder.is_pending()
    }
}

/// UI state for the video detail screen.
#[derive(Debug, Clone)]
pub struct VideoDetailState {
    pub video_id: String,
    /// Whether the metadata form has been filled from the record. Set
    /// once on first load; later refetches never clobber form edits.
    pub initialized: bool,
    pub title: String,
    /// Publish timestamp as `YYYY-MM-DDTHH:MM`, interpreted as UTC.
    pub publish_date: String,
    pub visibility: Visibility,
    /// Company chosen in the picker. Only effective when `visibility`
    /// is `Company`.
    pub company_id: Option<String>,
    /// Replacement file awaiting the next save, if one was picked.
    pub replacement: Option<PickedFile>,
    /// One lifecycle for the whole save, covering the file replacement
    /// and the metadata update it chains into.
    pub save: MutationState,
    pub delete: MutationState,
    pub confirm_delete: bool,
    /// Quiz question editor.
    pub editor: QuestionEditor,
    pub questions: QuestionMutations,
}

impl VideoDetailState {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            initialized: false,
            title: String::new(),
            publish_date: String::new(),
            visibility: Visibility::Everyone,
            company_id: None,
            replacement: None,
            save: MutationState::Idle,
            delete: MutationState::Idle,
            confirm_delete: false,
            editor: QuestionEditor::default(),
            questions: QuestionMutations::default(),
        }
    }

    /// Fills the metadata form from a freshly loaded record, only once.
    pub fn sync_from(&mut self, video: &Video) {
        if self.initialized {
            return;
        }
        self.title = video.title.clone();
        self.publish_date = input_date_from_rfc3339(&video.publish_date);
        self.visibility = if video.company_id.is_some() {
            Visibility::Company
        } else {
            Visibility::Everyone
        };
        self.company_id = video.company_id.clone();
        self.initialized = true;
    }

    /// The audience the form currently expresses.
    pub fn effective_company_id(&self) -> Option<String> {
        match self.visibility {
            Visibility::Everyone => None,
            Visibility::Company => self.company_id.clone(),
        }
    }

    /// Whether the form differs from the stored record. The save button
    /// stays disabled until it does.
    pub fn has_changes(&self, video: &Video) -> bool {
        if self.replacement.is_some() {
            return true;
        }
        self.title != video.title
            || self.publish_date_differs(video)
            || self.effective_company_id() != video.company_id
    }

    /// The metadata update carrying only the fields that changed.
    ///
    /// An empty payload (all `None`) means only the file is being
    /// replaced and the metadata request should be skipped.
    pub fn changed_fields(&self, video: &Video) -> UpdateVideoInput {
        let company_id = self.effective_company_id();
        UpdateVideoInput {
            title: (self.title != video.title).then(|| self.title.clone()),
            publish_date: self
                .publish_date_differs(video)
                .then(|| self.publish_date_rfc3339())
                .flatten(),
            company_id: (company_id != video.company_id).then_some(company_id),
        }
    }

    pub fn publish_date_rfc3339(&self) -> Option<String> {
        parse_input_date(&self.publish_date)
    }

    fn publish_date_differs(&self, video: &Video) -> bool {
        match self.publish_date_rfc3339() {
            Some(value) => value != video.publish_date,
            // An unparseable field counts as unchanged so a half-typed
            // date never enables (or sends) a bogus update.
            None => false,
        }
    }
}

// =============================================================================
// PUBLISH DATE FORMAT
// =============================================================================

/// Entry format for publish dates, minute precision, UTC.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses the entry format into a millisecond RFC 3339 UTC timestamp,
/// matching the precision the API stores.
fn parse_input_date(value: &str) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()?;
    Some(
        naive
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Truncates a stored RFC 3339 timestamp to the entry format.
///
/// Falls back to the raw string when it does not parse, so a malformed
/// record is still visible and editable.
fn input_date_from_rfc3339(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => date
            .with_timezone(&Utc)
            .format(INPUT_DATE_FORMAT)
            .to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_api::schema::CompanyRef;

    fn video() -> Video {
        Video {
            id: "v1".to_string(),
            title: "Forklift Safety".to_string(),
            url: "https://cdn.example.com/v1.mp4".to_string(),
            publish_date: "2026-03-01T09:30:00.000Z".to_string(),
            company_id: Some("c1".to_string()),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            company: Some(CompanyRef {
                id: "c1".to_string(),
                name: "Acme".to_string(),
            }),
        }
    }

    fn user(email: &str, first: Option<&str>, company: Option<&str>) -> User {
        serde_json::from_value(serde_json::json!({
            "id": email,
            "authId": "idp_1",
            "email": email,
            "firstName": first,
            "lastName": null,
            "role": "user",
            "companyId": "c1",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-01T00:00:00.000Z",
            "company": company.map(|name| serde_json::json!({"id": "c1", "name": name})),
        }))
        .expect("build user")
    }

    #[test]
    fn sync_fills_the_form_exactly_once() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        assert!(state.initialized);
        assert_eq!(state.title, "Forklift Safety");
        assert_eq!(state.publish_date, "2026-03-01T09:30");
        assert_eq!(state.visibility, Visibility::Company);
        assert_eq!(state.company_id.as_deref(), Some("c1"));

        // A refetch must not clobber an in-progress edit.
        state.title = "Forklift Safety 2".to_string();
        state.sync_from(&record);
        assert_eq!(state.title, "Forklift Safety 2");
    }

    #[test]
    fn untouched_form_has_no_changes() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        assert!(!state.has_changes(&record));
        // The round trip through the entry format must be lossless at
        // minute precision, or every visit would show a phantom change.
        assert_eq!(
            state.publish_date_rfc3339().as_deref(),
            Some("2026-03-01T09:30:00.000Z")
        );
    }

    #[test]
    fn changed_fields_carries_only_the_diff() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        state.title = "Forklift Safety, Part 2".to_string();

        let update = state.changed_fields(&record);
        assert_eq!(update.title.as_deref(), Some("Forklift Safety, Part 2"));
        assert!(update.publish_date.is_none());
        assert!(update.company_id.is_none());
    }

    #[test]
    fn clearing_the_company_is_a_change_to_null() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        state.visibility = Visibility::Everyone;

        assert!(state.has_changes(&record));
        let update = state.changed_fields(&record);
        assert_eq!(update.company_id, Some(None));
        assert_eq!(
            serde_json::to_value(&update).expect("serialize"),
            serde_json::json!({"companyId": null})
        );
    }

    #[test]
    fn replacement_file_alone_is_a_change_with_empty_metadata() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        state.replacement = Some(PickedFile {
            name: "v2.mp4".to_string(),
            bytes: vec![0u8; 8],
            content_type: Some("video/mp4".to_string()),
        });

        assert!(state.has_changes(&record));
        let update = state.changed_fields(&record);
        assert_eq!(
            serde_json::to_value(&update).expect("serialize"),
            serde_json::json!({})
        );
    }

    #[test]
    fn company_toggle_without_a_pick_is_still_everyone() {
        let mut state = VideoNewState::new();
        state.visibility = Visibility::Company;
        assert_eq!(state.effective_company_id(), None);
        state.company_id = Some("c1".to_string());
        assert_eq!(state.effective_company_id().as_deref(), Some("c1"));
        state.visibility = Visibility::Everyone;
        assert_eq!(state.effective_company_id(), None);
    }

    #[test]
    fn half_typed_date_never_counts_as_a_change() {
        let mut state = VideoDetailState::new("v1");
        let record = video();
        state.sync_from(&record);
        state.publish_date = "2026-03-0".to_string();
        assert!(!state.has_changes(&record));
        assert!(state.changed_fields(&record).publish_date.is_none());
    }

    #[test]
    fn picked_file_defaults_the_title_once() {
        let mut state = VideoNewState::new();
        state.set_file(PickedFile {
            name: "warehouse-intro.mp4".to_string(),
            bytes: vec![0u8; 4],
            content_type: None,
        });
        assert_eq!(state.title, "warehouse-intro");

        // A second pick keeps the operator's title.
        state.title = "Warehouse Intro".to_string();
        state.set_file(PickedFile {
            name: "other.mov".to_string(),
            bytes: vec![0u8; 4],
            content_type: None,
        });
        assert_eq!(state.title, "Warehouse Intro");
    }

    #[test]
    fn picked_file_size_labels() {
        let file = |len: usize| PickedFile {
            name: "clip.mp4".to_string(),
            bytes: vec![0u8; len],
            content_type: None,
        };
        assert_eq!(file(0).size_label(), "0 Bytes");
        assert_eq!(file(512).size_label(), "512 Bytes");
        assert_eq!(file(2048).size_label(), "2.00 KB");
        assert_eq!(file(5 * 1024 * 1024).size_label(), "5.00 MB");
    }

    #[test]
    fn role_picker_initializes_once_and_gates_save() {
        let mut state = UserDetailState::new("u1");
        let record = user("jane@acme.com", Some("Jane"), Some("Acme"));
        state.sync_from(&record);
        assert_eq!(state.selected_role, Some(Role::User));
        assert!(!state.role_changed(&record));

        state.selected_role = Some(Role::Admin);
        assert!(state.role_changed(&record));
        // A background refetch must not reset the selection.
        state.sync_from(&record);
        assert_eq!(state.selected_role, Some(Role::Admin));
    }

    #[test]
    fn user_search_matches_name_email_and_company() {
        let users = vec![
            user("jane@acme.com", Some("Jane"), Some("Acme")),
            user("bob@globex.com", Some("Bob"), Some("Globex")),
        ];
        let mut state = UsersState::default();

        state.search = "ACME".to_string();
        let hits = state.filtered(&users);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "jane@acme.com");

        state.search = "bob".to_string();
        assert_eq!(state.filtered(&users).len(), 1);

        state.search = String::new();
        assert_eq!(state.filtered(&users).len(), 2);
    }

    #[test]
    fn check_access_submit_gating() {
        let mut state = CheckAccessState::default();
        assert!(!state.can_submit());
        state.email = "jane@acme.com".to_string();
        assert!(state.can_submit());
        state.phase = CheckAccessPhase::Checking;
        assert!(!state.can_submit());
        state.phase = CheckAccessPhase::Denied {
            message: "This email domain is not authorized.".to_string(),
        };
        assert!(state.can_submit());
    }

    #[test]
    fn navigation_sections() {
        assert_eq!(
            ViewState::company_detail("c1").nav_section(),
            Some(NavSection::Companies)
        );
        assert_eq!(ViewState::video_new().nav_section(), Some(NavSection::Videos));
        assert_eq!(ViewState::sign_in().nav_section(), None);
        assert!(!ViewState::sign_in().shows_sidebar());
        assert!(ViewState::dashboard().shows_sidebar());
    }
}
