//! Company message handler.
//!
//! Handles:
//! - The company list and its delete confirmation
//! - The creation form
//! - Detail-screen edits: rename, timezone, domain management, delete

use iced::Task;

use sentra_api::schema::{AddDomainInput, CreateCompanyInput, UpdateCompanyInput};
use sentra_store::{CachedPayload, MutationKind, MutationState, QueryKey};

use super::{fail_fetch, navigation, MessageHandler};
use crate::message::{CompanyMessage, Message, Route};
use crate::service;
use crate::state::{AppState, CompanyDetailConfirm, ViewState};

/// Handler for company list, creation, and detail messages.
pub struct CompanyHandler;

impl MessageHandler<CompanyMessage> for CompanyHandler {
    fn handle(&self, state: &mut AppState, msg: CompanyMessage) -> Task<Message> {
        match msg {
            // List
            CompanyMessage::Loaded(Ok(companies)) => {
                state
                    .cache
                    .resolve(QueryKey::Companies, CachedPayload::Companies(companies));
                Task::none()
            }
            CompanyMessage::Loaded(Err(error)) => fail_fetch(state, QueryKey::Companies, error),
            CompanyMessage::DeleteRequested(company) => {
                if let ViewState::Companies(list) = &mut state.view {
                    list.confirm_delete = Some(company);
                }
                Task::none()
            }
            CompanyMessage::DeleteCanceled => {
                if let ViewState::Companies(list) = &mut state.view {
                    list.confirm_delete = None;
                }
                Task::none()
            }
            CompanyMessage::DeleteConfirmed => handle_delete_confirmed(state),
            CompanyMessage::Deleted(result) => {
                match result {
                    Ok(()) => {
                        state.cache.apply(&MutationKind::CompanyWrite);
                        if let ViewState::Companies(list) = &mut state.view {
                            list.confirm_delete = None;
                            list.delete = MutationState::Idle;
                        }
                        state.show_success("Company deleted");
                        navigation::fetch_required(state)
                    }
                    Err(error) => {
                        // The confirm stays open so the delete can be retried.
                        if let ViewState::Companies(list) = &mut state.view {
                            list.delete = MutationState::Idle;
                        }
                        state.show_error(error.user_message());
                        Task::none()
                    }
                }
            }

            // Creation form
            CompanyMessage::NameChanged(name) => {
                if let ViewState::CompanyNew(form) = &mut state.view {
                    form.name = name;
                }
                Task::none()
            }
            CompanyMessage::TimezoneChanged(timezone) => {
                if let ViewState::CompanyNew(form) = &mut state.view {
                    form.timezone = timezone;
                }
                Task::none()
            }
            CompanyMessage::Submitted => handle_create_submitted(state),
            CompanyMessage::Created(result) => match result {
                Ok(company) => {
                    state.cache.apply(&MutationKind::CompanyWrite);
                    state.show_success("Company created");
                    navigation::navigate(state, Route::CompanyDetail(company.id))
                }
                Err(error) => {
                    if let ViewState::CompanyNew(form) = &mut state.view {
                        form.create = MutationState::Error(error);
                    }
                    Task::none()
                }
            },

            // Detail
            CompanyMessage::DetailLoaded(id, Ok(company)) => {
                state
                    .cache
                    .resolve(QueryKey::Company(id), CachedPayload::Company(company));
                Task::none()
            }
            CompanyMessage::DetailLoaded(id, Err(error)) => {
                fail_fetch(state, QueryKey::Company(id), error)
            }
            CompanyMessage::NameEditStarted => {
                let current = detail_company_field(state, |c| c.name.clone());
                if let (ViewState::CompanyDetail(detail), Some(name)) = (&mut state.view, current) {
                    detail.name_edit = Some(name);
                }
                Task::none()
            }
            CompanyMessage::NameEdited(name) => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.name_edit = Some(name);
                }
                Task::none()
            }
            CompanyMessage::NameSaved => handle_name_saved(state),
            CompanyMessage::NameEditCanceled => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.name_edit = None;
                }
                Task::none()
            }
            CompanyMessage::TimezoneEditStarted => {
                let current = detail_company_field(state, |c| c.timezone.clone());
                if let (ViewState::CompanyDetail(detail), Some(timezone)) =
                    (&mut state.view, current)
                {
                    detail.timezone_edit = Some(timezone);
                }
                Task::none()
            }
            CompanyMessage::TimezoneEdited(timezone) => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.timezone_edit = Some(timezone);
                }
                Task::none()
            }
            CompanyMessage::TimezoneSaved => handle_timezone_saved(state),
            CompanyMessage::TimezoneEditCanceled => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.timezone_edit = None;
                }
                Task::none()
            }
            CompanyMessage::Updated(result) => match result {
                Ok(_) => {
                    state.cache.apply(&MutationKind::CompanyWrite);
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.name_edit = None;
                        detail.timezone_edit = None;
                        detail.save = MutationState::Success;
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.save = MutationState::Error(error);
                    }
                    Task::none()
                }
            },
            CompanyMessage::DetailDeleteRequested => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.confirm = Some(CompanyDetailConfirm::DeleteCompany);
                }
                Task::none()
            }
            CompanyMessage::ConfirmCanceled => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.confirm = None;
                }
                Task::none()
            }
            CompanyMessage::ConfirmAccepted => handle_confirm_accepted(state),
            CompanyMessage::DetailDeleted(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::CompanyWrite);
                    state.show_success("Company deleted");
                    navigation::navigate(state, Route::Companies)
                }
                Err(error) => {
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.delete = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },

            // Domains
            CompanyMessage::DomainInputChanged(input) => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.domain_input = input;
                }
                Task::none()
            }
            CompanyMessage::DomainSubmitted => handle_domain_submitted(state),
            CompanyMessage::DomainAdded(result) => match result {
                Ok(_) => {
                    state.cache.apply(&MutationKind::CompanyWrite);
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.domain_input.clear();
                        detail.add_domain = MutationState::Success;
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.add_domain = MutationState::Error(error);
                    }
                    Task::none()
                }
            },
            CompanyMessage::DomainRemoveRequested(domain) => {
                if let ViewState::CompanyDetail(detail) = &mut state.view {
                    detail.confirm = Some(CompanyDetailConfirm::RemoveDomain(domain));
                }
                Task::none()
            }
            CompanyMessage::DomainRemoved(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::CompanyWrite);
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.confirm = None;
                        detail.remove_domain = MutationState::Success;
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::CompanyDetail(detail) = &mut state.view {
                        detail.remove_domain = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },
        }
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

/// Read one field of the company shown on the detail screen.
fn detail_company_field<T>(state: &AppState, read: impl Fn(&sentra_api::schema::Company) -> T) -> Option<T> {
    match &state.view {
        ViewState::CompanyDetail(detail) => state.cache.company(&detail.company_id).map(read),
        _ => None,
    }
}

/// Fire the delete confirmed from the list screen.
fn handle_delete_confirmed(state: &mut AppState) -> Task<Message> {
    let ViewState::Companies(list) = &mut state.view else {
        return Task::none();
    };
    let Some(company) = list.confirm_delete.clone() else {
        return Task::none();
    };
    if list.delete.is_pending() {
        return Task::none();
    }
    list.delete = MutationState::Pending;

    Task::perform(
        service::companies::delete_company(state.client.clone(), company.id),
        |result| Message::Company(CompanyMessage::Deleted(result)),
    )
}

/// Submit the creation form when it validates.
fn handle_create_submitted(state: &mut AppState) -> Task<Message> {
    let ViewState::CompanyNew(form) = &mut state.view else {
        return Task::none();
    };
    if !form.can_submit() {
        return Task::none();
    }
    let input = CreateCompanyInput {
        name: form.name.trim().to_string(),
        timezone: form.timezone.clone(),
    };
    form.create = MutationState::Pending;

    Task::perform(
        service::companies::create_company(state.client.clone(), input),
        |result| Message::Company(CompanyMessage::Created(result)),
    )
}

/// Save the name buffer, or just close the editor when nothing changed.
fn handle_name_saved(state: &mut AppState) -> Task<Message> {
    let current = detail_company_field(state, |c| c.name.clone());
    let ViewState::CompanyDetail(detail) = &mut state.view else {
        return Task::none();
    };
    let Some(draft) = detail.name_edit.clone() else {
        return Task::none();
    };
    if draft.trim().is_empty() || Some(draft.as_str()) == current.as_deref() {
        detail.name_edit = None;
        return Task::none();
    }
    detail.save = MutationState::Pending;
    let id = detail.company_id.clone();
    let input = UpdateCompanyInput {
        name: Some(draft),
        timezone: None,
    };

    Task::perform(
        service::companies::update_company(state.client.clone(), id, input),
        |result| Message::Company(CompanyMessage::Updated(result)),
    )
}

/// Save the timezone buffer, or just close the editor when unchanged.
fn handle_timezone_saved(state: &mut AppState) -> Task<Message> {
    let current = detail_company_field(state, |c| c.timezone.clone());
    let ViewState::CompanyDetail(detail) = &mut state.view else {
        return Task::none();
    };
    let Some(draft) = detail.timezone_edit.clone() else {
        return Task::none();
    };
    if Some(draft.as_str()) == current.as_deref() {
        detail.timezone_edit = None;
        return Task::none();
    }
    detail.save = MutationState::Pending;
    let id = detail.company_id.clone();
    let input = UpdateCompanyInput {
        name: None,
        timezone: Some(draft),
    };

    Task::perform(
        service::companies::update_company(state.client.clone(), id, input),
        |result| Message::Company(CompanyMessage::Updated(result)),
    )
}

/// Run whichever destructive action the open confirm describes.
fn handle_confirm_accepted(state: &mut AppState) -> Task<Message> {
    let ViewState::CompanyDetail(detail) = &mut state.view else {
        return Task::none();
    };
    match detail.confirm.clone() {
        Some(CompanyDetailConfirm::DeleteCompany) => {
            if detail.delete.is_pending() {
                return Task::none();
            }
            detail.delete = MutationState::Pending;
            let id = detail.company_id.clone();
            Task::perform(
                service::companies::delete_company(state.client.clone(), id),
                |result| Message::Company(CompanyMessage::DetailDeleted(result)),
            )
        }
        Some(CompanyDetailConfirm::RemoveDomain(domain)) => {
            if detail.remove_domain.is_pending() {
                return Task::none();
            }
            detail.remove_domain = MutationState::Pending;
            let company_id = detail.company_id.clone();
            Task::perform(
                service::companies::remove_domain(state.client.clone(), company_id, domain.id),
                |result| Message::Company(CompanyMessage::DomainRemoved(result)),
            )
        }
        None => Task::none(),
    }
}

/// Add the typed domain to the allowlist.
fn handle_domain_submitted(state: &mut AppState) -> Task<Message> {
    let ViewState::CompanyDetail(detail) = &mut state.view else {
        return Task::none();
    };
    if detail.domain_input.trim().is_empty() || detail.add_domain.is_pending() {
        return Task::none();
    }
    detail.add_domain = MutationState::Pending;
    let company_id = detail.company_id.clone();
    let input = AddDomainInput::new(&detail.domain_input);

    Task::perform(
        service::companies::add_domain(state.client.clone(), company_id, input),
        |result| Message::Company(CompanyMessage::DomainAdded(result)),
    )
}
