//! Dashboard message handler.

use iced::Task;

use sentra_store::{CachedPayload, QueryKey};

use super::{ensure, fail_fetch, MessageHandler};
use crate::message::{DashboardMessage, Message};
use crate::state::{AppState, ViewState};

/// Handler for the stats dashboard.
pub struct DashboardHandler;

impl MessageHandler<DashboardMessage> for DashboardHandler {
    fn handle(&self, state: &mut AppState, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::PeriodSelected(period) => {
                if let ViewState::Dashboard { period: current } = &mut state.view {
                    *current = period;
                    return ensure(state, QueryKey::Stats(period));
                }
                Task::none()
            }
            DashboardMessage::Loaded(period, Ok(stats)) => {
                state
                    .cache
                    .resolve(QueryKey::Stats(period), CachedPayload::Stats(stats));
                Task::none()
            }
            DashboardMessage::Loaded(period, Err(error)) => {
                fail_fetch(state, QueryKey::Stats(period), error)
            }
        }
    }
}
