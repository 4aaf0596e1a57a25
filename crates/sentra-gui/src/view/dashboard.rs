//! Platform statistics dashboard.
//!
//! Totals, growth over the selected period, and the role breakdown.
//! Everything renders from the cached stats entry for the active period;
//! switching periods keeps the previous numbers on screen until the new
//! ones arrive.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{StatsPeriod, StatsResponse};
use sentra_store::QueryKey;

use crate::component::{ErrorState, LoadingState, PageHeader, StatCard};
use crate::message::{DashboardMessage, Message};
use crate::state::AppState;
use crate::theme::{
    button_primary, button_secondary, container_card, StudioColors, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

/// Render the dashboard screen.
pub fn view_dashboard(state: &AppState, period: StatsPeriod) -> Element<'_, Message> {
    let header = PageHeader::new("Dashboard")
        .subtitle("Platform activity at a glance".to_string())
        .trailing(view_period_selector(period))
        .view();

    let key = QueryKey::Stats(period);
    let body: Element<'_, Message> = match state.cache.stats(period) {
        Some(stats) => view_stats(stats, period),
        None if state.cache.is_pending(&key) => LoadingState::new("Loading statistics")
            .description("Crunching the latest platform numbers.")
            .view(),
        None => {
            let mut error = ErrorState::new("Could not load statistics")
                .retry(Message::Dashboard(DashboardMessage::PeriodSelected(period)));
            if let Some(err) = state.cache.error(&key) {
                error = error.message(err.user_message().to_string());
            }
            error.view()
        }
    };

    column![header, Space::new().height(SPACING_LG), body]
        .padding(SPACING_LG)
        .into()
}

fn view_period_selector<'a>(active: StatsPeriod) -> Element<'a, Message> {
    let mut selector = row![].spacing(SPACING_XS);
    for period in StatsPeriod::ALL {
        let mut btn = button(text(period.label()).size(13)).padding([6.0, 12.0]).style(
            if period == active {
                button_primary
            } else {
                button_secondary
            },
        );
        if period != active {
            btn = btn.on_press(Message::Dashboard(DashboardMessage::PeriodSelected(period)));
        }
        selector = selector.push(btn);
    }
    selector.into()
}

fn view_stats(stats: &StatsResponse, period: StatsPeriod) -> Element<'_, Message> {
    let totals = &stats.totals;
    let growth = &stats.growth;

    let cards = row![
        StatCard::new(
            lucide::users().size(16),
            "Users",
            totals.users.to_string()
        )
        .delta(delta_line(growth.users.total, period))
        .view(),
        StatCard::new(
            lucide::package().size(16),
            "Companies",
            totals.companies.to_string()
        )
        .delta(delta_line(growth.companies.total, period))
        .view(),
        StatCard::new(
            lucide::play().size(16),
            "Videos",
            totals.videos.to_string()
        )
        .delta(delta_line(growth.videos.total, period))
        .view(),
        StatCard::new(
            lucide::circle_help().size(16),
            "Questions",
            totals.questions.to_string()
        )
        .delta(delta_line(growth.questions.total, period))
        .view(),
    ]
    .spacing(SPACING_MD);

    let answers_note = text(format!("{} answers across all quizzes", totals.answers))
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        });

    let breakdown = view_role_breakdown(stats);

    scrollable(
        column![
            cards,
            Space::new().height(SPACING_SM),
            answers_note,
            Space::new().height(SPACING_LG),
            breakdown,
        ]
        .spacing(0),
    )
    .into()
}

fn delta_line(total: u64, period: StatsPeriod) -> String {
    format!("+{} in the {}", total, period.label().to_lowercase())
}

fn view_role_breakdown(stats: &StatsResponse) -> Element<'_, Message> {
    let breakdown = &stats.role_breakdown;

    let entry = |label: &str, count: u64| -> Element<'_, Message> {
        row![
            text(label.to_string()).size(13),
            Space::new().width(Length::Fill),
            text(count.to_string()).size(13),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    container(
        column![
            text("Users by role").size(15),
            Space::new().height(SPACING_SM),
            entry("Users", breakdown.user),
            entry("Admins", breakdown.admin),
            entry("Super Admins", breakdown.superadmin),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fixed(360.0))
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}
