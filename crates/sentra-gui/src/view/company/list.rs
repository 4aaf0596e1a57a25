//! Company list screen.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::Company;
use sentra_store::QueryKey;

use crate::component::{danger_confirm_modal, EmptyState, ErrorState, LoadingState, PageHeader};
use crate::message::{CompanyMessage, Message, Route};
use crate::state::{AppState, CompaniesState};
use crate::theme::{
    button_ghost, button_primary, container_card, StudioColors, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

/// Render the company list screen.
pub fn view_companies<'a>(state: &'a AppState, list: &'a CompaniesState) -> Element<'a, Message> {
    let add_button = button(
        row![lucide::plus().size(14), text("Add Company").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Route::CompanyNew))
    .padding([10.0, 20.0])
    .style(button_primary);

    let header = PageHeader::new("Companies")
        .subtitle("Tenants and their authorized sign-up domains".to_string())
        .trailing(add_button)
        .view();

    let body: Element<'a, Message> = match state.cache.companies() {
        Some([]) => EmptyState::new(lucide::package().size(40), "No companies yet")
            .description("Create the first company to start assigning users and videos.")
            .action("Add Company", Message::Navigate(Route::CompanyNew))
            .view(),
        Some(companies) => {
            let mut rows = column![].spacing(SPACING_SM);
            for company in companies {
                rows = rows.push(company_row(company));
            }
            scrollable(rows).into()
        }
        None if state.cache.is_pending(&QueryKey::Companies) => {
            LoadingState::new("Loading companies").view()
        }
        None => {
            let mut error = ErrorState::new("Could not load companies").retry(Message::go_companies());
            if let Some(err) = state.cache.error(&QueryKey::Companies) {
                error = error.message(err.user_message().to_string());
            }
            error.view()
        }
    };

    let base: Element<'a, Message> = column![header, Space::new().height(SPACING_LG), body]
        .padding(SPACING_LG)
        .into();

    match &list.confirm_delete {
        Some(company) => danger_confirm_modal(
            base,
            "Delete Company",
            format!(
                "Delete {}? Its authorized domains are removed and its users \
                 lose their company assignment.",
                company.name
            ),
            "Delete",
            Message::Company(CompanyMessage::DeleteConfirmed),
            Message::Company(CompanyMessage::DeleteCanceled),
        ),
        None => base,
    }
}

fn company_row(company: &Company) -> Element<'_, Message> {
    let meta = format!(
        "{} users · {} domains · {}",
        company.user_count(),
        company.domains.len(),
        company.timezone
    );

    let info = column![
        text(&company.name).size(15),
        text(meta).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
    ]
    .spacing(SPACING_XS);

    let open = button(lucide::chevron_right().size(16))
        .on_press(Message::go_company(&company.id))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let delete = button(lucide::trash_two().size(14).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }
    }))
    .on_press(Message::Company(CompanyMessage::DeleteRequested(
        company.clone(),
    )))
    .padding([6.0, 8.0])
    .style(button_ghost);

    container(
        row![
            info,
            Space::new().width(Length::Fill),
            delete,
            Space::new().width(SPACING_XS),
            open,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}
