//! Empty, loading, and error state components.
//!
//! Standardized feedback for screens with nothing to show, a fetch in
//! flight, or a failed fetch.

use iced::widget::{button, center, column, container, row, text, Space};
use iced::{Alignment, Border, Element, Theme};
use iced_fonts::lucide;

use crate::theme::{
    button_primary, StudioColors, BORDER_RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)].push(
            text(self.title)
                .size(16)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_secondary),
                }),
        );

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(muted_text));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        center(content.align_x(Alignment::Center)).into()
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state with spinner icon and message.
pub struct LoadingState {
    title: String,
    description: Option<String>,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![
            lucide::loader()
                .size(40)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
            Space::new().height(SPACING_LG),
            text(self.title).size(18),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(muted_text));
        }

        center(content).into()
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error state with message and optional retry action.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            retry: None,
        }
    }

    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut content = column![
            lucide::circle_alert()
                .size(48)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
            Space::new().height(SPACING_LG),
            text(self.title).size(18),
        ]
        .align_x(Alignment::Center)
        .max_width(400.0);

        if let Some(msg) = self.message {
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(text(msg).size(12).style(muted_text))
                    .padding(SPACING_MD)
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.studio().background_inset.into()),
                        border: Border {
                            radius: BORDER_RADIUS_SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        if let Some(retry_msg) = self.retry {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(
                    row![
                        lucide::refresh_cw().size(14),
                        Space::new().width(SPACING_SM),
                        text("Retry").size(14),
                    ]
                    .align_y(Alignment::Center),
                )
                .on_press(retry_msg)
                .padding([10.0, 24.0])
                .style(button_primary),
            );
        }

        center(content).into()
    }
}

fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.studio().text_muted),
    }
}
