//! Stat card component for the dashboard.

use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{container_card, StudioColors, SPACING_MD, SPACING_SM, SPACING_XS};

/// A dashboard metric card: icon, label, value, and an optional delta
/// line for the period total.
pub struct StatCard<'a, M> {
    icon: Element<'a, M>,
    label: String,
    value: String,
    delta: Option<String>,
}

impl<'a, M: 'a> StatCard<'a, M> {
    pub fn new(
        icon: impl Into<Element<'a, M>>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    /// Add a growth line, e.g. "+12 this period".
    pub fn delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut body = column![
            row![
                self.icon,
                Space::new().width(SPACING_SM),
                text(self.label)
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    }),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_SM),
            text(self.value).size(28),
        ]
        .spacing(SPACING_XS);

        if let Some(delta) = self.delta {
            body = body.push(text(delta).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().success.base.color),
            }));
        }

        container(body)
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(container_card)
            .into()
    }
}
