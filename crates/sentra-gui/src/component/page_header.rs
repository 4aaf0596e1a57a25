//! Page header component.
//!
//! Consistent headers for screens: back button, title, subtitle, and a
//! trailing action slot.

use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{button_secondary, StudioColors, SPACING_MD, SPACING_SM, SPACING_XS};

/// Page header with back button, title, subtitle, and trailing element.
pub struct PageHeader<'a, M> {
    title: String,
    subtitle: Option<String>,
    on_back: Option<M>,
    trailing: Option<Element<'a, M>>,
}

impl<'a, M: Clone + 'a> PageHeader<'a, M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            on_back: None,
            trailing: None,
        }
    }

    /// Add a secondary line under the title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a back button.
    pub fn back(mut self, message: M) -> Self {
        self.on_back = Some(message);
        self
    }

    /// Add trailing element(s) on the right, usually the primary action.
    pub fn trailing(mut self, element: impl Into<Element<'a, M>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut header_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);

        if let Some(on_back) = self.on_back {
            let back_btn = button(
                row![lucide::chevron_left().size(12), text("Back").size(14)]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center),
            )
            .on_press(on_back)
            .padding([8.0, 16.0])
            .style(button_secondary);

            header_row = header_row.push(back_btn);
            header_row = header_row.push(Space::new().width(SPACING_MD));
        }

        let mut title_column = column![text(self.title).size(22)].spacing(SPACING_XS);
        if let Some(subtitle) = self.subtitle {
            title_column = title_column.push(text(subtitle).size(13).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                },
            ));
        }
        header_row = header_row.push(title_column);

        header_row = header_row.push(Space::new().width(Length::Fill));

        if let Some(trailing) = self.trailing {
            header_row = header_row.push(trailing);
        }

        header_row.width(Length::Fill).into()
    }
}
