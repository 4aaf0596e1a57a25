//! Text field component with validation.
//!
//! Form text fields with a label, optional character counting, and an
//! inline validation error.

use iced::widget::{column, row, text, text_input, Space};
use iced::{Border, Element, Length, Theme};

use crate::theme::{StudioColors, BORDER_RADIUS_SM};

/// A text input field with label, character count, and validation.
///
/// # Example
/// ```ignore
/// TextField::new("Name", &form.name, "Acme Corp", CompanyMessage::NameChanged)
///     .max_length(MAX_COMPANY_NAME_LEN)
///     .required(true)
///     .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    on_submit: Option<M>,
    max_length: Option<usize>,
    required: bool,
    secure: bool,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            on_submit: None,
            max_length: None,
            required: false,
            secure: false,
            error: None,
        }
    }

    /// Set maximum character length, shown as a live count.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mask the value (token entry).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Message to send when Enter is pressed inside the field.
    pub fn on_submit(mut self, message: M) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Set an error message to display.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let char_count = self.value.chars().count();
        let is_over = self.max_length.is_some_and(|max| char_count > max);
        let has_error = self.error.is_some() || is_over;

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        let count_display: Element<'static, M> = if let Some(max) = self.max_length {
            text(format!("{char_count}/{max}"))
                .size(11)
                .style(move |theme: &Theme| {
                    let studio = theme.studio();
                    text::Style {
                        color: Some(if is_over {
                            theme.extended_palette().danger.base.color
                        } else {
                            studio.text_disabled
                        }),
                    }
                })
                .into()
        } else {
            Space::new().width(0.0).into()
        };

        let error_el: Element<'static, M> = if let Some(err) = self.error {
            row![
                iced_fonts::lucide::circle_alert()
                    .size(12)
                    .style(error_text),
                Space::new().width(4.0),
                text(err).size(11).style(error_text),
            ]
            .into()
        } else if is_over {
            text("Character limit exceeded")
                .size(11)
                .style(error_text)
                .into()
        } else {
            Space::new().height(0.0).into()
        };

        let mut input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .secure(self.secure)
            .padding([10.0, 12.0])
            .size(14)
            .style(move |theme: &Theme, status| {
                let palette = theme.extended_palette();
                let studio = theme.studio();
                let border_color = if has_error {
                    studio.border_error
                } else if matches!(status, text_input::Status::Focused { .. }) {
                    studio.border_focused
                } else {
                    studio.border_default
                };
                text_input::Style {
                    background: studio.background_elevated.into(),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: BORDER_RADIUS_SM.into(),
                    },
                    icon: studio.text_muted,
                    placeholder: studio.text_disabled,
                    value: palette.background.base.text,
                    selection: studio.accent_primary_medium,
                }
            });
        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        column![
            row![
                text(label_text).size(12).style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
                Space::new().width(Length::Fill),
                count_display,
            ],
            Space::new().height(4.0),
            input,
            error_el,
        ]
        .into()
    }
}

fn error_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
