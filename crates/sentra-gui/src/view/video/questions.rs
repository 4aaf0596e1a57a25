//! Quiz question editor on the video detail screen.
//!
//! Questions render as reorderable cards. One card at a time can hold
//! an edit draft; a separate add-question form opens below the list, so
//! both drafts can exist together. Question deletes fire without a
//! confirm dialog. While any question write is in flight the whole
//! list's write affordances are disabled.

use iced::widget::{button, checkbox, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{Question, MAX_ANSWER_LEN, MAX_QUESTION_LEN, MIN_ANSWERS};
use sentra_store::QueryKey;

use crate::message::{DraftTarget, Message, QuestionMessage};
use crate::state::{AppState, EditState, QuestionDraft, VideoDetailState};
use crate::theme::{
    button_ghost, button_primary, button_secondary, container_card, container_inset,
    text_input_default, StudioColors, SPACING_MD, SPACING_SM, SPACING_XS,
};

/// Render the question editor section.
pub(super) fn view_questions<'a>(
    state: &'a AppState,
    detail: &'a VideoDetailState,
) -> Element<'a, Message> {
    let key = QueryKey::VideoQuestions(detail.video_id.clone());
    let questions = state.cache.questions_for(&detail.video_id);

    let count = questions.map(<[Question]>::len).unwrap_or(0);
    let mut add = button(
        row![lucide::plus().size(13), text("Add Question").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([8.0, 14.0])
    .style(button_secondary);
    if detail.editor.adding.is_none() && !detail.questions.is_busy() {
        add = add.on_press(Message::Question(QuestionMessage::AddStarted));
    }

    let header = row![
        text(format!("Quiz Questions ({count})")).size(15),
        Space::new().width(Length::Fill),
        add,
    ]
    .align_y(Alignment::Center);

    let mut section = column![header, Space::new().height(SPACING_SM)].spacing(SPACING_SM);

    match questions {
        Some([]) => {
            section = section.push(
                text("No questions yet. Add the first one to build this video's quiz.")
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    }),
            );
        }
        Some(questions) => {
            let busy = detail.questions.is_busy();
            let last = questions.len() - 1;
            for (index, question) in questions.iter().enumerate() {
                section = section.push(question_card(detail, question, index, last, busy));
            }
        }
        None if state.cache.is_pending(&key) => {
            section = section.push(
                row![
                    lucide::loader().size(14),
                    text("Loading questions...").size(13),
                ]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            );
        }
        None => {
            let message = state
                .cache
                .error(&key)
                .map(|err| err.user_message().to_string())
                .unwrap_or_else(|| "Could not load questions.".to_string());
            section = section.push(text(message).size(13).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }
            }));
        }
    }

    if let Some(err) = detail.questions.reorder.error() {
        section = section.push(
            text(format!("Reorder failed: {}", err.user_message()))
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    if let Some(draft) = &detail.editor.adding {
        section = section.push(draft_form(
            "New Question",
            DraftTarget::New,
            draft,
            detail.questions.create.is_pending(),
            detail.questions.create.error().map(|err| err.user_message().to_string()),
            Message::Question(QuestionMessage::CreateSubmitted),
            Message::Question(QuestionMessage::AddCanceled),
        ));
    }

    section.into()
}

// =============================================================================
// QUESTION CARDS
// =============================================================================

fn question_card<'a>(
    detail: &'a VideoDetailState,
    question: &'a Question,
    index: usize,
    last: usize,
    busy: bool,
) -> Element<'a, Message> {
    if let EditState::Editing { question_id, draft } = &detail.editor.edit {
        if question_id == &question.id {
            return draft_form(
                "Edit Question",
                DraftTarget::Edit,
                draft,
                detail.questions.update.is_pending(),
                detail
                    .questions
                    .update
                    .error()
                    .map(|err| err.user_message().to_string()),
                Message::Question(QuestionMessage::UpdateSubmitted),
                Message::Question(QuestionMessage::EditCanceled),
            );
        }
    }

    let expanded = detail.editor.is_expanded(&question.id);

    let toggle = button(if expanded {
        lucide::chevron_up().size(14)
    } else {
        lucide::chevron_down().size(14)
    })
    .on_press(Message::Question(QuestionMessage::Toggled(
        question.id.clone(),
    )))
    .padding([4.0, 6.0])
    .style(button_ghost);

    let mut header = row![toggle, text(&question.text).size(14)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    if !question.has_correct_answer() {
        header = header.push(lucide::triangle_alert().size(14).style(
            |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().warning.base.color),
            },
        ));
    }

    header = header.push(Space::new().width(Length::Fill));

    let mut up = button(lucide::chevron_up().size(13))
        .padding([4.0, 6.0])
        .style(button_ghost);
    if index > 0 && !busy {
        up = up.on_press(Message::Question(QuestionMessage::MovedUp(index)));
    }
    let mut down = button(lucide::chevron_down().size(13))
        .padding([4.0, 6.0])
        .style(button_ghost);
    if index < last && !busy {
        down = down.on_press(Message::Question(QuestionMessage::MovedDown(index)));
    }

    let mut edit = button(lucide::pencil().size(13))
        .padding([4.0, 6.0])
        .style(button_ghost);
    if !busy {
        edit = edit.on_press(Message::Question(QuestionMessage::EditStarted(
            question.clone(),
        )));
    }

    let mut delete = button(lucide::trash_two().size(13).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }
    }))
    .padding([4.0, 6.0])
    .style(button_ghost);
    if !busy {
        delete = delete.on_press(Message::Question(QuestionMessage::DeleteRequested(
            question.id.clone(),
        )));
    }

    header = header.push(
        row![up, down, edit, delete]
            .spacing(2.0)
            .align_y(Alignment::Center),
    );

    let mut card = column![header].spacing(SPACING_SM);

    if expanded {
        let mut answers = column![].spacing(SPACING_XS);
        for answer in &question.answers {
            let icon = if answer.is_correct {
                lucide::circle_check()
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().success.base.color),
                    })
            } else {
                lucide::circle().size(13).style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                })
            };
            answers = answers.push(
                row![icon, text(&answer.text).size(13)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            );
        }
        card = card.push(container(answers).padding([0.0, SPACING_MD]));
    }

    container(card)
        .width(Length::Fill)
        .padding(SPACING_SM)
        .style(container_card)
        .into()
}

// =============================================================================
// DRAFT FORM
// =============================================================================

/// The shared question form, used both for the add-new draft and for an
/// in-card edit.
fn draft_form<'a>(
    title: &'a str,
    target: DraftTarget,
    draft: &'a QuestionDraft,
    pending: bool,
    error: Option<String>,
    on_submit: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    let text_over = draft.text.chars().count() > MAX_QUESTION_LEN;

    let question_input = text_input("Question text", &draft.text)
        .on_input(move |value| Message::Question(QuestionMessage::TextChanged(target, value)))
        .size(14)
        .padding([8.0, 10.0])
        .style(text_input_default);

    let mut answers = column![].spacing(SPACING_XS);
    let removable = draft.answers.len() > MIN_ANSWERS;
    for (answer_index, answer) in draft.answers.iter().enumerate() {
        let correct = checkbox(answer.is_correct)
            .on_toggle(move |_| {
                Message::Question(QuestionMessage::CorrectToggled(target, answer_index))
            })
            .size(16);

        let input = text_input("Answer text", &answer.text)
            .on_input(move |value| {
                Message::Question(QuestionMessage::AnswerTextChanged(
                    target,
                    answer_index,
                    value,
                ))
            })
            .size(13)
            .padding([6.0, 8.0])
            .style(text_input_default);

        let mut remove = button(lucide::x().size(12))
            .padding([4.0, 6.0])
            .style(button_ghost);
        if removable {
            remove = remove.on_press(Message::Question(QuestionMessage::AnswerRemoved(
                target,
                answer_index,
            )));
        }

        answers = answers.push(
            row![correct, input, remove]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        );
    }

    let add_answer = button(
        row![lucide::plus().size(12), text("Add Answer").size(12)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Question(QuestionMessage::AnswerAdded(target)))
    .padding([6.0, 10.0])
    .style(button_ghost);

    let hint = text(format!(
        "At least {MIN_ANSWERS} answers, one of them correct. Answers cap at {MAX_ANSWER_LEN} characters."
    ))
    .size(11)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.studio().text_muted),
    });

    let cancel = button(text("Cancel").size(13))
        .on_press(on_cancel)
        .padding([8.0, 14.0])
        .style(button_secondary);

    let submit_label = if pending { "Saving..." } else { "Save Question" };
    let mut submit = button(text(submit_label).size(13))
        .padding([8.0, 14.0])
        .style(button_primary);
    if draft.is_valid() && !pending {
        submit = submit.on_press(on_submit);
    }

    let mut form = column![
        text(title).size(14),
        question_input,
    ]
    .spacing(SPACING_SM);

    if text_over {
        form = form.push(
            text(format!("Questions cap at {MAX_QUESTION_LEN} characters."))
                .size(11)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    form = form.push(answers).push(add_answer).push(hint);

    if let Some(message) = error {
        form = form.push(text(message).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }));
    }

    form = form.push(
        row![Space::new().width(Length::Fill), cancel, submit]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    );

    container(form)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_inset)
        .into()
}
