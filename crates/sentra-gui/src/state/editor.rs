//! Question/answer editor state machine.
//!
//! Local draft state for authoring a video's quiz content: browse, expand,
//! create, edit, and delete questions with nested answers. Drafts live only
//! here until a save submits them; the persisted representation stays in the
//! cache untouched until the refetch after a confirmed success.

use std::collections::HashSet;

use sentra_api::schema::{
    AnswerInput, CreateQuestionInput, Question, QuestionOrder, ReorderQuestionsInput,
    UpdateQuestionInput,
};

// =============================================================================
// DRAFTS
// =============================================================================

/// One answer row inside a question draft.
///
/// `id` is present when the row mirrors a persisted answer and absent for
/// rows added during the current edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerDraft {
    pub id: Option<String>,
    pub text: String,
    pub is_correct: bool,
}

impl AnswerDraft {
    /// A blank incorrect answer row.
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Unpersisted edit state for one question and its answer collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub answers: Vec<AnswerDraft>,
}

impl Default for QuestionDraft {
    /// Empty text with exactly two blank incorrect answers, the minimum
    /// shape a question can be saved in.
    fn default() -> Self {
        Self {
            text: String::new(),
            answers: vec![AnswerDraft::blank(), AnswerDraft::blank()],
        }
    }
}

impl QuestionDraft {
    /// Snapshot a persisted question into an editable draft.
    pub fn from_question(question: &Question) -> Self {
        Self {
            text: question.text.clone(),
            answers: question
                .answers
                .iter()
                .map(|a| AnswerDraft {
                    id: Some(a.id.clone()),
                    text: a.text.clone(),
                    is_correct: a.is_correct,
                })
                .collect(),
        }
    }

    /// Replace the question text.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Replace the text of the answer at `index`; out of range is ignored.
    pub fn set_answer_text(&mut self, index: usize, text: String) {
        if let Some(answer) = self.answers.get_mut(index) {
            answer.text = text;
        }
    }

    /// Flip the correct flag of the answer at `index` only.
    ///
    /// Multiple answers may be marked correct at once.
    pub fn toggle_correct(&mut self, index: usize) {
        if let Some(answer) = self.answers.get_mut(index) {
            answer.is_correct = !answer.is_correct;
        }
    }

    /// Append one blank incorrect answer row.
    pub fn add_answer(&mut self) {
        self.answers.push(AnswerDraft::blank());
    }

    /// Remove the answer at `index`.
    ///
    /// A question needs at least two answers, so removal is a no-op when
    /// only two remain.
    pub fn remove_answer(&mut self, index: usize) {
        if self.answers.len() > 2 && index < self.answers.len() {
            self.answers.remove(index);
        }
    }

    /// Whether the draft is submittable: question text trims non-empty,
    /// every answer trims non-empty, and at least one answer is correct.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
            && self.answers.iter().all(|a| !a.text.trim().is_empty())
            && self.answers.iter().any(|a| a.is_correct)
    }

    /// Build the create payload; answers renumber 0-based by draft position.
    pub fn to_create_input(&self) -> CreateQuestionInput {
        CreateQuestionInput {
            text: self.text.clone(),
            order: None,
            answers: self
                .answers
                .iter()
                .enumerate()
                .map(|(i, a)| AnswerInput {
                    id: None,
                    text: a.text.clone(),
                    is_correct: a.is_correct,
                    order: i as i64,
                })
                .collect(),
        }
    }

    /// Build the update payload: full answer replacement with persisted ids
    /// kept, new rows without, and answers renumbered 0-based.
    pub fn to_update_input(&self) -> UpdateQuestionInput {
        UpdateQuestionInput {
            text: Some(self.text.clone()),
            order: None,
            answers: Some(
                self.answers
                    .iter()
                    .enumerate()
                    .map(|(i, a)| AnswerInput {
                        id: a.id.clone(),
                        text: a.text.clone(),
                        is_correct: a.is_correct,
                        order: i as i64,
                    })
                    .collect(),
            ),
        }
    }
}

// =============================================================================
// EDIT FOCUS
// =============================================================================

/// Which question, if any, currently owns the edit draft.
///
/// The tagged variant makes "exactly one or none" structurally true: there
/// is no way to hold two drafts or a draft without its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        question_id: String,
        draft: QuestionDraft,
    },
}

impl EditState {
    /// The id under edit, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditState::Idle => None,
            EditState::Editing { question_id, .. } => Some(question_id),
        }
    }

    /// Whether the given question owns the draft.
    pub fn is_editing(&self, question_id: &str) -> bool {
        self.editing_id() == Some(question_id)
    }
}

// =============================================================================
// EDITOR
// =============================================================================

/// Editor state for one video's question collection.
///
/// Reset wholesale when the video detail view is replaced; nothing here
/// survives navigation.
#[derive(Debug, Clone, Default)]
pub struct QuestionEditor {
    /// Ids of questions whose answer lists are expanded. Orthogonal to the
    /// edit focus: a question can be expanded without being edited.
    pub expanded: HashSet<String>,
    /// The single edit focus and its draft.
    pub edit: EditState,
    /// Independent draft for a brand-new question, present while the
    /// add-question form is open.
    pub adding: Option<QuestionDraft>,
}

impl QuestionEditor {
    /// Toggle a question's expanded state. No network effect.
    pub fn toggle_expanded(&mut self, question_id: &str) {
        if !self.expanded.remove(question_id) {
            self.expanded.insert(question_id.to_string());
        }
    }

    /// Whether a question's answers are shown.
    pub fn is_expanded(&self, question_id: &str) -> bool {
        self.expanded.contains(question_id)
    }

    /// Begin editing a question: snapshot it into the draft, expand it, and
    /// take the edit focus.
    ///
    /// Any previous draft (another question's edit or an open add-new form)
    /// is silently abandoned.
    pub fn begin_edit(&mut self, question: &Question) {
        self.adding = None;
        self.edit = EditState::Editing {
            question_id: question.id.clone(),
            draft: QuestionDraft::from_question(question),
        };
        self.expanded.insert(question.id.clone());
    }

    /// Discard the edit draft and clear the focus. No network call.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Open the add-question form with the default two-answer draft,
    /// abandoning any open edit.
    pub fn begin_add(&mut self) {
        self.edit = EditState::Idle;
        self.adding = Some(QuestionDraft::default());
    }

    /// Close the add-question form, discarding its draft.
    pub fn cancel_add(&mut self) {
        self.adding = None;
    }

    /// The draft under edit, if any.
    pub fn edit_draft_mut(&mut self) -> Option<&mut QuestionDraft> {
        match &mut self.edit {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }
}

// =============================================================================
// REORDERING
// =============================================================================

/// Build the bulk reorder payload after moving one question to a new slot.
///
/// Every question is renumbered 0-based by its resulting display position.
/// Returns `None` when either index is out of range or the move changes
/// nothing.
pub fn reorder_after_move(
    questions: &[Question],
    from: usize,
    to: usize,
) -> Option<ReorderQuestionsInput> {
    if from == to || from >= questions.len() || to >= questions.len() {
        return None;
    }

    let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    let moved = ids.remove(from);
    ids.insert(to, moved);

    Some(ReorderQuestionsInput {
        questions: ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| QuestionOrder {
                id: id.to_string(),
                order: i as i64,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_api::schema::Answer;

    fn answer(id: &str, text: &str, correct: bool, order: i64) -> Answer {
        Answer {
            id: id.to_string(),
            text: text.to_string(),
            is_correct: correct,
            order,
            question_id: "q1".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn question(id: &str, text: &str, answers: Vec<Answer>) -> Question {
        Question {
            id: id.to_string(),
            text: text.to_string(),
            order: 0,
            video_id: "v1".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            answers,
        }
    }

    fn sample_question() -> Question {
        question(
            "q1",
            "What is the emergency exit code?",
            vec![
                answer("a1", "1111", false, 0),
                answer("a2", "4242", true, 1),
            ],
        )
    }

    #[test]
    fn test_default_draft_has_two_blank_incorrect_answers() {
        let draft = QuestionDraft::default();
        assert!(draft.text.is_empty());
        assert_eq!(draft.answers.len(), 2);
        assert!(draft.answers.iter().all(|a| a.id.is_none()));
        assert!(draft.answers.iter().all(|a| !a.is_correct));
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_validity_requires_text_answers_and_a_correct_flag() {
        let mut draft = QuestionDraft::default();
        draft.set_text("Which door?".to_string());
        draft.set_answer_text(0, "Left".to_string());
        // Second answer still blank.
        assert!(!draft.is_valid());

        draft.set_answer_text(1, "Right".to_string());
        // No correct answer yet.
        assert!(!draft.is_valid());

        draft.toggle_correct(1);
        assert!(draft.is_valid());

        // Whitespace-only text does not count.
        draft.set_text("   ".to_string());
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_remove_answer_is_a_noop_at_two() {
        let mut draft = QuestionDraft::default();
        draft.remove_answer(0);
        assert_eq!(draft.answers.len(), 2);

        draft.add_answer();
        assert_eq!(draft.answers.len(), 3);
        draft.remove_answer(2);
        assert_eq!(draft.answers.len(), 2);
    }

    #[test]
    fn test_toggle_affects_only_the_target_index() {
        let mut draft = QuestionDraft::default();
        draft.add_answer();
        draft.toggle_correct(1);
        assert!(!draft.answers[0].is_correct);
        assert!(draft.answers[1].is_correct);
        assert!(!draft.answers[2].is_correct);

        // Multi-correct stays representable.
        draft.toggle_correct(0);
        assert!(draft.answers[0].is_correct);
        assert!(draft.answers[1].is_correct);
    }

    #[test]
    fn test_begin_edit_snapshots_and_expands() {
        let mut editor = QuestionEditor::default();
        let q = sample_question();
        editor.begin_edit(&q);

        assert!(editor.edit.is_editing("q1"));
        assert!(editor.is_expanded("q1"));
        let draft = editor.edit_draft_mut().unwrap();
        assert_eq!(draft.text, "What is the emergency exit code?");
        assert_eq!(draft.answers[1].id.as_deref(), Some("a2"));
        assert!(draft.answers[1].is_correct);
    }

    #[test]
    fn test_begin_edit_on_another_question_discards_the_first_draft() {
        let mut editor = QuestionEditor::default();
        let a = sample_question();
        let b = question(
            "q2",
            "Where is the muster point?",
            vec![
                answer("b1", "Car park", true, 0),
                answer("b2", "Lobby", false, 1),
            ],
        );

        editor.begin_edit(&a);
        editor
            .edit_draft_mut()
            .unwrap()
            .set_text("edited but never saved".to_string());

        editor.begin_edit(&b);
        assert!(editor.edit.is_editing("q2"));
        assert_eq!(
            editor.edit_draft_mut().unwrap().text,
            "Where is the muster point?"
        );
    }

    #[test]
    fn test_add_and_edit_are_mutually_exclusive() {
        let mut editor = QuestionEditor::default();
        let q = sample_question();

        editor.begin_add();
        assert!(editor.adding.is_some());
        editor.begin_edit(&q);
        assert!(editor.adding.is_none());
        assert!(editor.edit.is_editing("q1"));

        editor.begin_add();
        assert_eq!(editor.edit, EditState::Idle);
        assert!(editor.adding.is_some());
    }

    #[test]
    fn test_cancel_edit_discards_without_touching_expansion() {
        let mut editor = QuestionEditor::default();
        let q = sample_question();
        editor.begin_edit(&q);
        editor.cancel_edit();

        assert_eq!(editor.edit, EditState::Idle);
        // The row stays expanded in view mode.
        assert!(editor.is_expanded("q1"));
    }

    #[test]
    fn test_create_payload_renumbers_answers_from_zero() {
        let mut draft = QuestionDraft::default();
        draft.set_text("Pick the safe answer".to_string());
        draft.set_answer_text(0, "A".to_string());
        draft.set_answer_text(1, "B".to_string());
        draft.toggle_correct(1);

        let input = draft.to_create_input();
        assert_eq!(input.text, "Pick the safe answer");
        assert!(input.order.is_none());
        assert_eq!(input.answers.len(), 2);
        assert_eq!(input.answers[0].order, 0);
        assert_eq!(input.answers[1].order, 1);
        assert!(input.answers.iter().all(|a| a.id.is_none()));
        assert!(input.answers[1].is_correct);
    }

    #[test]
    fn test_update_payload_keeps_ids_and_renumbers() {
        let q = sample_question();
        let mut draft = QuestionDraft::from_question(&q);
        draft.add_answer();
        draft.set_answer_text(2, "0000".to_string());

        let input = draft.to_update_input();
        let answers = input.answers.unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers[0].id.as_deref(), Some("a1"));
        assert_eq!(answers[2].id, None);
        assert_eq!(
            answers.iter().map(|a| a.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_reorder_after_move_renumbers_every_slot() {
        let questions = vec![
            sample_question(),
            question("q2", "Second", vec![]),
            question("q3", "Third", vec![]),
        ];

        let input = reorder_after_move(&questions, 2, 0).unwrap();
        let pairs: Vec<(&str, i64)> = input
            .questions
            .iter()
            .map(|q| (q.id.as_str(), q.order))
            .collect();
        assert_eq!(pairs, vec![("q3", 0), ("q1", 1), ("q2", 2)]);

        assert!(reorder_after_move(&questions, 1, 1).is_none());
        assert!(reorder_after_move(&questions, 5, 0).is_none());
    }
}
