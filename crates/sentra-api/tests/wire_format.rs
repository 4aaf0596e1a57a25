//! Snapshot tests pinning the exact JSON the client puts on the wire.
//!
//! The server validates request bodies strictly, so a silent change to
//! field casing or to which optional fields get serialized is a bug the
//! type checker cannot catch. These snapshots make such drift visible.

use sentra_api::schema::{
    AddDomainInput, AnswerInput, CreateCompanyInput, CreateQuestionInput, CreateUserInput,
    CreateVideoInput, QuestionOrder, ReorderQuestionsInput, Role, UpdateCompanyInput,
    UpdateVideoInput,
};

#[test]
fn create_company_payload() {
    let input = CreateCompanyInput {
        name: "Acme".to_string(),
        timezone: "Europe/Amsterdam".to_string(),
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "name": "Acme",
      "timezone": "Europe/Amsterdam"
    }
    "#);
}

#[test]
fn update_company_payload_omits_unchanged_fields() {
    let input = UpdateCompanyInput {
        name: None,
        timezone: Some("UTC".to_string()),
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "timezone": "UTC"
    }
    "#);
}

#[test]
fn add_domain_payload() {
    insta::assert_json_snapshot!(AddDomainInput::new(" Acme.COM "), @r#"
    {
      "domain": "acme.com"
    }
    "#);
}

#[test]
fn create_user_payload_with_names_omitted() {
    let input = CreateUserInput {
        email: "jo@acme.com".to_string(),
        first_name: None,
        last_name: None,
        role: Role::Admin,
        company_id: "c1".to_string(),
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "email": "jo@acme.com",
      "role": "admin",
      "companyId": "c1"
    }
    "#);
}

#[test]
fn create_video_payload_for_everyone_has_no_company() {
    let input = CreateVideoInput {
        title: "Safety Basics".to_string(),
        publish_date: "2026-09-01T12:00:00.000Z".to_string(),
        company_id: None,
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "title": "Safety Basics",
      "publishDate": "2026-09-01T12:00:00.000Z"
    }
    "#);
}

#[test]
fn update_video_payload_clearing_the_company_sends_null() {
    let input = UpdateVideoInput {
        title: None,
        publish_date: None,
        company_id: Some(None),
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "companyId": null
    }
    "#);
}

#[test]
fn create_question_payload() {
    let input = CreateQuestionInput {
        text: "What goes first?".to_string(),
        order: None,
        answers: vec![
            AnswerInput {
                id: None,
                text: "Gloves".to_string(),
                is_correct: true,
                order: 0,
            },
            AnswerInput {
                id: Some("a2".to_string()),
                text: "Goggles".to_string(),
                is_correct: false,
                order: 1,
            },
        ],
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "text": "What goes first?",
      "answers": [
        {
          "text": "Gloves",
          "isCorrect": true,
          "order": 0
        },
        {
          "id": "a2",
          "text": "Goggles",
          "isCorrect": false,
          "order": 1
        }
      ]
    }
    "#);
}

#[test]
fn reorder_payload_carries_every_question() {
    let input = ReorderQuestionsInput {
        questions: vec![
            QuestionOrder {
                id: "q2".to_string(),
                order: 0,
            },
            QuestionOrder {
                id: "q1".to_string(),
                order: 1,
            },
        ],
    };
    insta::assert_json_snapshot!(input, @r#"
    {
      "questions": [
        {
          "id": "q2",
          "order": 0
        },
        {
          "id": "q1",
          "order": 1
        }
      ]
    }
    "#);
}
