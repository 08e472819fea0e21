//! Question model -> entity mapper

use polls_core::{Question, RecordId};

use crate::models::QuestionModel;

impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: RecordId::new(model.id),
            question_text: model.question_text,
            pub_date: model.pub_date,
        }
    }
}
