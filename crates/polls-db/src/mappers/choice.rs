//! Choice model -> entity mapper

use polls_core::{Choice, RecordId};

use crate::models::ChoiceModel;

impl From<ChoiceModel> for Choice {
    fn from(model: ChoiceModel) -> Self {
        Choice {
            id: RecordId::new(model.id),
            question_id: RecordId::new(model.question_id),
            choice_text: model.choice_text,
            votes: model.votes,
        }
    }
}
