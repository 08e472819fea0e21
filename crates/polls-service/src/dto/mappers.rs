//! Entity to DTO mappers

use chrono::{DateTime, Utc};
use polls_core::{Choice, Question};

use super::responses::{ChoiceView, DetailView, QuestionView, ResultsView};

impl QuestionView {
    /// Build the view of a question as seen at `now`
    pub fn at(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            pub_date: question.pub_date,
            was_published_recently: question.was_published_recently(now),
        }
    }
}

impl From<&Choice> for ChoiceView {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.choice_text.clone(),
            votes: choice.votes,
        }
    }
}

impl From<Choice> for ChoiceView {
    fn from(choice: Choice) -> Self {
        Self::from(&choice)
    }
}

impl DetailView {
    pub fn new(question: &Question, choices: &[Choice], now: DateTime<Utc>) -> Self {
        Self {
            question: QuestionView::at(question, now),
            choices: choices.iter().map(ChoiceView::from).collect(),
            error_message: None,
        }
    }
}

impl ResultsView {
    /// `choices` must already be ranked
    pub fn new(question: &Question, choices: &[Choice], now: DateTime<Utc>) -> Self {
        Self {
            question: QuestionView::at(question, now),
            choices: choices.iter().map(ChoiceView::from).collect(),
        }
    }
}
