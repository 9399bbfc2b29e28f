//! Demo walk-through of the quiz aggregate.
//!
//! Authors a sample question, grades a few selections against it and reports
//! the result as JSON.

use anyhow::Context;
use serde::Serialize;

use quizbank_core::AggregateRoot;
use quizbank_quiz::{ChoiceId, CreateQuestion, Question};

/// Outcome of grading one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedSelection {
    pub selection: Vec<ChoiceId>,
    pub accepted: bool,
    pub score: u32,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub question: Question,
    pub version: u64,
    pub graded: Vec<GradedSelection>,
}

/// "Which of these are prime?" with 2 and 5 marked correct.
pub fn sample_question() -> anyhow::Result<Question> {
    let mut question = Question::create(
        CreateQuestion::new("Which of these numbers are prime?")
            .with_points(10)
            .with_max_selections(2),
    )
    .context("creating sample question")?;

    let mut ids = Vec::new();
    for text in ["2", "4", "5", "9"] {
        ids.push(question.add_choice(text, false)?.id());
    }

    // Author a wrong answer first, then fix it up; the second call replaces the first.
    question.set_correct_choices([ids[1]]);
    question.set_correct_choices([ids[0], ids[2]]);

    let scratch = question.add_choice("scratch", false)?.id();
    question.remove_choice_by_id(scratch)?;

    Ok(question)
}

pub fn grade(question: &Question, selection: &[ChoiceId]) -> GradedSelection {
    match question.score_selection(selection) {
        Ok(score) => GradedSelection {
            selection: selection.to_vec(),
            accepted: true,
            score,
            error: None,
        },
        Err(err) => {
            tracing::info!(error = %err, "selection rejected");
            GradedSelection {
                selection: selection.to_vec(),
                accepted: false,
                score: 0,
                error: Some(err.to_string()),
            }
        }
    }
}

pub fn run() -> anyhow::Result<DemoReport> {
    let question = sample_question()?;
    tracing::info!(
        question_id = %question.id(),
        choices = question.choices().len(),
        "sample question ready"
    );

    let selections: Vec<Vec<ChoiceId>> = vec![
        question.correct_choice_ids(),
        vec![ChoiceId::new(1), ChoiceId::new(2)],
        vec![ChoiceId::new(1), ChoiceId::new(2), ChoiceId::new(3)],
    ];
    let graded = selections.iter().map(|s| grade(&question, s)).collect();

    Ok(DemoReport {
        version: question.version(),
        question,
        graded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_question_has_two_correct_choices() {
        let question = sample_question().unwrap();
        assert_eq!(question.choices().len(), 4);
        assert_eq!(
            question.correct_choice_ids(),
            vec![ChoiceId::new(1), ChoiceId::new(3)]
        );
        // 5 adds, 2 correct-set replacements, 1 removal.
        assert_eq!(question.version(), 8);
    }

    #[test]
    fn run_grades_each_selection() {
        let report = run().unwrap();
        let scores: Vec<(bool, u32)> = report.graded.iter().map(|g| (g.accepted, g.score)).collect();
        assert_eq!(scores, vec![(true, 10), (true, 0), (false, 0)]);
        assert_eq!(
            report.graded[2].error.as_deref(),
            Some("Cannot select more than 2 choices")
        );
    }

    #[test]
    fn report_serializes() {
        let report = run().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["question"]["choices"].as_array().unwrap().len(), 4);
        assert_eq!(json["graded"][0]["selection"], serde_json::json!([1, 3]));
    }
}
