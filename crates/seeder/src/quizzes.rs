//! Quiz-bank loading and expansion.
//!
//! The quiz bank is a required fixed input; a missing or malformed file
//! terminates the run. Each topic's raw questions are expanded into the
//! store's question shape: a global question counter, per-option ids, and
//! `isCorrect` derived from the answer index.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::json;

use crate::data::{record, SeedRecord};

#[derive(Debug, Deserialize)]
pub struct QuizBank {
    pub quizzes: Vec<TopicQuizzes>,
}

#[derive(Debug, Deserialize)]
pub struct TopicQuizzes {
    pub topic: String,
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

pub fn load_quiz_bank(path: &Path) -> Result<QuizBank> {
    let file = File::open(path)
        .with_context(|| format!("failed to open quiz bank {}", path.display()))?;
    let bank: QuizBank = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse quiz bank {}", path.display()))?;
    Ok(bank)
}

/// Fixed topic routing: which course, lesson, and quiz document each topic
/// lands on. Unknown topics fall back to the Flutter course.
fn topic_mapping(topic: &str) -> (&'static str, &'static str, &'static str) {
    match topic {
        "Flutter" => ("flutter_basics", "flutter_quiz_lesson", "flutter_quiz"),
        "React" => ("react_advanced", "react_hooks", "react_quiz"),
        "UI/UX" => ("ui_ux_design", "ux_research", "ui_ux_quiz"),
        // The catalog has no C++ course; park those questions on python_ml.
        "C++" => ("python_ml", "ml_intro", "cpp_quiz"),
        _ => ("flutter_basics", "flutter_intro", "flutter_quiz"),
    }
}

pub fn quiz_records(bank: &QuizBank, now: DateTime<FixedOffset>) -> Result<Vec<SeedRecord>> {
    let mut records = Vec::with_capacity(bank.quizzes.len());
    let mut question_counter = 1u32;

    for topic_data in &bank.quizzes {
        let (course_id, lesson_id, quiz_id) = topic_mapping(&topic_data.topic);

        let mut questions = Vec::with_capacity(topic_data.questions.len());
        for (idx, q) in topic_data.questions.iter().enumerate() {
            let options: Vec<serde_json::Value> = q
                .options
                .iter()
                .enumerate()
                .map(|(opt_idx, text)| {
                    json!({
                        "id": format!("opt{}_{}", question_counter, opt_idx),
                        "text": text,
                        "isCorrect": opt_idx == q.answer_index,
                        "order": opt_idx + 1
                    })
                })
                .collect();

            questions.push(json!({
                "id": format!("q{}", question_counter),
                "question": q.question,
                "type": "multipleChoice",
                "options": options,
                "points": 10,
                "order": idx + 1
            }));
            question_counter += 1;
        }

        let body = json!({
            "id": quiz_id,
            "courseId": course_id,
            "lessonId": lesson_id,
            "title": format!("{} Quiz", topic_data.topic),
            "description": format!("Test your understanding of {} fundamentals.", topic_data.topic),
            "questions": questions,
            "timeLimit": 15,
            "passingScore": 70,
            "maxAttempts": 3,
            "isPublished": true
        });
        records.push(record("quizzes", now, body)?);
    }
    Ok(records)
}
