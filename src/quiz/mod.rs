pub mod bank;

pub use bank::QUESTIONS;
use rustc_hash::FxHashSet;
use std::{fmt, str::FromStr};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Fcfs,
    FirstFit,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::FirstFit => "first-fit",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Self::Fcfs),
            "first-fit" => Ok(Self::FirstFit),
            other => Err(format!("unknown topic '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Only(Topic),
}

impl TopicFilter {
    pub fn matches(&self, topic: Topic) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == topic,
        }
    }
}

#[derive(Debug)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
    pub topic: Topic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Correct, and the first time this question scored in the session.
    pub first_correct: bool,
    pub correct_index: usize,
    pub explanation: &'static str,
}

/// One pass through the (filtered) question bank.
#[derive(Debug)]
pub struct QuizSession {
    bank: &'static [Question],
    filter: TopicFilter,
    questions: Vec<&'static Question>,
    index: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    answered: FxHashSet<&'static str>,
}

impl QuizSession {
    pub fn new(filter: TopicFilter) -> Self {
        Self::with_questions(filter, QUESTIONS)
    }

    pub fn with_questions(filter: TopicFilter, bank: &'static [Question]) -> Self {
        let questions = bank.iter().filter(|q| filter.matches(q.topic)).collect();
        Self {
            bank,
            filter,
            questions,
            index: 0,
            selected: None,
            revealed: false,
            score: 0,
            answered: FxHashSet::default(),
        }
    }

    pub fn filter(&self) -> TopicFilter {
        self.filter
    }

    /// Switching topics starts over.
    pub fn set_filter(&mut self, filter: TopicFilter) {
        *self = Self::with_questions(filter, self.bank);
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.selected = None;
        self.revealed = false;
        self.score = 0;
        self.answered.clear();
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static Question> {
        self.questions.get(self.index).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Picks an option. Ignored once the answer has been revealed.
    pub fn select(&mut self, option: usize) -> bool {
        let Some(question) = self.current() else {
            return false;
        };
        if self.revealed || option >= question.options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub fn submit(&mut self) -> Option<AnswerOutcome> {
        let question = self.current()?;
        let selected = self.selected?;
        if self.revealed {
            return None;
        }
        self.revealed = true;

        let correct = selected == question.correct_index;
        let first_correct = correct && self.answered.insert(question.id);
        if first_correct {
            self.score += 1;
        }
        debug!(question = question.id, selected, correct, "answer submitted");

        Some(AnswerOutcome {
            correct,
            first_correct,
            correct_index: question.correct_index,
            explanation: question.explanation,
        })
    }

    pub fn advance(&mut self) {
        if self.is_complete() {
            return;
        }
        self.selected = None;
        self.revealed = false;
        self.index += 1;
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Score as a rounded percentage; 0 when the filter matched nothing.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}
