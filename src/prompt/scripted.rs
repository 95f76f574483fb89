//! Prompter that replays canned answers
//!
//! Answers that fail validation are skipped, the same way an interactive
//! prompt would ask again. Every prompt and message is recorded so tests can
//! assert on what the user would have seen.

use std::collections::VecDeque;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::{Prompter, TextValidator};

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Prompts and messages in the order they were shown
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if any recorded line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> BudgetResult<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| BudgetError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    /// Accepts either the item label (case-insensitive) or its 1-based number
    fn select(&mut self, prompt: &str, items: &[String]) -> BudgetResult<usize> {
        let answer = self.next_answer(prompt)?;
        if let Some(index) = items.iter().position(|i| i.eq_ignore_ascii_case(&answer)) {
            return Ok(index);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(n - 1),
            _ => Err(BudgetError::Prompt(format!(
                "'{}' is not one of {:?}",
                answer, items
            ))),
        }
    }

    fn input_amount(&mut self, prompt: &str) -> BudgetResult<Money> {
        loop {
            let answer = self.next_answer(prompt)?;
            if let Ok(amount) = Money::parse(&answer) {
                return Ok(amount);
            }
        }
    }

    fn input_text(&mut self, prompt: &str, validator: TextValidator<'_>) -> BudgetResult<String> {
        loop {
            let answer = self.next_answer(prompt)?;
            let answer = answer.trim();
            if validator(answer).is_ok() {
                return Ok(answer.to_string());
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> BudgetResult<bool> {
        loop {
            let answer = self.next_answer(prompt)?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn message(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
