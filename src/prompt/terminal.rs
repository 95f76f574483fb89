//! Terminal prompts backed by dialoguer

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::{Prompter, TextValidator};

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> BudgetResult<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input_amount(&mut self, prompt: &str) -> BudgetResult<Money> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), String> {
                Money::parse(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Money::parse(&raw).map_err(|e| BudgetError::Prompt(e.to_string()))
    }

    fn input_text(&mut self, prompt: &str, validator: TextValidator<'_>) -> BudgetResult<String> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), String> { validator(input.trim()) })
            .interact_text()?;
        Ok(raw.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> BudgetResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?;
        Ok(answer)
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}
