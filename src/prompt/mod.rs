//! Interactive input
//!
//! The session asks for every answer through [`Prompter`]. Implementations
//! validate and re-prompt on their own, so callers only ever see well-formed
//! values.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use crate::error::BudgetResult;
use crate::models::Money;

/// Validation applied to free-text answers
pub type TextValidator<'v> = &'v dyn Fn(&str) -> Result<(), String>;

/// Blocking request/response interface to the user
pub trait Prompter {
    /// Pick one of `items`; returns its index
    fn select(&mut self, prompt: &str, items: &[String]) -> BudgetResult<usize>;

    /// Ask for a monetary amount
    fn input_amount(&mut self, prompt: &str) -> BudgetResult<Money>;

    /// Ask for text that passes `validator`
    fn input_text(&mut self, prompt: &str, validator: TextValidator<'_>) -> BudgetResult<String>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str) -> BudgetResult<bool>;

    /// Show an informational line
    fn message(&mut self, text: &str);
}
