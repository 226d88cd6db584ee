//! Operator interaction
//!
//! The wizard talks to the operator only through [`Prompter`], so the same
//! state machine drives a real terminal ([`TerminalPrompter`]) or a list of
//! canned answers ([`ScriptedPrompter`]).

use std::collections::VecDeque;

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Source of operator answers
pub trait Prompter {
    /// Ask for a line of free text; empty answers are allowed
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Tell the operator something went wrong with their last answer
    fn warn(&mut self, message: &str);
}

/// Interactive prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful dialoguer theme
    #[must_use]
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
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }

    fn warn(&mut self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), style(message).yellow());
    }
}

/// A single canned answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Reply to [`Prompter::input`]
    Text(String),
    /// Reply to [`Prompter::confirm`]
    Confirm(bool),
}

/// Replays canned answers in order and records every prompt and warning
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
    warnings: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will give `answers` in order
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Warnings shown so far, in order
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Answers that were never asked for
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .with_context(|| format!("No scripted answer left for prompt: {prompt}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.next_answer(prompt)? {
            Answer::Text(text) => Ok(text),
            Answer::Confirm(answer) => {
                anyhow::bail!("Expected text for '{prompt}', script has confirmation {answer}")
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match self.next_answer(prompt)? {
            Answer::Confirm(answer) => Ok(answer),
            Answer::Text(text) => {
                anyhow::bail!("Expected confirmation for '{prompt}', script has text '{text}'")
            }
        }
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
