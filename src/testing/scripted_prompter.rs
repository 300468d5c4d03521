use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter that replays canned answers and records every prompt shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), asked: Vec::new() }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("No scripted answer for '{prompt}'")))
    }
}
