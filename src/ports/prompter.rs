use crate::domain::AppError;

/// Port for interactive question/answer exchanges.
pub trait Prompter {
    /// Show `prompt` and return one line of free text, without the line
    /// terminator.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
}
