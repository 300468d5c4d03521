mod scripted_prompter;

pub use scripted_prompter::ScriptedPrompter;
