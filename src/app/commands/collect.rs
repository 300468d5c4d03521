//! Input collection: the four prompts and their normalization.

use tracing::debug;

use crate::domain::{AppError, Answers, Casing, EmptyTokenPolicy, EntityName, tokenize};
use crate::ports::Prompter;

pub const NAME_PROMPT: &str = "Name";
pub const TYPES_PROMPT: &str = "Types (separated by space)";
pub const PREDICATES_PROMPT: &str = "Predicates (separated by space)";
pub const ACTIONS_PROMPT: &str = "Actions (separated by space)";

/// Ask for the entity name. A blank answer aborts; there is no re-prompt.
pub fn collect_name<P: Prompter>(prompter: &mut P) -> Result<EntityName, AppError> {
    let raw = prompter.ask(NAME_PROMPT)?;
    EntityName::parse(&raw)
}

pub fn collect_tokens<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    casing: Casing,
    policy: EmptyTokenPolicy,
) -> Result<Vec<String>, AppError> {
    let raw = prompter.ask(prompt)?;
    let tokens = tokenize(&raw, casing, policy);
    if tokens.iter().any(String::is_empty) {
        debug!(prompt, "answer contains empty tokens");
    }
    Ok(tokens)
}

/// Run the four prompts in order: name, types, predicates, actions.
pub fn collect_answers<P: Prompter>(
    prompter: &mut P,
    policy: EmptyTokenPolicy,
) -> Result<Answers, AppError> {
    let name = collect_name(prompter)?;
    let types = collect_tokens(prompter, TYPES_PROMPT, Casing::Title, policy)?;
    let predicates = collect_tokens(prompter, PREDICATES_PROMPT, Casing::Lower, policy)?;
    let actions = collect_tokens(prompter, ACTIONS_PROMPT, Casing::Lower, policy)?;

    debug!(
        name = name.as_str(),
        types = types.len(),
        predicates = predicates.len(),
        actions = actions.len(),
        "collected answers"
    );
    Ok(Answers { name, types, predicates, actions })
}
