use crate::ports::{Prompter, SkeletonStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SkeletonStore, P: Prompter> {
    store: S,
    prompter: P,
}

impl<S: SkeletonStore, P: Prompter> AppContext<S, P> {
    /// Create a new application context.
    pub fn new(store: S, prompter: P) -> Self {
        Self { store, prompter }
    }

    /// Get a reference to the skeleton store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn into_parts(self) -> (S, P) {
        (self.store, self.prompter)
    }
}
