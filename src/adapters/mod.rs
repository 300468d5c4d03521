pub mod memory_skeleton_store;
pub mod skeleton_filesystem;
pub mod terminal_prompter;
