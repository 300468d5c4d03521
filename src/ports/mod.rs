mod prompter;
mod skeleton_store;

pub use prompter::Prompter;
pub use skeleton_store::SkeletonStore;
