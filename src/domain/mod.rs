pub mod answers;
pub mod config;
pub mod error;
pub mod skeleton;

pub use answers::{Answers, Casing, EntityName, tokenize};
pub use config::{CONFIG_FILE, EmptyTokenPolicy, GeneratorConfig, parse_config_content};
pub use error::AppError;
pub use skeleton::{Skeleton, render};
