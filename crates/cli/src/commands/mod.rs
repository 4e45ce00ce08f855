//! CLI command handlers.

mod ask;
mod search;

pub use ask::AskCommand;
pub use search::SearchCommand;
