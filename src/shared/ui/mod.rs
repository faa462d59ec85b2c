mod terminal_prompt;
mod user_prompt;

pub use terminal_prompt::TerminalPrompt;
pub use user_prompt::UserPrompt;
