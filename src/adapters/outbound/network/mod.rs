/// Network adapters for external API calls
mod language_tool_client;

pub use language_tool_client::LanguageToolClient;
