/// Mock implementations for testing
mod mock_page_source;
mod mock_progress_reporter;
mod mock_spell_checker;

pub use mock_page_source::MockPageSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_spell_checker::MockSpellChecker;
