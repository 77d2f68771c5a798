mod library;
mod recently_added;
mod refresh;

pub use library::ScanOutcome;
pub use library::list_sections;
pub use library::scan_or_list;
pub use recently_added::AggregateError;
pub use recently_added::RefreshMode;
pub use recently_added::aggregate;
pub use refresh::ConsoleReporter;
pub use refresh::RefreshReporter;
pub use refresh::refresh_all;
