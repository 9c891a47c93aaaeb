/// Default gold conversion rate (EGP per coin) pre-filled in the entry form.
pub const DEFAULT_GOLD_RATE: &str = "3500";

/// Default USD conversion rate (EGP per USD) pre-filled in the entry form.
pub const DEFAULT_DOLLAR_RATE: &str = "31";

/// Date format for snapshot dates. The chart can only place dates that
/// parse with this format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// File name of the SQLite database inside the app data directory.
pub const DB_FILENAME: &str = "savings_tracker.db";
