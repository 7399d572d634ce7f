pub mod add_option;
pub mod date;
pub mod progress;
pub mod task;

pub use add_option::{AddOption, OptionIcon, builtin_add_options};
pub use date::{DateCell, date_window};
pub use progress::Progress;
pub use task::{CatalogError, Task, TaskIcon, builtin_tasks, find_task};

/// App name shown in the header.
pub const APP_NAME: &str = "WingsFly";

/// The motivational quote shown on the quote card.
pub const DAILY_QUOTE: &str = "\"You must do the things, you think you cannot do.\"";
