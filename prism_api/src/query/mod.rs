mod list;
pub use self::list::{ListOptions, SortOrder};
