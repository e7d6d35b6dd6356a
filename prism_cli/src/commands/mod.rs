//! CLI subcommand implementations.

pub mod categories;
pub mod resources;
pub mod tasks;
pub mod vms;

use clap::Args;
use prism_api::{ListOptions, SortOrder};

/// Filter and sort flags shared by every list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// FIQL filter expression (e.g. "power_state==on")
    #[arg(long)]
    pub filter: Option<String>,

    /// Attribute to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort_by")]
    pub desc: bool,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        let mut options = ListOptions::default();
        if let Some(filter) = &self.filter {
            options = options.with_filter(filter);
        }
        if let Some(attribute) = &self.sort_by {
            let order = if self.desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            options = options.with_sort(attribute, order);
        }
        options
    }
}
