use anyhow::Result;
use clap::{Args, Subcommand};
use prism_api::Client;

use super::ListArgs;
use crate::output::{print_category_keys, print_category_values, OutputFormat};

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List category keys
    List(ListArgs),
    /// Show one category key
    Get { name: String },
    /// List the values defined under a key
    Values { name: String },
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let categories = client.categories();
    match &args.command {
        CategoryCommand::List(list) => {
            let resp = categories.list(list.options()).await?;
            print_category_keys(&resp.entities, format)
        }
        CategoryCommand::Get { name } => {
            let key = categories.get(name).await?;
            print_category_keys(&[key], format)
        }
        CategoryCommand::Values { name } => {
            let resp = categories.list_values(name).await?;
            print_category_values(&resp.entities, format)
        }
    }
}
