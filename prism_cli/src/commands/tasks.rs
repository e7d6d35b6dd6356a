use anyhow::Result;
use clap::Args;
use prism_api::{Client, ListOptions};

use crate::output::{print_tasks, OutputFormat};

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Show one task by UUID
    #[arg(long)]
    pub id: Option<String>,

    /// Number of tasks to return
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub async fn run(args: &TasksArgs, client: &Client, format: OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let task = client.tasks().get_by_uuid(id).await?;
        return print_tasks(&[task], format);
    }

    let resp = client
        .tasks()
        .list(ListOptions::default().with_length(args.limit))
        .await?;
    eprintln!(
        "{} of {} tasks",
        resp.entities.len(),
        resp.metadata.total_matches
    );
    print_tasks(&resp.entities, format)
}
