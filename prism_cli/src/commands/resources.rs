//! Read-only listing of the remaining intent-shaped kinds.

use anyhow::Result;
use clap::Args;
use prism_api::Client;

use super::ListArgs;
use crate::output::{print_entities, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Clusters,
    Subnets,
    Projects,
    Images,
    Snapshots,
    AvailabilityZones,
    RecoveryPoints,
}

#[derive(Args, Debug)]
pub struct ResourceArgs {
    /// Show one entity by UUID (or by name for clusters, subnets, projects and images)
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(
    kind: ResourceKind,
    args: &ResourceArgs,
    client: &Client,
    format: OutputFormat,
) -> Result<()> {
    let options = args.list.options();
    match (kind, args.id.as_deref()) {
        (ResourceKind::Clusters, Some(id)) => print_entities(&[client.clusters().get(id).await?], format),
        (ResourceKind::Clusters, None) => {
            print_entities(&client.clusters().list(options).await?.entities, format)
        }
        (ResourceKind::Subnets, Some(id)) => print_entities(&[client.subnets().get(id).await?], format),
        (ResourceKind::Subnets, None) => {
            print_entities(&client.subnets().list(options).await?.entities, format)
        }
        (ResourceKind::Projects, Some(id)) => {
            print_entities(&[client.projects().get(id).await?], format)
        }
        (ResourceKind::Projects, None) => {
            print_entities(&client.projects().list(options).await?.entities, format)
        }
        (ResourceKind::Images, Some(id)) => print_entities(&[client.images().get(id).await?], format),
        (ResourceKind::Images, None) => {
            print_entities(&client.images().list(options).await?.entities, format)
        }
        (ResourceKind::Snapshots, Some(id)) => {
            print_entities(&[client.snapshots().get_by_uuid(id).await?], format)
        }
        (ResourceKind::Snapshots, None) => {
            print_entities(&client.snapshots().list(options).await?.entities, format)
        }
        (ResourceKind::AvailabilityZones, Some(id)) => {
            print_entities(&[client.availability_zones().get_by_uuid(id).await?], format)
        }
        (ResourceKind::AvailabilityZones, None) => print_entities(
            &client.availability_zones().list(options).await?.entities,
            format,
        ),
        (ResourceKind::RecoveryPoints, Some(id)) => {
            print_entities(&[client.recovery_points().get_by_uuid(id).await?], format)
        }
        (ResourceKind::RecoveryPoints, None) => print_entities(
            &client.recovery_points().list(options).await?.entities,
            format,
        ),
    }
}
