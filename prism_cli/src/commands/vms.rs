use anyhow::Result;
use clap::{Args, Subcommand};
use prism_api::types::PowerState;
use prism_api::Client;

use super::ListArgs;
use crate::output::{print_entities, print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct VmsArgs {
    #[command(subcommand)]
    pub command: VmCommand,
}

#[derive(Subcommand, Debug)]
pub enum VmCommand {
    /// List VMs, following every page
    List(ListArgs),
    /// Show one VM by UUID or name
    Get { vm: String },
    /// Change the power state (on, off, powercycle, reset, acpi-shutdown, ...)
    Power { vm: String, state: PowerState },
    /// Clone a VM with the server's default clone spec
    #[command(name = "clone")]
    CloneVm { vm: String },
    /// Take a recovery point of a VM
    Snapshot { vm: String },
    /// Revert a VM to a recovery point
    Revert {
        vm: String,
        /// UUID of the recovery point
        #[arg(long)]
        recovery_point: String,
    },
    /// Delete a VM
    Delete { vm: String },
}

pub async fn run(args: &VmsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let vms = client.vms();
    match &args.command {
        VmCommand::List(list) => {
            let resp = vms.list(list.options()).await?;
            eprintln!(
                "{} of {} VMs",
                resp.entities.len(),
                resp.metadata.total_matches
            );
            print_entities(&resp.entities, format)?;
        }
        VmCommand::Get { vm } => {
            let vm = vms.get(vm).await?;
            print_entities(&[vm], format)?;
        }
        VmCommand::Power { vm, state } => {
            let vm = vms.get(vm).await?;
            print_json(&vms.set_power_state(&vm, *state).await?);
        }
        VmCommand::CloneVm { vm } => {
            let vm = vms.get(vm).await?;
            print_json(&vms.clone_vm(&vm).await?);
        }
        VmCommand::Snapshot { vm } => {
            let vm = vms.get(vm).await?;
            print_json(&vms.create_recovery_point(&vm).await?);
        }
        VmCommand::Revert { vm, recovery_point } => {
            let vm = vms.get(vm).await?;
            print_json(&vms.revert_to_recovery_point(&vm, recovery_point).await?);
        }
        VmCommand::Delete { vm } => {
            let vm = vms.get(vm).await?;
            vms.delete(&vm).await?;
            eprintln!("Deleted VM {}", vm.uuid().unwrap_or_default());
        }
    }
    Ok(())
}
