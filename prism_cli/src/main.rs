mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prism_api::{Client, Credentials};

use crate::commands::resources::{ResourceArgs, ResourceKind};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Query and manage a Prism Central or Prism Element endpoint")]
struct Cli {
    /// Management endpoint host, or a full base URL with --base-url
    #[arg(long, env = "PRISM_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Use the endpoint value as a complete base URL instead of a host name
    #[arg(long, global = true)]
    base_url: bool,

    #[arg(long, env = "PRISM_USERNAME", global = true)]
    username: Option<String>,

    #[arg(long, env = "PRISM_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, env = "PRISM_INSECURE", global = true)]
    insecure: bool,

    /// Entities requested per list page
    #[arg(long, global = true)]
    page_size: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage virtual machines
    Vms(commands::vms::VmsArgs),
    /// List or show clusters
    Clusters(ResourceArgs),
    /// List or show subnets
    Subnets(ResourceArgs),
    /// List or show projects
    Projects(ResourceArgs),
    /// List or show images
    Images(ResourceArgs),
    /// List or show VM snapshots
    Snapshots(ResourceArgs),
    /// List or show availability zones
    AvailabilityZones(ResourceArgs),
    /// List or show VM recovery points
    RecoveryPoints(ResourceArgs),
    /// List category keys and values
    Categories(commands::categories::CategoriesArgs),
    /// List or show tasks
    Tasks(commands::tasks::TasksArgs),
}

fn build_client(cli: &Cli) -> Result<Client> {
    let endpoint = cli
        .endpoint
        .as_deref()
        .context("no endpoint given (use --endpoint or PRISM_ENDPOINT)")?;
    let username = cli
        .username
        .as_deref()
        .context("no username given (use --username or PRISM_USERNAME)")?;
    let password = cli
        .password
        .as_deref()
        .context("no password given (use --password or PRISM_PASSWORD)")?;

    let mut builder = Client::builder()
        .credentials(Credentials::new(username, password))
        .insecure(cli.insecure);
    builder = if cli.base_url {
        builder.base_url(endpoint)
    } else {
        builder.endpoint(endpoint)
    };
    if let Some(page_size) = cli.page_size {
        builder = builder.page_size(page_size);
    }
    Ok(builder.build()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("prism=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    tracing::debug!("Using endpoint {}", client.base_url());
    let format = cli.output;

    match &cli.command {
        Commands::Vms(args) => commands::vms::run(args, &client, format).await?,
        Commands::Clusters(args) => {
            commands::resources::run(ResourceKind::Clusters, args, &client, format).await?
        }
        Commands::Subnets(args) => {
            commands::resources::run(ResourceKind::Subnets, args, &client, format).await?
        }
        Commands::Projects(args) => {
            commands::resources::run(ResourceKind::Projects, args, &client, format).await?
        }
        Commands::Images(args) => {
            commands::resources::run(ResourceKind::Images, args, &client, format).await?
        }
        Commands::Snapshots(args) => {
            commands::resources::run(ResourceKind::Snapshots, args, &client, format).await?
        }
        Commands::AvailabilityZones(args) => {
            commands::resources::run(ResourceKind::AvailabilityZones, args, &client, format)
                .await?
        }
        Commands::RecoveryPoints(args) => {
            commands::resources::run(ResourceKind::RecoveryPoints, args, &client, format).await?
        }
        Commands::Categories(args) => commands::categories::run(args, &client, format).await?,
        Commands::Tasks(args) => commands::tasks::run(args, &client, format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::categories::CategoryCommand;
    use crate::commands::vms::VmCommand;
    use clap::CommandFactory;
    use prism_api::types::PowerState;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["prism"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_vm_power() {
        let cli = parse(&[
            "--endpoint", "pc.local", "--username", "admin", "--password", "x",
            "vms", "power", "web-01", "acpi-shutdown",
        ]);
        match cli.command {
            Commands::Vms(args) => match args.command {
                VmCommand::Power { vm, state } => {
                    assert_eq!(vm, "web-01");
                    assert_eq!(state, PowerState::AcpiShutdown);
                }
                other => panic!("unexpected command {:?}", other),
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_unknown_power_state() {
        let result = Cli::try_parse_from(["prism", "vms", "power", "web-01", "hibernate"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_options_and_output() {
        let cli = parse(&[
            "subnets", "--filter", "vlan_id==10", "--sort-by", "name", "--desc",
            "--output", "csv",
        ]);
        assert_eq!(cli.output, OutputFormat::Csv);
        match cli.command {
            Commands::Subnets(args) => {
                let options = args.list.options();
                assert_eq!(options.filter.as_deref(), Some("vlan_id==10"));
                assert_eq!(options.sort_attribute.as_deref(), Some("name"));
                assert_eq!(options.sort_order, Some(prism_api::SortOrder::Descending));
                assert!(args.id.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn desc_requires_sort_by() {
        let result = Cli::try_parse_from(["prism", "clusters", "--desc"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_category_values() {
        let cli = parse(&["categories", "values", "Environment"]);
        match cli.command {
            Commands::Categories(args) => match args.command {
                CategoryCommand::Values { name } => assert_eq!(name, "Environment"),
                other => panic!("unexpected command {:?}", other),
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn client_requires_credentials() {
        let cli = Cli {
            endpoint: Some("pc.local".to_string()),
            base_url: false,
            username: Some("admin".to_string()),
            password: None,
            insecure: false,
            page_size: None,
            output: OutputFormat::Table,
            command: Commands::Tasks(commands::tasks::TasksArgs { id: None, limit: 20 }),
        };
        let err = build_client(&cli).unwrap_err();
        assert!(err.to_string().contains("PRISM_PASSWORD"));
    }

    #[test]
    fn client_from_base_url_and_page_size() {
        let cli = Cli {
            endpoint: Some("http://127.0.0.1:8080/".to_string()),
            base_url: true,
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            insecure: true,
            page_size: Some(50),
            output: OutputFormat::Json,
            command: Commands::Tasks(commands::tasks::TasksArgs { id: None, limit: 20 }),
        };
        let client = build_client(&cli).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");
        assert_eq!(client.page_size(), 50);
    }
}
