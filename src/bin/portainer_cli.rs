//! portainer-cli - inspect a Portainer instance from the command line
//!
//! Usage:
//!   portainer-cli status                               Portainer version and instance id
//!   portainer-cli environments                         List environments
//!   portainer-cli containers <env-id> [--all]          List containers of an environment
//!   portainer-cli logs <env-id> <container> [tail]     Print combined stdout/stderr
//!   portainer-cli stacks                               List stacks
//!   portainer-cli stack <name>                         Show one stack by name

use anyhow::{bail, Context};
use portainer_mcp_rust::types::{ContainerLogsArgs, ListContainersArgs};
use portainer_mcp_rust::PortainerClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "version" | "--version" | "-V" => {
            println!("portainer-cli {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let client = PortainerClient::from_env().context("failed to configure Portainer client")?;

    match args[1].as_str() {
        "status" => print_json(&client.system_status().await?),
        "environments" => print_json(&client.list_environments().await?),
        "containers" => {
            let environment_id = parse_id(args.get(2), "env-id")?;
            let all = args.iter().skip(3).any(|a| a == "--all");
            let containers = client
                .list_containers(&ListContainersArgs {
                    environment_id,
                    all,
                })
                .await?;
            print_json(&containers)
        }
        "logs" => {
            let environment_id = parse_id(args.get(2), "env-id")?;
            let container_id = args.get(3).context("missing <container>")?.clone();
            let tail = match args.get(4) {
                Some(raw) => raw.parse::<i64>().context("tail must be an integer")?,
                None => portainer_mcp_rust::logs::DEFAULT_TAIL,
            };
            let logs = client
                .container_logs(&ContainerLogsArgs {
                    environment_id,
                    container_id,
                    tail,
                })
                .await?;
            print!("{logs}");
            Ok(())
        }
        "stacks" => print_json(&client.list_stacks().await?),
        "stack" => {
            let name = args.get(2).context("missing <name>")?;
            print_json(&client.find_stack_by_name(name).await?)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"portainer-cli - Portainer inspection tool

USAGE:
    portainer-cli <COMMAND> [ARGS]

COMMANDS:
    status                              Portainer version and instance id
    environments                        List environments
    containers <env-id> [--all]         List containers of an environment
    logs <env-id> <container> [tail]    Print combined stdout/stderr (tail 1..10000, default 100)
    stacks                              List stacks
    stack <name>                        Show one stack by name
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    PORTAINER_URL                       Portainer base address
    PORTAINER_API_KEY                   Access token
    PORTAINER_INSECURE_TLS              Accept self-signed certificates
    RUST_LOG                            Log filter (default: warn)"#
    );
}

fn parse_id(raw: Option<&String>, name: &str) -> anyhow::Result<u64> {
    let Some(raw) = raw else {
        bail!("missing <{name}>");
    };
    raw.parse::<u64>()
        .with_context(|| format!("<{name}> must be a numeric id, got '{raw}'"))
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
