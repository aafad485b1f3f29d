use anyhow::Context;
use clap::{Parser, Subcommand};
use portainer_client::{PortainerClient, PortainerConfig};

/// Manage containers through a Portainer instance
#[derive(Parser)]
#[command(name = "portainerctl", version)]
struct Cli {
    #[arg(long, env = "PORTAINER_HOST", default_value = "localhost")]
    host: String,
    #[arg(long, env = "PORTAINER_PORT", default_value_t = 9000)]
    port: u16,
    /// URL scheme, "http" or "https"
    #[arg(long, env = "PORTAINER_SCHEMA", default_value = "http")]
    schema: String,
    #[arg(long, env = "PORTAINER_USER")]
    user: String,
    #[arg(long, env = "PORTAINER_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long, env = "PORTAINER_BASE_PATH", default_value = "/api")]
    base_path: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the endpoints known to the Portainer instance
    Endpoints,
    /// List containers on an endpoint, including stopped ones
    Containers { endpoint_id: i32 },
    /// Start a container
    Start {
        endpoint_id: i32,
        container_id: String,
    },
    /// Stop a container
    Stop {
        endpoint_id: i32,
        container_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = PortainerConfig {
        host: cli.host,
        port: cli.port,
        schema: cli.schema,
        username: cli.user,
        password: cli.password,
        base_path: cli.base_path,
        ..PortainerConfig::default()
    };

    let mut client = PortainerClient::new(config)?;
    client
        .authenticate()
        .await
        .context("authentication failed")?;

    match cli.command {
        Command::Endpoints => {
            let endpoints = client.list_endpoints().await?;
            for endpoint in endpoints {
                println!("{}\t{}\t{}", endpoint.id, endpoint.name, endpoint.url);
            }
        }
        Command::Containers { endpoint_id } => {
            let containers = client.list_containers(endpoint_id).await?;
            for container in containers {
                println!(
                    "{}\t{}\t{}\t{}",
                    container.short_id(),
                    container.primary_name(),
                    container.state,
                    container.status
                );
            }
        }
        Command::Start {
            endpoint_id,
            container_id,
        } => {
            client.start_container(endpoint_id, &container_id).await?;
            println!("started {}", container_id);
        }
        Command::Stop {
            endpoint_id,
            container_id,
        } => {
            client.stop_container(endpoint_id, &container_id).await?;
            println!("stopped {}", container_id);
        }
    }

    Ok(())
}
