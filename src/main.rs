mod cli_auth;
mod cli_connect;
mod cli_jobs;
mod client;
mod database;
mod server;
mod shared;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::shared::models::CreateJobRequest;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "JobBoard - job board platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server
    Server {
        /// Host for API server
        #[arg(short = 'H', long, default_value = "0.0.0.0", env = "JOBBOARD_HOST")]
        host: String,

        /// Port for API server
        #[arg(short, long, default_value = "8001", env = "JOBBOARD_PORT")]
        port: u16,
    },

    /// Connect to server interactively (default command)
    Connect,

    /// Authenticate with the API server
    Auth,

    /// Show authentication status
    Status,

    /// Job board operations through the API
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },
}

#[derive(Subcommand)]
enum JobsCommands {
    /// List job postings
    List,

    /// Show a single job posting
    Show {
        /// Job id
        id: String,
    },

    /// Post a new job (employer accounts only)
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        location: String,

        /// Salary range as displayed to candidates, e.g. "$120,000 - $150,000"
        #[arg(long)]
        salary: String,

        #[arg(long)]
        description: String,

        /// One of: full_time, part_time, contract, internship
        #[arg(long, default_value = "full_time")]
        employment_type: String,

        /// May be repeated for multiple requirements
        #[arg(long = "requirement")]
        requirements: Vec<String>,

        #[arg(long)]
        remote: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let _ = shared::logging::init_logging("./logs", "jobboard");

    // Parse CLI arguments
    let cli = Cli::parse();

    // Default to connect if no command provided
    let command = cli.command.unwrap_or(Commands::Connect);

    match command {
        Commands::Server { host, port } => {
            server::rest::server::run_rest_server(&host, port).await?;
        }
        Commands::Connect => {
            cli_connect::connect_to_server().await?;
        }
        Commands::Auth => {
            cli_auth::auth_interactive().await?;
        }
        Commands::Status => {
            cli_auth::show_auth_status().await?;
        }
        Commands::Jobs { command } => match command {
            JobsCommands::List => {
                cli_jobs::list().await?;
            }
            JobsCommands::Show { id } => {
                cli_jobs::show(&id).await?;
            }
            JobsCommands::Post {
                title,
                company,
                location,
                salary,
                description,
                employment_type,
                requirements,
                remote,
            } => {
                let employment_type = employment_type
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?;

                cli_jobs::post(CreateJobRequest {
                    title,
                    company,
                    location,
                    salary,
                    description,
                    employment_type,
                    requirements,
                    remote,
                })
                .await?;
            }
        },
    }

    Ok(())
}
