// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines global flags, all subcommands and their arguments.

use berth::runtime::RuntimeType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "berth")]
#[command(about = "Inspect and manage local Docker and Podman containers")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print one JSON document per view or event
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Print only results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: berth.yml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Container runtime to use instead of auto-detection
    #[arg(long, global = true, value_enum)]
    pub runtime: Option<RuntimeType>,

    /// Runtime API socket path
    #[arg(long, global = true)]
    pub socket: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new berth.yml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show runtime summary and all containers with live usage
    Dashboard,

    /// List local images, optionally searching the registry
    Images {
        /// Registry search term
        #[arg(long)]
        query: Option<String>,
    },

    /// List URLs of running containers published on all interfaces
    Launch,

    /// Start a container
    Start {
        /// Container ID or name
        id: String,
    },

    /// Stop a container
    Stop {
        /// Container ID or name
        id: String,
    },

    /// Remove a container, killing it if running
    Rm {
        /// Container ID or name
        id: String,
    },

    /// Run a new detached container, pulling the image if needed
    Run {
        /// Image reference, e.g. nginx:latest
        image: String,

        /// Container name
        #[arg(long)]
        name: Option<String>,

        /// Published ports as HOST:CONTAINER pairs, e.g. "8080:80, 9000:9000"
        #[arg(short, long, default_value = "")]
        ports: String,
    },

    /// Pull an image
    Pull {
        /// Image reference
        image: String,
    },

    /// Remove an image
    Rmi {
        /// Image ID or tag
        image: String,
    },

    /// Remove stopped containers, unused images and unused networks
    Prune,

    /// Show the last lines of a container's output
    Logs {
        /// Container ID or name
        id: String,

        /// Number of lines (default from config)
        #[arg(long)]
        tail: Option<u64>,
    },

    /// Show a container's full inspect document
    Inspect {
        /// Container ID or name
        id: String,
    },
}
