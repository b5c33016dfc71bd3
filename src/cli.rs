/*!
plotkit Command Line Interface

Builds subplot figures, coerces JSON into graph objects, prints embed HTML and
manages the local credentials and plot options files.
*/

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plotkit::config::{ConfigStore, Credentials, PlotOptionsUpdate};
use plotkit::tools::{get_embed, get_subplots, get_valid_graph_obj, Length, SubplotSpec};
use plotkit::VERSION;

#[derive(Parser)]
#[command(name = "plotkit")]
#[command(about = "Client-side tools for a hosted plotting service")]
#[command(version = VERSION)]
pub struct Cli {
    /// Config directory (defaults to ~/.plotly)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a figure with axes laid out on a subplot grid
    Subplots {
        /// Number of rows
        #[arg(long, default_value = "1")]
        rows: usize,

        /// Number of columns
        #[arg(long, default_value = "1")]
        columns: usize,

        /// Space between columns, as a fraction of the figure width
        #[arg(long, default_value = "0.1")]
        horizontal_spacing: f64,

        /// Space between rows, as a fraction of the figure height
        #[arg(long, default_value = "0.15")]
        vertical_spacing: f64,

        /// Print a preview of the grid before the figure
        #[arg(long)]
        print_grid: bool,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Coerce a JSON value into a cleaned graph object
    Coerce {
        /// JSON text, or @path to read it from a file
        json: String,

        /// Graph object type to coerce into (e.g. layout, xaxis, data)
        #[arg(long = "type")]
        obj_type: Option<String>,
    },

    /// Print iframe HTML embedding a hosted plot
    Embed {
        /// Owner of the plot
        username: String,

        /// Plot id
        plot_id: String,

        /// Width in pixels, or any CSS length
        #[arg(long, default_value = "100%")]
        width: String,

        /// Height in pixels, or any CSS length
        #[arg(long, default_value = "525")]
        height: String,
    },

    /// Show or update the credentials file
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },

    /// Show or update the plot options file
    Options {
        #[command(subcommand)]
        action: OptionsAction,
    },
}

#[derive(Subcommand)]
pub enum CredentialsAction {
    /// Print the credentials file (only the given keys, if any)
    Show { keys: Vec<String> },

    /// Merge values into the credentials file
    Set {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        api_key: Option<String>,

        /// Stream id (repeatable)
        #[arg(long = "stream-id")]
        stream_ids: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum OptionsAction {
    /// Print the plot options file (only the given keys, if any)
    Show { keys: Vec<String> },

    /// Merge values into the plot options file
    Set {
        #[arg(long)]
        filename: Option<String>,

        /// One of new, overwrite, append, extend
        #[arg(long)]
        fileopt: Option<String>,

        #[arg(long)]
        world_readable: Option<bool>,

        #[arg(long)]
        auto_open: Option<bool>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "plotkit=debug" } else { "plotkit=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_store(config_dir: Option<PathBuf>) -> anyhow::Result<ConfigStore> {
    match config_dir {
        Some(dir) => Ok(ConfigStore::new(dir)),
        None => Ok(ConfigStore::from_home()?),
    }
}

fn read_json_arg(arg: &str) -> anyhow::Result<serde_json::Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text).context("Failed to parse JSON input")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Subplots {
            rows,
            columns,
            horizontal_spacing,
            vertical_spacing,
            print_grid,
            output,
        } => {
            let spec = SubplotSpec::new(rows, columns)
                .with_spacing(horizontal_spacing, vertical_spacing)
                .with_print_grid(print_grid);
            let figure = get_subplots(&spec)?;
            let json = serde_json::to_string_pretty(&figure)?;

            if let Some(output_path) = output {
                std::fs::write(&output_path, &json)
                    .with_context(|| format!("Failed to write {}", output_path.display()))?;
                info!("Figure written to {}", output_path.display());
            } else {
                println!("{}", json);
            }
        }

        Commands::Coerce { json, obj_type } => {
            let value = read_json_arg(&json)?;
            let obj = get_valid_graph_obj(&value, obj_type.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }

        Commands::Embed {
            username,
            plot_id,
            width,
            height,
        } => {
            let html = get_embed(
                &username,
                &plot_id,
                &Length::parse(&width),
                &Length::parse(&height),
            );
            println!("{}", html);
        }

        Commands::Credentials { action } => {
            let store = config_store(cli.config_dir)?;
            match action {
                CredentialsAction::Show { keys } => {
                    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                    print!("{}", store.show_credentials_file(&keys)?);
                }
                CredentialsAction::Set {
                    username,
                    api_key,
                    stream_ids,
                } => {
                    store.set_credentials_file(&Credentials {
                        username,
                        api_key,
                        stream_ids,
                    })?;
                    info!("Updated {}", store.credentials_path().display());
                }
            }
        }

        Commands::Options { action } => {
            let store = config_store(cli.config_dir)?;
            match action {
                OptionsAction::Show { keys } => {
                    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                    print!("{}", store.show_plot_options_file(&keys)?);
                }
                OptionsAction::Set {
                    filename,
                    fileopt,
                    world_readable,
                    auto_open,
                } => {
                    store.save_plot_options_file(&PlotOptionsUpdate {
                        filename,
                        fileopt,
                        world_readable,
                        auto_open,
                    })?;
                    info!("Updated {}", store.plot_options_path().display());
                }
            }
        }
    }

    Ok(())
}
