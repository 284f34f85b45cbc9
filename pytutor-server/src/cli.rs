use clap::{Args, Parser, Subcommand};

use pytutor_types::models::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use pytutor_types::{AllowList, CompletionConfig, WidgetConfig};

#[derive(Parser)]
#[command(
    name = "pytutor",
    about = "PyTutor Server - iframe widget for the Python course",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, env = "PYTUTOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "PYTUTOR_PORT", default_value = "8787")]
    pub port: u16,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub widget: WidgetArgs,
}

/// Settings read once at startup and handed to the widget handler.
#[derive(Args, Clone)]
pub struct WidgetArgs {
    #[arg(
        long,
        env = "ALLOW_ORIGINS",
        default_value = "",
        help = "Comma-separated origins that may embed the widget"
    )]
    pub allow_origins: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "PYTUTOR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl WidgetArgs {
    pub fn to_config(&self) -> WidgetConfig {
        WidgetConfig {
            allow_origins: AllowList::parse(&self.allow_origins),
            completion: CompletionConfig {
                base_url: self.openai_base_url.clone(),
                model: self.model.clone(),
                ..Default::default()
            }
            .with_api_key(self.openai_api_key.clone()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the widget server (default if no command specified)")]
    Serve {
        #[arg(short, long, env = "PYTUTOR_PORT", default_value = "8787")]
        port: u16,
    },

    #[command(about = "List the built-in curriculum")]
    Lessons {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(subcommand, about = "Inspect the effective configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the configuration the server would start with")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
