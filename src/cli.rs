//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::{GatoChanges, GatoDraft, Price};
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "gatos", version, about = "Browse and edit the gatos catalog")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every item in the catalog
    List,
    /// Create a new item
    Add(RecordArgs),
    /// Change fields of an existing item
    Edit {
        /// Id assigned by the backend
        id: String,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Check a record locally without sending it
    Validate(RecordArgs),
}

#[derive(Debug, Default, Args)]
pub struct RecordArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Price, e.g. 1500 or 1.200,50
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl RecordArgs {
    /// Unset fields become empty so validation reports them as missing.
    pub fn into_draft(self) -> GatoDraft {
        GatoDraft {
            name: self.name.unwrap_or_default(),
            price: self.price.map(Price::Text).unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }

    pub fn into_changes(self) -> GatoChanges {
        GatoChanges {
            name: self.name,
            price: self.price.map(Price::Text),
            description: self.description,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
    }
}
