use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dynaform",
    about = "Dynaform: schema-driven form field ordering",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the field ordering overlay for a schema
    Order {
        /// Path to the JSON schema document
        schema: String,

        /// Path to the UI overlay document
        #[arg(long)]
        ui_schema: Option<String>,

        /// Print only the sub-order at this field path (e.g. `spec.containers[0]`)
        #[arg(long)]
        at: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a schema for form generation
    Validate {
        /// Path to the JSON schema document
        schema: String,

        /// Path to the UI overlay document
        #[arg(long)]
        ui_schema: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Deeply remove empty values from a JSON document
    Prune {
        /// Path to the JSON document to prune
        input: String,

        /// Sample document whose explicitly empty values are preserved
        #[arg(long)]
        sample: Option<String>,
    },
}
