use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "querypro")]
#[command(about = "Collect and manage customer enquiries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the enquiry service
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:9191)
        #[arg(long)]
        bind: Option<String>,

        /// Directory holding enquiries.json
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// List enquiries
    #[command(alias = "ls")]
    List {
        /// Only show enquiries containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Submit a new enquiry, or change an existing one with --id
    Submit {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        message: Option<String>,

        /// Enquiry to update; omitted fields keep their stored values
        #[arg(long)]
        id: Option<String>,
    },

    /// Show one enquiry in full
    #[command(alias = "v")]
    Show { id: String },

    /// Delete an enquiry
    #[command(alias = "rm")]
    Delete { id: String },
}
