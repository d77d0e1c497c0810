use clap::{Parser, Subcommand};

pub mod database;
pub mod instrumentation;
pub mod server;

#[derive(Parser, Debug)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the orders service
    Run {
        #[command(flatten)]
        run_command: Box<RunCmd>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct RunCmd {
    #[command(flatten)]
    pub server_args: server::ServerCliArgs,

    #[command(flatten)]
    pub database_args: database::DatabaseCliArgs,

    #[command(flatten)]
    pub instrumentation_args: instrumentation::InstrumentationCliArgs,
}
