use clap::Parser as _;
use dotenvy::dotenv;
use ecommerce_orders::cli::{Cli, Commands, RunCmd};
use ecommerce_orders::core::config::init_config;
use ecommerce_orders::server::setup_server;
use ecommerce_orders::utils::logging::init_logging;
use ecommerce_orders::OrdersResult;
use tracing::{error, info};

/// Start the service
#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { run_command } => {
            run_orders_service(run_command).await.expect("Failed to run the orders service");
        }
    }
}

async fn run_orders_service(run_cmd: &RunCmd) -> OrdersResult<()> {
    init_logging(&run_cmd.instrumentation_args.log_level);
    info!("starting the orders service");

    // A working store is a precondition for serving traffic; any error
    // here aborts startup.
    let config = init_config(run_cmd).await?;
    let _ = setup_server(config.clone()).await;

    tokio::signal::ctrl_c().await.expect("Failed to listen for ctrl+c");

    if let Err(disconnect_error) = config.database().disconnect().await {
        error!(error = %disconnect_error, "unable to disconnect from the database, potential connection leak");
    }
    info!("orders service stopped");
    Ok(())
}
