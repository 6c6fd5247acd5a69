mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::plot_costs_cmd::plot_costs_command;
use crate::commands::preview_cmd::{remove_date_command, remove_service_command};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd).await,
        cmd @ Commands::RemoveService { .. } => remove_service_command(cmd).await,
        cmd @ Commands::RemoveDate { .. } => remove_date_command(cmd).await,
        cmd @ Commands::PlotCosts { .. } => plot_costs_command(cmd).await,
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
