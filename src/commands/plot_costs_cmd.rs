use crate::commands::base_commands::Commands;
use crate::services::cost_plot::plot_costs_from_proposal_file;

pub async fn plot_costs_command(cmd: Commands) {
    if let Commands::PlotCosts { input, output } = cmd {
        if let Err(e) = plot_costs_from_proposal_file(&input, &output).await {
            eprintln!("Failed to plot costs: {e}");
            return;
        }
        println!("Cost chart written to {output}");
    }
}
