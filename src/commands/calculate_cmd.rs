use crate::commands::base_commands::{Commands, ReportFormat};
use crate::commands::report_format::format_calculation_report;
use crate::services::aggregation::aggregate;
use crate::services::proposal_yaml::load_proposal_from_yaml_file;

pub async fn calculate_command(cmd: Commands) {
    if let Commands::Calculate {
        input,
        output,
        format,
    } = cmd
    {
        let proposal = match load_proposal_from_yaml_file(&input) {
            Ok(proposal) => proposal,
            Err(e) => {
                eprintln!("Failed to load proposal: {e}");
                return;
            }
        };

        let report = aggregate(&proposal);
        let contents = match format {
            ReportFormat::Yaml => serde_yaml::to_string(&report).map_err(|e| e.to_string()),
            ReportFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| e.to_string()),
        };
        let contents = match contents {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize calculation report: {e}");
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&output, contents).await {
            eprintln!("Failed to write calculation report: {e}");
            return;
        }
        println!("Calculation report written to {output}");
        println!();
        println!("{}", format_calculation_report(&report));
    }
}
