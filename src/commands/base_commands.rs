use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a proposal and write the calculation report
    Calculate {
        /// Proposal YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Report file format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: ReportFormat,
    },
    /// Preview a report with one service removed
    RemoveService {
        /// Calculation report YAML file
        #[arg(short, long)]
        input: String,
        /// Output report YAML file
        #[arg(short, long)]
        output: String,
        /// Location name as it appears in the report
        #[arg(short, long)]
        location: String,
        /// Date bucket (YYYY-MM-DD or TBD)
        #[arg(short, long)]
        date: String,
        /// Zero-based index of the service within the date bucket
        #[arg(short, long)]
        service: usize,
    },
    /// Preview a report with one whole date removed
    RemoveDate {
        /// Calculation report YAML file
        #[arg(short, long)]
        input: String,
        /// Output report YAML file
        #[arg(short, long)]
        output: String,
        /// Location name as it appears in the report
        #[arg(short, long)]
        location: String,
        /// Date bucket (YYYY-MM-DD or TBD)
        #[arg(short, long)]
        date: String,
    },
    /// Plot client cost per location as a PNG bar chart
    PlotCosts {
        /// Proposal YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_defaults_to_yaml_format() {
        let args = CliArgs::parse_from([
            "proposals",
            "calculate",
            "-i",
            "proposal.yaml",
            "-o",
            "report.yaml",
        ]);

        if let Commands::Calculate { format, .. } = args.command {
            assert_eq!(format, ReportFormat::Yaml);
        } else {
            panic!("expected calculate command");
        }
    }

    #[test]
    fn remove_service_parses_target_arguments() {
        let args = CliArgs::parse_from([
            "proposals",
            "remove-service",
            "-i",
            "report.yaml",
            "-o",
            "preview.yaml",
            "-l",
            "Midtown Office",
            "-d",
            "TBD",
            "-s",
            "2",
        ]);

        if let Commands::RemoveService {
            location,
            date,
            service,
            ..
        } = args.command
        {
            assert_eq!(location, "Midtown Office");
            assert_eq!(date, "TBD");
            assert_eq!(service, 2);
        } else {
            panic!("expected remove-service command");
        }
    }
}
