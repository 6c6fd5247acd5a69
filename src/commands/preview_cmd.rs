use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_calculation_report;
use crate::services::aggregation::CalculationResult;
use crate::services::preview::{remove_date, remove_service};
use crate::services::report_yaml::{load_report_from_yaml_file, serialize_report_to_yaml};

pub async fn remove_service_command(cmd: Commands) {
    if let Commands::RemoveService {
        input,
        output,
        location,
        date,
        service,
    } = cmd
    {
        let report = match load_report_from_yaml_file(&input) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to load calculation report: {e}");
                return;
            }
        };
        let updated = match remove_service(&report, &location, &date, service) {
            Ok(updated) => updated,
            Err(e) => {
                eprintln!("Failed to remove service: {e}");
                return;
            }
        };
        write_preview(&updated, &output).await;
    }
}

pub async fn remove_date_command(cmd: Commands) {
    if let Commands::RemoveDate {
        input,
        output,
        location,
        date,
    } = cmd
    {
        let report = match load_report_from_yaml_file(&input) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to load calculation report: {e}");
                return;
            }
        };
        let updated = match remove_date(&report, &location, &date) {
            Ok(updated) => updated,
            Err(e) => {
                eprintln!("Failed to remove date: {e}");
                return;
            }
        };
        write_preview(&updated, &output).await;
    }
}

async fn write_preview(report: &CalculationResult, output: &str) {
    let mut buffer = Vec::new();
    if let Err(e) = serialize_report_to_yaml(&mut buffer, report) {
        eprintln!("Failed to serialize preview report: {e}");
        return;
    }
    if let Err(e) = tokio::fs::write(output, buffer).await {
        eprintln!("Failed to write preview report: {e}");
        return;
    }
    println!("Preview report written to {output}");
    println!();
    println!("{}", format_calculation_report(report));
}
