use crate::services::aggregation::CalculationResult;

pub fn format_calculation_report(report: &CalculationResult) -> String {
    let mut lines = Vec::new();
    lines.push("Proposal Calculation".to_string());
    lines.push(format!("Client: {}", report.client_name));
    lines.push(String::new());
    lines.push("Location | Appointments | Client cost | Professional revenue".to_string());
    lines.push("---------|--------------|-------------|---------------------".to_string());
    for location in &report.locations {
        lines.push(format!(
            "{} | {} | {:.2} | {:.2}",
            location.location,
            location.totals.appointments,
            location.totals.cost,
            location.totals.professional_revenue
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total appointments: {}", report.totals.appointments));
    lines.push(format!("Total client cost: {:.2}", report.totals.cost));
    lines.push(format!(
        "Total professional revenue: {:.2}",
        report.totals.professional_revenue
    ));
    lines.push(format!("Net profit: {:.2}", report.net_profit));
    lines.push(format!("Profit margin: {:.2}%", report.profit_margin));

    lines.join("\n")
}
