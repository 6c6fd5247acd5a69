use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::services::aggregation::{CalculationResult, aggregate};
use crate::services::proposal_yaml::{ProposalYamlError, deserialize_proposal_from_yaml_str};

#[derive(Error, Debug)]
pub enum CostPlotError {
    #[error("failed to read proposal file: {0}")]
    ReadProposal(#[from] std::io::Error),
    #[error("failed to load proposal: {0}")]
    Proposal(#[from] ProposalYamlError),
    #[error("failed to render cost plot: {0}")]
    Plot(String),
}

/// Loads a proposal, prices it and renders total client cost per
/// location as a PNG bar chart.
pub async fn plot_costs_from_proposal_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), CostPlotError> {
    let proposal_yaml = tokio::fs::read_to_string(input_path).await?;
    let proposal = deserialize_proposal_from_yaml_str(&proposal_yaml)?;
    let report = aggregate(&proposal);
    write_plot_png(output_path, report).await?;
    Ok(())
}

async fn write_plot_png(output_path: &str, report: CalculationResult) -> Result<(), CostPlotError> {
    let output_path = output_path.to_string();
    tokio::task::spawn_blocking(move || render_plot_png(&output_path, &report))
        .await
        .map_err(|e| CostPlotError::Plot(e.to_string()))??;
    Ok(())
}

fn render_plot_png(output_path: &str, report: &CalculationResult) -> Result<(), CostPlotError> {
    if report.locations.is_empty() {
        return Ok(());
    }

    let max_cost = report
        .locations
        .iter()
        .map(|location| location.totals.cost.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);
    let max_y = (max_cost * 1.1).max(1.0);
    let max_x = report.locations.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    let caption = format!("Client cost per location: {}", report.client_name);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Location")
        .y_desc("Client cost ($)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(report.locations.len().max(1))
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            report
                .locations
                .get(*index as usize)
                .map(|location| location.location.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(46, 139, 87);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(report.locations.iter().enumerate().map(|(idx, location)| {
            let cost = location.totals.cost.to_f64().unwrap_or(0.0);
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, cost)], bar_style)
        }))
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;
    Ok(())
}
