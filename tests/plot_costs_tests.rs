use assert_fs::prelude::*;
use predicates::prelude::*;

const PROPOSAL_YAML: &str = "\
client_name: Acme Corp
locations:
  - name: Midtown Office
    events:
      - date: 2026-09-10
        services:
          - service: massage
            total_hours: 4
            appointment_minutes: 20
            professional_count: 2
            professional_hourly_rate: 50
            terms:
              type: hourly
              client_hourly_rate: 135
              early_arrival_fee: 25
  - name: Brooklyn Office
    events:
      - date: TBD
        services:
          - service: mindfulness
            total_hours: 1
            appointment_minutes: 60
            professional_count: 1
            professional_hourly_rate: 0
            terms:
              type: fixed_price
";

#[test]
fn plot_costs_writes_a_png_chart() {
    let proposal_file = assert_fs::NamedTempFile::new("proposal.yaml").unwrap();
    proposal_file.write_str(PROPOSAL_YAML).unwrap();
    let chart_file = assert_fs::NamedTempFile::new("costs.png").unwrap();
    let chart_arg = chart_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("proposals").unwrap();
    cmd.args([
        "plot-costs",
        "-i",
        proposal_file.path().to_str().unwrap(),
        "-o",
        &chart_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Cost chart written to {chart_arg}"
        )));

    chart_file.assert(predicate::path::exists());
    let metadata = std::fs::metadata(chart_file.path()).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_costs_reports_missing_input_files() {
    let chart_file = assert_fs::NamedTempFile::new("costs.png").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("proposals").unwrap();
    cmd.args([
        "plot-costs",
        "-i",
        "does-not-exist.yaml",
        "-o",
        chart_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to plot costs"));
}
