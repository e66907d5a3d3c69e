//! Renders the built-in sample series to `chart.png` in the current working
//! directory, for consumption by an external process.

use std::process::ExitCode;

const X: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
const Y: [f64; 4] = [10.0, 20.0, 15.0, 25.0];

fn main() -> ExitCode {
    let _ = linechart_rs::telemetry::init_default_tracing();

    match linechart_rs::render_line_chart(&X, &Y, "Sample Chart", "X-axis", "Y-axis", "chart.png") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("render_chart: {err}");
            ExitCode::FAILURE
        }
    }
}
