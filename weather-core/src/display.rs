//! Console rendering of a lookup outcome.

use colored::Colorize;
use std::fmt;

use crate::model::WeatherReport;

const RULE: &str = "===============================================";
const SEPARATOR: &str = "-----------------------------------------------";
const TITLE: &str = "    W E A T H E R   S C A N   v1.0";

/// Render the report, or the error banner when there is none.
pub fn render(report: Option<&WeatherReport>) -> String {
    match report {
        Some(report) => Scan(report).to_string(),
        None => format!("{} {}\n", "[ERROR]".red().bold(), "Failed to get weather data.".white()),
    }
}

/// Print [`render`] to stdout.
pub fn display(report: Option<&WeatherReport>) {
    print!("{}", render(report));
}

/// The full multi-line console report for one city.
struct Scan<'a>(&'a WeatherReport);

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    // Labels are dot-padded to a fixed column.
    let label = format!("{label:.<16}");
    writeln!(f, "{} {}: {}", ">>".bright_black(), label.white(), value)
}

impl fmt::Display for Scan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        writeln!(f)?;
        writeln!(f, "{}", RULE.white().bold())?;
        writeln!(f, "{}", TITLE.cyan().bold())?;
        writeln!(f, "{}", RULE.white().bold())?;

        field(f, "Location", r.city.yellow().bold())?;
        writeln!(f, "{}", SEPARATOR.bright_black())?;

        field(f, "Weather", format!("{} ({})", r.condition, r.description).cyan().bold())?;
        field(f, "Temperature", format!("{:.2} C", r.temperature_c).red().bold())?;
        field(f, "Feels Like", format!("{:.2} C", r.feels_like_c).magenta().bold())?;
        field(f, "Humidity", format!("{} %", r.humidity_pct).blue().bold())?;
        field(f, "Pressure", format!("{} hPa", r.pressure_hpa).yellow().bold())?;
        field(f, "Wind Speed", format!("{:.2} m/s", r.wind_speed_mps).green().bold())?;

        writeln!(f, "{}", SEPARATOR.bright_black())?;
        writeln!(f, "{} {}", "[OK]".green().bold(), "Scan completed successfully.".white())?;
        writeln!(f, "{}", RULE.white().bold())?;
        writeln!(f)
    }
}
