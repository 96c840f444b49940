use crate::prelude::{eprintln, println, *};
use colored::Colorize;

use katas_core::dates::{DatePair, DATE_FORMAT};

#[derive(Debug, clap::Parser)]
#[command(name = "date")]
#[command(about = "Date arithmetic on yyyy/MM/dd dates")]
#[command(after_help = "EXAMPLES:
  # Days between two dates:
  katas date difference 2024/01/01 2024/03/01

  # Week of the month for each date, as JSON:
  katas date week 2023/01/31 2024/02/29 --json")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Absolute number of days between two dates
    #[clap(name = "difference")]
    Difference(DateOptions),

    /// First and last day of the year of each date
    #[clap(name = "bounds")]
    Bounds(DateOptions),

    /// Number of days in the year of each date
    #[clap(name = "days")]
    Days(DateOptions),

    /// Week of the month of each date
    #[clap(name = "week")]
    Week(DateOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct DateOptions {
    /// First date (yyyy/MM/dd)
    date1: String,

    /// Second date (yyyy/MM/dd)
    date2: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl DateOptions {
    fn pair(&self) -> DatePair {
        DatePair::new(self.date1.clone(), self.date2.clone())
    }
}

fn fmt(date: chrono::NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Difference(options) => difference(options, global),
        Commands::Bounds(options) => bounds(options, global),
        Commands::Days(options) => days(options, global),
        Commands::Week(options) => week(options, global),
    }
}

fn log_pair(options: &DateOptions, global: &crate::Global) {
    if global.verbose {
        eprintln!("Dates: {} and {}", options.date1, options.date2);
        eprintln!();
    }
}

fn difference(options: DateOptions, global: crate::Global) -> Result<()> {
    log_pair(&options, &global);
    let out = katas_core::dates::difference(&options.pair()).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", out.message);
    }

    Ok(())
}

fn bounds(options: DateOptions, global: crate::Global) -> Result<()> {
    log_pair(&options, &global);
    let out = katas_core::dates::year_bounds(&options.pair()).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Date".bold(),
        "First day".bold(),
        "Last day".bold()
    ]);
    for bounds in [&out.first, &out.second] {
        table.add_row(prettytable::row![
            fmt(bounds.date),
            fmt(bounds.first_day),
            fmt(bounds.last_day)
        ]);
    }
    table.printstd();

    Ok(())
}

fn days(options: DateOptions, global: crate::Global) -> Result<()> {
    log_pair(&options, &global);
    let out = katas_core::dates::year_lengths(&options.pair()).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Date".bold(), "Days in year".bold()]);
    for length in [&out.first, &out.second] {
        table.add_row(prettytable::row![fmt(length.date), length.days]);
    }
    table.printstd();

    Ok(())
}

fn week(options: DateOptions, global: crate::Global) -> Result<()> {
    log_pair(&options, &global);
    let out = katas_core::dates::month_weeks(&options.pair()).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Date".bold(), "Week of month".bold()]);
    for week in [&out.first, &out.second] {
        table.add_row(prettytable::row![fmt(week.date), week.week]);
    }
    table.printstd();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(date1: &str, date2: &str) -> DateOptions {
        DateOptions {
            date1: date1.to_string(),
            date2: date2.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_options_pair() {
        let out = katas_core::dates::difference(&options("2024/01/01", "2024/01/11").pair())
            .unwrap();
        assert_eq!(out.days, 10);
    }

    #[test]
    fn test_fmt_uses_slashes() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(fmt(date), "2024/02/09");
    }
}
