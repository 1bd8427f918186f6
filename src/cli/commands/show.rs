use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportPipeline;
use crate::core::report::{break_rows, stops_rows, times_rows};
use crate::errors::AppResult;
use crate::export::model::{TableRow, rows_to_table};
use crate::export::Step;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { step } = cmd {
        let step = Step::try_from(*step)?;
        let dataset = load_dataset(cfg)?;
        let pipeline = ReportPipeline::new(&dataset, cfg.break_threshold_minutes);

        let windows = pipeline.windows()?;
        let mut breaks = None;
        let table = match step {
            Step::Times => build_table(&times_rows(&windows)),
            Step::Stops => build_table(&stops_rows(&pipeline.with_stop_names(windows))),
            Step::Breaks => {
                let reports = pipeline.with_breaks(pipeline.with_stop_names(windows))?;
                let rows = break_rows(&reports);
                breaks = Some(rows.iter().filter(|r| r.has_break()).count());
                build_table(&rows)
            }
        };

        if table.is_empty() {
            warning("No duties found in the data file.");
            return Ok(());
        }

        println!();
        print!("{}", table.render());
        match breaks {
            Some(n) => println!("\n{} rows ({n} breaks)", table.len()),
            None => println!("\n{} rows", table.len()),
        }
    }
    Ok(())
}

fn build_table<R: TableRow>(rows: &[R]) -> Table {
    let mut table = Table::new(R::headers());
    for row in rows_to_table(rows, "--") {
        table.add_row(row);
    }
    table
}
