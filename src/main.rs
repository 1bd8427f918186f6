//! dutyreport main entrypoint.

use dutyreport::run;
use dutyreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
