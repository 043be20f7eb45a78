use crate::cli::args::ValidateArgs;
use crate::exit_codes;

use super::load_report;

pub(crate) fn run(args: &ValidateArgs) -> anyhow::Result<i32> {
    let report = load_report(&args.report)?;
    match report.validate() {
        Ok(()) => {
            eprintln!(
                "report ok: task_id={} tests={}",
                report.task_id,
                report.tests.len()
            );
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("invalid report: {e}");
            Ok(exit_codes::UPLOAD_FAILED)
        }
    }
}
