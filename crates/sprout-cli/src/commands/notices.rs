//! `sprout notices`: print the follow-up instructions on their own.

use sprout_core::application::print_notices;
use sprout_core::domain::notices::FOLLOW_UP;

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&FOLLOW_UP)?;
    } else {
        print_notices(&output);
    }
    Ok(())
}
