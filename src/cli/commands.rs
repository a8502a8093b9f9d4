//! Command execution

use tracing::{debug, instrument};

use crate::cli::CliResult;
use crate::infrastructure::di::ServiceContainer;

/// Run the generator and return the exit code to forward.
#[instrument(skip_all)]
pub fn execute(container: &ServiceContainer) -> CliResult<i32> {
    let exit = container.launcher().run()?;
    debug!(success = exit.success(), "launcher done");
    Ok(exit.exit_code())
}
