//! Command execution for the publish workflow.
//!
//! Failures are reported here, with recovery suggestions, and turned into the
//! process exit code.

mod publish;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use publish::execute_publish;

/// Execute the publish workflow for the parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    match execute_publish(&args, &config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!("Publishing failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
