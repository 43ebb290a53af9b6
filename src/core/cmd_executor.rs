use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{core::cmd::Cmd, infrastructure::calc_service::CalcOperation};

/// Command executor that routes Elm commands to the arithmetic service
#[derive(Clone, Default)]
pub struct CmdExecutor {
    calc_sender: Option<mpsc::UnboundedSender<CalcOperation>>,
}

impl CmdExecutor {
    /// Create an executor without a service attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor that forwards calculations to CalcService
    pub fn new_with_calc(calc_sender: mpsc::UnboundedSender<CalcOperation>) -> Self {
        Self {
            calc_sender: Some(calc_sender),
        }
    }

    /// Attach CalcService to an existing executor
    pub fn set_calc_sender(&mut self, calc_sender: mpsc::UnboundedSender<CalcOperation>) {
        self.calc_sender = Some(calc_sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Calculate(calculation) => {
                if let Some(calc_sender) = &self.calc_sender {
                    log::debug!("CmdExecutor: dispatching {calculation}");
                    calc_sender.send(CalcOperation::Calculate(calculation.clone()))?;
                } else {
                    log::warn!("Calculate ignored: CalcService not available");
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, returning one log line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    let kind = if cmd.is_async() { "async" } else { "sync" };
                    execution_log.push(format!("✓ Executed: {} ({kind})", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_calc_sender: self.calc_sender.is_some(),
            is_calc_sender_closed: self.calc_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_calc_sender: bool,
    pub is_calc_sender_closed: Option<bool>,
}
