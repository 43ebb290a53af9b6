use std::{collections::VecDeque, mem};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    infrastructure::calc_service::CalcOperation,
};

/// Drives the Elm loop: raw messages are translated, folded into the state by
/// `update`, and the resulting commands are handed to the executor.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose calculations go to CalcService
    pub fn new_with_calc_executor(
        initial_state: AppState,
        calc_sender: mpsc::UnboundedSender<CalcOperation>,
    ) -> Self {
        Self {
            cmd_executor: Some(CmdExecutor::new_with_calc(calc_sender)),
            ..Self::new(initial_state)
        }
    }

    /// Set command executor without service support
    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new());
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("RawMsg: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state current at the time they
        // are dequeued, so a key press sees the effect of the one before it.
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            in_flight_calculations: self.state.calculator.in_flight,
            has_executor: self.cmd_executor.is_some(),
            has_calc_support: self
                .cmd_executor
                .as_ref()
                .map(|executor| executor.get_stats().has_calc_sender)
                .unwrap_or(false),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub in_flight_calculations: usize,
    pub has_executor: bool,
    pub has_calc_support: bool,
}
