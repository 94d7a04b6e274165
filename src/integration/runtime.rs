use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::CmdExecutor,
        msg::Msg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
    raw_msg::RawMsg,
};

/// Owns the application state and drives RawMsg -> Msg -> update -> Cmd
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Sender that side effects use to report back
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    pub fn has_executor(&self) -> bool {
        self.cmd_executor.is_some()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Wait for the next message reported by a side effect
    pub async fn recv_raw_msg(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute queued commands; without an executor they are dropped with a warning
    pub fn execute_pending_commands(&mut self) -> Vec<Cmd> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return commands;
        }

        match &self.cmd_executor {
            Some(executor) => executor.execute_commands(&commands),
            None => log::warn!("No command executor, dropping {} command(s)", commands.len()),
        }
        commands
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate and apply everything queued so far, including results from side effects
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Each raw message is translated against the state left by the previous one
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let msgs = translate_raw_to_domain(raw_msg, &self.state);
            for msg in msgs {
                all_commands.extend(self.process_message(msg));
            }
        }
        all_commands
    }

    /// Process all messages and execute the resulting commands
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        self.process_all_messages();
        self.execute_pending_commands()
    }
}
