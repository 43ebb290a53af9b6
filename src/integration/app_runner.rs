use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::{
        arithmetic_client::ArithmeticClient,
        calc_service::CalcService,
        config::Config,
        tui::{self, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// What woke the runner up
enum CycleInput {
    Tui(Option<tui::Event>),
    Service(RawMsg),
}

/// Drives the Elm runtime from terminal events and service replies, and
/// renders the state after each change.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    // Replies from CalcService
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    // For service termination
    calc_cancel: CancellationToken,
}

impl<T: TuiLike> AppRunner<T> {
    /// Create the runner and start CalcService in the background.
    /// Must be called from within a tokio runtime.
    pub fn new_with_config(config: Config, tui: T) -> Result<Self> {
        let client = ArithmeticClient::new(&config.service_url)?;
        log::info!("Using arithmetic service at {}", client.base());

        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (calc_tx, calc_cancel, calc_service) = CalcService::new(client, raw_tx);
        calc_service.run();

        let runtime = Runtime::new_with_calc_executor(AppState::new_with_config(config), calc_tx);

        Ok(Self {
            runtime,
            tui,
            components: Components::new(),
            raw_rx,
            calc_cancel,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn tui_mut(&mut self) -> &mut T {
        &mut self.tui
    }

    pub fn should_quit(&self) -> bool {
        self.runtime.state().system.should_quit
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.render()?;

        let result = self.run_loop().await;

        // Shutdown services and exit TUI
        self.calc_cancel.cancel();
        self.tui.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        while !self.should_quit() {
            self.run_one_cycle().await?;
        }
        Ok(())
    }

    /// Wait for one terminal event or service reply, process it, and render
    /// if anything visible may have changed.
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        let input = tokio::select! {
            ev = self.tui.next() => CycleInput::Tui(ev),
            Some(raw) = self.raw_rx.recv() => CycleInput::Service(raw),
        };

        let should_render = match input {
            CycleInput::Tui(Some(ev)) => self.handle_tui_event(ev)?,
            CycleInput::Tui(None) => {
                // Event source exhausted
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            CycleInput::Service(raw) => {
                self.runtime.send_raw_msg(raw);
                true
            }
        };

        self.update();
        self.handle_suspend()?;

        if should_render && !self.should_quit() {
            self.render()?;
        }
        Ok(())
    }

    /// Wait up to `timeout` for a service reply and process it.
    /// Returns whether a reply arrived.
    pub async fn await_service_message(&mut self, timeout: Duration) -> Result<bool> {
        match tokio::time::timeout(timeout, self.raw_rx.recv()).await {
            Ok(Some(raw)) => {
                self.runtime.send_raw_msg(raw);
                self.update();
                self.render()?;
                Ok(true)
            }
            Ok(None) => {
                log::warn!("CalcService channel closed");
                Ok(false)
            }
            Err(_) => Ok(false),
        }
    }

    /// Returns whether the event calls for a redraw
    fn handle_tui_event(&mut self, ev: tui::Event) -> Result<bool> {
        let should_render = match ev {
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            tui::Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            tui::Event::Init | tui::Event::Render => true,
            tui::Event::Resize(w, h) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::Error => {
                log::warn!("Terminal reported an input error");
                false
            }
            tui::Event::FocusGained | tui::Event::FocusLost => false,
        };
        Ok(should_render)
    }

    fn update(&mut self) {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for line in log {
                    log::trace!("{line}");
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }
    }

    fn handle_suspend(&mut self) -> Result<()> {
        if !self.runtime.state().system.should_suspend {
            return Ok(());
        }
        self.tui.suspend()?;
        // Execution continues here once the process is brought back to the foreground
        self.tui.resume()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update();
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))
    }
}
