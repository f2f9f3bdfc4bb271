use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use engine_logging::engine_trace;
use search_core::{update, MethodOption, Msg, SearchSession};

use crate::effects::EffectRunner;
use crate::input::Input;
use crate::render::{render, render_methods, HELP};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
pub const BUSY: &str = "Busy: search in progress";

/// Terminal shell around one search session.
pub struct App<W: Write> {
    session: SearchSession,
    runner: EffectRunner,
    options: Vec<MethodOption>,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(
        session: SearchSession,
        runner: EffectRunner,
        options: Vec<MethodOption>,
        out: W,
    ) -> Self {
        Self {
            session,
            runner,
            options,
            out,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Runs until the user quits or input closes. A search still in flight when
    /// input closes is waited for, so piped queries print their results.
    pub fn run(mut self, inputs: mpsc::Receiver<Input>) -> io::Result<()> {
        writeln!(self.out, "{HELP}")?;
        self.render()?;
        loop {
            match inputs.recv_timeout(POLL_INTERVAL) {
                Ok(Input::Quit) => break,
                Ok(input) => self.handle_input(input)?,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    self.wait_for_in_flight()?;
                    break;
                }
            }
            self.pump_completions()?;
        }
        self.runner.shutdown();
        self.out.flush()
    }

    pub fn handle_input(&mut self, input: Input) -> io::Result<()> {
        match input {
            Input::Intents(_) if !self.session.view().controls_enabled => {
                writeln!(self.out, "{BUSY}")
            }
            Input::Intents(msgs) => {
                for msg in msgs {
                    self.dispatch(msg)?;
                }
                Ok(())
            }
            Input::ListMethods => {
                let text = render_methods(&self.options, self.session.method_token());
                write!(self.out, "{text}")
            }
            Input::Help => writeln!(self.out, "{HELP}"),
            Input::Quit => Ok(()),
        }
    }

    pub fn pump_completions(&mut self) -> io::Result<()> {
        while let Some(msg) = self.runner.try_next_msg() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    pub fn wait_for_in_flight(&mut self) -> io::Result<()> {
        while self.session().state().is_loading() {
            match self.runner.next_msg(POLL_INTERVAL) {
                Ok(Some(msg)) => self.dispatch(msg)?,
                Ok(None) => continue,
                Err(stopped) => return Err(io::Error::other(stopped)),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        engine_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.session);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let was_dirty = state.consume_dirty();
        self.session = state;
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let text = render(&self.session.view(), &self.options);
        write!(self.out, "{text}")?;
        self.out.flush()
    }
}
