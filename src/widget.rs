//! Interactive terminal widget.
//!
//! Input lines and request completions are both events on one loop. Requests
//! run as spawned tasks so the form stays editable while a translation is in
//! flight; their outcomes come back over a channel and are applied to the
//! session in arrival order.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{QuickTranslateError, Result};
use crate::language::{Language, LanguagePair};
use crate::session::{Session, TranslationRequest};
use crate::translate::Translator;
use crate::view::{self, View};

pub const HELP: &str = "\
/from <lang>    set source language
/to <lang>      set target language
/text <text>    set input text without translating
/translate      translate the input text
/swap           swap languages and re-translate the result
/clear          clear the input text
/langs          list supported languages
/help           show this help
/quit           leave
any other line sets the input text and translates it
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Source(Language),
    Target(Language),
    Text(String),
    Translate,
    Swap,
    Clear,
    Languages,
    Help,
    Quit,
    /// Plain line: set as input and press Translate
    Submit(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let Some(rest) = line.trim().strip_prefix('/') else {
            return Ok(Self::Submit(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "from" => Ok(Self::Source(language_argument(name, arg)?)),
            "to" => Ok(Self::Target(language_argument(name, arg)?)),
            "text" => Ok(Self::Text(arg.to_string())),
            "translate" => Ok(Self::Translate),
            "swap" => Ok(Self::Swap),
            "clear" => Ok(Self::Clear),
            "langs" | "languages" => Ok(Self::Languages),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(QuickTranslateError::Command(format!(
                "unknown command '/{}', try /help", name
            ))),
        }
    }
}

fn language_argument(command: &str, arg: &str) -> Result<Language> {
    if arg.is_empty() {
        return Err(QuickTranslateError::Command(format!("/{} needs a language", command)));
    }
    arg.parse()
}

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue { message: Option<String>, redraw: bool },
    Quit,
}

impl Flow {
    fn redraw() -> Self {
        Self::Continue { message: None, redraw: true }
    }

    fn message(message: impl Into<String>) -> Self {
        Self::Continue { message: Some(message.into()), redraw: false }
    }
}

enum Event {
    Line(Option<String>),
    Completed(Result<String>),
}

pub struct Widget {
    session: Session,
    translator: Arc<dyn Translator>,
    completions_tx: mpsc::UnboundedSender<Result<String>>,
    completions: mpsc::UnboundedReceiver<Result<String>>,
    in_flight: usize,
}

impl Widget {
    pub fn new(translator: Arc<dyn Translator>, pair: LanguagePair) -> Self {
        let (completions_tx, completions) = mpsc::unbounded_channel();
        Self {
            session: Session::new(pair),
            translator,
            completions_tx,
            completions,
            in_flight: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        debug!("Widget command: {:?}", command);

        match command {
            Command::Source(language) => {
                self.session.select_source(language);
                Flow::redraw()
            }
            Command::Target(language) => {
                self.session.select_target(language);
                Flow::redraw()
            }
            Command::Text(text) => {
                self.session.set_input_text(text);
                Flow::redraw()
            }
            Command::Clear => {
                self.session.set_input_text(String::new());
                Flow::redraw()
            }
            Command::Submit(text) => {
                self.session.set_input_text(text);
                self.press_translate()
            }
            Command::Translate => self.press_translate(),
            Command::Swap => self.press_swap(),
            Command::Languages => Flow::message(view::render_languages()),
            Command::Help => Flow::message(HELP),
            Command::Quit => Flow::Quit,
        }
    }

    fn press_translate(&mut self) -> Flow {
        if self.session.is_loading() {
            return Flow::message("A translation is already in progress");
        }

        match self.session.request_translation() {
            Some(request) => {
                self.dispatch(request);
                Flow::redraw()
            }
            None => Flow::message("Nothing to translate"),
        }
    }

    fn press_swap(&mut self) -> Flow {
        if !self.session.can_swap() {
            return Flow::message(if self.session.is_loading() {
                "Swap is unavailable while a translation is in progress"
            } else {
                "Swap needs a translation result first"
            });
        }

        match self.session.swap_and_retranslate() {
            Some(request) => self.dispatch(request),
            None => debug!("Swapped result is blank, nothing dispatched"),
        }
        Flow::redraw()
    }

    fn dispatch(&mut self, request: TranslationRequest) {
        let translator = Arc::clone(&self.translator);
        let completions = self.completions_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = translator.translate(&request.text, request.pair).await;
            // A closed channel means the widget is gone and the outcome is discarded
            let _ = completions.send(outcome);
        });
    }

    pub fn handle_completion(&mut self, outcome: Result<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.session.complete(outcome);
    }

    /// Wait for the next in-flight request and apply it; false when nothing is pending
    pub async fn settle_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        match self.completions.recv().await {
            Some(outcome) => {
                self.handle_completion(outcome);
                true
            }
            None => false,
        }
    }

    /// Drive the widget until `/quit` or end of input.
    ///
    /// At end of input pending translations are still waited for and shown;
    /// `/quit` leaves immediately.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting widget ({})", self.session.pair());

        let mut lines = input.lines();
        self.draw(&mut output).await?;

        loop {
            let event = tokio::select! {
                line = lines.next_line() => Event::Line(line?),
                Some(outcome) = self.completions.recv() => Event::Completed(outcome),
            };

            match event {
                Event::Line(None) => {
                    info!("Input closed with {} translation(s) pending", self.in_flight);
                    while self.settle_next().await {
                        self.draw(&mut output).await?;
                    }
                    break;
                }
                Event::Line(Some(line)) => match Command::parse(&line) {
                    Ok(command) => match self.handle_command(command) {
                        Flow::Quit => break,
                        Flow::Continue { message, redraw } => {
                            if let Some(message) = message {
                                write_text(&mut output, &message).await?;
                            }
                            if redraw {
                                self.draw(&mut output).await?;
                            }
                        }
                    },
                    Err(e) => write_text(&mut output, &e.to_string()).await?,
                },
                Event::Completed(outcome) => {
                    self.handle_completion(outcome);
                    self.draw(&mut output).await?;
                }
            }
        }

        info!("Widget closed");
        Ok(())
    }

    async fn draw<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        write_text(output, &View::of(&self.session).render()).await
    }
}

async fn write_text<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
