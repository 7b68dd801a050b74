use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::forms::FormDiscoverer;
use crate::issue::IssueTitleFetcher;
use crate::submit::SubmissionClient;

use super::{AppEvent, Command};

struct Pending {
    rx: Receiver<AppEvent>,
    label: &'static str,
    on_lost: fn(String) -> AppEvent,
}

/// Runs one command at a time on a worker thread and hands its completion
/// back to the event loop.
#[derive(Default)]
pub(super) struct TaskRunner {
    fetcher: IssueTitleFetcher,
    pending: Option<Pending>,
}

impl TaskRunner {
    #[cfg(test)]
    pub(super) fn with_fetcher(fetcher: IssueTitleFetcher) -> Self {
        Self {
            fetcher,
            pending: None,
        }
    }

    pub(super) fn busy(&self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn dispatch(&mut self, cmd: Command) {
        if self.busy() {
            tracing::warn!(?cmd, "dropping command, another operation is in flight");
            return;
        }
        let (label, on_lost): (&'static str, fn(String) -> AppEvent) = match &cmd {
            Command::FetchTitle(_) => ("fetch issue title", title_lost),
            Command::Submit(_) => ("submit report", submit_lost),
            Command::Discover(_) => ("discover form", discover_lost),
            Command::Quit => return,
        };

        let (tx, rx) = mpsc::channel();
        let fetcher = self.fetcher.clone();
        tracing::debug!(label, "dispatching");
        thread::spawn(move || {
            if let Some(ev) = execute(cmd, &fetcher) {
                let _ = tx.send(ev);
            }
        });
        self.pending = Some(Pending { rx, label, on_lost });
    }

    /// Completion of the in-flight command, if it has finished.
    pub(super) fn poll(&mut self) -> Option<AppEvent> {
        let pending = self.pending.as_ref()?;
        let ev = match pending.rx.try_recv() {
            Ok(ev) => ev,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!(label = pending.label, "worker exited without a result");
                (pending.on_lost)(format!("{}: worker exited unexpectedly", pending.label))
            }
        };
        self.pending = None;
        Some(ev)
    }
}

fn execute(cmd: Command, fetcher: &IssueTitleFetcher) -> Option<AppEvent> {
    let ev = match cmd {
        Command::FetchTitle(reference) => {
            AppEvent::TitleFetched(fetcher.fetch(&reference).map_err(|err| format!("{:#}", err)))
        }
        Command::Submit(submission) => {
            let res = SubmissionClient::new().and_then(|client| client.submit(&submission));
            if let Err(err) = &res {
                tracing::warn!("submission failed: {:#}", err);
            }
            AppEvent::Submitted(res.map_err(|err| format!("{:#}", err)))
        }
        Command::Discover(form_url) => {
            let res = FormDiscoverer::new().and_then(|d| d.discover(&form_url));
            if let Err(err) = &res {
                tracing::warn!("form discovery failed: {}", err);
            }
            AppEvent::FormDiscovered(res.map_err(|err| err.to_string()))
        }
        Command::Quit => return None,
    };
    Some(ev)
}

fn title_lost(msg: String) -> AppEvent {
    AppEvent::TitleFetched(Err(msg))
}

fn submit_lost(msg: String) -> AppEvent {
    AppEvent::Submitted(Err(msg))
}

fn discover_lost(msg: String) -> AppEvent {
    AppEvent::FormDiscovered(Err(msg))
}

#[cfg(test)]
#[path = "../tests/tui_shell/tasks_tests.rs"]
mod tests;
