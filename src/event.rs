use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    /// Emitted whenever no input arrived within the tick rate; drives the
    /// countdown.
    Tick,
}

/// Reads terminal input on a background thread and forwards it over a
/// channel, so the main loop only ever handles one event at a time.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(_) => continue,
                        Err(e) => {
                            log::warn!("failed to read terminal event: {e}");
                            continue;
                        }
                    },
                    Ok(false) => AppEvent::Tick,
                    Err(e) => {
                        log::warn!("failed to poll terminal events: {e}");
                        AppEvent::Tick
                    }
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
