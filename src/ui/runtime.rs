use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::TICK_RATE;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Owns the terminal until the user quits or the event source goes away.
pub fn run(mut app: App, events: EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
