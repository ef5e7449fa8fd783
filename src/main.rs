use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use std::{env, io};

use zformula::core::event::{InputEvent, KeyCode, KeyModifiers};
use zformula::kernel::services::adapters::{ensure_settings_file, load_settings, FileSink};
use zformula::kernel::{FormulaEditor, FormulaOptions};
use zformula::tui::crossterm::into_input_event;
use zformula::tui::terminal_guard::TerminalGuard;
use zformula::tui::view;

mod logging;

const DEFAULT_FORMULA_FILE: &str = "formula.json";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn is_quit(event: &InputEvent) -> bool {
    let Some(key) = event.as_key() else {
        return false;
    };
    key.is_press()
        && (key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

/// Relative paths resolve against `cwd`; no argument means `formula.json` in `cwd`.
fn resolve_formula_path(cwd: &Path, arg: Option<&str>) -> PathBuf {
    let path = Path::new(arg.unwrap_or(DEFAULT_FORMULA_FILE));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    if let Err(err) = ensure_settings_file() {
        tracing::error!(error = %err, "ensure_settings_file failed");
    }
    let settings = load_settings().unwrap_or_default();

    let arg = env::args().nth(1);
    let path = resolve_formula_path(&env::current_dir()?, arg.as_deref());
    tracing::info!(path = %path.display(), "open formula");

    let mut editor = FormulaEditor::new(FormulaOptions::from_settings(&settings), FileSink::new(path));

    let guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut last_log: Option<String> = None;

    loop {
        terminal.draw(|frame| view::render(frame, frame.area(), &editor, last_log.as_deref()))?;

        if crossterm::event::poll(POLL_INTERVAL)? {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                if is_quit(&event) {
                    break;
                }
                editor.handle_event(&event);
            }
        }

        editor.tick(Instant::now());
        if let Some(rx) = &log_rx {
            while let Ok(line) = rx.try_recv() {
                last_log = Some(line);
            }
        }
    }

    // Flush edits made in the last poll interval before tearing down.
    editor.tick(Instant::now() + editor.config().output_delay());
    editor.close();
    guard.restore()
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
