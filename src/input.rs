use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Controls the player can use. Steering is left entirely to the agent.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Reset,
    CycleSpeed,
    NextTheme,
    PreviousTheme,
    CycleLabel,
    CycleToxicity,
    Quit,
}

/// Waits up to `timeout` for a key press and maps it to a command.
///
/// Resize and mouse events are consumed and yield `None`; the next draw
/// picks up the new terminal size.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

/// Maps one key press to a command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Char('s' | 'S') => Some(Command::CycleSpeed),
        KeyCode::Char('t') | KeyCode::Right => Some(Command::NextTheme),
        KeyCode::Char('T') | KeyCode::Left => Some(Command::PreviousTheme),
        KeyCode::Char('g' | 'G') => Some(Command::CycleLabel),
        KeyCode::Char('x' | 'X') => Some(Command::CycleToxicity),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Command, command_for_key};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn control_keys_map_to_commands() {
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(
            command_for_key(press(KeyCode::Char('s'))),
            Some(Command::CycleSpeed)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('T'))),
            Some(Command::PreviousTheme)
        );
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn arrow_keys_do_not_steer() {
        assert_eq!(command_for_key(press(KeyCode::Up)), None);
        assert_eq!(command_for_key(press(KeyCode::Down)), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }
}
