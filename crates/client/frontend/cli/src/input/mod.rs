//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-input mapping so the interaction machine
//! can remain agnostic about concrete key bindings or the specifics of
//! `crossterm` events.

use client_frontend_core::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward an input symbol to the session.
    Input(Input),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into abstract input symbols.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::Input(Input::Up),
            KeyCode::Down => KeyAction::Input(Input::Down),
            KeyCode::Left => KeyAction::Input(Input::Left),
            KeyCode::Right => KeyAction::Input(Input::Right),
            KeyCode::Enter => KeyAction::Input(Input::Enter),
            KeyCode::Esc => KeyAction::Input(Input::Escape),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'w' => KeyAction::Input(Input::Up),
            's' => KeyAction::Input(Input::Down),
            'a' => KeyAction::Input(Input::Left),
            'd' => KeyAction::Input(Input::Right),
            ' ' => KeyAction::Input(Input::Enter),
            _ => KeyAction::None,
        }
    }
}
