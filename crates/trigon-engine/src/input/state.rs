use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame` as events are applied.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    ///
    /// OS key-repeat events arrive as additional presses while the key is
    /// held; the held-set insert dedups them, so `frame.keys_pressed` sees
    /// exactly one transition per physical press.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear the held set. Avoids stuck keys
                    // when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    /// Returns whether `key` is currently held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    #[test]
    fn press_records_one_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q, false));

        assert!(state.key_down(Key::Q));
        assert!(frame.keys_pressed.contains(&Key::Q));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn os_repeat_does_not_retrigger() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::F, false));
        frame.clear();

        // Held key: the OS delivers repeated presses.
        state.apply_event(&mut frame, press(Key::F, true));
        state.apply_event(&mut frame, press(Key::F, true));

        assert!(state.key_down(Key::F));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn release_clears_held_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::C, false));
        state.apply_event(&mut frame, release(Key::C));

        assert!(!state.key_down(Key::C));
        assert!(frame.keys_released.contains(&Key::C));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, release(Key::Z));

        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn modifiers_track_latest_event() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let shifted = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        state.apply_event(&mut frame, InputEvent::ModifiersChanged(shifted));

        assert_eq!(state.modifiers, shifted);
    }
}
