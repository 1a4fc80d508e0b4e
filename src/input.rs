use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Frames a movement key counts as held when the terminal never reports releases
const HOLD_FRAMES: u8 = 12;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Fire,
    Restart,
    Quit,
    /// Left click at a terminal cell
    Click { column: u16, row: u16 },
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    /// Remaining hold frames, used only without release events
    left_frames: u8,
    right_frames: u8,
    /// Frames Space still counts as held, used only without release events
    fire_frames: u8,
}

/// Manages input polling and translates raw events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal reports key releases
    release_events: bool,
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            release_events,
        }
    }

    /// Polls for all pending events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.begin_frame();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event);
        }

        Ok(())
    }

    /// Clears last frame's one-shot actions and ages synthetic key holds
    fn begin_frame(&mut self) {
        self.oneshot_actions.clear();

        if !self.release_events {
            let keys = &mut self.key_state;
            keys.left_frames = keys.left_frames.saturating_sub(1);
            keys.right_frames = keys.right_frames.saturating_sub(1);
            keys.fire_frames = keys.fire_frames.saturating_sub(1);
            keys.left = keys.left_frames > 0;
            keys.right = keys.right_frames > 0;
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, false),
            KeyEventKind::Repeat => self.handle_key_press(key_event, true),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, repeat: bool) {
        // Movement keys keep their hold alive on auto-repeat
        match key_event.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.key_state.left = true;
                self.key_state.left_frames = HOLD_FRAMES;
                self.key_state.right = false;
                self.key_state.right_frames = 0;
                return;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.key_state.right = true;
                self.key_state.right_frames = HOLD_FRAMES;
                self.key_state.left = false;
                self.key_state.left_frames = 0;
                return;
            }
            _ => {}
        }

        if repeat {
            return;
        }

        // Without release events auto-repeat arrives as presses, so a held
        // Space only fires once until the hold lapses
        if key_event.code == KeyCode::Char(' ') && !self.release_events {
            let held = self.key_state.fire_frames > 0;
            self.key_state.fire_frames = HOLD_FRAMES;
            if held {
                return;
            }
        }

        let action = match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                InputAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
            KeyCode::Char(' ') => InputAction::Fire,
            KeyCode::Char('p') | KeyCode::Char('P') => InputAction::Restart,
            _ => return,
        };
        self.oneshot_actions.push(action);
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.key_state.left = false;
                self.key_state.left_frames = 0;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.key_state.right = false;
                self.key_state.right_frames = 0;
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            self.oneshot_actions.push(InputAction::Click {
                column: mouse_event.column,
                row: mouse_event.row,
            });
        }
    }

    /// Returns this frame's one-shot actions in arrival order
    /// Must be called after poll_events()
    pub fn get_actions(&self) -> Vec<InputAction> {
        self.oneshot_actions.clone()
    }

    /// Held movement keys as `(left, right)`
    pub fn movement(&self) -> (bool, bool) {
        (self.key_state.left, self.key_state.right)
    }
}
