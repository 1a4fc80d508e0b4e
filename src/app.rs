use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::time::Duration;

use crate::game::Game;
use crate::high_score::HighScoreFile;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView, Viewport};

/// Drives a [`Game`] on a terminal: input, simulation ticks and drawing.
pub struct App {
    running: bool,
    game: Game,
    high_score_file: HighScoreFile,
    /// Terminal area from the most recent frame, used to map mouse clicks
    viewport: Viewport,
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// `release_events` tells the input layer whether the terminal reports key releases
    pub fn new(game: Game, high_score_file: HighScoreFile, release_events: bool) -> Self {
        let viewport = Viewport::new(
            Rect::default(),
            game.settings().screen_width,
            game.settings().screen_height,
        );
        Self {
            running: true,
            game,
            high_score_file,
            viewport,
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        let frame_time = Duration::from_millis(self.game.settings().frame_ms);

        while self.running {
            // Render the frame
            terminal.draw(|frame| {
                let view = RenderView::new(&self.game, frame.area());
                self.viewport = view.viewport;
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and get actions
            self.input_manager.poll_events()?;
            let actions = self.input_manager.get_actions();
            self.process_actions(&actions)?;

            let (left, right) = self.input_manager.movement();
            self.game.set_movement(left, right);

            // Update game state
            if self.game.is_active() {
                self.run_ticks();
            }

            // Small sleep to keep the frame rate steady and prevent CPU spinning
            std::thread::sleep(frame_time);
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) -> Result<()> {
        for action in actions {
            match *action {
                InputAction::Quit => {
                    self.quit()?;
                    return Ok(());
                }
                InputAction::Restart => self.game.restart(),
                InputAction::Fire => self.game.fire_bullet(),
                InputAction::Click { column, row } => {
                    if let Some(point) = self.viewport.to_world(column, row) {
                        self.game.click(point);
                    }
                }
            }
        }
        Ok(())
    }

    /// Run one frame's worth of simulation ticks
    ///
    /// A ship hit freezes the whole loop for the requested pause and ends the
    /// batch early, as does the game ending.
    fn run_ticks(&mut self) {
        for _ in 0..self.game.settings().ticks_per_frame {
            self.game.update();

            if let Some(pause) = self.game.take_pause() {
                std::thread::sleep(pause);
                break;
            }
            if !self.game.is_active() {
                break;
            }
        }
    }

    /// Save a new high score, then stop the loop
    fn quit(&mut self) -> Result<()> {
        let stats = self.game.stats();
        if stats.new_high_score {
            self.high_score_file.save(stats.high_score)?;
        }
        log::info!("Quitting with high score {}", stats.high_score);
        self.running = false;
        Ok(())
    }
}
