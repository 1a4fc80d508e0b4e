use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Bullet, Fleet, GameState, Ship};
use crate::game::Game;
use crate::geometry;
use crate::scoreboard::Scoreboard;
use crate::settings::{Rgb, Settings};

/// Maps world units onto terminal cells and back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub world_width: i32,
    pub world_height: i32,
}

impl Viewport {
    pub fn new(area: Rect, world_width: i32, world_height: i32) -> Self {
        Self {
            area,
            world_width: world_width.max(1),
            world_height: world_height.max(1),
        }
    }

    fn column(&self, x: i32) -> i64 {
        self.area.x as i64 + x as i64 * self.area.width as i64 / self.world_width as i64
    }

    fn row(&self, y: i32) -> i64 {
        self.area.y as i64 + y as i64 * self.area.height as i64 / self.world_height as i64
    }

    /// Cell containing a world point, if it is on screen
    pub fn to_cell(&self, (x, y): (i32, i32)) -> Option<Position> {
        if x < 0 || y < 0 || x >= self.world_width || y >= self.world_height {
            return None;
        }
        Some(Position::new(self.column(x) as u16, self.row(y) as u16))
    }

    /// Cells covered by a world rect, clipped to the viewport
    ///
    /// Anything on screen covers at least one cell.
    pub fn to_cell_rect(&self, rect: &geometry::Rect) -> Option<Rect> {
        let left = self.column(rect.left()).max(self.area.left() as i64);
        let top = self.row(rect.top()).max(self.area.top() as i64);
        let right = self
            .column(rect.right())
            .max(self.column(rect.left()) + 1)
            .min(self.area.right() as i64);
        let bottom = self
            .row(rect.bottom())
            .max(self.row(rect.top()) + 1)
            .min(self.area.bottom() as i64);

        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    /// World point at the centre of a terminal cell
    pub fn to_world(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        if !self.area.contains(Position::new(column, row)) || self.area.is_empty() {
            return None;
        }
        let dx = (column - self.area.x) as i64 * 2 + 1;
        let dy = (row - self.area.y) as i64 * 2 + 1;
        let x = dx * self.world_width as i64 / (2 * self.area.width as i64);
        let y = dy * self.world_height as i64 / (2 * self.area.height as i64);
        Some((x as i32, y as i32))
    }
}

/// Everything the renderer needs from the game for one frame
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub settings: &'a Settings,
    pub ship: &'a Ship,
    pub fleet: &'a Fleet,
    pub bullets: &'a [Bullet],
    pub alien_bullets: &'a [Bullet],
    pub scoreboard: Scoreboard,
    pub play_button: geometry::Rect,
    pub viewport: Viewport,
    pub cursor_visible: bool,
}

impl<'a> RenderView<'a> {
    pub fn new(game: &'a Game, area: Rect) -> Self {
        let settings = game.settings();
        Self {
            game_state: game.state(),
            settings,
            ship: game.ship(),
            fleet: game.fleet(),
            bullets: game.bullets(),
            alien_bullets: game.alien_bullets(),
            scoreboard: Scoreboard::from_stats(game.stats()),
            play_button: game.play_button(),
            viewport: Viewport::new(area, settings.screen_width, settings.screen_height),
            cursor_visible: game.cursor_visible(),
        }
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Handles all rendering responsibilities for the game
#[derive(Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.viewport.area;
        frame.render_widget(
            Block::default().style(Style::default().bg(rgb(view.settings.bg_color))),
            area,
        );

        match view.game_state {
            GameState::Active => self.render_game(frame, view),
            GameState::Inactive => self.render_menu(frame, view),
        }

        self.render_scoreboard(frame, view);

        // The terminal cursor stands in for the mouse pointer
        if view.cursor_visible {
            if let Some(position) = view.viewport.to_cell(view.play_button.center()) {
                frame.set_cursor_position(position);
            }
        }
    }

    /// Renders the ship, the fleet and every bullet in flight
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let viewport = &view.viewport;
        let settings = view.settings;

        if let Some(ship_area) = viewport.to_cell_rect(&view.ship.rect) {
            let style = Style::default()
                .fg(rgb(settings.ship_color))
                .add_modifier(Modifier::BOLD);
            let text: Vec<Line> = view
                .ship
                .get_sprite_lines()
                .into_iter()
                .map(|line| Line::from(line).style(style))
                .collect();
            frame.render_widget(Paragraph::new(text).centered(), ship_area);
        }

        for alien in view.fleet.iter() {
            let Some(alien_area) = viewport.to_cell_rect(&alien.rect) else {
                continue;
            };
            let color = if alien.can_shoot() {
                settings.shooter_color
            } else {
                settings.alien_color
            };
            let style = Style::default().fg(rgb(color)).add_modifier(Modifier::BOLD);
            let text: Vec<Line> = alien
                .get_sprite_lines()
                .into_iter()
                .map(|line| Line::from(line).style(style))
                .collect();
            frame.render_widget(Paragraph::new(text).centered(), alien_area);
        }

        // Bullets are thinner than a cell, draw one glyph at their centre
        let buffer = frame.buffer_mut();
        let bullets = view
            .bullets
            .iter()
            .map(|bullet| (bullet, settings.bullet_color))
            .chain(
                view.alien_bullets
                    .iter()
                    .map(|bullet| (bullet, settings.alien_bullet_color)),
            );
        for (bullet, color) in bullets {
            if let Some(position) = viewport.to_cell(bullet.rect.center()) {
                buffer.set_string(
                    position.x,
                    position.y,
                    bullet.get_char().to_string(),
                    Style::default().fg(rgb(color)),
                );
            }
        }

        let area = viewport.area;
        let controls = Line::from(vec![Span::styled(
            "[←/→ or A/D: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the Play control and a short hint below it
    fn render_menu(&self, frame: &mut Frame, view: &RenderView) {
        let viewport = &view.viewport;
        let Some(button_area) = viewport.to_cell_rect(&view.play_button) else {
            return;
        };

        // Make room for the border and a line of text
        let button_area = Rect {
            x: button_area.x,
            y: button_area.y,
            width: button_area.width.max(8),
            height: button_area.height.max(3),
        }
        .intersection(viewport.area);

        frame.render_widget(
            Paragraph::new(Line::from("Play").bold().white())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                )
                .style(Style::default().bg(Color::Rgb(0, 160, 0)))
                .alignment(Alignment::Center),
            button_area,
        );

        let hint_area = Rect {
            x: viewport.area.x,
            y: button_area.bottom().min(viewport.area.bottom().saturating_sub(1)),
            width: viewport.area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from("Click Play or press P to start, Q to quit").dark_gray())
                .centered(),
            hint_area,
        );
    }

    /// Score top right, high score top centre, level below the score,
    /// remaining ships top left
    fn render_scoreboard(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.viewport.area;
        let board = &view.scoreboard;
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let top = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        let ships = Line::from(vec![
            Span::styled("Ships: ", label),
            Span::styled(
                "A ".repeat(board.ships_left as usize),
                Style::default()
                    .fg(rgb(view.settings.ship_color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(ships), top);

        let high_score = Line::from(vec![
            Span::styled("High Score: ", label),
            Span::styled(board.high_score_text.clone(), value),
        ]);
        frame.render_widget(Paragraph::new(high_score).centered(), top);

        let score = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(board.score_text.clone(), value),
        ]);
        frame.render_widget(Paragraph::new(score).right_aligned(), top);

        if area.height > 1 {
            let level = Line::from(vec![
                Span::styled("Level: ", label),
                Span::styled(
                    board.level_text.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ]);
            let level_area = Rect { y: top.y + 1, ..top };
            frame.render_widget(Paragraph::new(level).right_aligned(), level_area);
        }
    }
}
