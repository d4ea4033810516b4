//! Drawing for one frame: tiles, actors, health bars and the HUD.
//! World coordinates are tile units; the camera keeps the player centered.

use app::app_loop::{AppMode, AppState};
use app::{format_seed, outcome_headline};
use dungeon_core::{Actor, ActorKind, Game, Grid, Pos, Rect, TileKind};
use macroquad::prelude::*;

const TILE_SIZE: f32 = 32.0;
const HEALTH_BAR_WIDTH: f32 = 30.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;
const HEALTH_BAR_OFFSET: f32 = 5.0;

const WALL_LIT: Color = Color { r: 0.39, g: 0.39, b: 0.39, a: 1.0 };
const WALL_REMEMBERED: Color = Color { r: 0.18, g: 0.18, b: 0.2, a: 1.0 };
const FLOOR_LIT: Color = Color { r: 0.12, g: 0.12, b: 0.1, a: 1.0 };
const FLOOR_REMEMBERED: Color = Color { r: 0.05, g: 0.05, b: 0.06, a: 1.0 };
const ATTACK_FLASH: Color = Color { r: 1.0, g: 0.9, b: 0.3, a: 0.45 };

/// Screen offset of the world origin, centering the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Camera {
    pub fn centered_on(player: &Actor, viewport_width: f32, viewport_height: f32) -> Self {
        let center = player.center();
        Self {
            offset_x: viewport_width / 2.0 - center.x * TILE_SIZE,
            offset_y: viewport_height / 2.0 - center.y * TILE_SIZE,
        }
    }

    fn to_screen(self, x: f32, y: f32) -> (f32, f32) {
        (x * TILE_SIZE + self.offset_x, y * TILE_SIZE + self.offset_y)
    }

    /// Tile range overlapping the viewport, clamped to the grid.
    fn visible_tiles(self, grid: &Grid, viewport_width: f32, viewport_height: f32) -> (Pos, Pos) {
        let first_x = (-self.offset_x / TILE_SIZE).floor() as i32;
        let first_y = (-self.offset_y / TILE_SIZE).floor() as i32;
        let last_x = first_x + (viewport_width / TILE_SIZE).ceil() as i32 + 1;
        let last_y = first_y + (viewport_height / TILE_SIZE).ceil() as i32 + 1;
        (
            Pos { y: first_y.max(0), x: first_x.max(0) },
            Pos { y: last_y.min(grid.height() as i32), x: last_x.min(grid.width() as i32) },
        )
    }
}

pub fn draw_frame(game: &Game, app_state: &AppState, now_ms: u64) {
    clear_background(BLACK);
    let (viewport_width, viewport_height) = (screen_width(), screen_height());
    let state = game.state();
    let camera = Camera::centered_on(&state.player, viewport_width, viewport_height);

    draw_tiles(&state.grid, camera, viewport_width, viewport_height);

    for (_, monster) in state.visible_monsters() {
        let color = match monster.kind {
            ActorKind::Monster(kind) => {
                let [r, g, b] = game.config().monsters.types.get(kind).color;
                Color::from_rgba(r, g, b, 255)
            }
            ActorKind::Player => BLUE,
        };
        draw_actor(monster, color, camera);
    }

    draw_actor(&state.player, BLUE, camera);
    if game.attack_effect_active(now_ms) {
        let reach = state.player.reach_rect(game.config().player.attack_reach);
        draw_world_rect(reach, ATTACK_FLASH, camera);
    }

    draw_hud(game, app_state);
}

fn draw_tiles(grid: &Grid, camera: Camera, viewport_width: f32, viewport_height: f32) {
    let (first, last) = camera.visible_tiles(grid, viewport_width, viewport_height);
    for y in first.y..last.y {
        for x in first.x..last.x {
            let pos = Pos { y, x };
            if !grid.is_explored(pos) {
                continue;
            }
            let color = match (grid.tile_at(pos), grid.is_visible(pos)) {
                (TileKind::Wall, true) => WALL_LIT,
                (TileKind::Wall, false) => WALL_REMEMBERED,
                (TileKind::Floor, true) => FLOOR_LIT,
                (TileKind::Floor, false) => FLOOR_REMEMBERED,
            };
            let (screen_x, screen_y) = camera.to_screen(x as f32, y as f32);
            draw_rectangle(screen_x, screen_y, TILE_SIZE, TILE_SIZE, color);
        }
    }
}

fn draw_actor(actor: &Actor, color: Color, camera: Camera) {
    draw_world_rect(actor.bounds(), color, camera);

    let (x, y) = camera.to_screen(actor.pos.x, actor.pos.y);
    let bar_y = y - HEALTH_BAR_OFFSET - HEALTH_BAR_HEIGHT;
    draw_rectangle(x, bar_y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT, RED);
    let filled = HEALTH_BAR_WIDTH * actor.health_fraction();
    if filled > 0.0 {
        draw_rectangle(x, bar_y, filled, HEALTH_BAR_HEIGHT, GREEN);
    }
}

fn draw_world_rect(rect: Rect, color: Color, camera: Camera) {
    let (x, y) = camera.to_screen(rect.x, rect.y);
    draw_rectangle(x, y, rect.width * TILE_SIZE, rect.height * TILE_SIZE, color);
}

fn draw_hud(game: &Game, app_state: &AppState) {
    let player = &game.state().player;
    let status = format!(
        "HP {}/{}   monsters {}   seed {}",
        player.hp.max(0),
        player.max_hp,
        game.state().monsters.len(),
        format_seed(game.seed())
    );
    draw_text(&status, 12.0, 22.0, 22.0, WHITE);

    if let AppMode::Finished(outcome) = app_state.mode {
        let headline = outcome_headline(outcome);
        let dims = measure_text(headline, None, 48, 1.0);
        let x = (screen_width() - dims.width) / 2.0;
        let y = screen_height() / 2.0;
        draw_text(headline, x, y, 48.0, YELLOW);
        draw_text("Enter: new level   Esc: quit", x, y + 32.0, 20.0, LIGHTGRAY);
    }
}
