//! Draw pass — walks the entity registries and issues renderer calls in
//! camera space. Read-only over the engine; the renderer owns all pixel
//! knowledge.

use dogfight_core::constants::*;
use dogfight_core::entities::Bullet;
use dogfight_core::enums::{Color, SpriteId};
use dogfight_core::io::Renderer;
use dogfight_core::types::{Angle, Position, Size, Vector};

use crate::engine::GameEngine;

// HUD gauge layout (screen units).
const GAUGE_FRAME_WIDTH: f64 = 12.0;
const GAUGE_FRAME_HEIGHT: f64 = 102.0;
const GAUGE_BAR_WIDTH: f64 = 10.0;
const GAUGE_BOTTOM_OFFSET: f64 = 112.0;
const LIFE_GAUGE_X: f64 = 10.0;
const SPEED_GAUGE_X: f64 = 30.0;

pub fn run(engine: &GameEngine, renderer: &mut dyn Renderer) {
    renderer.clear();
    draw_scene(engine, renderer);
    draw_radar(engine, renderer);
    draw_life_gauge(engine, renderer);
    draw_speed_gauge(engine, renderer);
    draw_message(engine, renderer);
}

/// Scene pass: the world as seen from the camera, screen-centered and
/// rotated so the player's nose points up. Draw order back to front:
/// clouds, smoke, opponents, player, bullets, explosions.
fn draw_scene(engine: &GameEngine, renderer: &mut dyn Renderer) {
    let center = Vector::new(engine.screen.half_width, engine.screen.half_height);
    let screen_rotation = engine.angles.from_deg(270.0);
    let level = engine.angles.from_deg(0.0);

    renderer.with_transform(center, screen_rotation, &mut |r| {
        for cloud in &engine.clouds {
            draw_sprite_at(
                engine,
                r,
                cloud.position,
                level,
                SpriteId::Cloud {
                    variant: cloud.variant,
                },
                cloud.size,
            );
        }
        for puff in &engine.smoke {
            draw_sprite_at(engine, r, puff.position, puff.heading, SpriteId::Smoke, puff.size);
        }
        for opponent in &engine.opponents {
            draw_sprite_at(
                engine,
                r,
                opponent.position,
                opponent.speed.angle(),
                SpriteId::Opponent {
                    facing: opponent.facing,
                },
                opponent.size,
            );
        }
        draw_sprite_at(
            engine,
            r,
            engine.player.position,
            engine.player.speed.angle(),
            SpriteId::Player {
                facing: engine.player.facing,
            },
            engine.player.size,
        );
        for bullet in &engine.bullets {
            draw_bullet(engine, r, bullet);
        }
        for explosion in &engine.explosions {
            draw_sprite_at(
                engine,
                r,
                explosion.position,
                level,
                SpriteId::Explosion,
                explosion.size,
            );
        }
    });
}

/// Draw one sprite centered at its camera-local position and heading.
fn draw_sprite_at(
    engine: &GameEngine,
    renderer: &mut dyn Renderer,
    position: Position,
    heading: Angle,
    sprite: SpriteId,
    size: Size,
) {
    let local = engine.camera.to_local(position);
    let angle = engine.camera.to_local_angle(heading);
    renderer.with_transform(local.to_vector(), angle, &mut |r| {
        r.draw_sprite(sprite, size);
    });
}

/// Bullets are plain rects; offset by the half-extents so the rect sits
/// centered like the sprites do.
fn draw_bullet(engine: &GameEngine, renderer: &mut dyn Renderer, bullet: &Bullet) {
    let local = engine.camera.to_local(bullet.position);
    let angle = engine.camera.to_local_angle(bullet.speed.angle());
    let offset = Vector::new(-bullet.size.half_width, -bullet.size.half_height);
    let level = engine.angles.from_deg(0.0);
    renderer.with_transform(local.to_vector(), angle, &mut |r| {
        r.with_transform(offset, level, &mut |r| {
            r.draw_rect(bullet.size, Color::OrangeRed);
        });
    });
}

/// Radar pass: the screen sprite in the bottom-right corner, then one dot
/// per opponent plus the player in radar space.
fn draw_radar(engine: &GameEngine, renderer: &mut dyn Renderer) {
    let corner = Vector::new(
        engine.screen.width - RADAR_RADIUS,
        engine.screen.height - RADAR_RADIUS,
    );
    let screen_rotation = engine.angles.from_deg(270.0);
    let level = engine.angles.from_deg(0.0);

    renderer.with_transform(corner, screen_rotation, &mut |r| {
        r.draw_sprite(
            SpriteId::RadarScreen,
            Size::new(RADAR_RADIUS * 2.0, RADAR_RADIUS * 2.0),
        );
        for opponent in &engine.opponents {
            let dot = engine
                .camera
                .to_radar_space(opponent.position, RADAR_RADIUS, RADAR_RATIO);
            r.with_transform(dot.to_vector(), level, &mut |r| r.draw_radar_dot());
        }
        let dot = engine
            .camera
            .to_radar_space(engine.player.position, RADAR_RADIUS, RADAR_RATIO);
        r.with_transform(dot.to_vector(), level, &mut |r| r.draw_radar_dot());
    });
}

fn draw_life_gauge(engine: &GameEngine, renderer: &mut dyn Renderer) {
    let fill = engine.player.life as f64 * 100.0 / PLAYER_LIFE as f64;
    draw_gauge(engine, renderer, LIFE_GAUGE_X, fill, Color::Red);
}

fn draw_speed_gauge(engine: &GameEngine, renderer: &mut dyn Renderer) {
    let span = PLAYER_MAX_SPEED - PLAYER_MIN_SPEED;
    let fill = (engine.player.speed.value() - PLAYER_MIN_SPEED) * 100.0 / span;
    draw_gauge(engine, renderer, SPEED_GAUGE_X, fill, Color::Yellow);
}

/// A vertical gauge: black frame, colored fill growing upward.
fn draw_gauge(engine: &GameEngine, renderer: &mut dyn Renderer, x: f64, fill: f64, color: Color) {
    let h = engine.screen.height;
    let level = engine.angles.from_deg(0.0);

    renderer.with_transform(Vector::new(x, h - GAUGE_BOTTOM_OFFSET), level, &mut |r| {
        r.draw_rect(Size::new(GAUGE_FRAME_WIDTH, GAUGE_FRAME_HEIGHT), Color::Black);
    });
    renderer.with_transform(Vector::new(x + 1.0, h - fill - 11.0), level, &mut |r| {
        r.draw_rect(Size::new(GAUGE_BAR_WIDTH, fill), color);
    });
}

fn draw_message(engine: &GameEngine, renderer: &mut dyn Renderer) {
    if engine.message.is_empty() {
        return;
    }
    let position = Position::new(engine.screen.width / 2.0, engine.screen.height / 2.0 - 50.0);
    renderer.draw_text(engine.message.text(), position);
}
