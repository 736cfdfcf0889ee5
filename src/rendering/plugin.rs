//! Rendering plugin - turns each frame's draw list into sprites and text.
//!
//! The simulation works in screen space (origin top-left, y down). Bevy's 2D
//! camera is centred with y up, so every primitive is converted on the way in.
//! Sprites are rebuilt from scratch whenever a new frame arrives.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;

use super::draw::DrawCommand;
use super::visual_config::{load_visual_config, VisualConfig};
use crate::core::{GameConfig, GameState};
use crate::game::LatestFrame;

/// Depth step between consecutive draw commands so later ones stay on top.
const LAYER_STEP: f32 = 0.001;

/// Rendering plugin - 2D camera and the draw-list sink.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_visual_config, spawn_camera))
            .add_systems(OnEnter(GameState::InGame), fit_window_to_room)
            .add_systems(Update, draw_latest_frame);
    }
}

/// Marker for entities spawned from the current frame's draw list.
#[derive(Component)]
pub struct FrameSprite;

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Size the window to the playfield plus HUD strip.
fn fit_window_to_room(
    config: Res<GameConfig>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        let view = config.viewport();
        window.resolution.set(view.width, config.window_height());
    }
}

/// Convert a screen-space point into centred, y-up world space.
pub fn screen_to_world(point: Vec2, screen_size: Vec2) -> Vec2 {
    Vec2::new(point.x - screen_size.x / 2.0, screen_size.y / 2.0 - point.y)
}

fn draw_latest_frame(
    mut commands: Commands,
    latest: Res<LatestFrame>,
    visuals: Option<Res<VisualConfig>>,
    config: Option<Res<GameConfig>>,
    previous: Query<Entity, With<FrameSprite>>,
) {
    if !latest.is_changed() {
        return;
    }
    let (Some(frame), Some(visuals), Some(config)) = (&latest.0, visuals, config) else {
        return;
    };

    for entity in previous.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let screen = Vec2::new(config.viewport().width, config.window_height());

    for (layer, command) in frame.draw.iter().enumerate() {
        let z = layer as f32 * LAYER_STEP;
        match command {
            DrawCommand::Fill { rect, tag } => {
                let center = screen_to_world(rect.center(), screen);
                commands.spawn((
                    Sprite::from_color(visuals.color(*tag), Vec2::new(rect.width, rect.height)),
                    Transform::from_translation(center.extend(z)),
                    FrameSprite,
                ));
            }
            DrawCommand::Label { text, x, y, tag } => {
                let corner = screen_to_world(Vec2::new(*x, *y), screen);
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: visuals.hud_font_size,
                        ..default()
                    },
                    TextColor(visuals.color(*tag)),
                    Anchor::TopLeft,
                    Transform::from_translation(corner.extend(z)),
                    FrameSprite,
                ));
            }
        }
    }
}
