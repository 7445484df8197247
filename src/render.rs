use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use std::collections::HashMap;
use std::path::Path;

use crossy_road::assets::{images_for, locate, AssetError};
use crossy_road::entity::{EntityKind, ObstacleKind};
use crossy_road::geometry::Rect;
use crossy_road::world::{World, HEIGHT, LANES, ROAD_HEIGHT, WIDTH};

use crate::text::{draw_text, Font};

const GRASS: Color = Color::RGB(144, 238, 144);
const ROAD: Color = Color::RGB(50, 50, 50);
const SCORE_POS: (i32, i32) = (10, 10);
const GAME_OVER_POS: (i32, i32) = (WIDTH as i32 / 2 - 150, HEIGHT as i32 / 2 - 20);

fn to_sdl(rect: &Rect) -> SdlRect {
    SdlRect::new(rect.x, rect.y, rect.w, rect.h)
}

/// Sprite textures, keyed by entity kind and variant
pub struct Sprites<'a> {
    textures: HashMap<(EntityKind, usize), Texture<'a>>,
}

impl<'a> Sprites<'a> {
    /// Loads every sprite up front. Any missing or unreadable image is an error.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        asset_dir: &Path,
    ) -> Result<Self, AssetError> {
        let kinds = [
            EntityKind::Player,
            EntityKind::Obstacle(ObstacleKind::Beneficial),
            EntityKind::Obstacle(ObstacleKind::Harmful),
        ];
        let mut textures = HashMap::new();
        for kind in kinds.iter() {
            for (variant, file) in images_for(*kind).iter().enumerate() {
                let path = locate(asset_dir, file)?;
                let texture = texture_creator
                    .load_texture(&path)
                    .map_err(|reason| AssetError::Load {
                        path: path.clone(),
                        reason,
                    })?;
                textures.insert((*kind, variant), texture);
            }
        }
        log::info!("Loaded {} sprites", textures.len());
        Ok(Self { textures })
    }

    fn get(&self, kind: EntityKind, variant: usize) -> Option<&Texture<'a>> {
        self.textures.get(&(kind, variant))
    }
}

pub struct Renderer {
    canvas: WindowCanvas,
}

impl Renderer {
    pub fn new(video_subsystem: &sdl2::VideoSubsystem, title: &str) -> Result<Renderer, AssetError> {
        let window = video_subsystem
            .window(title, WIDTH, HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| AssetError::Video(e.to_string()))?;

        Ok(Renderer {
            canvas: window
                .into_canvas()
                .build()
                .map_err(|e| AssetError::Video(e.to_string()))?,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    fn draw_sprite(
        &mut self,
        sprites: &Sprites,
        kind: EntityKind,
        variant: usize,
        bounds: &Rect,
    ) -> Result<(), String> {
        match sprites.get(kind, variant) {
            Some(texture) => self.canvas.copy(texture, None, Some(to_sdl(bounds))),
            None => Ok(()),
        }
    }

    /// Render one frame: road, obstacles, player and score.
    pub fn render(&mut self, world: &World, sprites: &Sprites, font: &Font) -> Result<(), String> {
        self.canvas.set_draw_color(GRASS);
        self.canvas.clear();

        self.canvas.set_draw_color(ROAD);
        for lane in LANES.iter() {
            let top = lane - (ROAD_HEIGHT / 2) as i32;
            self.canvas.fill_rect(SdlRect::new(0, top, WIDTH, ROAD_HEIGHT))?;
        }

        for obstacle in world.obstacles() {
            self.draw_sprite(
                sprites,
                obstacle.entity_kind(),
                obstacle.variant(),
                &obstacle.bounds(),
            )?;
        }
        self.draw_sprite(sprites, world.player.kind(), 0, &world.player.bounds())?;

        draw_text(
            &mut self.canvas,
            font,
            &format!("Score: {}", world.score),
            Color::WHITE,
            SCORE_POS,
        )
    }

    /// Render the end screen with the final score
    pub fn render_game_over(&mut self, score: u32, font: &Font) -> Result<(), String> {
        self.canvas.set_draw_color(Color::WHITE);
        self.canvas.clear();
        draw_text(
            &mut self.canvas,
            font,
            &format!("Game Over - Score: {}", score),
            Color::RED,
            GAME_OVER_POS,
        )
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}
