//! Game state - the title/playing state machine and everything it owns.
//!
//! All entities are created once in [`GameState::new`]; afterwards only their
//! positions, visibility and active views change. Timers drive the state via
//! [`GameState::trigger`].

use arrayvec::ArrayVec;

use crate::assets::AssetLoader;
use crate::collision::overlaps;
use crate::entity::Entity;
use crate::error::{GameError, Result};
use crate::input::InputPort;
use crate::obstacle::{random_gap_center, Obstacle};
use crate::rng::SimpleRng;
use crate::score::ScoreCounter;
use crate::timer::TimerTask;
use crate::types::{
    EntityKind, GameAction, Playfield, Screen, AUTOPILOT_IMPULSE, FLAP_IMPULSE,
    FLAP_VELOCITY_MIN, GRAVITY, MAX_OBSTACLES, TERMINAL_VELOCITY,
};
use crate::world::{EntityId, World};

/// Bird animation frames.
pub const BIRD_ASSETS: [&str; 3] = ["bird_0", "bird_1", "bird_2"];
/// Title banner.
pub const TITLE_ASSET: &str = "not_flappy_bird";
/// Scrolling start prompt.
pub const PROMPT_ASSET: &str = "press_space_to_start";

/// Column where the bird starts a game.
pub const BIRD_START_X: i32 = 10;

/// The player entity and its vertical velocity (cells per tick, downward).
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub id: EntityId,
    pub velocity: f32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    field: Playfield,
    screen: Screen,
    world: World,
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    bird: Bird,
    title_text: EntityId,
    prompt: EntityId,
    score: u32,
    score_counter: ScoreCounter,
    rng: SimpleRng,
    quit: bool,
}

impl GameState {
    /// Load every view and build the world on the title screen.
    pub fn new(loader: &dyn AssetLoader, field: Playfield, seed: u32) -> Result<Self> {
        let (w, h) = (field.w(), field.h());
        let mut world = World::new();

        let mut title = Entity::load(EntityKind::Decoration, loader, &[TITLE_ASSET])?;
        title.set_position(w / 2, h / 2);
        let title_text = world.register(title)?;

        let mut prompt = Entity::load(EntityKind::Decoration, loader, &[PROMPT_ASSET])?;
        prompt.set_position(-prompt.base_width(), h / 2 + h * 3 / 8);
        let prompt = world.register(prompt)?;

        let mut obstacles = ArrayVec::new();
        for (x, y, gap) in initial_obstacles(field) {
            let obstacle = Obstacle::create(&mut world, loader, x, y, gap)?;
            obstacles
                .try_push(obstacle)
                .map_err(|_| GameError::ResourceExhaustion {
                    what: "obstacles",
                    capacity: MAX_OBSTACLES,
                })?;
        }

        let bird = Entity::load(EntityKind::Player, loader, &BIRD_ASSETS)?;
        let bird = Bird {
            id: world.register(bird)?,
            velocity: 0.0,
        };

        let score_counter = ScoreCounter::create(&mut world, loader, w - 9, 1)?;

        tracing::info!(
            entities = world.len(),
            obstacles = obstacles.len(),
            width = field.width,
            height = field.height,
            "game world ready"
        );

        Ok(Self {
            field,
            screen: Screen::Title,
            world,
            obstacles,
            bird,
            title_text,
            prompt,
            score: 0,
            score_counter,
            rng: SimpleRng::new(seed),
            quit: false,
        })
    }

    pub fn field(&self) -> Playfield {
        self.field
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Direct access for scripted setups; parts re-sync on the next scroll.
    pub fn obstacle_mut(&mut self, index: usize) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(index)
    }

    pub fn bird(&self) -> &Entity {
        &self.world[self.bird.id]
    }

    pub fn bird_id(&self) -> EntityId {
        self.bird.id
    }

    pub fn bird_velocity(&self) -> f32 {
        self.bird.velocity
    }

    pub fn set_bird_velocity(&mut self, velocity: f32) {
        self.bird.velocity = velocity;
    }

    pub fn place_bird(&mut self, x: i32, y: i32) {
        self.world[self.bird.id].set_position(x, y);
    }

    /// Move obstacle `index` and its parts. Unknown indices are ignored.
    pub fn place_obstacle(&mut self, index: usize, x: i32, y: i32) {
        if let Some(obstacle) = self.obstacles.get_mut(index) {
            obstacle.place(&mut self.world, x, y);
        }
    }

    pub fn title_text(&self) -> EntityId {
        self.title_text
    }

    pub fn prompt(&self) -> EntityId {
        self.prompt
    }

    pub fn score_counter(&self) -> &ScoreCounter {
        &self.score_counter
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Run the work behind a timer.
    pub fn trigger<I: InputPort + ?Sized>(&mut self, task: TimerTask, input: &I) {
        match task {
            TimerTask::ScrollWorld => self.scroll_world(),
            TimerTask::AnimateBird => self.animate_bird(),
            TimerTask::PhysicsTick => self.physics_tick(input),
        }
    }

    /// Title -> Playing.
    pub fn start_game(&mut self) {
        let (w, h) = (self.field.w(), self.field.h());

        self.screen = Screen::Playing;
        self.world[self.prompt].visible = false;
        self.world[self.title_text].visible = false;
        self.world[self.bird.id].set_position(BIRD_START_X, h / 2);
        self.bird.velocity = 0.0;
        self.score = 0;
        self.score_counter.update(&mut self.world, self.score);

        let count = self.obstacles.len() as i32;
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            let x = w / 4 + i as i32 * w / count;
            let y = random_gap_center(&mut self.rng, self.field);
            obstacle.score_awarded = false;
            obstacle.place(&mut self.world, x, y);
        }

        tracing::debug!("game started");
    }

    /// Playing -> Title. The counter keeps showing the final score until
    /// the next game starts.
    pub fn end_game(&mut self) {
        tracing::debug!(score = self.score, "game over");
        self.screen = Screen::Title;
        self.score = 0;
        self.world[self.title_text].visible = true;
        self.world[self.prompt].visible = true;
    }

    /// Scroll obstacles one cell left, award points, recycle, and on the
    /// title screen scroll the prompt right.
    pub fn scroll_world(&mut self) {
        let bird_x = self.world[self.bird.id].x;

        for obstacle in self.obstacles.iter_mut() {
            obstacle.x -= 1;

            if self.screen == Screen::Playing && obstacle.x < bird_x && !obstacle.score_awarded {
                self.score += 1;
                self.score_counter.update(&mut self.world, self.score);
                obstacle.score_awarded = true;
                tracing::debug!(score = self.score, "point scored");
            }

            obstacle.recycle_if_offscreen(&self.world, self.field, &mut self.rng);
            obstacle.sync(&mut self.world);
        }

        if self.screen == Screen::Title {
            let prompt = &mut self.world[self.prompt];
            prompt.x += 1;
            if prompt.x > self.field.w() {
                prompt.x = -prompt.base_width();
            }
        }
    }

    pub fn animate_bird(&mut self) {
        self.world[self.bird.id].advance_view();
    }

    /// Apply held input, gravity, autopilot and collisions, then move the bird.
    pub fn physics_tick<I: InputPort + ?Sized>(&mut self, input: &I) {
        if input.is_held(GameAction::Quit) {
            self.quit = true;
        }
        if input.is_held(GameAction::MoveLeft) {
            self.world[self.bird.id].x -= 1;
        }
        if input.is_held(GameAction::MoveRight) {
            self.world[self.bird.id].x += 1;
        }
        if input.is_held(GameAction::Flap) {
            if self.screen == Screen::Title {
                self.start_game();
            }
            if self.bird.velocity > FLAP_VELOCITY_MIN {
                self.bird.velocity -= FLAP_IMPULSE;
            }
            self.world[self.bird.id].advance_view();
        }

        if self.bird.velocity < TERMINAL_VELOCITY {
            self.bird.velocity += GRAVITY;
        }

        match self.screen {
            Screen::Title => self.autopilot(),
            Screen::Playing => {
                if self.bird_hit_obstacle() || self.bird_out_of_bounds() {
                    self.end_game();
                }
            }
        }

        self.world[self.bird.id].y += self.bird.velocity.floor() as i32;
    }

    /// Whether the bird overlaps any obstacle part.
    pub fn bird_hit_obstacle(&self) -> bool {
        let bird = &self.world[self.bird.id];
        self.obstacles
            .iter()
            .flat_map(Obstacle::parts)
            .any(|part| overlaps(bird, &self.world[part]))
    }

    /// Whether the bird left `[0, width] x [0, height]`.
    pub fn bird_out_of_bounds(&self) -> bool {
        let bird = &self.world[self.bird.id];
        bird.x < 0 || bird.x > self.field.w() || bird.y < 0 || bird.y > self.field.h()
    }

    /// Keep the idle bird in the air and fly it across the title screen.
    fn autopilot(&mut self) {
        let (w, h) = (self.field.w(), self.field.h());
        let bird = &mut self.world[self.bird.id];

        if bird.y > h - h / 4 {
            self.bird.velocity -= AUTOPILOT_IMPULSE + self.rng.next_range(10) as f32 / 8.0;
        }

        if bird.x < w {
            bird.x += 1;
        } else {
            bird.set_position(0, 0);
        }
    }
}

/// Starting `(x, center, half-gap)` of each obstacle on the title screen.
fn initial_obstacles(field: Playfield) -> [(i32, i32, i32); 3] {
    let (w, h) = (field.w(), field.h());
    let (cx, cy) = (w / 2, h / 2);
    [
        (cx, cy, 8),
        (cx + w * 3 / 10, cy - h / 8, 9),
        (cx - w * 3 / 10, cy + h / 8, 10),
    ]
}
