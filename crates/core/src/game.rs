//! Game state module - the entity store plus everything input mutates
//!
//! `Game` owns the entities, the controller latches, and the loop flags. It is
//! passed explicitly to the display and the loop; there is no global state.

use std::collections::BTreeMap;

use crate::controller::Controller;
use crate::entity::{Entity, EntityId};
use crate::event::{InputEvent, Key, MouseButton};
use crate::types::{Color, Loc, Size, NUDGE_STEP};

/// Complete arena state.
#[derive(Debug, Clone)]
pub struct Game {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u64,

    pub controller: Controller,
    /// Game loop number, incremented once per tick.
    pub loop_count: u64,
    /// World location drawn at the center of the screen.
    pub center: Loc,
    pub quit: bool,
    /// A control key is currently held.
    pub ctrl: bool,
    /// Fills the viewport behind every entity.
    pub backdrop: Entity,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        let mut backdrop = Entity::new(EntityId(u64::MAX));
        backdrop.color = Color::GREY;
        Self {
            entities: BTreeMap::new(),
            next_id: 0,
            controller: Controller::default(),
            loop_count: 0,
            center: Loc::ORIGIN,
            quit: false,
            ctrl: false,
            backdrop,
        }
    }

    fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a default entity under the next sequential id.
    ///
    /// Ids start at 0 and are never reused, even after [`Game::erase`].
    pub fn new_entity(&mut self) -> &mut Entity {
        let id = self.next_id();
        self.entities.entry(id).or_insert_with(|| Entity::new(id))
    }

    /// Look up an entity. Missing ids yield `None`; nothing is inserted.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Remove an entity. No-op if absent.
    pub fn erase(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entity(EntityId::PLAYER)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entity_mut(EntityId::PLAYER)
    }

    /// Entities in ascending id order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Populate the starting scene: a red player at the origin and a larger
    /// blue reference block up and to the right.
    pub fn setup_demo_scene(&mut self) {
        let player = self.new_entity();
        player.size = Size::new(50, 100);
        player.color = Color::RED;

        let reference = self.new_entity();
        reference.size = Size::new(100, 200);
        reference.loc = Loc::new(100, 100);
        reference.color = Color::BLUE;
    }

    /// Stretch the backdrop over the whole screen around the viewport center.
    pub fn fit_backdrop(&mut self, screen: Size) {
        self.backdrop.loc = self.center;
        self.backdrop.size = screen;
    }

    /// Apply one input event to the controller, flags, or player.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key {
                key,
                pressed,
                repeat,
                ctrl,
            } => self.key_event(key, pressed, repeat, ctrl),
            InputEvent::Mouse { button, pressed } => self.mouse_event(button, pressed),
            InputEvent::Quit => {
                log::info!("quit requested");
                self.quit = true;
            }
        }
    }

    fn mouse_event(&mut self, button: MouseButton, pressed: bool) {
        let c = &mut self.controller;
        match button {
            MouseButton::Left => c.mouse_left = pressed,
            MouseButton::Right => c.mouse_right = pressed,
            MouseButton::Middle => {}
        }
    }

    fn key_event(&mut self, key: Key, pressed: bool, repeat: bool, ctrl_modifier: bool) {
        if repeat {
            return;
        }
        log::debug!("key {:?} pressed={}", key, pressed);

        match key {
            // Arrow keys move the player directly, skipping velocity.
            Key::Up | Key::Down | Key::Left | Key::Right => {
                if pressed {
                    self.nudge_player(key);
                }
            }

            Key::W => self.controller.up = pressed,
            Key::A => self.controller.left = pressed,
            Key::S => self.controller.down = pressed,
            Key::D => self.controller.right = pressed,

            Key::Ctrl => self.ctrl = pressed,
            Key::Char('c') => {
                if pressed && (self.ctrl || ctrl_modifier) {
                    log::info!("got ctrl+c");
                    self.quit = true;
                }
            }
            Key::Char(_) | Key::Other => {}
        }
    }

    fn nudge_player(&mut self, key: Key) {
        let delta = match key {
            Key::Up => Loc::new(0, NUDGE_STEP),
            Key::Down => Loc::new(0, -NUDGE_STEP),
            Key::Left => Loc::new(-NUDGE_STEP, 0),
            Key::Right => Loc::new(NUDGE_STEP, 0),
            _ => return,
        };
        if let Some(p) = self.player_mut() {
            p.loc = p.loc + delta;
        }
    }

    /// Advance the player one tick from the held direction.
    pub fn update(&mut self) {
        let dir = self.controller.direction();
        if let Some(p) = self.player_mut() {
            p.step(dir);
        }
    }
}
