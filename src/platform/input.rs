//! Input state
//!
//! Browser event handlers write into an `InputState`; the frame driver
//! samples it once per frame into a world-space `FrameInput`.

use glam::Vec2;

use crate::renderer::Camera;
use crate::settings::KeyBindings;
use crate::sim::FrameInput;

/// Logical movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
}

/// Anything that can report pointer and key state
pub trait InputSource {
    /// Whether the pointer (mouse button or touch) is pressed
    fn is_pointer_active(&self) -> bool;
    /// Pointer position in screen space (pixels, y down)
    fn pointer_position(&self) -> Vec2;
    /// Whether a logical key is held
    fn is_key_held(&self, key: Key) -> bool;
}

/// Snapshot of pointer and key state, updated from events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer_down: bool,
    pointer: Vec2,
    left_held: bool,
    right_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse button or touch pressed at a screen position
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer_down = true;
        self.pointer = pos;
    }

    /// Pointer moved (tracked even while released)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
    }

    /// Key pressed; returns the logical key if the name is bound
    pub fn key_down(&mut self, name: &str, bindings: &KeyBindings) -> Option<Key> {
        let key = bindings.resolve(name)?;
        self.set_key(key, true);
        Some(key)
    }

    /// Key released; returns the logical key if the name is bound
    pub fn key_up(&mut self, name: &str, bindings: &KeyBindings) -> Option<Key> {
        let key = bindings.resolve(name)?;
        self.set_key(key, false);
        Some(key)
    }

    /// Drop all held state (window lost focus)
    pub fn release_all(&mut self) {
        self.pointer_down = false;
        self.left_held = false;
        self.right_held = false;
    }

    fn set_key(&mut self, key: Key, held: bool) {
        match key {
            Key::MoveLeft => self.left_held = held,
            Key::MoveRight => self.right_held = held,
        }
    }
}

impl InputSource for InputState {
    fn is_pointer_active(&self) -> bool {
        self.pointer_down
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn is_key_held(&self, key: Key) -> bool {
        match key {
            Key::MoveLeft => self.left_held,
            Key::MoveRight => self.right_held,
        }
    }
}

/// Read an input source into this frame's world-space input
pub fn sample_frame_input(source: &impl InputSource, camera: &Camera) -> FrameInput {
    let pointer = source
        .is_pointer_active()
        .then(|| camera.unproject(source.pointer_position()));

    FrameInput {
        pointer,
        move_left: source.is_key_held(Key::MoveLeft),
        move_right: source.is_key_held(Key::MoveRight),
    }
}
