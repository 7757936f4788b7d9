//! The particle entity: kinematics, lifetime countdown, sprite animation,
//! collision queries, and lifecycle hooks

use crate::assets::{Assets, TextureHandle};
use crate::count;
use crate::desc::ParticleDesc;
use crate::rand::ParticleRng;
use crate::surface::{RenderSurface, SpriteParams};
use ember_core::{Color, FrameTime, Point, Rect, Vec2};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to one registered lifecycle callback.
///
/// Hooks are `Rc`-shared so `duplicate()` can hand the same callback list to
/// a clone; a hook that panics propagates to whoever drove the tick.
type InitHook = Rc<RefCell<dyn FnMut(&mut Particle)>>;
type LoadHook = Rc<RefCell<dyn FnMut(&mut Particle, &Assets)>>;
type UpdateHook = Rc<RefCell<dyn FnMut(&mut Particle, FrameTime)>>;

#[derive(Clone, Default)]
struct ParticleHooks {
    init: Vec<InitHook>,
    load: Vec<LoadHook>,
    update: Vec<UpdateHook>,
}

/// One simulated visual entity with a finite lifetime.
///
/// A particle advances itself one tick at a time via [`Particle::update`];
/// its owning [`crate::ParticleManager`] is responsible for removing it once
/// it observes the inactive state. Every activity transition adjusts the
/// process-wide live counter, so the flag is only reachable through
/// [`Particle::activate`] and [`Particle::deactivate`].
pub struct Particle {
    /// Caller-assigned label, not required to be unique
    pub id: String,
    group: String,
    kind: &'static str,

    texture: Option<TextureHandle>,

    pub position: Vec2,
    pub velocity: Vec2,
    /// Pivot offset for rotation and scaling
    pub origin: Vec2,
    scale: Vec2,
    /// Rotation in radians
    pub angle: f32,
    depth: f32,

    pub color: Color,
    base_color: Color,

    current_frame: Point,
    frame_size: Point,
    sheet_size: Point,
    source: Rect,
    pub frame_speed: i32,
    animation_time: i32,
    pub paused: bool,

    current_time: i32,
    max_time: i32,

    radius: f32,
    active: bool,

    rng: ParticleRng,
    hooks: ParticleHooks,
}

impl Particle {
    pub fn new(desc: ParticleDesc) -> Self {
        let mut frame_size = desc.frame_size;
        let mut sheet_size = Point::ZERO;
        let mut origin = Vec2::ZERO;
        let mut radius = desc.radius.max(0.0);
        let mut source = Rect::default();

        if let Some(texture) = &desc.texture {
            if frame_size.x <= 0 || frame_size.y <= 0 {
                frame_size = Point::new(texture.width as i32, texture.height as i32);
            }
            sheet_size = Point::new(
                (texture.width as i32 / frame_size.x.max(1)).max(1),
                (texture.height as i32 / frame_size.y.max(1)).max(1),
            );
            origin = Vec2::new(frame_size.x as f32 / 2.0, frame_size.y as f32 / 2.0);
            if radius <= 0.0 {
                radius = frame_size.x as f32 / 2.0;
            }
            source = Rect::new(0, 0, frame_size.x, frame_size.y);
        }

        // Particles are born active
        count::adjust(1);

        Self {
            id: desc.id,
            group: String::new(),
            kind: desc.kind,
            texture: desc.texture,
            position: desc.position,
            velocity: desc.velocity,
            origin,
            scale: Vec2::new(desc.scale.x.max(0.0), desc.scale.y.max(0.0)),
            angle: desc.angle,
            depth: desc.depth.clamp(0.0, 1.0),
            color: desc.color,
            base_color: desc.color,
            current_frame: Point::ZERO,
            frame_size,
            sheet_size,
            source,
            frame_speed: desc.frame_speed,
            animation_time: 0,
            paused: desc.paused,
            current_time: desc.lifetime_ms,
            max_time: desc.lifetime_ms,
            radius,
            active: true,
            rng: ParticleRng::from_entropy(),
            hooks: ParticleHooks::default(),
        }
    }

    // ── Accessors ──

    /// Group tag, ASCII-uppercased; empty until a manager adds this particle
    pub fn group(&self) -> &str {
        &self.group
    }

    pub(crate) fn set_group(&mut self, group: &str) {
        self.group = group.to_ascii_uppercase();
    }

    /// Variant tag used by first/last-of-kind queries
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Negative components are clamped to zero
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = Vec2::new(scale.x.max(0.0), scale.y.max(0.0));
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Clamped into [0, 1]
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth.clamp(0.0, 1.0);
    }

    /// The color the particle was constructed with
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    pub fn current_frame(&self) -> Point {
        self.current_frame
    }

    /// Set the animation cell directly, clamped into the sheet bounds
    pub fn set_current_frame(&mut self, frame: Point) {
        self.current_frame = Point::new(
            frame.x.clamp(0, (self.sheet_size.x - 1).max(0)),
            frame.y.clamp(0, (self.sheet_size.y - 1).max(0)),
        );
        self.source = self.frame_source(self.current_frame);
    }

    pub fn frame_size(&self) -> Point {
        self.frame_size
    }

    /// Grid dimensions of the sprite sheet (columns x rows)
    pub fn sheet_size(&self) -> Point {
        self.sheet_size
    }

    /// Pixel sub-region of the texture for the current animation cell
    pub fn source(&self) -> Rect {
        self.source
    }

    pub fn current_time(&self) -> i32 {
        self.current_time
    }

    pub fn max_time(&self) -> i32 {
        self.max_time
    }

    /// Re-arm the decay timer: sets current and max lifetime together
    pub fn set_time(&mut self, millis: i32) {
        self.current_time = millis;
        self.max_time = millis;
    }

    /// Fraction of the lifetime already consumed, in [0, 1]
    pub fn age_ratio(&self) -> f32 {
        if self.max_time <= 0 {
            1.0
        } else {
            (1.0 - self.current_time as f32 / self.max_time as f32).clamp(0.0, 1.0)
        }
    }

    /// The particle's own random source, available to hooks
    pub fn rng_mut(&mut self) -> &mut ParticleRng {
        &mut self.rng
    }

    // ── Activity ──

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the particle dead. The owning manager removes it on its next
    /// update pass. Decrements the live counter; a no-op if already inactive.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            count::adjust(-1);
        }
    }

    /// Re-arm a not-yet-removed particle. Increments the live counter; a
    /// no-op if already active.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            count::adjust(1);
        }
    }

    // ── Lifecycle hooks ──

    /// Register an initialize callback, run once at add time
    pub fn on_initialize<F: FnMut(&mut Particle) + 'static>(&mut self, hook: F) {
        self.hooks.init.push(Rc::new(RefCell::new(hook)));
    }

    /// Register a load callback, run once with the manager's asset context
    pub fn on_load<F: FnMut(&mut Particle, &Assets) + 'static>(&mut self, hook: F) {
        self.hooks.load.push(Rc::new(RefCell::new(hook)));
    }

    /// Register a per-tick callback, run after the built-in update sub-steps
    pub fn on_update<F: FnMut(&mut Particle, FrameTime) + 'static>(&mut self, hook: F) {
        self.hooks.update.push(Rc::new(RefCell::new(hook)));
    }

    /// Invoked once by the owning manager at add time, before `load`
    pub fn initialize(&mut self) {
        let hooks = self.hooks.init.clone();
        for hook in &hooks {
            (&mut *hook.borrow_mut())(self);
        }
    }

    /// Invoked once by the owning manager, immediately after `initialize`
    pub fn load(&mut self, assets: &Assets) {
        let hooks = self.hooks.load.clone();
        for hook in &hooks {
            (&mut *hook.borrow_mut())(self, assets);
        }
    }

    // ── Per-tick update ──

    /// Advance one tick: integrate position, count down the lifetime, step
    /// the animation, then run registered update hooks in order.
    pub fn update(&mut self, time: FrameTime) {
        self.update_position(time);
        self.update_time(time);
        self.update_animation(time);

        let hooks = self.hooks.update.clone();
        for hook in &hooks {
            (&mut *hook.borrow_mut())(self, time);
        }
    }

    fn update_position(&mut self, time: FrameTime) {
        self.position += self.velocity * time.seconds();
    }

    fn update_time(&mut self, time: FrameTime) {
        self.current_time -= time.millis();
        if self.current_time <= 0 {
            self.deactivate();
        }
    }

    fn update_animation(&mut self, time: FrameTime) {
        if self.paused || self.sheet_size.x * self.sheet_size.y <= 1 {
            return;
        }

        self.animation_time += time.millis();
        // frame_speed <= 0 trips this every tick: advance-every-tick mode
        if self.animation_time > self.frame_speed {
            self.current_frame.x += 1;
            if self.current_frame.x >= self.sheet_size.x {
                self.current_frame.x = 0;
                self.current_frame.y += 1;
                if self.current_frame.y >= self.sheet_size.y {
                    self.current_frame.y = 0;
                }
            }
            self.animation_time = 0;
            self.source = self.frame_source(self.current_frame);
        }
    }

    fn frame_source(&self, frame: Point) -> Rect {
        Rect::new(
            frame.x * self.frame_size.x,
            frame.y * self.frame_size.y,
            self.frame_size.x,
            self.frame_size.y,
        )
    }

    // ── Drawing ──

    /// Emit one draw request; a no-op without a texture
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        if let Some(texture) = &self.texture {
            surface.draw_sprite(SpriteParams {
                texture,
                position: self.position,
                source: self.source,
                color: self.color,
                angle: self.angle,
                origin: self.origin,
                scale: self.scale,
                depth: self.depth,
            });
        }
    }

    // ── Steering and collision queries ──

    /// Steer toward `target`: adds a unit vector toward it scaled by `speed`
    /// to the velocity. Contributes nothing when already at the target.
    pub fn move_to(&mut self, target: Vec2, speed: f32) {
        let direction = (target - self.position).normalized();
        self.velocity += direction * speed;
    }

    /// True iff `point` lies strictly inside the collision circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Open-disk circle/circle overlap test
    pub fn intersects(&self, center: Vec2, radius: f32) -> bool {
        self.radius + radius > self.position.distance(center)
    }

    // ── Duplication ──

    /// Duplicate-state factory for prototype spawning: copies every value
    /// field, shares the texture handle and registered hook lists, and takes
    /// a fresh random source. An active source counts as one new live
    /// particle.
    pub fn duplicate(&self) -> Particle {
        if self.active {
            count::adjust(1);
        }
        Particle {
            id: self.id.clone(),
            group: self.group.clone(),
            kind: self.kind,
            texture: self.texture.clone(),
            position: self.position,
            velocity: self.velocity,
            origin: self.origin,
            scale: self.scale,
            angle: self.angle,
            depth: self.depth,
            color: self.color,
            base_color: self.base_color,
            current_frame: self.current_frame,
            frame_size: self.frame_size,
            sheet_size: self.sheet_size,
            source: self.source,
            frame_speed: self.frame_speed,
            animation_time: self.animation_time,
            paused: self.paused,
            current_time: self.current_time,
            max_time: self.max_time,
            radius: self.radius,
            active: self.active,
            rng: ParticleRng::from_entropy(),
            hooks: self.hooks.clone(),
        }
    }
}
