//! Particle collection manager: bulk add/remove, group addressing,
//! lifecycle notifications, and bulk queries

use crate::assets::Assets;
use crate::count;
use crate::particle::Particle;
use crate::surface::RenderSurface;
use ember_core::FrameTime;
use std::rc::Rc;

type ParticleHook = Box<dyn FnMut(&mut Particle)>;

/// Owns an ordered collection of particles and drives their lifecycle.
///
/// Insertion order is significant: it is the draw order within a group and
/// the order first/last-of-kind queries observe. All state is mutated from
/// the single thread driving the host's tick loop.
#[derive(Default)]
pub struct ParticleManager {
    particles: Vec<Particle>,
    assets: Option<Rc<Assets>>,
    add_hooks: Vec<ParticleHook>,
    death_hooks: Vec<ParticleHook>,
}

impl ParticleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle pass-through, called once by the host before first use
    pub fn initialize(&mut self) {}

    /// Store the asset context; every particle added afterward is loaded
    /// against it
    pub fn load(&mut self, assets: Rc<Assets>) {
        self.assets = Some(assets);
    }

    // ── Notifications ──

    /// Subscribe to particle insertion; fires synchronously right after a
    /// particle joins the collection. Subscribers run in registration order.
    pub fn on_add<F: FnMut(&mut Particle) + 'static>(&mut self, hook: F) {
        self.add_hooks.push(Box::new(hook));
    }

    /// Subscribe to particle death; fires exactly once per particle, at its
    /// removal from the collection.
    pub fn on_death<F: FnMut(&mut Particle) + 'static>(&mut self, hook: F) {
        self.death_hooks.push(Box::new(hook));
    }

    // ── Insertion ──

    /// Stamp group ownership onto `particle`, run its initialize and load
    /// hooks, append it, and fire add notifications. Group tags are
    /// ASCII-uppercased so all group addressing is case-insensitive.
    pub fn add(&mut self, group: &str, mut particle: Particle) {
        particle.set_group(group);
        particle.initialize();
        if let Some(assets) = &self.assets {
            particle.load(assets);
        }

        self.particles.push(particle);
        if let Some(p) = self.particles.last_mut() {
            for hook in self.add_hooks.iter_mut() {
                hook(p);
            }
        }
    }

    /// Call `factory` `quantity` times, adding each result via [`Self::add`]
    pub fn spawn<F>(&mut self, group: &str, quantity: usize, factory: F)
    where
        F: FnMut() -> Particle,
    {
        self.spawn_with(group, quantity, factory, |_| {});
    }

    /// Like [`Self::spawn`], invoking `on_spawn` with each particle after
    /// its add notification has fired
    pub fn spawn_with<F, S>(&mut self, group: &str, quantity: usize, mut factory: F, mut on_spawn: S)
    where
        F: FnMut() -> Particle,
        S: FnMut(&mut Particle),
    {
        for _ in 0..quantity {
            self.add(group, factory());
            if let Some(p) = self.particles.last_mut() {
                on_spawn(p);
            }
        }
    }

    // ── Per-tick update ──

    /// Tick every active particle, then remove any particle observed
    /// inactive afterward, firing its death notification once.
    ///
    /// Removal holds the index in place instead of advancing it, so every
    /// not-yet-visited particle keeps its position relative to the sweep.
    pub fn update(&mut self, time: FrameTime) {
        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].is_active() {
                self.particles[i].update(time);
            }

            if self.particles[i].is_active() {
                i += 1;
            } else {
                let mut dead = self.particles.remove(i);
                for hook in self.death_hooks.iter_mut() {
                    hook(&mut dead);
                }
            }
        }
    }

    // ── Drawing ──

    /// Draw every particle whose group matches, in collection order
    pub fn draw_group(&self, surface: &mut dyn RenderSurface, group: &str) {
        for particle in &self.particles {
            if particle.group().eq_ignore_ascii_case(group) {
                particle.draw(surface);
            }
        }
    }

    // ── Removal ──

    /// Remove every particle, adjusting the live counter once for the batch
    pub fn clear(&mut self) {
        let live = self.particles.iter().filter(|p| p.is_active()).count() as i64;
        count::adjust(-live);
        self.particles.clear();
    }

    /// Remove every particle in `group` (case-insensitive), leaving the rest
    /// untouched. No death notifications fire for cleared particles.
    pub fn clear_group(&mut self, group: &str) {
        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].group().eq_ignore_ascii_case(group) {
                let removed = self.particles.remove(i);
                if removed.is_active() {
                    count::adjust(-1);
                }
            } else {
                i += 1;
            }
        }
    }

    // ── Queries ──

    /// Bounds-checked positional lookup. The bound check is strict: a
    /// legacy `>=` comparison here let `index == count` fall through to an
    /// out-of-range read.
    pub fn from_index(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn from_index_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    /// First particle in collection order with the given kind tag
    pub fn first_of_kind(&self, kind: &str) -> Option<&Particle> {
        self.particles.iter().find(|p| p.kind() == kind)
    }

    /// Last particle in collection order with the given kind tag
    pub fn last_of_kind(&self, kind: &str) -> Option<&Particle> {
        self.particles.iter().rev().find(|p| p.kind() == kind)
    }

    pub fn first_of_kind_mut(&mut self, kind: &str) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.kind() == kind)
    }

    pub fn last_of_kind_mut(&mut self, kind: &str) -> Option<&mut Particle> {
        self.particles.iter_mut().rev().find(|p| p.kind() == kind)
    }

    // ── Bulk mutation ──

    /// Apply `f` to every particle, in collection order
    pub fn for_each<F: FnMut(&mut Particle)>(&mut self, mut f: F) {
        for particle in &mut self.particles {
            f(particle);
        }
    }

    /// Apply `f` to every particle whose group matches (case-insensitive)
    pub fn for_each_in_group<F: FnMut(&mut Particle)>(&mut self, group: &str, mut f: F) {
        for particle in &mut self.particles {
            if particle.group().eq_ignore_ascii_case(group) {
                f(particle);
            }
        }
    }

    /// Apply `f` to every particle whose id matches (case-insensitive)
    pub fn for_each_with_id<F: FnMut(&mut Particle)>(&mut self, id: &str, mut f: F) {
        for particle in &mut self.particles {
            if particle.id.eq_ignore_ascii_case(id) {
                f(particle);
            }
        }
    }

    // ── Introspection ──

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
