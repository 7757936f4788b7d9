//! Headless fountain: spawns a burst of particles from a TOML description
//! and ticks the manager at a fixed 60Hz until everything has died.

use ember_particles::{
    count, Assets, FrameTime, Particle, ParticleDesc, ParticleManager, RecordingSurface,
    TextureHandle, Vec2,
};
use std::rc::Rc;

fn main() {
    let mut assets = Assets::new();
    assets
        .insert_texture(TextureHandle::new("droplet", 48, 16))
        .expect("valid texture");
    let assets = Rc::new(assets);

    let desc = ParticleDesc::from_toml_str(
        r#"
position = [0.0, 0.0]
lifetime_ms = 900
frame_size = [16, 16]
frame_speed = 120
color = [0.4, 0.7, 1.0, 1.0]
"#,
    )
    .expect("valid description");

    let mut manager = ParticleManager::new();
    manager.initialize();
    manager.load(assets.clone());
    manager.on_death(|p| println!("[fountain] particle '{}' died", p.id));

    let droplet = assets.texture("droplet").cloned();
    let mut serial = 0;
    manager.spawn_with(
        "water",
        24,
        move || {
            serial += 1;
            let mut p = Particle::new(ParticleDesc {
                texture: droplet.clone(),
                id: format!("drop-{serial}"),
                ..desc.clone()
            });
            // Fan the droplets out with each particle's own random source
            let dir = p.rng_mut().direction();
            let speed = p.rng_mut().range(20.0, 60.0);
            p.velocity = Vec2::new(dir.x * speed, -speed.abs());
            p
        },
        |_| {},
    );

    println!("[fountain] {} particles live", count::live());

    let tick = FrameTime::from_millis(16);
    let mut surface = RecordingSurface::new();
    let mut frames = 0;
    while !manager.is_empty() {
        manager.update(tick);
        surface.clear();
        manager.draw_group(&mut surface, "water");
        frames += 1;
    }

    println!("[fountain] drained after {frames} frames, {} live", count::live());
}
