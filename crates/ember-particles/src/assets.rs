//! Asset boundary: texture handles and the loading context
//!
//! The simulation never touches pixel data. A `TextureHandle` is a cheap
//! reference to a texture the host owns; only its size matters here, for
//! deriving sprite-sheet geometry. `Assets` is the opaque loading context
//! handed to a manager once and forwarded to particle load hooks.

use ember_core::{EmberError, Result};
use std::collections::HashMap;

/// A reference to an externally owned texture.
///
/// The handle is never freed by this crate; the host controls the texture's
/// lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureHandle {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Name-keyed texture registry passed through `ParticleManager::load`
#[derive(Default)]
pub struct Assets {
    textures: HashMap<String, TextureHandle>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture handle. Zero-sized textures are rejected since the
    /// sheet geometry derived from them would be meaningless.
    pub fn insert_texture(&mut self, texture: TextureHandle) -> Result<()> {
        if texture.width == 0 || texture.height == 0 {
            return Err(EmberError::ValidationError(format!(
                "texture '{}' has a zero dimension ({}x{})",
                texture.name, texture.width, texture.height
            )));
        }
        self.textures.insert(texture.name.clone(), texture);
        Ok(())
    }

    pub fn texture(&self, name: &str) -> Option<&TextureHandle> {
        self.textures.get(name)
    }

    /// Like `texture`, but a missing entry is an error
    pub fn require_texture(&self, name: &str) -> Result<&TextureHandle> {
        self.textures
            .get(name)
            .ok_or_else(|| EmberError::AssetError(format!("texture not found: {name}")))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut assets = Assets::new();
        assets
            .insert_texture(TextureHandle::new("spark", 48, 16))
            .unwrap();

        let tex = assets.texture("spark").unwrap();
        assert_eq!(tex.width, 48);
        assert!(assets.texture("smoke").is_none());
        assert!(assets.require_texture("smoke").is_err());
    }

    #[test]
    fn zero_sized_texture_rejected() {
        let mut assets = Assets::new();
        let err = assets.insert_texture(TextureHandle::new("bad", 0, 16));
        assert!(err.is_err());
        assert!(assets.is_empty());
    }
}
