use egui::{Context, TextureHandle, TextureId, TextureOptions};
use log::debug;

use crate::surface::Surface;

/// GPU texture mirroring the engine surface, re-uploaded only when the
/// surface version changes.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next call to [`Self::texture_id`] will upload pixels
    pub fn is_stale(&self, surface: &Surface) -> bool {
        self.handle.is_none() || self.uploaded_version != Some(surface.version())
    }

    pub fn texture_id(&mut self, ctx: &Context, surface: &Surface) -> TextureId {
        let stale = self.is_stale(surface);

        let mut created = false;
        let handle = self.handle.get_or_insert_with(|| {
            created = true;
            ctx.load_texture("paint_canvas", surface.to_color_image(), TextureOptions::NEAREST)
        });
        if stale && !created {
            handle.set(surface.to_color_image(), TextureOptions::NEAREST);
        }
        let id = handle.id();

        if stale {
            debug!("Uploaded canvas texture v{}", surface.version());
            self.uploaded_version = Some(surface.version());
        }
        id
    }
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("uploaded_version", &self.uploaded_version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_reupload_on_version_change() {
        let ctx = Context::default();
        let mut surface = Surface::new(4, 4).unwrap();
        let mut texture = CanvasTexture::new();
        assert!(texture.is_stale(&surface));

        let id = texture.texture_id(&ctx, &surface);
        assert!(!texture.is_stale(&surface));

        surface.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        assert!(texture.is_stale(&surface));
        assert_eq!(texture.texture_id(&ctx, &surface), id);
        assert!(!texture.is_stale(&surface));
    }
}
