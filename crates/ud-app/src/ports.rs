use anyhow::Result;

use crate::models::{FileItemView, PhotoView};
use ud_core::GeoFix;

/// The external rendering surface.
///
/// 外部渲染层的契约。
///
/// The controller pushes projections; how they become pixels is none of our
/// business. Errors here are plumbing failures of the shell, not domain
/// failures.
#[async_trait::async_trait]
pub trait PresenterPort: Send + Sync {
    /// Redraw the file listing with the current filtered subset.
    async fn render_files(&self, files: &[FileItemView]) -> Result<()>;

    /// Redraw the photo gallery.
    async fn render_gallery(&self, photos: &[PhotoView]) -> Result<()>;

    /// Show a resolved location fix.
    async fn show_location(&self, fix: &GeoFix) -> Result<()>;

    /// Show an inline error message; the page stays interactive.
    async fn show_error(&self, message: &str) -> Result<()>;
}
