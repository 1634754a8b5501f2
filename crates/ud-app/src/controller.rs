//! The controller: single owner of all mutable state.
//!
//! Every user action arrives as a `Command` and runs to completion before
//! the next one is dispatched; the registry mirror and the persistent slot
//! are only ever touched from here.

use anyhow::Result;
use tracing::{info, warn};

use crate::deps::ControllerDeps;
use crate::models::{FileItemView, PhotoView};
use ud_core::capture::{
    CameraSessionAction, CameraSessionEvent, CameraSessionMachine, CameraSessionState,
};
use ud_core::ports::CameraStreamPort;
use ud_core::{CapturedPhoto, Command, FileFilter, FileRecord, MimeType, PhotoGallery, Registry};

pub struct DropController {
    registry: Registry,
    filter: FileFilter,
    gallery: PhotoGallery,
    camera_state: CameraSessionState,
    camera_stream: Option<Box<dyn CameraStreamPort>>,
    deps: ControllerDeps,
}

impl DropController {
    pub fn new(deps: ControllerDeps) -> Self {
        Self {
            registry: Registry::new(),
            filter: FileFilter::default(),
            gallery: PhotoGallery::new(),
            camera_state: CameraSessionState::Idle,
            camera_stream: None,
            deps,
        }
    }

    /// Load the persisted sequence once at startup and push the first
    /// rendering. The slot is not read again after this.
    #[tracing::instrument(name = "controller.bootstrap", skip(self))]
    pub async fn bootstrap(&mut self) -> Result<()> {
        let records = self.deps.store.load().await?;
        info!(count = records.len(), "registry loaded from slot");
        self.registry = Registry::from_records(records);
        self.render_files().await
    }

    /// Consume one user command. Runs to completion; no two commands ever
    /// interleave mid-mutation.
    pub async fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Append(batch) => self.append(batch).await,
            Command::Remove(index) => self.remove(index).await,
            Command::SetFilter {
                type_contains,
                max_size_mb_raw,
            } => self.set_filter(&type_contains, &max_size_mb_raw).await,
            Command::Download(index) => self.download(index).await,
            Command::RequestLocation => self.request_location().await,
            Command::StartCamera => self.start_camera().await,
            Command::CapturePhoto => self.capture_photo().await,
            Command::DownloadPhoto(index) => self.download_photo(index).await,
            Command::DeletePhoto(index) => self.delete_photo(index).await,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    pub fn gallery(&self) -> &PhotoGallery {
        &self.gallery
    }

    pub fn camera_state(&self) -> &CameraSessionState {
        &self.camera_state
    }

    // === Registry commands ===

    #[tracing::instrument(name = "controller.append", skip(self, batch), fields(batch_len = batch.len()))]
    async fn append(&mut self, batch: Vec<FileRecord>) -> Result<()> {
        self.registry.append_batch(batch);
        self.persist().await?;
        self.render_files().await
    }

    #[tracing::instrument(name = "controller.remove", skip(self))]
    async fn remove(&mut self, index: usize) -> Result<()> {
        match self.registry.remove_at(index) {
            Some(removed) => {
                info!(index, name = %removed.name, "removed file");
                self.persist().await?;
                self.render_files().await
            }
            None => {
                warn!(index, len = self.registry.len(), "remove index out of range");
                Ok(())
            }
        }
    }

    async fn set_filter(&mut self, type_contains: &str, max_size_mb_raw: &str) -> Result<()> {
        self.filter = FileFilter::from_raw(type_contains, max_size_mb_raw);
        self.render_files().await
    }

    #[tracing::instrument(name = "controller.download", skip(self))]
    async fn download(&self, index: usize) -> Result<()> {
        match self.registry.get(index) {
            Some(record) => {
                let payload = record.payload();
                let dest = self
                    .deps
                    .downloads
                    .save(&record.name, &record.mime_type, &payload)
                    .await?;
                info!(index, dest = %dest.display(), "download materialized");
                Ok(())
            }
            None => {
                warn!(index, len = self.registry.len(), "download index out of range");
                Ok(())
            }
        }
    }

    /// Full-sequence write after every mutation; the slot never sees a
    /// partial state.
    async fn persist(&self) -> Result<()> {
        self.deps.store.persist(self.registry.records()).await
    }

    async fn render_files(&self) -> Result<()> {
        let views: Vec<FileItemView> = self
            .registry
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(record))
            .map(|(index, record)| FileItemView::from_record(index, record))
            .collect();
        self.deps.presenter.render_files(&views).await
    }

    // === Capture commands ===

    async fn request_location(&self) -> Result<()> {
        match self.deps.geolocation.current_fix().await {
            Ok(fix) => self.deps.presenter.show_location(&fix).await,
            Err(e) => self.deps.presenter.show_error(&e.to_string()).await,
        }
    }

    #[tracing::instrument(name = "controller.start_camera", skip(self))]
    async fn start_camera(&mut self) -> Result<()> {
        let (state, actions) = CameraSessionMachine::transition(
            self.camera_state.clone(),
            CameraSessionEvent::StartRequested,
        );
        self.camera_state = state;

        for action in actions {
            match action {
                CameraSessionAction::OpenStream => self.open_stream().await?,
            }
        }
        Ok(())
    }

    async fn open_stream(&mut self) -> Result<()> {
        match self.deps.camera.open().await {
            Ok(stream) => {
                self.camera_stream = Some(stream);
                self.apply_camera_event(CameraSessionEvent::StreamOpened);
                info!("camera streaming");
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                self.apply_camera_event(CameraSessionEvent::StreamFailed { error });
                self.deps.presenter.show_error(&message).await
            }
        }
    }

    fn apply_camera_event(&mut self, event: CameraSessionEvent) {
        let (state, _) = CameraSessionMachine::transition(self.camera_state.clone(), event);
        self.camera_state = state;
    }

    async fn capture_photo(&mut self) -> Result<()> {
        let frame = match &self.camera_stream {
            Some(stream) if self.camera_state.can_capture() => stream.grab_frame(),
            _ => {
                return self
                    .deps
                    .presenter
                    .show_error("camera is not streaming")
                    .await;
            }
        };

        match frame {
            Ok(frame) => {
                let photo = CapturedPhoto::from_frame(&frame, self.deps.clock.now_ms());
                self.gallery.add(photo);
                info!(gallery_len = self.gallery.len(), "photo captured");
                self.render_gallery().await
            }
            Err(e) => self.deps.presenter.show_error(&e.to_string()).await,
        }
    }

    #[tracing::instrument(name = "controller.download_photo", skip(self))]
    async fn download_photo(&self, index: usize) -> Result<()> {
        let photo = match self.gallery.get(index) {
            Some(photo) => photo,
            None => {
                warn!(index, len = self.gallery.len(), "photo index out of range");
                return Ok(());
            }
        };

        match photo.decode() {
            Ok((mime_type, bytes)) => {
                let name = photo_file_name(photo.captured_at_ms, &mime_type);
                let dest = self.deps.downloads.save(&name, &mime_type, &bytes).await?;
                info!(index, dest = %dest.display(), "photo download materialized");
                Ok(())
            }
            Err(e) => {
                self.deps
                    .presenter
                    .show_error(&format!("photo decode failed: {}", e))
                    .await
            }
        }
    }

    async fn delete_photo(&mut self, index: usize) -> Result<()> {
        match self.gallery.remove_at(index) {
            Some(_) => self.render_gallery().await,
            None => {
                warn!(index, len = self.gallery.len(), "delete photo index out of range");
                Ok(())
            }
        }
    }

    async fn render_gallery(&self) -> Result<()> {
        let views: Vec<PhotoView> = self
            .gallery
            .photos()
            .iter()
            .enumerate()
            .map(|(index, photo)| PhotoView::from_photo(index, photo))
            .collect();
        self.deps.presenter.render_gallery(&views).await
    }
}

fn photo_file_name(captured_at_ms: i64, mime_type: &MimeType) -> String {
    let ext = mime_type
        .as_str()
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("bin");
    format!("photo-{}.{}", captured_at_ms, ext)
}
