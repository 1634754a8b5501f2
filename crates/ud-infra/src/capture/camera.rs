use async_trait::async_trait;
use bytes::Bytes;
use image::{ImageBuffer, Rgba};
use std::io::Cursor;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;
use ud_core::{
    capture::{CaptureError, EncodedFrame},
    ports::{CameraPort, CameraStreamPort},
    MimeType,
};

/// Camera adapter producing synthetic PNG frames.
///
/// 合成相机：没有真实摄像头时生成纯色 PNG 帧。
///
/// Each grabbed frame gets a different fill color so consecutive captures
/// are distinguishable in a gallery.
pub struct SyntheticCamera {
    width: u32,
    height: u32,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Frame size comes from the capture section of the config.
    pub fn from_config(config: &ud_core::config::CaptureConfig) -> Self {
        Self::new(config.frame_width, config.frame_height)
    }
}

#[async_trait]
impl CameraPort for SyntheticCamera {
    async fn open(&self) -> Result<Box<dyn CameraStreamPort>, CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::Device(format!(
                "invalid frame size {}x{}",
                self.width, self.height
            )));
        }
        debug!(width = self.width, height = self.height, "synthetic camera stream opened");
        Ok(Box::new(SyntheticCameraStream {
            width: self.width,
            height: self.height,
            frame_counter: AtomicU32::new(0),
        }))
    }
}

pub struct SyntheticCameraStream {
    width: u32,
    height: u32,
    frame_counter: AtomicU32,
}

impl CameraStreamPort for SyntheticCameraStream {
    fn grab_frame(&self) -> Result<EncodedFrame, CaptureError> {
        let n = self.frame_counter.fetch_add(1, Ordering::Relaxed);

        // 用帧序号推导填充色
        let fill = Rgba([
            (n.wrapping_mul(37) % 256) as u8,
            (n.wrapping_mul(73) % 256) as u8,
            (n.wrapping_mul(151) % 256) as u8,
            255,
        ]);
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(self.width, self.height, fill);

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)
            .map_err(|e| CaptureError::Device(e.to_string()))?;

        Ok(EncodedFrame {
            mime_type: MimeType::image_png(),
            bytes: Bytes::from(buf.into_inner()),
        })
    }
}

/// Camera adapter for hosts without any capture capability.
pub struct UnsupportedCamera;

#[async_trait]
impl CameraPort for UnsupportedCamera {
    async fn open(&self) -> Result<Box<dyn CameraStreamPort>, CaptureError> {
        Err(CaptureError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn synthetic_camera_frames_are_valid_png() {
        let camera = SyntheticCamera::new(8, 8);
        let stream = camera.open().await.unwrap();
        let frame = stream.grab_frame().unwrap();

        assert_eq!(frame.mime_type, MimeType::image_png());
        let decoded = image::load_from_memory(&frame.bytes).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[tokio::test]
    async fn synthetic_camera_consecutive_frames_differ() {
        let camera = SyntheticCamera::new(4, 4);
        let stream = camera.open().await.unwrap();
        let first = stream.grab_frame().unwrap();
        let second = stream.grab_frame().unwrap();
        assert_ne!(first.bytes, second.bytes);
    }

    #[tokio::test]
    async fn synthetic_camera_from_config_uses_the_configured_frame_size() {
        let config = ud_core::config::CaptureConfig {
            frame_width: 16,
            frame_height: 12,
        };
        let camera = SyntheticCamera::from_config(&config);
        let stream = camera.open().await.unwrap();
        let decoded = image::load_from_memory(&stream.grab_frame().unwrap().bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 12));
    }

    #[tokio::test]
    async fn synthetic_camera_rejects_a_zero_sized_frame() {
        let camera = SyntheticCamera::new(0, 480);
        let err = camera.open().await.err().expect("open should fail");
        match err {
            CaptureError::Device(msg) => assert!(msg.contains("invalid frame size")),
            other => panic!("expected device error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unsupported_camera_reports_missing_capability() {
        let camera = UnsupportedCamera;
        assert!(matches!(
            camera.open().await.err(),
            Some(CaptureError::Unsupported)
        ));
    }
}
