//! Camera session state machine.
//!
//! Defines a pure state transition function for the camera capture flow.
//! There is no explicit stop: `Streaming` is only left by ending the session
//! owner itself.

use super::CaptureError;

/// Camera session state.
///
/// 相机会话状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CameraSessionState {
    /// No stream requested yet.
    ///
    /// 尚未请求视频流。
    Idle,
    /// Stream acquisition in flight.
    ///
    /// 正在请求视频流。
    Requesting,
    /// Live stream available; capture is legal.
    ///
    /// 视频流就绪，可以拍照。
    Streaming,
    /// Acquisition failed.
    ///
    /// 请求失败。
    Failed { error: CaptureError },
}

impl CameraSessionState {
    pub fn can_capture(&self) -> bool {
        matches!(self, CameraSessionState::Streaming)
    }
}

/// Events that drive the camera session.
///
/// 驱动相机会话的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CameraSessionEvent {
    /// User pressed the camera-start trigger.
    ///
    /// 用户点击启动相机。
    StartRequested,
    /// The provider delivered a live stream.
    ///
    /// 设备回调：视频流已就绪。
    StreamOpened,
    /// The provider failed to deliver a stream.
    ///
    /// 设备回调：视频流获取失败。
    StreamFailed { error: CaptureError },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CameraSessionAction {
    /// Ask the camera port for a live stream.
    ///
    /// 向相机端口请求视频流。
    OpenStream,
}

/// Pure camera session state machine.
///
/// 纯状态机：不包含副作用。
pub struct CameraSessionMachine;

impl CameraSessionMachine {
    pub fn transition(
        state: CameraSessionState,
        event: CameraSessionEvent,
    ) -> (CameraSessionState, Vec<CameraSessionAction>) {
        match (state, event) {
            (CameraSessionState::Idle, CameraSessionEvent::StartRequested) => (
                CameraSessionState::Requesting,
                vec![CameraSessionAction::OpenStream],
            ),
            // Restarting after a failure is a fresh request.
            (CameraSessionState::Failed { .. }, CameraSessionEvent::StartRequested) => (
                CameraSessionState::Requesting,
                vec![CameraSessionAction::OpenStream],
            ),
            (CameraSessionState::Requesting, CameraSessionEvent::StreamOpened) => {
                (CameraSessionState::Streaming, Vec::new())
            }
            (CameraSessionState::Requesting, CameraSessionEvent::StreamFailed { error }) => {
                (CameraSessionState::Failed { error }, Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CameraSessionAction, CameraSessionEvent, CameraSessionMachine, CameraSessionState,
    };
    use crate::capture::CaptureError;

    #[test]
    fn camera_machine_idle_start_transitions_to_requesting_with_open_action() {
        let (next, actions) = CameraSessionMachine::transition(
            CameraSessionState::Idle,
            CameraSessionEvent::StartRequested,
        );
        assert_eq!(next, CameraSessionState::Requesting);
        assert_eq!(actions, vec![CameraSessionAction::OpenStream]);
    }

    #[test]
    fn camera_machine_requesting_stream_opened_transitions_to_streaming() {
        let (next, actions) = CameraSessionMachine::transition(
            CameraSessionState::Requesting,
            CameraSessionEvent::StreamOpened,
        );
        assert_eq!(next, CameraSessionState::Streaming);
        assert!(actions.is_empty());
        assert!(next.can_capture());
    }

    #[test]
    fn camera_machine_requesting_stream_failed_carries_the_error() {
        let (next, _) = CameraSessionMachine::transition(
            CameraSessionState::Requesting,
            CameraSessionEvent::StreamFailed {
                error: CaptureError::Unsupported,
            },
        );
        assert_eq!(
            next,
            CameraSessionState::Failed {
                error: CaptureError::Unsupported
            }
        );
        assert!(!next.can_capture());
    }

    #[test]
    fn camera_machine_failed_start_requests_a_fresh_stream() {
        let failed = CameraSessionState::Failed {
            error: CaptureError::Device("no camera".into()),
        };
        let (next, actions) =
            CameraSessionMachine::transition(failed, CameraSessionEvent::StartRequested);
        assert_eq!(next, CameraSessionState::Requesting);
        assert_eq!(actions, vec![CameraSessionAction::OpenStream]);
    }

    #[test]
    fn camera_machine_ignores_events_that_do_not_apply() {
        let (next, actions) = CameraSessionMachine::transition(
            CameraSessionState::Streaming,
            CameraSessionEvent::StreamOpened,
        );
        assert_eq!(next, CameraSessionState::Streaming);
        assert!(actions.is_empty());
    }
}
