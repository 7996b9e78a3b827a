//! Session, enrollment and authentication flows for the air-signature demo.
//!
//! [`AppContext`] ties the pieces together. The pieces are usable on their
//! own: [`UserDirectory`] for accounts, [`EnrollmentTracker`] for the
//! capture state machine, [`AuthSimulator`] for gesture attempts and
//! [`navigation::resolve`] for page guards.

mod auth_simulator;
mod camera;
mod capabilities;
mod context;
mod dashboard;
mod directory;
mod enrollment;
pub mod navigation;
mod session_manager;
mod settings;
mod simulated_camera;

pub use auth_simulator::{
    AuthResult, AuthSimulator, FAILURE_CONFIDENCE, SUCCESS_CONFIDENCE, SUCCESS_THRESHOLD,
};
pub use camera::{CameraLease, CaptureDevice, CapturePayload, StreamHandle};
pub use capabilities::Capabilities;
pub use context::AppContext;
pub use dashboard::{DashboardSnapshot, RECENT_ACTIVITY_LIMIT};
pub use directory::UserDirectory;
pub use enrollment::{EnrollmentStage, EnrollmentTracker, SaveOutcome};
pub use navigation::{Navigation, NavigationContext, PageEffect};
pub use session_manager::SessionManager;
pub use settings::ContextSettings;
pub use simulated_camera::SimulatedCamera;

#[cfg(test)]
mod tests;
