//! Chromafix Core — colorblind-assistance policy and mode propagation.
//!
//! Maps a color-vision-deficiency mode to scene-wide grading parameters and
//! propagates the selected mode to per-object material variants. Engine
//! facilities (post-processing, materials, input) are reached only through
//! the traits in [`sink`]. No GPU or framework dependencies.

pub mod broadcaster;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod input;
pub mod mode;
pub mod params;
pub mod policy;
pub mod selector;
pub mod session;
pub mod sink;

// Re-exports for convenience.
pub use broadcaster::{Broadcaster, SelectorId};
pub use config::AccessibilityConfig;
pub use context::{FixWriter, ModeContext, ModeReader, ModeSnapshot, ModeWriter};
pub use controller::{ControllerState, ModeController};
pub use error::{ConfigError, SetupError};
pub use input::InputAction;
pub use mode::CvdMode;
pub use params::ColorGradeParams;
pub use policy::compute_params;
pub use selector::{MaterialSelector, MaterialVariantSet, VariantConfig};
pub use session::AccessibilitySession;
pub use sink::{ColorAdjustmentSink, ColorAdjustments, MaterialSlot, RenderTarget};
