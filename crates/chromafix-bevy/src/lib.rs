//! Chromafix Bevy Plugin — colorblind-assistance modes for Bevy scenes.
//!
//! Provides `ChromafixPlugin`, which registers the resources, messages and
//! systems that grade the scene through a `ColorAdjustmentVolume` and swap
//! per-entity materials through `CvdMaterialVariants`.

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
use chromafix_core::AccessibilityConfig;
use std::marker::PhantomData;

// Re-export for downstream crates.
pub use chromafix_core::{ColorGradeParams, ControllerState, CvdMode};

pub use components::{ColorAdjustmentVolume, CvdMaterialVariants};
pub use events::{CvdCommand, CvdModeChanged, FixToggled};
pub use resources::{CvdKeyBindings, CvdSettings, CvdState};

use systems::{
    apply_fix_to_materials, bind_material_variants, handle_cvd_commands, init_controller,
    read_hotkeys, sync_volume_to_camera,
};

/// Ordering of the accessibility systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CvdSystems {
    /// Key presses become `CvdCommand`s.
    Input,
    /// Commands update the mode, the volume and the fix flag; the volume
    /// is then copied into the camera's `ColorGrading`.
    Commands,
    /// Material variants are bound and re-selected.
    Materials,
}

/// Main plugin.
///
/// Registers:
/// - `CvdSettings`, `CvdKeyBindings` and (at `PostStartup`) `CvdState`
/// - `CvdCommand`, `CvdModeChanged` and `FixToggled` messages
/// - material handling for `StandardMaterial`; add [`CvdMaterialPlugin`]
///   for other material types
#[derive(Default)]
pub struct ChromafixPlugin {
    pub config: AccessibilityConfig,
}

impl Plugin for ChromafixPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CvdCommand>()
            .add_message::<CvdModeChanged>()
            .add_message::<FixToggled>()
            .insert_resource(CvdSettings {
                config: self.config.clone(),
            })
            .init_resource::<CvdKeyBindings>()
            .configure_sets(
                Update,
                (CvdSystems::Input, CvdSystems::Commands, CvdSystems::Materials).chain(),
            )
            .add_systems(PostStartup, init_controller)
            .add_systems(
                Update,
                (
                    read_hotkeys
                        .in_set(CvdSystems::Input)
                        .run_if(resource_exists::<ButtonInput<KeyCode>>),
                    (handle_cvd_commands, sync_volume_to_camera)
                        .chain()
                        .in_set(CvdSystems::Commands),
                ),
            );

        if !app.is_plugin_added::<CvdMaterialPlugin<StandardMaterial>>() {
            app.add_plugins(CvdMaterialPlugin::<StandardMaterial>::default());
        }
    }
}

/// Material-variant handling for one material type.
pub struct CvdMaterialPlugin<M: Material>(PhantomData<fn() -> M>);

impl<M: Material> Default for CvdMaterialPlugin<M> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<M: Material> Plugin for CvdMaterialPlugin<M> {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (bind_material_variants::<M>, apply_fix_to_materials::<M>)
                .chain()
                .in_set(CvdSystems::Materials),
        );
    }
}
