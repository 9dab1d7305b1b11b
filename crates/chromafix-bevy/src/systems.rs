//! Bevy systems for the colorblind-assistance pipeline.
//!
//! These systems are the only place accessibility state changes. Input
//! and UI send `CvdCommand`s; the results go back out as `CvdModeChanged`
//! and `FixToggled` messages.

use bevy::prelude::*;
use bevy::render::view::ColorGrading;
use chromafix_core::{MaterialSelector, ModeContext, ModeController, VariantConfig};

use crate::components::{ColorAdjustmentVolume, CvdMaterialVariants, MaterialTarget};
use crate::events::{CvdCommand, CvdModeChanged, FixToggled};
use crate::resources::{CvdKeyBindings, CvdSettings, CvdState};

/// Startup: create the scene's mode state and validate the volume once.
pub fn init_controller(
    mut commands: Commands,
    settings: Res<CvdSettings>,
    mut volumes: Query<&mut ColorAdjustmentVolume>,
) {
    let config = &settings.config;
    let (modes, fix, reader) = ModeContext::new(config.default_mode, config.fix_enabled).split();

    let controller = {
        let mut volume = volumes.iter_mut().next();
        ModeController::initialize(modes, volume.as_deref_mut())
    };
    if volumes.iter().count() > 1 {
        tracing::warn!("Multiple ColorAdjustmentVolumes found; only the first is graded");
    }

    commands.insert_resource(CvdState {
        controller,
        fix,
        reader,
    });
}

/// Translate bound key presses into commands.
pub fn read_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<CvdKeyBindings>,
    mut commands: MessageWriter<CvdCommand>,
) {
    if keys.just_pressed(bindings.toggle_fix) {
        commands.write(CvdCommand::ToggleFix);
    }

    if let Some((_, mode)) = bindings
        .select_mode
        .iter()
        .find(|(key, _)| keys.just_pressed(*key))
    {
        commands.write(CvdCommand::SetMode(*mode));
    }
}

/// Apply inbound commands to the controller and the fix flag.
pub fn handle_cvd_commands(
    mut commands: MessageReader<CvdCommand>,
    state: Option<ResMut<CvdState>>,
    mut volumes: Query<&mut ColorAdjustmentVolume>,
    mut mode_changed: MessageWriter<CvdModeChanged>,
    mut fix_toggled: MessageWriter<FixToggled>,
) {
    let Some(mut state) = state else {
        commands.read().for_each(drop);
        return;
    };

    for cmd in commands.read() {
        match *cmd {
            CvdCommand::SetMode(mode) => {
                let mut volume = volumes.iter_mut().next();
                let params = state.controller.set_mode(mode, volume.as_deref_mut());
                mode_changed.write(CvdModeChanged { mode, params });
            }
            CvdCommand::ToggleFix => {
                let enabled = state.fix.toggle();
                fix_toggled.write(FixToggled { enabled });
            }
            CvdCommand::SetFix(enabled) => {
                if state.fix.set(enabled) {
                    fix_toggled.write(FixToggled { enabled });
                }
            }
        }
    }
}

/// Push changed volumes into the camera's `ColorGrading` so the grade
/// shows up in the rendered frame.
pub fn sync_volume_to_camera(
    mut volumes: Query<(&ColorAdjustmentVolume, &mut ColorGrading), Changed<ColorAdjustmentVolume>>,
) {
    for (volume, mut grading) in &mut volumes {
        volume.write_grading(&mut grading);
    }
}

/// Bind variant components added since the last run.
///
/// New entities register themselves this way, so objects spawned after
/// startup take part too.
pub fn bind_material_variants<M: Material>(
    state: Option<Res<CvdState>>,
    mut objects: Query<
        (
            Entity,
            Option<&Name>,
            &mut CvdMaterialVariants<M>,
            Option<&mut MeshMaterial3d<M>>,
        ),
        Added<CvdMaterialVariants<M>>,
    >,
) {
    let Some(state) = state else { return };
    let enabled = state.fix_enabled();

    for (entity, name, mut variants, material) in &mut objects {

        let label = name.map_or_else(|| format!("{entity:?}"), |name| name.to_string());
        let config = std::mem::replace(&mut variants.config, VariantConfig::default());
        let mut target = material.map(MaterialTarget);
        let selector = MaterialSelector::bind(label, config, target.as_mut(), state.reader());
        if let Some(target) = target.as_mut() {
            selector.apply_fix(enabled, target);
        }
        variants.selector = Some(selector);
    }
}

/// Re-select every object's material when the fix flag changes, and on
/// mode changes when `reapply_on_mode_change` is set.
pub fn apply_fix_to_materials<M: Material>(
    state: Option<Res<CvdState>>,
    settings: Res<CvdSettings>,
    mut fix_toggled: MessageReader<FixToggled>,
    mut mode_changed: MessageReader<CvdModeChanged>,
    mut objects: Query<(&CvdMaterialVariants<M>, Option<&mut MeshMaterial3d<M>>)>,
) {
    let toggled = fix_toggled.read().count() > 0;
    let mode_moved = mode_changed.read().count() > 0;

    let Some(state) = state else { return };
    let enabled = state.fix_enabled();
    let refresh = toggled || (mode_moved && enabled && settings.config.reapply_on_mode_change);
    if !refresh {
        return;
    }

    let mut changed = 0usize;
    for (variants, material) in &mut objects {
        let (Some(selector), Some(material)) = (variants.selector.as_ref(), material) else {
            continue;
        };
        if selector.apply_fix(enabled, &mut MaterialTarget(material)) {
            changed += 1;
        }
    }
    tracing::debug!("Material fix {enabled}: {changed} objects updated");
}
