//! Demo scene: a row of posters with per-mode materials.

use bevy::prelude::*;
use chromafix_bevy::{ColorAdjustmentVolume, CvdMaterialVariants, CvdMode};

/// Poster colors: normal, then the protan/deutan/tritan fixes (if any).
const POSTERS: [(&str, [f32; 3], Option<[[f32; 3]; 3]>); 3] = [
    (
        "red-green sign",
        [0.80, 0.15, 0.15],
        Some([[0.95, 0.55, 0.10], [0.90, 0.60, 0.10], [0.80, 0.15, 0.45]]),
    ),
    (
        "blue-yellow sign",
        [0.20, 0.40, 0.90],
        Some([[0.15, 0.40, 0.85], [0.15, 0.45, 0.85], [0.10, 0.55, 0.50]]),
    ),
    ("plain wall", [0.60, 0.58, 0.52], None),
];

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("camera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.5, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        ColorAdjustmentVolume::default(),
    ));
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 4.0),
    ));

    let panel = meshes.add(Cuboid::new(1.5, 2.0, 0.1));
    for (i, (name, normal, fixes)) in POSTERS.into_iter().enumerate() {
        let normal = materials.add(srgb(normal));
        let mut variants = CvdMaterialVariants::new(normal.clone());
        if let Some([protan, deutan, tritan]) = fixes {
            variants = variants
                .with_variant(CvdMode::Protanopia, materials.add(srgb(protan)))
                .with_variant(CvdMode::Deuteranopia, materials.add(srgb(deutan)))
                .with_variant(CvdMode::Tritanopia, materials.add(srgb(tritan)));
        }

        commands.spawn((
            Name::new(name),
            Mesh3d(panel.clone()),
            MeshMaterial3d(normal),
            Transform::from_xyz((i as f32 - 1.0) * 2.0, 0.0, 0.0),
            variants,
        ));
    }

    tracing::info!("Keys: 1-4 select Normal/Protanopia/Deuteranopia/Tritanopia, F toggles the fix");
}

fn srgb([r, g, b]: [f32; 3]) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        ..default()
    }
}
