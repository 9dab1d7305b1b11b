//! Chromafix Demo — a small scene exercising the colorblind-assistance plugin.

mod config;
mod scene;
mod status;

use bevy::prelude::*;
use chromafix_bevy::{ChromafixPlugin, CvdSystems};

use config::AppConfig;

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("chromafix-demo: {e}; using defaults");
            AppConfig::default()
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ChromafixPlugin {
            config: config.accessibility.clone(),
        })
        .insert_resource(config)
        .add_systems(Startup, scene::setup_scene)
        .add_systems(Update, status::log_status.after(CvdSystems::Commands))
        .run();
}
