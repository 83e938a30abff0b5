//! Angry Cubes entry point
//!
//! Headless demo driver: lists the maps on disk, prompts for one by name,
//! fires a scripted shot and reports what it knocked down. A real front
//! end drives the same `sim` entry points with pointer input instead of
//! the scripted gesture.

use std::io::{self, Write};

use anyhow::{Context, Result};
use glam::Vec2;

use angry_cubes::maps::MapStore;
use angry_cubes::sim::{GameEvent, GameState, TickInput, tick};

/// Ten seconds of flight at the nominal step
const DEMO_TICKS: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let store = MapStore::new("maps");
    let names = store.list().context("listing maps")?;
    if names.is_empty() {
        println!("No maps found under ./maps - save one with the editor first.");
        return Ok(());
    }
    println!("Available maps: {}", names.join(", "));

    print!("Enter map name to load: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();

    let grid = store
        .load(name)
        .with_context(|| format!("loading map {name:?}"))?;
    let mut state = GameState::from_grid(grid).context("building level")?;
    println!(
        "Loaded {}x{} level, {} breakable block(s), anchor at ({}, {})",
        state.grid.rows(),
        state.grid.cols(),
        state.breakables_left(),
        state.anchor.x,
        state.anchor.y,
    );

    // Scripted gesture: pull down-left of the anchor so the shot arcs
    // up-right into the level.
    let anchor = state.anchor;
    let pull = anchor + Vec2::new(-180.0, 90.0);
    tick(
        &mut state,
        &TickInput {
            drag_start: Some(anchor),
            ..TickInput::default()
        },
        1.0,
    );
    tick(
        &mut state,
        &TickInput {
            drag_move: Some(pull),
            ..TickInput::default()
        },
        1.0,
    );
    tick(
        &mut state,
        &TickInput {
            drag_release: Some(pull),
            ..TickInput::default()
        },
        1.0,
    );

    let mut bounces = 0u32;
    for _ in 0..DEMO_TICKS {
        tick(&mut state, &TickInput::default(), 1.0);
        for event in &state.events {
            match event {
                GameEvent::BlockBroken { row, col } => {
                    println!("  broke block at ({row}, {col})");
                }
                GameEvent::SolidBounce { .. } => bounces += 1,
                GameEvent::Launched => {}
            }
        }
    }

    if let Some(projectile) = state.projectiles.last() {
        println!(
            "After {DEMO_TICKS} ticks: projectile at ({:.1}, {:.1}), {} solid bounce(s), {} breakable block(s) left",
            projectile.pos.x,
            projectile.pos.y,
            bounces,
            state.breakables_left(),
        );
    }

    Ok(())
}
