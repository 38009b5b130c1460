//! Scripted headless runs

use meadow_core::entity::input::InputState;
use meadow_core::world::{TickReport, World};
use serde::{Deserialize, Serialize};

/// Direction held for the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Walk {
    #[default]
    None,
    Left,
    Right,
}

/// Input played back tick by tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputScript {
    pub walk: Walk,
    /// Press jump on every Nth tick (0 = never)
    pub jump_every: u64,
}

impl InputScript {
    pub fn input_for(&self, tick: u64) -> InputState {
        InputState {
            left: self.walk == Walk::Left,
            right: self.walk == Walk::Right,
            jump: self.jump_every > 0 && tick % self.jump_every == 0,
        }
    }
}

/// Totals accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub hearts: usize,
    pub fish_removed: usize,
    pub growth_fired: usize,
    pub growth_skipped: usize,
}

impl SessionStats {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.hearts += report.hearts_emitted;
        self.fish_removed += report.fish_removed;
        self.growth_fired += report.growth_fired;
        self.growth_skipped += report.growth_skipped;
    }
}

/// Drives a world with a fixed input script
pub struct Session {
    pub world: World,
    script: InputScript,
    report_every: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new(world: World, script: InputScript, report_every: u64) -> Self {
        Self {
            world,
            script,
            report_every,
            stats: SessionStats::default(),
        }
    }

    /// Simulate `ticks` more ticks
    pub fn run(&mut self, ticks: u64) -> SessionStats {
        for _ in 0..ticks {
            let input = self.script.input_for(self.world.current_tick() + 1);
            let report = self.world.tick(&input);
            self.stats.record(&report);

            if self.report_every > 0 && report.tick % self.report_every == 0 {
                let player = self.world.player.position;
                log::info!(
                    "Tick {}: player ({:.0}, {:.0}), {} creatures, {} hearts, {} saplings pending{}",
                    report.tick,
                    player.x,
                    player.y,
                    self.world.creature_manager.count(),
                    self.world.creature_manager.hearts().len(),
                    self.world.growth().pending(),
                    if self.world.celestial().is_night() {
                        ", night"
                    } else {
                        ""
                    }
                );
            }
        }
        self.stats
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
