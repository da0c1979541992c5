//! Scripted demo playback.
//!
//! A cursor walks over the scenario; every step's styling follows from where
//! it sits relative to the cursor.

use serde::Serialize;
use tracing::debug;
use tracing::info;

use super::model::ScenarioStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPhase {
    Completed,
    Active,
    Dimmed,
}

#[derive(Debug, Clone)]
pub struct DemoPlayer {
    steps: &'static [ScenarioStep],
    cursor: usize,
    playing: bool,
}

impl DemoPlayer {
    pub fn new(steps: &'static [ScenarioStep]) -> Self {
        Self {
            steps,
            cursor: 0,
            playing: false,
        }
    }

    /// Rewind to the first step and play. Restarting mid-playback just rewinds.
    pub fn start(&mut self) {
        info!("Demo playback started");
        self.cursor = 0;
        self.playing = self.last_index() > 0;
    }

    /// Move to the next step. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.playing || self.cursor >= self.last_index() {
            self.playing = false;
            return false;
        }

        self.cursor += 1;
        debug!("Demo cursor -> {}", self.cursor);
        if self.cursor == self.last_index() {
            info!("Demo playback finished");
            self.playing = false;
        }
        true
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.last_index()
    }

    pub fn phase(&self, index: usize) -> StepPhase {
        use std::cmp::Ordering;

        match index.cmp(&self.cursor) {
            Ordering::Less => StepPhase::Completed,
            Ordering::Equal => StepPhase::Active,
            Ordering::Greater => StepPhase::Dimmed,
        }
    }

    pub fn snapshot(&self) -> DemoSnapshot {
        DemoSnapshot {
            cursor: self.cursor,
            playing: self.playing,
            finished: self.is_finished(),
            steps: self
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| DemoStep {
                    phase: self.phase(i),
                    step: *step,
                })
                .collect(),
        }
    }

    fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoStep {
    pub phase: StepPhase,
    #[serde(flatten)]
    pub step: ScenarioStep,
}

/// Point-in-time view of the player for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSnapshot {
    pub cursor: usize,
    pub playing: bool,
    pub finished: bool,
    pub steps: Vec<DemoStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::seed::SCENARIO;

    #[test]
    fn test_three_advances_reach_last_step_then_stop() {
        let mut player = DemoPlayer::new(&SCENARIO);
        player.start();
        assert_eq!(player.cursor(), 0);

        for expected in 1..=3 {
            assert!(player.advance());
            assert_eq!(player.cursor(), expected);
        }
        assert!(!player.is_playing());
        assert!(player.is_finished());

        assert!(!player.advance());
        assert_eq!(player.cursor(), 3);
    }

    #[test]
    fn test_idle_player_does_not_advance() {
        let mut player = DemoPlayer::new(&SCENARIO);
        assert!(!player.advance());
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_restart_rewinds() {
        let mut player = DemoPlayer::new(&SCENARIO);
        player.start();
        player.advance();
        player.advance();

        player.start();
        assert_eq!(player.cursor(), 0);
        assert!(player.is_playing());
        assert!(!player.is_finished());
    }

    #[test]
    fn test_phase_relative_to_cursor() {
        let mut player = DemoPlayer::new(&SCENARIO);
        player.start();
        player.advance();

        let phases: Vec<String> = player
            .snapshot()
            .steps
            .iter()
            .map(|s| format!("{:?}", s.phase))
            .collect();
        insta::assert_snapshot!(phases.join(","), @"Completed,Active,Dimmed,Dimmed");
    }
}
