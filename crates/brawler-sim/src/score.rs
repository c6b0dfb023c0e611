//! Running tallies kept by the director, NOT stored as ECS components.

/// Running score state tracked by the director.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub enemies_spawned: u32,
    pub enemies_defeated: u32,
    pub hits_taken: u32,
    pub attacks_whiffed: u32,
}
