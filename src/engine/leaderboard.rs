use super::config::PLAYER_NAME;

const RIVALS: &[(&str, u64)] = &[
    ("CortexBot", 500),
    ("SynapseMaster", 450),
    ("BrainwaveAI", 400),
    ("NeuronStar", 350),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub score: u64,
    pub is_player: bool,
}

/// Player plus the fixed rivals, highest score first. Ties keep the player ahead.
pub fn standings(player_score: u64) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&str, u64, bool)> = std::iter::once((PLAYER_NAME, player_score, true))
        .chain(RIVALS.iter().map(|&(name, score)| (name, score, false)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, score, is_player))| LeaderboardEntry {
            rank: i + 1,
            name: name.to_string(),
            score,
            is_player,
        })
        .collect()
}
