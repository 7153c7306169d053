use courtstats::RosterPlayer;

// ============================================================================
// Roster Creation Utilities
// ============================================================================

pub struct RosterBuilder {
    players: Vec<RosterPlayer>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    /// Starting five with stable ids "p1".."p5"
    pub fn with_starting_five(self) -> Self {
        self.with_players(vec![
            ("p1", "Ada Park", "1", "PG"),
            ("p2", "Bo Lind", "7", "SG"),
            ("p3", "Cy Moreno", "12", "SF"),
            ("p4", "Dee Okafor", "23", "PF"),
            ("p5", "Eli Shaw", "34", "C"),
        ])
    }

    pub fn with_bench_player(mut self, id: &str, name: &str) -> Self {
        self.players
            .push(RosterPlayer::new(name, "99", "G").with_id(id).benched());
        self
    }

    pub fn with_players(mut self, players: Vec<(&str, &str, &str, &str)>) -> Self {
        self.players.extend(
            players
                .into_iter()
                .map(|(id, name, number, position)| {
                    RosterPlayer::new(name, number, position).with_id(id)
                }),
        );
        self
    }

    pub fn build(self) -> Vec<RosterPlayer> {
        self.players
    }
}
