use super::{PlayerStat, ShootingSplit, ShotLine, StatKind, StatsError, TeamTotals};

/// Records `delta` occurrences of `kind` on a player's record.
///
/// Made shots bump the raw counter and `points` together, so the scoring
/// invariant holds for every observer of the record. A delta that would
/// overflow a counter, `points`, or any per-record sum (attempts, misses,
/// rebounds) is rejected with `InvalidDelta` and leaves the record as it
/// was. `points` itself is derived and cannot be recorded directly.
pub fn apply_stat_event(
    record: &mut PlayerStat,
    kind: StatKind,
    delta: i64,
) -> Result<(), StatsError> {
    if kind == StatKind::Points {
        return Err(StatsError::InvalidStatKind(kind.to_string()));
    }
    let overflow = || StatsError::InvalidDelta(delta);
    let amount = validate_delta(delta)?;

    let mut updated = *record;
    let counter = updated.counter_mut(kind);
    *counter = counter.checked_add(amount).ok_or_else(overflow)?;

    if kind.is_made_shot() {
        updated.points = amount
            .checked_mul(kind.point_value())
            .and_then(|gained| updated.points.checked_add(gained))
            .ok_or_else(overflow)?;
    }

    if !updated.derived_sums_fit() {
        return Err(overflow());
    }

    *record = updated;
    Ok(())
}

fn validate_delta(delta: i64) -> Result<u32, StatsError> {
    if delta <= 0 {
        return Err(StatsError::InvalidDelta(delta));
    }
    u32::try_from(delta).map_err(|_| StatsError::InvalidDelta(delta))
}

/// Sums the team-level counters. Empty input yields all zeros; sums that
/// no longer fit a `u32` stick at `u32::MAX`.
pub fn team_totals<'a, I>(stats: I) -> TeamTotals
where
    I: IntoIterator<Item = &'a PlayerStat>,
{
    stats
        .into_iter()
        .fold(TeamTotals::default(), |totals, stat| TeamTotals {
            points: totals.points.saturating_add(stat.points),
            rebounds: totals.rebounds.saturating_add(stat.rebounds()),
            assists: totals.assists.saturating_add(stat.assist),
            steals: totals.steals.saturating_add(stat.steal),
            blocks: totals.blocks.saturating_add(stat.block),
            turnovers: totals.turnovers.saturating_add(stat.turnover),
        })
}

pub fn shooting_split(record: &PlayerStat) -> ShootingSplit {
    ShootingSplit {
        two_point: ShotLine::new(record.two_point_made, record.two_point_miss),
        three_point: ShotLine::new(record.three_point_made, record.three_point_miss),
        free_throw: ShotLine::new(record.free_throw_made, record.free_throw_miss),
    }
}

/// Net contribution: positive actions minus turnovers and every missed shot.
pub fn efficiency_score(record: &PlayerStat) -> i64 {
    let positive = i64::from(record.points)
        + i64::from(record.rebound_offense)
        + i64::from(record.rebound_defense)
        + i64::from(record.assist)
        + i64::from(record.steal)
        + i64::from(record.block);
    positive - i64::from(record.turnover) - i64::from(record.misses())
}

pub fn percentage(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    f64::from(made) / f64::from(attempted) * 100.0
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn record_with(events: &[(StatKind, i64)]) -> PlayerStat {
        let mut record = PlayerStat::new();
        for (kind, delta) in events {
            apply_stat_event(&mut record, *kind, *delta).unwrap();
        }
        record
    }

    #[rstest]
    #[case(StatKind::TwoPointMade, 1, 2)]
    #[case(StatKind::ThreePointMade, 1, 3)]
    #[case(StatKind::FreeThrowMade, 1, 1)]
    #[case(StatKind::TwoPointMade, 4, 8)]
    #[case(StatKind::ThreePointMiss, 2, 0)]
    #[case(StatKind::Assist, 3, 0)]
    fn made_shots_credit_points(
        #[case] kind: StatKind,
        #[case] delta: i64,
        #[case] expected_points: u32,
    ) {
        let record = record_with(&[(kind, delta)]);
        assert_eq!(record.points, expected_points);
        assert_eq!(record.counter(kind), delta as u32);
    }

    #[test]
    fn scoring_invariant_holds_for_every_kind() {
        let mut record = PlayerStat::new();
        for kind in StatKind::iter().filter(|k| *k != StatKind::Points) {
            apply_stat_event(&mut record, kind, 2).unwrap();
            assert_eq!(record.points, record.scored_points(), "after {kind}");
        }
        assert_eq!(record.points, 2 * 2 + 2 * 3 + 2);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(-40)]
    #[case(i64::from(u32::MAX) + 1)]
    fn rejects_invalid_delta(#[case] delta: i64) {
        let mut record = PlayerStat::new();
        let result = apply_stat_event(&mut record, StatKind::Steal, delta);
        assert_eq!(result, Err(StatsError::InvalidDelta(delta)));
        assert_eq!(record, PlayerStat::new());
    }

    #[rstest]
    #[case(&[], StatKind::TwoPointMade, 3_000_000_000)]
    #[case(&[], StatKind::ThreePointMade, 2_000_000_000)]
    #[case(&[(StatKind::FreeThrowMade, 4_000_000_000)], StatKind::TwoPointMade, 200_000_000)]
    #[case(&[(StatKind::Assist, 4_000_000_000)], StatKind::Assist, 300_000_000)]
    #[case(&[(StatKind::TwoPointMiss, 3_000_000_000)], StatKind::ThreePointMiss, 3_000_000_000)]
    #[case(&[(StatKind::TwoPointMiss, 3_000_000_000)], StatKind::TwoPointMade, 1_500_000_000)]
    #[case(&[(StatKind::ReboundOffense, 3_000_000_000)], StatKind::ReboundDefense, 3_000_000_000)]
    fn rejects_deltas_that_would_overflow(
        #[case] history: &[(StatKind, i64)],
        #[case] kind: StatKind,
        #[case] delta: i64,
    ) {
        let mut record = record_with(history);
        let before = record;

        let result = apply_stat_event(&mut record, kind, delta);

        assert_eq!(result, Err(StatsError::InvalidDelta(delta)));
        assert_eq!(record, before);
        assert_eq!(record.points, record.scored_points());
    }

    #[test]
    fn large_delta_that_fits_keeps_points_exact() {
        let record = record_with(&[(StatKind::TwoPointMade, 2_000_000_000)]);
        assert_eq!(record.points, 4_000_000_000);
        assert_eq!(record.points, record.scored_points());
        assert_eq!(shooting_split(&record).field_goals().attempted, 2_000_000_000);
    }

    #[test]
    fn team_totals_saturate_across_players() {
        let a = record_with(&[(StatKind::Assist, 3_000_000_000)]);
        let b = record_with(&[(StatKind::Assist, 3_000_000_000)]);
        let totals = team_totals([&a, &b]);
        assert_eq!(totals.assists, u32::MAX);
        assert_eq!(totals.points, 0);
    }

    #[test]
    fn rejects_recording_points_directly() {
        let mut record = PlayerStat::new();
        let result = apply_stat_event(&mut record, StatKind::Points, 2);
        assert!(matches!(result, Err(StatsError::InvalidStatKind(_))));
        assert_eq!(record.points, 0);
    }

    #[test]
    fn team_totals_of_nothing_is_zero() {
        let nobody: Vec<PlayerStat> = Vec::new();
        assert_eq!(team_totals(&nobody), TeamTotals::default());
    }

    #[test]
    fn team_totals_is_order_independent() {
        let guard = record_with(&[
            (StatKind::ThreePointMade, 2),
            (StatKind::Assist, 7),
            (StatKind::Turnover, 3),
        ]);
        let center = record_with(&[
            (StatKind::TwoPointMade, 5),
            (StatKind::ReboundOffense, 4),
            (StatKind::ReboundDefense, 6),
            (StatKind::Block, 2),
            (StatKind::Steal, 1),
        ]);

        let forward = team_totals([&guard, &center]);
        let backward = team_totals([&center, &guard]);
        assert_eq!(forward, backward);
        assert_eq!(
            forward,
            TeamTotals {
                points: 16,
                rebounds: 10,
                assists: 7,
                steals: 1,
                blocks: 2,
                turnovers: 3,
            }
        );
    }

    #[test]
    fn shooting_split_counts_attempts() {
        let record = record_with(&[
            (StatKind::TwoPointMade, 3),
            (StatKind::TwoPointMiss, 2),
            (StatKind::ThreePointMiss, 4),
        ]);
        let split = shooting_split(&record);

        assert_eq!(split.two_point, ShotLine { made: 3, attempted: 5 });
        assert_eq!(split.three_point, ShotLine { made: 0, attempted: 4 });
        assert_eq!(split.free_throw, ShotLine::default());
        assert_eq!(split.free_throw.percentage(), 0.0);
        assert_eq!(split.field_goals(), ShotLine { made: 3, attempted: 9 });
        assert_eq!(split.two_point.percentage(), 60.0);
    }

    #[test]
    fn efficiency_can_go_negative() {
        let record = record_with(&[
            (StatKind::TwoPointMiss, 3),
            (StatKind::Turnover, 2),
            (StatKind::Assist, 1),
        ]);
        assert_eq!(efficiency_score(&record), -4);
    }

    #[test]
    fn efficiency_of_a_made_three() {
        assert_eq!(efficiency_score(&PlayerStat::new()), 0);
        let record = record_with(&[(StatKind::ThreePointMade, 1)]);
        assert_eq!(efficiency_score(&record), 3);
    }

    #[rstest]
    #[case(1, 6, 16.7)]
    #[case(2, 3, 66.7)]
    #[case(0, 0, 0.0)]
    #[case(7, 20, 35.0)]
    fn rounds_percentages_to_one_decimal(
        #[case] made: u32,
        #[case] attempted: u32,
        #[case] expected: f64,
    ) {
        assert_eq!(round_one_decimal(percentage(made, attempted)), expected);
    }
}
