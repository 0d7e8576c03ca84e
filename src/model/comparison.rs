use crate::model::{
    aggregation::{descending_order, weight},
    structures::{play::PlayResult, profile::PlayReport}
};

/// Builds one report per play, ordered by local performance (best first).
///
/// Live and local orderings are computed independently over the same plays.
/// `rank_shift` is the live position minus the local position, so a positive
/// value means the play ranks lower locally than live.
pub fn compare_rankings(plays: &[PlayResult]) -> Vec<PlayReport> {
    let live_values = plays.iter().map(|p| p.live_performance).collect::<Vec<_>>();
    let local_values = plays.iter().map(|p| p.local_performance).collect::<Vec<_>>();

    let live_order = descending_order(&live_values);
    let local_order = descending_order(&local_values);

    let mut live_rank = vec![0; plays.len()];
    for (rank, &i) in live_order.iter().enumerate() {
        live_rank[i] = rank;
    }

    local_order
        .into_iter()
        .enumerate()
        .map(|(local_rank, i)| {
            let play = &plays[i];

            PlayReport {
                beatmap_id: play.beatmap_id,
                beatmap_title: play.beatmap_title.clone(),
                mods: play.mods.clone(),
                live_performance: play.live_performance,
                local_performance: play.local_performance,
                performance_delta: play.local_performance - play.live_performance,
                live_rank: live_rank[i],
                local_rank,
                local_weight: weight(local_rank),
                rank_shift: live_rank[i] as i64 - local_rank as i64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::play;
    use std::collections::HashSet;

    #[test]
    fn test_empty_play_set() {
        assert!(compare_rankings(&[]).is_empty());
    }

    #[test]
    fn test_same_order_has_no_shift() {
        let plays = vec![
            play(1, 300.0, 310.0),
            play(2, 200.0, 205.0),
            play(3, 100.0, 99.0)
        ];

        let reports = compare_rankings(&plays);

        assert!(reports.iter().all(|r| r.rank_shift == 0));
        assert_eq!(reports.iter().map(|r| r.beatmap_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reversed_pair() {
        let plays = vec![play(1, 200.0, 90.0), play(2, 100.0, 150.0)];

        let reports = compare_rankings(&plays);

        // Local ordering first: B then A
        assert_eq!(reports[0].beatmap_id, 2);
        assert_eq!(reports[0].rank_shift, 1);
        assert_eq!(reports[1].beatmap_id, 1);
        assert_eq!(reports[1].rank_shift, -1);
        assert_eq!(reports[1].performance_delta, -110.0);
    }

    #[test]
    fn test_ranks_are_permutations() {
        let plays = vec![
            play(1, 50.0, 400.0),
            play(2, 350.0, 20.0),
            play(3, 120.0, 120.0),
            play(4, 120.0, 300.0),
            play(5, 0.0, 0.0)
        ];

        let reports = compare_rankings(&plays);
        let expected = (0..plays.len()).collect::<HashSet<_>>();

        assert_eq!(reports.iter().map(|r| r.live_rank).collect::<HashSet<_>>(), expected);
        assert_eq!(reports.iter().map(|r| r.local_rank).collect::<HashSet<_>>(), expected);
        assert!(reports.windows(2).all(|w| w[0].local_performance >= w[1].local_performance));
    }

    #[test]
    fn test_ties_follow_ingestion_order() {
        let plays = vec![play(1, 100.0, 100.0), play(2, 100.0, 100.0)];

        let reports = compare_rankings(&plays);

        assert_eq!(reports[0].beatmap_id, 1);
        assert_eq!(reports[0].live_rank, 0);
        assert_eq!(reports[1].beatmap_id, 2);
        assert_eq!(reports[1].live_rank, 1);
    }

    #[test]
    fn test_local_weight_matches_rank() {
        let plays = vec![play(1, 10.0, 5.0), play(2, 20.0, 50.0), play(3, 30.0, 25.0)];

        for report in compare_rankings(&plays) {
            assert_eq!(report.local_weight, weight(report.local_rank));
        }
    }
}
