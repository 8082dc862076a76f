use std::collections::BTreeMap;

use super::bridge::Bridge;
use super::bridgescorer::BridgeScorer;

/// Bridges of a year grouped by integer score, each group in scan order.
#[derive(Debug, Clone, Default)]
pub struct ScoreBuckets {
    buckets: BTreeMap<i64, Vec<Bridge>>
}

impl ScoreBuckets {
    pub fn new() -> ScoreBuckets {
        ScoreBuckets { buckets: BTreeMap::new() }
    }

    pub fn from_bridges(bridges: Vec<Bridge>, scorer: &dyn BridgeScorer) -> ScoreBuckets {
        let mut score_buckets = ScoreBuckets::new();
        for bridge in bridges {
            score_buckets.insert(scorer.bucket(&bridge), bridge);
        }
        score_buckets
    }

    pub fn insert(&mut self, score: i64, bridge: Bridge) {
        self.buckets.entry(score).or_default().push(bridge);
    }

    pub fn scores(&self) -> Vec<i64> {
        self.buckets.keys().copied().collect()
    }

    pub fn bucket(&self, score: i64) -> &[Bridge] {
        self.buckets.get(&score).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Keeps the two best score tiers of a year.
pub struct BridgeSelector;

impl BridgeSelector {
    /// The highest score present and the next distinct one, if any.
    pub fn top_scores(score_buckets: &ScoreBuckets) -> (Option<i64>, Option<i64>) {
        let mut scores = score_buckets.buckets.keys().rev().copied();
        let top_score = scores.next();
        let second_score = scores.next();
        (top_score, second_score)
    }

    /// Top tier bridges, flagged as top, followed by the second tier.
    pub fn select(score_buckets: ScoreBuckets) -> Vec<Bridge> {
        let (top_score, second_score) = BridgeSelector::top_scores(&score_buckets);
        let mut buckets = score_buckets.buckets;

        let mut selected = top_score
            .and_then(|score| buckets.remove(&score))
            .unwrap_or_default();
        for bridge in selected.iter_mut() {
            bridge.mark_top();
        }
        if let Some(second) = second_score.and_then(|score| buckets.remove(&score)) {
            selected.extend(second);
        }
        selected
    }
}
