use std::collections::BTreeMap;

use crate::constants::PRIZE_TABLE;

/// A prize tier. Declared in payout order, so `Rank::First` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// All six numbers match.
    First,
    /// Five numbers plus the bonus number match.
    Second,
    /// Five numbers match, bonus number does not.
    Third,
    /// Four numbers match.
    Fourth,
    /// Three numbers match.
    Fifth,
}

impl Rank {
    /// Maps a match count and bonus containment to a prize tier.
    /// Fewer than three matches wins nothing.
    pub fn from_matches(match_count: usize, bonus_matched: bool) -> Option<Rank> {
        match match_count {
            6 => Some(Rank::First),
            5 if bonus_matched => Some(Rank::Second),
            5 => Some(Rank::Third),
            4 => Some(Rank::Fourth),
            3 => Some(Rank::Fifth),
            _ => None,
        }
    }

    /// Number of winning numbers a ticket shares for this tier.
    pub fn match_count(self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
        }
    }

    pub fn payout(self) -> u64 {
        PRIZE_TABLE
            .iter()
            .find(|(rank, _)| *rank == self)
            .map(|(_, payout)| *payout)
            .unwrap_or_default()
    }

    /// Label used in the statistics report, e.g. "5개 일치, 보너스 볼 일치".
    pub fn describe(self) -> String {
        match self {
            Rank::Second => format!("{}개 일치, 보너스 볼 일치", self.match_count()),
            _ => format!("{}개 일치", self.match_count()),
        }
    }
}

/// How many purchased tickets landed in each prize tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawResult {
    counts: BTreeMap<Rank, u64>,
}

impl DrawResult {
    pub fn record(&mut self, rank: Rank) {
        *self.counts.entry(rank).or_insert(0) += 1;
    }

    pub fn count(&self, rank: Rank) -> u64 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn total_prize(&self) -> u64 {
        PRIZE_TABLE
            .iter()
            .map(|(rank, payout)| self.count(*rank) * payout)
            .sum()
    }

    /// Return on the purchase in tenths of a percent, rounded half up.
    /// 62.5% is returned as 625.
    pub fn profit_rate_tenths(&self, purchase_amount: u64) -> u64 {
        if purchase_amount == 0 {
            return 0;
        }
        let total = u128::from(self.total_prize());
        let amount = u128::from(purchase_amount);
        ((total * 2_000 + amount) / (amount * 2)) as u64
    }
}
