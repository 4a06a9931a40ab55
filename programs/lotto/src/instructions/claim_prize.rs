use anchor_lang::prelude::*;
use log::{debug, info};

use crate::console::OutputSink;
use crate::constants::*;
use crate::error::LottoError;
use crate::prize::{DrawResult, Rank};
use crate::state::LottoDraw;

/// Groups the digits of `amount` in threes, e.g. 30000000 -> "30,000,000".
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Renders a rate given in tenths of a percent with exactly one decimal digit.
pub fn format_profit_rate(tenths: u64) -> String {
    format!("{}.{}", format_won(tenths / 10), tenths % 10)
}

pub fn format_rank_line(rank: Rank, count: u64) -> String {
    format!(
        "{} ({}원) - {}개",
        rank.describe(),
        format_won(rank.payout()),
        count
    )
}

/// Scores every purchased ticket against the winning numbers.
/// Tickets with fewer than three matches are not recorded.
pub fn tally(draw: &LottoDraw) -> Result<DrawResult> {
    let winning = draw
        .winning
        .as_ref()
        .ok_or_else(|| error!(LottoError::WinnerNotChosen))?;

    let mut result = DrawResult::default();
    for ticket in &draw.tickets {
        if let Some(rank) = ticket.rank_against(winning) {
            debug!("Ticket {} won {:?}", ticket, rank);
            result.record(rank);
        }
    }
    Ok(result)
}

/// Settles the draw and prints the winning statistics.
///
/// Steps performed:
/// 1. Verify that the winning numbers have been chosen.
/// 2. Classify each purchased ticket and count tickets per prize tier.
/// 3. Print one line per tier, highest payout first, then the profit rate.
pub fn process_claim_prize<O>(draw: &LottoDraw, output: &mut O) -> Result<DrawResult>
where
    O: OutputSink + ?Sized,
{
    let result = tally(draw)?;
    let rate = result.profit_rate_tenths(draw.purchase_amount);
    info!(
        "Total prize {} won on {} won spent",
        result.total_prize(),
        draw.purchase_amount
    );

    output.write_line(STATISTICS_HEADER)?;
    output.write_line(STATISTICS_SEPARATOR)?;
    for (rank, _) in PRIZE_TABLE.iter() {
        output.write_line(&format_rank_line(*rank, result.count(*rank)))?;
    }
    output.write_line(&format!("총 수익률은 {}%입니다.", format_profit_rate(rate)))?;

    Ok(result)
}
