use anchor_lang::prelude::*;

use crate::prize::Rank;

/// Price of a single ticket, in won.
#[constant]
pub const TICKET_PRICE: u64 = 1_000;

/// How many numbers make up one ticket.
#[constant]
pub const NUMBERS_PER_TICKET: usize = 6;

/// Smallest number that can appear on a ticket.
#[constant]
pub const MIN_NUMBER: i32 = 1;

/// Largest number that can appear on a ticket.
#[constant]
pub const MAX_NUMBER: i32 = 45;

/// Prefix printed in front of every user-facing error message.
#[constant]
pub const ERROR_PREFIX: &str = "[ERROR]";

pub const PURCHASE_AMOUNT_PROMPT: &str = "구입금액을 입력해 주세요.";
pub const WINNING_NUMBERS_PROMPT: &str = "당첨 번호를 입력해 주세요.";
pub const BONUS_NUMBER_PROMPT: &str = "보너스 번호를 입력해 주세요.";
pub const STATISTICS_HEADER: &str = "당첨 통계";
pub const STATISTICS_SEPARATOR: &str = "---";

/// Payout per rank, in the order the report prints them (highest payout first).
pub const PRIZE_TABLE: [(Rank, u64); 5] = [
    (Rank::First, 2_000_000_000),
    (Rank::Second, 30_000_000),
    (Rank::Third, 1_500_000),
    (Rank::Fourth, 50_000),
    (Rank::Fifth, 5_000),
];
