pub mod buy_ticket;
pub mod choose_winner;
pub mod claim_prize;

pub use buy_ticket::*;
pub use choose_winner::*;
pub use claim_prize::*;

use anchor_lang::prelude::*;

use crate::error::LottoError;

/// Parses one integer token, ignoring surrounding whitespace.
pub(crate) fn parse_number(token: &str) -> Result<i32> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| error!(LottoError::NotANumber))
}
