use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LottoError;
use crate::prize::Rank;

/// Six distinct numbers in `MIN_NUMBER..=MAX_NUMBER`, kept in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    /// Validates `numbers` and builds a sorted ticket from them.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// count, then duplicates, then range.
    pub fn new(numbers: &[i32]) -> Result<Ticket> {
        require!(
            numbers.len() == NUMBERS_PER_TICKET,
            LottoError::InvalidTicketSize
        );

        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        require!(
            sorted.windows(2).all(|pair| pair[0] != pair[1]),
            LottoError::DuplicateNumber
        );
        require!(
            sorted.iter().all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)),
            LottoError::NumberOutOfRange
        );

        let mut ticket = [0u8; NUMBERS_PER_TICKET];
        for (slot, number) in ticket.iter_mut().zip(&sorted) {
            *slot = *number as u8;
        }
        Ok(Ticket { numbers: ticket })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Count of numbers present on both tickets.
    pub fn count_matches(&self, other: &Ticket) -> usize {
        self.numbers
            .iter()
            .filter(|number| other.has_number(**number))
            .count()
    }

    pub fn has_number(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Prize tier this ticket earns against the drawn numbers, if any.
    pub fn rank_against(&self, winning: &WinningNumbers) -> Option<Rank> {
        let match_count = self.count_matches(&winning.ticket);
        Rank::from_matches(match_count, self.has_number(winning.bonus))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{number}")?;
        }
        write!(f, "]")
    }
}

/// The draw result: six winning numbers plus the bonus number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningNumbers {
    pub ticket: Ticket,
    /// May coincide with one of the six winning numbers; nothing forbids it.
    pub bonus: u8,
}

impl WinningNumbers {
    pub fn new(ticket: Ticket, bonus: i32) -> Result<WinningNumbers> {
        require!(
            (MIN_NUMBER..=MAX_NUMBER).contains(&bonus),
            LottoError::BonusOutOfRange
        );
        Ok(WinningNumbers {
            ticket,
            bonus: bonus as u8,
        })
    }
}

/// State of a single simulator run.
#[derive(Debug, Clone, Default)]
pub struct LottoDraw {
    /// Amount paid, in won. Always a positive multiple of `TICKET_PRICE`.
    pub purchase_amount: u64,

    /// Tickets in purchase order.
    pub tickets: Vec<Ticket>,

    /// Set once the winning numbers and bonus number have been read.
    pub winning: Option<WinningNumbers>,
}

impl LottoDraw {
    pub fn new(purchase_amount: u64) -> LottoDraw {
        LottoDraw {
            purchase_amount,
            ..LottoDraw::default()
        }
    }

    pub fn ticket_num(&self) -> u64 {
        self.purchase_amount / TICKET_PRICE
    }
}
