use anchor_lang::prelude::*;
use log::info;

use super::parse_number;
use crate::console::{InputSource, OutputSink};
use crate::constants::*;
use crate::state::{LottoDraw, Ticket, WinningNumbers};

/// Parses a comma separated line of winning numbers into a ticket.
///
/// Trailing empty fields are dropped, so "1,2,3,4,5,6," is accepted.
/// Every other field must be an integer.
pub fn parse_winning_numbers(raw: &str) -> Result<Ticket> {
    let mut fields: Vec<&str> = raw.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    let numbers = fields
        .into_iter()
        .map(parse_number)
        .collect::<Result<Vec<i32>>>()?;
    Ticket::new(&numbers)
}

pub fn parse_bonus_number(raw: &str) -> Result<i32> {
    parse_number(raw)
}

/// Reads the draw result and records it on `draw`.
///
/// Steps performed:
/// 1. Prompt for and parse the six winning numbers.
/// 2. Prompt for and range-check the bonus number.
pub fn process_choose_winner<I, O>(draw: &mut LottoDraw, input: &mut I, output: &mut O) -> Result<()>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    output.write_line(WINNING_NUMBERS_PROMPT)?;
    let ticket = parse_winning_numbers(&input.read_line()?)?;

    output.write_line(BONUS_NUMBER_PROMPT)?;
    let bonus = parse_bonus_number(&input.read_line()?)?;
    let winning = WinningNumbers::new(ticket, bonus)?;

    info!("Winning numbers: {} + bonus {}", winning.ticket, winning.bonus);
    draw.winning = Some(winning);

    Ok(())
}
