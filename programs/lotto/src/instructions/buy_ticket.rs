use anchor_lang::prelude::*;
use log::{debug, info};
use rand::seq::index;
use rand::Rng;

use super::parse_number;
use crate::console::{InputSource, OutputSink};
use crate::constants::*;
use crate::error::LottoError;
use crate::state::{LottoDraw, Ticket};

/// Parses the purchase amount line.
///
/// The amount must be positive and a whole number of tickets.
pub fn parse_purchase_amount(raw: &str) -> Result<u64> {
    let amount = i64::from(parse_number(raw)?);
    require!(
        amount > 0 && amount % TICKET_PRICE as i64 == 0,
        LottoError::InvalidPurchaseAmount
    );
    Ok(amount as u64)
}

/// Draws one ticket uniformly at random, without repeated numbers.
pub fn generate_ticket<R: Rng + ?Sized>(rng: &mut R) -> Result<Ticket> {
    let numbers: Vec<i32> = index::sample(rng, MAX_NUMBER as usize, NUMBERS_PER_TICKET)
        .into_iter()
        .map(|i| i as i32 + MIN_NUMBER)
        .collect();
    Ticket::new(&numbers)
}

/// Buys tickets for the amount the player enters.
///
/// Steps performed:
/// 1. Prompt for and validate the purchase amount.
/// 2. Generate one random ticket per `TICKET_PRICE` paid.
/// 3. Print how many tickets were bought, then each ticket in purchase order.
///
/// # Arguments
/// * `input` - Source of the purchase amount line
/// * `output` - Sink for the prompt and the purchased tickets
/// * `rng` - Random source used to generate tickets
pub fn process_buy_ticket<I, O, R>(input: &mut I, output: &mut O, rng: &mut R) -> Result<LottoDraw>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
    R: Rng + ?Sized,
{
    output.write_line(PURCHASE_AMOUNT_PROMPT)?;
    let purchase_amount = parse_purchase_amount(&input.read_line()?)?;

    let mut draw = LottoDraw::new(purchase_amount);
    for _ in 0..draw.ticket_num() {
        let ticket = generate_ticket(rng)?;
        debug!("Generated ticket {}", ticket);
        draw.tickets.push(ticket);
    }
    info!(
        "Bought {} tickets for {} won",
        draw.tickets.len(),
        purchase_amount
    );

    output.write_line(&format!("{}개를 구매했습니다.", draw.tickets.len()))?;
    for ticket in &draw.tickets {
        output.write_line(&ticket.to_string())?;
    }

    Ok(draw)
}
