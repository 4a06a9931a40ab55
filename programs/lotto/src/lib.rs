use anchor_lang::prelude::*;
use log::warn;
use rand::Rng;

/// Line-oriented input source and output sink the simulator talks through.
pub mod console;

/// Ticket price, number range, prize table and the fixed message set.
pub mod constants;

/// Error codes raised when input is rejected.
/// The first error aborts the run and its message is printed.
pub mod error;

/// The three steps of a run: buying tickets, choosing the winning numbers,
/// and settling prizes.
pub mod instructions;

/// Prize tiers and the per-tier tally of a draw.
pub mod prize;

/// Tickets, winning numbers and the state of a single run.
pub mod state;

pub use instructions::*;

use console::{InputSource, OutputSink};
use constants::ERROR_PREFIX;
use error::error_message;
use prize::DrawResult;

/// Runs one draw from purchase to report, strictly in order.
pub struct DrawController<I, O, R> {
    input: I,
    output: O,
    rng: R,
}

impl<I, O, R> DrawController<I, O, R>
where
    I: InputSource,
    O: OutputSink,
    R: Rng,
{
    pub fn new(input: I, output: O, rng: R) -> Self {
        Self { input, output, rng }
    }

    /// Runs the draw. On the first error, prints `[ERROR] <message>` as the
    /// only line for that failure and returns the error without a report.
    pub fn run(&mut self) -> Result<DrawResult> {
        match self.execute() {
            Ok(result) => Ok(result),
            Err(err) => {
                let message = error_message(&err);
                warn!("Draw aborted: {}", message);
                self.output
                    .write_line(&format!("{} {}", ERROR_PREFIX, message))?;
                Err(err)
            }
        }
    }

    fn execute(&mut self) -> Result<DrawResult> {
        let mut draw = process_buy_ticket(&mut self.input, &mut self.output, &mut self.rng)?;
        process_choose_winner(&mut draw, &mut self.input, &mut self.output)?;
        process_claim_prize(&draw, &mut self.output)
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
