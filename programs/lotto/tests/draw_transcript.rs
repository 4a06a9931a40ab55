use std::collections::VecDeque;

use lotto::constants::*;
use lotto::error::LottoError;
use lotto::prize::Rank;
use lotto::state::{Ticket, WinningNumbers};
use lotto::{format_profit_rate, format_rank_line, parse_winning_numbers, DrawController};
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestController = DrawController<VecDeque<String>, Vec<String>, StdRng>;

// Helper: controller fed with the given input lines
fn controller(lines: &[&str], seed: u64) -> TestController {
    let input: VecDeque<String> = lines.iter().map(|line| line.to_string()).collect();
    DrawController::new(input, Vec::new(), StdRng::seed_from_u64(seed))
}

// Helper: turn a rendered ticket line back into a ticket
fn parse_rendered(line: &str) -> Ticket {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .expect("ticket line is bracketed");
    parse_winning_numbers(inner).expect("ticket line holds a valid ticket")
}

#[test]
fn test_full_draw_transcript() {
    let mut controller = controller(&["14000", "1,2,3,4,5,6", "7"], 2024);
    let result = controller.run().unwrap();
    let output = controller.output();

    // prompt, count, 14 tickets, 2 prompts, header, separator, 5 ranks, rate
    assert_eq!(output.len(), 2 + 14 + 2 + 2 + 5 + 1);
    assert_eq!(output[0], PURCHASE_AMOUNT_PROMPT);
    assert_eq!(output[1], "14개를 구매했습니다.");

    let tickets: Vec<Ticket> = output[2..16].iter().map(|line| parse_rendered(line)).collect();
    for (line, ticket) in output[2..16].iter().zip(&tickets) {
        assert_eq!(*line, ticket.to_string());
    }

    assert_eq!(output[16], WINNING_NUMBERS_PROMPT);
    assert_eq!(output[17], BONUS_NUMBER_PROMPT);
    assert_eq!(output[18], STATISTICS_HEADER);
    assert_eq!(output[19], STATISTICS_SEPARATOR);

    // Recompute the statistics from the printed tickets.
    let winning = WinningNumbers::new(Ticket::new(&[1, 2, 3, 4, 5, 6]).unwrap(), 7).unwrap();
    let mut total = 0u64;
    for (i, (rank, payout)) in PRIZE_TABLE.iter().enumerate() {
        let count = tickets
            .iter()
            .filter(|ticket| ticket.rank_against(&winning) == Some(*rank))
            .count() as u64;
        assert_eq!(result.count(*rank), count);
        assert_eq!(output[20 + i], format_rank_line(*rank, count));
        total += count * payout;
    }
    assert_eq!(result.total_prize(), total);

    let tenths = (u128::from(total) * 2_000 + 14_000) / 28_000;
    assert_eq!(
        output[25],
        format!("총 수익률은 {}%입니다.", format_profit_rate(tenths as u64))
    );
}

#[test]
fn test_report_order_is_by_payout() {
    let mut controller = controller(&["3000", "1,2,3,4,5,6", "7"], 11);
    controller.run().unwrap();
    let output = controller.output();

    let rank_lines = &output[output.len() - 6..output.len() - 1];
    assert!(rank_lines[0].starts_with("6개 일치 (2,000,000,000원)"));
    assert!(rank_lines[1].starts_with("5개 일치, 보너스 볼 일치 (30,000,000원)"));
    assert!(rank_lines[2].starts_with("5개 일치 (1,500,000원)"));
    assert!(rank_lines[3].starts_with("4개 일치 (50,000원)"));
    assert!(rank_lines[4].starts_with("3개 일치 (5,000원)"));
}

#[test]
fn test_same_seed_same_tickets() {
    let mut first = controller(&["5000", "1,2,3,4,5,6", "7"], 99);
    let mut second = controller(&["5000", "1,2,3,4,5,6", "7"], 99);
    first.run().unwrap();
    second.run().unwrap();
    assert_eq!(first.output(), second.output());
}

#[test]
fn test_invalid_purchase_amount_aborts() {
    for amount in ["0", "999", "-1000", "1234"] {
        let mut controller = controller(&[amount, "1,2,3,4,5,6", "7"], 1);
        assert!(controller.run().is_err());

        let expected = format!("{} {}", ERROR_PREFIX, LottoError::InvalidPurchaseAmount);
        assert_eq!(
            controller.output(),
            &vec![PURCHASE_AMOUNT_PROMPT.to_string(), expected]
        );
    }
}

#[test]
fn test_invalid_winning_numbers_abort_without_report() {
    let cases = [
        ("1,2,3,4,5", LottoError::InvalidTicketSize),
        ("1,2,3,4,5,6,7", LottoError::InvalidTicketSize),
        ("1,2,3,4,5,5", LottoError::DuplicateNumber),
        ("0,2,3,4,5,6", LottoError::NumberOutOfRange),
        ("1,2,3,4,5,46", LottoError::NumberOutOfRange),
        ("1,2,three,4,5,6", LottoError::NotANumber),
    ];

    for (line, error) in cases {
        let mut controller = controller(&["2000", line, "7"], 5);
        assert!(controller.run().is_err());

        let output = controller.output();
        assert_eq!(output.last().unwrap(), &format!("{} {}", ERROR_PREFIX, error));
        assert_eq!(output[output.len() - 2], WINNING_NUMBERS_PROMPT);
        assert!(!output.iter().any(|line| line == STATISTICS_HEADER));
    }
}

#[test]
fn test_invalid_bonus_number_aborts() {
    for bonus in ["0", "46"] {
        let mut controller = controller(&["1000", "1,2,3,4,5,6", bonus], 3);
        assert!(controller.run().is_err());

        let output = controller.output();
        assert_eq!(
            output.last().unwrap(),
            &format!("{} {}", ERROR_PREFIX, LottoError::BonusOutOfRange)
        );
        assert!(!output.iter().any(|line| line == STATISTICS_HEADER));
    }
}

#[test]
fn test_bonus_may_repeat_a_winning_number() {
    let mut controller = controller(&["1000", "1,2,3,4,5,6", "6"], 3);
    assert!(controller.run().is_ok());

    // A five-number match that includes the shared number also holds the bonus.
    let winning = WinningNumbers::new(Ticket::new(&[1, 2, 3, 4, 5, 6]).unwrap(), 6).unwrap();
    let ticket = Ticket::new(&[1, 2, 3, 4, 6, 45]).unwrap();
    assert_eq!(ticket.rank_against(&winning), Some(Rank::Second));
}

#[test]
fn test_missing_input_aborts() {
    let mut controller = controller(&["1000"], 3);
    assert!(controller.run().is_err());
    assert_eq!(
        controller.output().last().unwrap(),
        &format!("{} {}", ERROR_PREFIX, LottoError::InputUnavailable)
    );
}
