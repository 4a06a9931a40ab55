use anchor_lang::error::Error;
use anchor_lang::prelude::*;

#[error_code]
pub enum LottoError {
    #[msg("구입 금액은 1,000원 단위로 입력해야 합니다.")]
    InvalidPurchaseAmount,
    #[msg("로또 번호는 6개여야 합니다.")]
    InvalidTicketSize,
    #[msg("로또 번호는 중복될 수 없습니다.")]
    DuplicateNumber,
    #[msg("로또 번호는 1부터 45 사이의 숫자여야 합니다.")]
    NumberOutOfRange,
    #[msg("보너스 번호는 1부터 45 사이의 숫자여야 합니다.")]
    BonusOutOfRange,
    #[msg("숫자만 입력할 수 있습니다.")]
    NotANumber,
    #[msg("당첨 번호가 아직 정해지지 않았습니다.")]
    WinnerNotChosen,
    #[msg("입력을 읽을 수 없습니다.")]
    InputUnavailable,
    #[msg("출력을 쓸 수 없습니다.")]
    OutputUnavailable,
}

/// Returns the plain `#[msg]` text of an error, without anchor's error-code framing.
pub fn error_message(err: &Error) -> String {
    match err {
        Error::AnchorError(anchor_error) => anchor_error.error_msg.clone(),
        other => other.to_string(),
    }
}
