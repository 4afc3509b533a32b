use common::fixed_point::{self, MathError};

use crate::config::FEE_DENOMINATOR;

/// A claimed amount divided between the participant and the protocol.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub net: i128,
    pub fee: i128,
}

/// Splits `amount` at `fee_bps`. The fee truncates, so any remainder goes to
/// the participant.
pub fn split(amount: i128, fee_bps: u32) -> Result<FeeSplit, MathError> {
    let fee = fixed_point::mul_div(amount, fee_bps as i128, FEE_DENOMINATOR)?;
    let net = fixed_point::checked_sub(amount, fee)?;
    Ok(FeeSplit { net, fee })
}
