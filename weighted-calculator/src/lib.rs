// ==========================================================================
// MÓDULO: weighted-calculator/src/lib.rs
// Descrição: Biblioteca pura (sem storage) usada pelo reputation-ledger para
//            calcular a média ponderada por idade dos feedbacks
// ==========================================================================

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// One month, in seconds.
pub const DEFAULT_DECAY_PERIOD_SECONDS: u64 = 30 * 24 * 60 * 60;

/// A feedback keeps full weight for one decay period and loses one unit per
/// period after that, so with 12 it bottoms out after roughly a year.
pub const DEFAULT_MAX_WEIGHT: u64 = 12;

/// A single score left about a user, stamped with the block timestamp of the
/// transaction that recorded it. Penalties use the same shape.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct FeedbackEntry {
    pub score: u8,
    pub timestamp: u64,
}

impl FeedbackEntry {
    pub fn new(score: u8, timestamp: u64) -> Self {
        FeedbackEntry { score, timestamp }
    }
}

/// Controls how fast older feedback loses weight.
///
/// `weight(age) = max(max_weight - age / period_seconds, 1)`
///
/// Entries falling in the same decay bucket share the same weight, so a
/// history recorded within one period averages exactly like an arithmetic
/// mean.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct DecayPolicy {
    pub period_seconds: u64,
    pub max_weight: u64,
}

impl Default for DecayPolicy {
    fn default() -> Self {
        DecayPolicy {
            period_seconds: DEFAULT_DECAY_PERIOD_SECONDS,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl DecayPolicy {
    pub fn new(period_seconds: u64, max_weight: u64) -> Self {
        DecayPolicy {
            period_seconds,
            max_weight,
        }
    }

    pub fn validate(&self) -> Result<(), CalculatorError> {
        if self.period_seconds == 0 || self.max_weight == 0 {
            return Err(CalculatorError::InvalidPolicy);
        }
        Ok(())
    }

    /// Weight for an entry of the given age. Never below 1, never above
    /// `max_weight`, and never larger for an older entry than a newer one.
    pub fn weight(&self, age_seconds: u64) -> u64 {
        let elapsed_periods = age_seconds.checked_div(self.period_seconds).unwrap_or(0);
        self.max_weight.saturating_sub(elapsed_periods).max(1)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CalculatorError {
    EmptyInput,
    ArithmeticOverflow,
    InvalidPolicy,
}

impl CalculatorError {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorError::EmptyInput => "Empty feedback history",
            CalculatorError::ArithmeticOverflow => "Arithmetic overflow",
            CalculatorError::InvalidPolicy => "Invalid decay policy",
        }
    }
}

pub fn is_valid_score(score: u8) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Age-weighted average of `entries` as seen at `now`, truncated toward zero.
///
/// Entries stamped after `now` are treated as brand new. Fails with
/// `EmptyInput` when there is nothing to average.
pub fn weighted_average<I>(entries: I, now: u64, policy: &DecayPolicy) -> Result<u8, CalculatorError>
where
    I: IntoIterator<Item = FeedbackEntry>,
{
    policy.validate()?;

    let mut weighted_sum: u128 = 0;
    let mut total_weight: u128 = 0;

    for entry in entries {
        let age = now.saturating_sub(entry.timestamp);
        let weight = u128::from(policy.weight(age));

        let term = u128::from(entry.score)
            .checked_mul(weight)
            .ok_or(CalculatorError::ArithmeticOverflow)?;
        weighted_sum = weighted_sum
            .checked_add(term)
            .ok_or(CalculatorError::ArithmeticOverflow)?;
        total_weight = total_weight
            .checked_add(weight)
            .ok_or(CalculatorError::ArithmeticOverflow)?;
    }

    if total_weight == 0 {
        return Err(CalculatorError::EmptyInput);
    }

    u8::try_from(weighted_sum / total_weight).map_err(|_| CalculatorError::ArithmeticOverflow)
}

/// `base_amount * multiplier`, checked.
pub fn reward_multiplier(base_amount: u64, multiplier: u64) -> Result<u64, CalculatorError> {
    base_amount
        .checked_mul(multiplier)
        .ok_or(CalculatorError::ArithmeticOverflow)
}
