//! Conversion between attempt outcomes and stored result values
//!
//! Only the `time` result format is understood. Fewest-moves (`number`) and
//! multi-blind (`multi`) values are not given their special meaning: any
//! positive value is read as centiseconds. Callers that need those formats
//! must check [`ResultValueCodec::supports`] first.

use crate::constants::{
    CENTISECOND_DECIMALS, DNF_VALUE, DNS_VALUE, MILLIS_PER_CENTISECOND, NO_RESULT_VALUE,
};
use crate::error::{RulesError, RulesResult};
use crate::models::{AttemptOutcome, PenaltyKind, ResultFormat, ResultValue};

/// Encoder/decoder for the signed result value representation
pub struct ResultValueCodec;

impl ResultValueCodec {
    /// Whether positive values of `format` are encoded faithfully
    pub fn supports(format: ResultFormat) -> bool {
        matches!(format, ResultFormat::Time)
    }

    /// Encode an outcome.
    ///
    /// DNF takes precedence over DNS when both are present. Otherwise the
    /// elapsed time is truncated to whole centiseconds; a missing time
    /// encodes as an empty slot. Times past the largest storable value
    /// saturate at `i64::MAX`; [`AttemptOutcome::timed`] can't produce them.
    pub fn encode(outcome: &AttemptOutcome) -> ResultValue {
        if outcome.has_penalty(PenaltyKind::Dnf) {
            return ResultValue::DNF;
        }
        if outcome.has_penalty(PenaltyKind::Dns) {
            return ResultValue::DNS;
        }

        let centiseconds = outcome.millis.unwrap_or(0) / MILLIS_PER_CENTISECOND;
        match i64::try_from(centiseconds) {
            Ok(value) => ResultValue::new(value),
            Err(_) => {
                tracing::warn!(%centiseconds, "Elapsed time exceeds the largest result value");
                ResultValue::new(i64::MAX)
            }
        }
    }

    /// Decode a stored value.
    ///
    /// Fails with [`RulesError::InvalidEncodedValue`] for anything below DNS.
    pub fn decode(value: ResultValue) -> RulesResult<AttemptOutcome> {
        match value.get() {
            DNF_VALUE => Ok(AttemptOutcome::dnf()),
            DNS_VALUE => Ok(AttemptOutcome::dns()),
            NO_RESULT_VALUE => Ok(AttemptOutcome::no_result()),
            centiseconds if centiseconds > 0 => {
                // i64::MAX * 10 fits in u128
                let millis = centiseconds as u128 * MILLIS_PER_CENTISECOND;
                Ok(AttemptOutcome {
                    millis: Some(millis),
                    decimals: Some(CENTISECOND_DECIMALS),
                    ..AttemptOutcome::default()
                })
            }
            invalid => {
                tracing::warn!(value = invalid, "Rejected encoded result value");
                Err(RulesError::InvalidEncodedValue(invalid))
            }
        }
    }

    /// Decode every value of a result row (value1..value5)
    pub fn decode_all(values: &[ResultValue]) -> RulesResult<Vec<AttemptOutcome>> {
        values.iter().map(|value| Self::decode(*value)).collect()
    }
}
