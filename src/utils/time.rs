//! Time formatting for decoded results

use crate::config::{CONFIG, ResultsConfig};
use crate::constants::{CENTISECOND_DECIMALS, MILLIS_PER_CENTISECOND};
use crate::error::RulesResult;
use crate::models::{AttemptOutcome, ResultValue};
use crate::services::ResultValueCodec;

/// Format elapsed milliseconds as `S.CC`, `M:SS.CC` or `H:MM:SS.CC`.
///
/// Subsecond digits are truncated, never rounded, to match how results are
/// stored. `decimals` above 2 is treated as 2.
pub fn format_millis(millis: u128, decimals: u8) -> String {
    let centiseconds = millis / MILLIS_PER_CENTISECOND;
    let total_seconds = centiseconds / 100;
    let fraction = centiseconds % 100;

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut formatted = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{}", seconds)
    };

    match decimals.min(CENTISECOND_DECIMALS) {
        0 => {}
        1 => formatted.push_str(&format!(".{}", fraction / 10)),
        _ => formatted.push_str(&format!(".{:02}", fraction)),
    }

    formatted
}

/// Render an outcome for display. Empty slots render as an empty string.
pub fn format_outcome(outcome: &AttemptOutcome, config: &ResultsConfig) -> String {
    if outcome.is_dnf() {
        return "DNF".to_string();
    }
    if outcome.is_dns() {
        return "DNS".to_string();
    }

    match outcome.millis {
        Some(millis) => {
            let decimals = outcome
                .decimals
                .map_or(config.display_decimals, |d| d.min(config.display_decimals));
            format_millis(millis, decimals)
        }
        None => String::new(),
    }
}

/// Decode and render a stored value
pub fn format_result_value(value: ResultValue, config: &ResultsConfig) -> RulesResult<String> {
    let outcome = ResultValueCodec::decode(value)?;
    Ok(format_outcome(&outcome, config))
}

/// [`format_outcome`] with the process-wide display settings
pub fn display_outcome(outcome: &AttemptOutcome) -> String {
    format_outcome(outcome, &CONFIG.results)
}

/// [`format_result_value`] with the process-wide display settings
pub fn display_result_value(value: ResultValue) -> RulesResult<String> {
    format_result_value(value, &CONFIG.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(display_decimals: u8) -> ResultsConfig {
        ResultsConfig { display_decimals }
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(86_530, 2), "1:26.53");
        assert_eq!(format_millis(9_990, 2), "9.99");
        assert_eq!(format_millis(600_000, 2), "10:00.00");
        assert_eq!(format_millis(3_723_450, 2), "1:02:03.45");
        assert_eq!(format_millis(0, 2), "0.00");
    }

    #[test]
    fn test_format_millis_truncates() {
        assert_eq!(format_millis(12_349, 2), "12.34");
        assert_eq!(format_millis(12_349, 1), "12.3");
        assert_eq!(format_millis(12_999, 0), "12");
        assert_eq!(format_millis(12_340, 5), "12.34");
    }

    #[test]
    fn test_format_result_value() {
        let config = config(2);
        assert_eq!(format_result_value(ResultValue::new(8_653), &config).unwrap(), "1:26.53");
        assert_eq!(format_result_value(ResultValue::DNF, &config).unwrap(), "DNF");
        assert_eq!(format_result_value(ResultValue::DNS, &config).unwrap(), "DNS");
        assert_eq!(format_result_value(ResultValue::NO_RESULT, &config).unwrap(), "");
        assert!(format_result_value(ResultValue::new(-5), &config).is_err());
    }

    #[test]
    fn test_format_outcome_respects_precision() {
        let outcome = AttemptOutcome::timed(7_450);
        assert_eq!(format_outcome(&outcome, &config(1)), "7.4");

        let mut coarse = AttemptOutcome::timed(7_450);
        coarse.decimals = Some(0);
        assert_eq!(format_outcome(&coarse, &config(2)), "7");
    }

    #[test]
    fn test_display_uses_global_settings() {
        assert_eq!(display_result_value(ResultValue::DNF).unwrap(), "DNF");
        assert_eq!(display_result_value(ResultValue::NO_RESULT).unwrap(), "");
        assert!(display_result_value(ResultValue::new(-3)).is_err());

        let outcome = AttemptOutcome::timed(86_539);
        assert_eq!(
            display_outcome(&outcome),
            format_outcome(&outcome, &CONFIG.results)
        );
        assert!(display_outcome(&outcome).starts_with("1:26"));
    }
}
