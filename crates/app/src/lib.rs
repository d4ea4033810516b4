pub mod app_loop;
pub mod seed;
pub mod settings_file;

use dungeon_core::RunOutcome;

pub const APP_NAME: &str = "dungeon";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Headline shown once a run has ended.
pub fn outcome_headline(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Defeat => "You died",
        RunOutcome::Quit => "Run abandoned",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seed_is_exact_decimal() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(12345), "12345");
        assert_eq!(format_seed(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn every_outcome_has_a_headline() {
        assert_eq!(outcome_headline(RunOutcome::Defeat), "You died");
        assert_eq!(outcome_headline(RunOutcome::Quit), "Run abandoned");
    }
}
