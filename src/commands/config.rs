//! `paperrec config` - print the effective configuration

use std::io::Write;

use paperrec_core::config::RecommenderConfig;
use paperrec_core::error::Result;

/// Execute the config command
pub fn execute<W: Write>(out: &mut W, config: &RecommenderConfig) -> Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_defaults() {
        let mut out = Vec::new();
        execute(&mut out, &RecommenderConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("data_path = \"data/coolPHDpapers.csv\""));
        assert!(text.contains("[vectorizer]"));
        assert!(text.contains("min_df = 0.03"));
        assert!(text.contains("[ranking]"));
        assert!(text.contains("near_duplicate_threshold = 0.97"));
        assert!(text.contains("shortfall = \"pad-with-first\""));
    }
}
