// =============================================================================
// config.rs — THE FOUR KNOBS
// =============================================================================
//
// The registry's URLs are stable enough to ship as defaults, but every value
// can be overridden via BANK_REGISTER_-prefixed environment variables. A
// .env file is honored if present and silently ignored if not.
//
// The detail URL template lives here and nowhere else. Every source_url in
// the output is derived from a bank id through detail_url(), which is what
// makes source_url deterministic per id.
// =============================================================================

use std::env;
use std::time::Duration;

use anyhow::Context;
use url::Url;

/// Default register page. The `?bank={id}` query selects one bank's detail
/// page; the page doubles as the listing page for any valid id.
const DEFAULT_REGISTER_URL: &str = "http://www.nbrb.by/engl/system/register.asp";

/// The bank id whose page we use as the starting listing page.
const DEFAULT_START_BANK_ID: &str = "108";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

const DEFAULT_USER_AGENT: &str =
    "BankRegisterEngine/1.0 (register-extraction; educational-project)";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the register page, without the bank query parameter.
    pub register_url: String,

    /// Bank id appended to the register URL to form the start page.
    pub start_bank_id: String,

    /// Per-request timeout. The only time bound anywhere in the run.
    pub http_timeout: Duration,

    /// Sent on every request. We identify ourselves because we were
    /// raised right.
    pub user_agent: String,
}

impl Config {
    /// Load configuration from the environment with hardcoded defaults.
    ///
    /// The register URL is parsed once up front so a typo in
    /// BANK_REGISTER_URL fails the run at startup instead of producing a
    /// transport error per bank.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let register_url = env_or_default("BANK_REGISTER_URL", DEFAULT_REGISTER_URL);
        Url::parse(&register_url)
            .with_context(|| format!("BANK_REGISTER_URL is not a valid URL: {register_url}"))?;

        Ok(Config {
            register_url,
            start_bank_id: env_or_default("BANK_REGISTER_START_BANK_ID", DEFAULT_START_BANK_ID),
            http_timeout: Duration::from_secs(
                env_or_default(
                    "BANK_REGISTER_HTTP_TIMEOUT_SECS",
                    &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            user_agent: env_or_default("BANK_REGISTER_USER_AGENT", DEFAULT_USER_AGENT),
        })
    }

    /// The detail page URL for one bank id. The single source of truth for
    /// the URL template.
    pub fn detail_url(&self, bank_id: &str) -> String {
        format!("{}?bank={}", self.register_url, bank_id)
    }

    /// The listing page URL: the start bank's own detail page.
    pub fn start_url(&self) -> String {
        self.detail_url(&self.start_bank_id)
    }
}

/// Read an environment variable with a default fallback.
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            register_url: "http://registry.example/register.asp".to_string(),
            start_bank_id: "108".to_string(),
            http_timeout: Duration::from_secs(15),
            user_agent: "test".to_string(),
        }
    }

    #[test]
    fn test_detail_url_follows_template() {
        let config = test_config();
        assert_eq!(
            config.detail_url("133"),
            "http://registry.example/register.asp?bank=133"
        );
    }

    #[test]
    fn test_start_url_uses_start_bank_id() {
        let config = test_config();
        assert_eq!(config.start_url(), config.detail_url("108"));
    }

    #[test]
    fn test_same_id_always_derives_same_url() {
        let config = test_config();
        assert_eq!(config.detail_url("5"), config.detail_url("5"));
    }
}
