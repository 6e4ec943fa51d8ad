use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use kernel::prelude::entity::LoanDuration;
use kernel::KernelError;
use vodca::References;

const LOG_DIR: &str = "LIBRARY_LOG_DIR";
const LOAN_DAYS: &str = "LIBRARY_LOAN_DAYS";
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone, References)]
pub struct Config {
    log_dir: PathBuf,
    loan_duration: LoanDuration,
}

impl Config {
    /// Reads `.env` if present. Variables already set in the process win.
    pub fn load() -> error_stack::Result<Self, KernelError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(Report::new(e)
                    .change_context(KernelError::Internal)
                    .attach_printable("failed to read .env"));
            }
        }
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let log_dir = lookup(LOG_DIR)
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());

        let loan_duration = match lookup(LOAN_DAYS) {
            None => LoanDuration::default(),
            Some(days) => {
                let days = days
                    .trim()
                    .parse::<i64>()
                    .change_context(KernelError::InvalidInput)
                    .attach_printable_lazy(|| format!("{LOAN_DAYS} must be a whole number"))?;
                LoanDuration::new(days).attach_printable(LOAN_DAYS)?
            }
        };

        Ok(Self {
            log_dir: PathBuf::from(log_dir),
            loan_duration,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            loan_duration: LoanDuration::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::path::Path;

    use kernel::prelude::entity::LoanDuration;
    use kernel::KernelError;

    use crate::config::Config;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() -> error_stack::Result<(), KernelError> {
        let config = Config::from_lookup(lookup(&[]))?;
        assert_eq!(config.log_dir(), Path::new("./logs/"));
        assert_eq!(config.loan_duration(), &LoanDuration::default());
        Ok(())
    }

    #[test]
    fn values_are_read_from_the_environment() -> error_stack::Result<(), KernelError> {
        let config = Config::from_lookup(lookup(&[
            ("LIBRARY_LOG_DIR", "/var/log/library"),
            ("LIBRARY_LOAN_DAYS", " 14 "),
        ]))?;
        assert_eq!(config.log_dir(), Path::new("/var/log/library"));
        assert_eq!(*config.loan_duration().as_ref(), 14);
        Ok(())
    }

    #[test]
    fn bad_loan_days_are_rejected() {
        for days in ["soon", "0", "400"] {
            let error = Config::from_lookup(lookup(&[("LIBRARY_LOAN_DAYS", days)]))
                .expect_err("invalid loan days");
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }
}
