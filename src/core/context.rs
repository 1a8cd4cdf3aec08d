use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Caller identity for one CLI invocation.
///
/// Every accounting operation takes the context explicitly; nothing reads
/// the caller from ambient state. Lifecycle: one per inbound command.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub caller: String,
}

impl RequestContext {
    /// Resolve the caller from the --user override or the configured default.
    pub fn resolve(cli_user: Option<&String>, cfg: &Config) -> AppResult<Self> {
        let caller = match cli_user {
            Some(u) => u.clone(),
            None => cfg.default_user.clone(),
        };

        if caller.trim().is_empty() {
            return Err(AppError::Validation(
                "Missing caller identity: pass --user or set default_user in the config file."
                    .into(),
            ));
        }

        Ok(Self { caller })
    }
}
