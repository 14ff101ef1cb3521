use std::env;
use thiserror::Error;

pub const ENV_SENDER: &str = "PollenEmailSender";
pub const ENV_PASSWORD: &str = "PollenEmailSenderPassword";
pub const ENV_RECIPIENT: &str = "PollenEmailRecipient";

#[derive(Debug)]
pub struct MailParameters {
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

#[derive(Debug)]
pub struct Config {
    pub mail: MailParameters,
}

/// Loads the configuration from the process environment and returns a struct with
/// all configuration items
///
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Builds the configuration from the given lookup function.
/// All missing variables are collected so the error names every one of them.
///
/// # Arguments
///
/// * 'get' - lookup function from variable name to value
fn load_from(get: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let mut missing: Vec<&str> = Vec::new();

    let sender = get(ENV_SENDER).unwrap_or_else(|| { missing.push(ENV_SENDER); String::new() });
    let password = get(ENV_PASSWORD).unwrap_or_else(|| { missing.push(ENV_PASSWORD); String::new() });
    let recipient = get(ENV_RECIPIENT).unwrap_or_else(|| { missing.push(ENV_RECIPIENT); String::new() });

    if !missing.is_empty() {
        return Err(ConfigError::MissingVariables(missing.join(", ")));
    }

    Ok(Config {
        mail: MailParameters {
            sender,
            password,
            recipient,
        }
    })
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variables: {0}")]
    MissingVariables(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn all_variables_present() {
        let env = env_of(&[
            (ENV_SENDER, "sender@example.com"),
            (ENV_PASSWORD, "secret"),
            (ENV_RECIPIENT, "recipient@example.com"),
        ]);

        let config = load_from(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.mail.sender, "sender@example.com");
        assert_eq!(config.mail.password, "secret");
        assert_eq!(config.mail.recipient, "recipient@example.com");
    }

    #[test]
    fn one_missing_variable_is_named() {
        let env = env_of(&[
            (ENV_SENDER, "sender@example.com"),
            (ENV_RECIPIENT, "recipient@example.com"),
        ]);

        let err = load_from(|name| env.get(name).cloned()).unwrap_err();

        assert_eq!(err.to_string(), format!("missing environment variables: {}", ENV_PASSWORD));
    }

    #[test]
    fn all_missing_variables_are_named() {
        let err = load_from(|_| None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains(ENV_SENDER));
        assert!(msg.contains(ENV_PASSWORD));
        assert!(msg.contains(ENV_RECIPIENT));
    }
}
