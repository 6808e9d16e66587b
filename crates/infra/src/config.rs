use chrono_tz::Tz;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the court booking API, e.g. `https://api.example.com/api/v1`
    pub api_address: String,
    /// Bearer token attached to every API request
    pub api_token: Option<String>,
    /// Timezone the court operates in. Off-day dates and times picked in the
    /// form are interpreted in this timezone, and "today" is decided by it.
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let default_address = "http://localhost:5000/api/v1";
        let api_address = match std::env::var("COURT_API_ADDRESS") {
            Ok(address) => address,
            Err(_) => {
                info!(
                    "Did not find COURT_API_ADDRESS environment variable. Falling back to: {}",
                    default_address
                );
                default_address.into()
            }
        };

        let api_token = match std::env::var("COURT_API_TOKEN") {
            Ok(token) if !token.is_empty() => Some(token),
            _ => {
                warn!(
                    "Did not find COURT_API_TOKEN environment variable. Requests will not be authenticated."
                );
                None
            }
        };

        let default_timezone = chrono_tz::UTC;
        let timezone = match std::env::var("COURT_TIMEZONE") {
            Ok(tzid) => match tzid.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given COURT_TIMEZONE: {} is not a valid IANA timezone, falling back to: {}.",
                        tzid, default_timezone
                    );
                    default_timezone
                }
            },
            Err(_) => default_timezone,
        };

        Self {
            api_address,
            api_token,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
