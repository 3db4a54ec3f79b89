use std::{env, net::IpAddr};

use log::*;
use portmone_engine::{SubscriberFaultPolicy, VerifierConfig};

use crate::errors::ServerError;

const DEFAULT_PMG_HOST: &str = "127.0.0.1";
const DEFAULT_PMG_PORT: u16 = 8370;
const DEFAULT_DATABASE_URL: &str = "sqlite://data/portmone.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// The merchant code that Portmone must send in `BILL/PAYEE/CODE`.
    pub payee_id: String,
    /// If true, callbacks are only accepted from addresses in `ip_whitelist`.
    pub check_ip_enabled: bool,
    pub ip_whitelist: Vec<IpAddr>,
    pub subscriber_fault_policy: SubscriberFaultPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_PMG_HOST.to_string(),
            port: DEFAULT_PMG_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            payee_id: String::default(),
            check_ip_enabled: false,
            ip_whitelist: Vec::new(),
            subscriber_fault_policy: SubscriberFaultPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("PMG_HOST").ok().unwrap_or_else(|| DEFAULT_PMG_HOST.into());
        let port = env::var("PMG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for PMG_PORT. {e} Using the default, {DEFAULT_PMG_PORT}, instead."
                    );
                    DEFAULT_PMG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_PMG_PORT);
        let database_url = env::var("PMG_DATABASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ PMG_DATABASE_URL is not set. Using the default, {DEFAULT_DATABASE_URL}.");
            DEFAULT_DATABASE_URL.to_string()
        });
        let payee_id = env::var("PMG_PAYEE_ID").map(|s| s.trim().to_string()).ok().unwrap_or_else(|| {
            error!(
                "🪛️ PMG_PAYEE_ID is not set. Please set it to your Portmone payee code. The server will not start \
                 until you do."
            );
            String::default()
        });
        let check_ip_enabled = env::var("PMG_CHECK_IP_ENABLED").map(|s| &s == "1" || &s == "true").unwrap_or(false);
        let ip_whitelist = env::var("PMG_IP_WHITELIST").map(|s| parse_ip_whitelist(&s)).unwrap_or_default();
        match (check_ip_enabled, ip_whitelist.is_empty()) {
            (true, true) => warn!(
                "🚨️ PMG_CHECK_IP_ENABLED is set, but the IP whitelist is empty. The server will run, but won't accept \
                 any Portmone callbacks."
            ),
            (true, false) => {
                let addrs = ip_whitelist.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
                info!("🪛️ Portmone IP whitelist: {addrs}");
            },
            (false, _) => info!("🪛️ Portmone IP checks are disabled. Callbacks are accepted from any address."),
        }
        let subscriber_fault_policy = env::var("PMG_SUBSCRIBER_FAULT_POLICY")
            .ok()
            .and_then(|s| {
                s.parse::<SubscriberFaultPolicy>()
                    .map_err(|e| warn!("🪛️ {e} Using the default, {}.", SubscriberFaultPolicy::default()))
                    .ok()
            })
            .unwrap_or_default();
        Self { host, port, database_url, payee_id, check_ip_enabled, ip_whitelist, subscriber_fault_policy }
    }

    /// Checks the settings that the server cannot run without.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.payee_id.trim().is_empty() {
            return Err(ServerError::ConfigurationError("PMG_PAYEE_ID must be set to your Portmone payee code.".into()));
        }
        Ok(())
    }

    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig::new(self.payee_id.clone()).with_subscriber_fault_policy(self.subscriber_fault_policy)
    }

    pub fn origin_policy(&self) -> OriginPolicy {
        OriginPolicy { enabled: self.check_ip_enabled, allowed: self.ip_whitelist.clone() }
    }
}

/// Parses a comma-separated list of IP addresses. Invalid entries are logged and skipped.
pub fn parse_ip_whitelist(s: &str) -> Vec<IpAddr> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| {
            s.parse()
                .map_err(|e| {
                    warn!("🪛️ Ignoring invalid IP address ({s}) in PMG_IP_WHITELIST: {e}");
                })
                .ok()
        })
        .collect()
}

//-------------------------------------------------  OriginPolicy  -----------------------------------------------------
/// The subset of the configuration the origin guard needs. It is registered as app data so that the guard can be
/// attached to a route without access to the full configuration.
#[derive(Clone, Debug, Default)]
pub struct OriginPolicy {
    pub enabled: bool,
    pub allowed: Vec<IpAddr>,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<IpAddr>) -> Self {
        Self { enabled: true, allowed }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a caller at `ip` may proceed. A caller whose address could not be determined is only let through when
    /// the policy is disabled.
    pub fn permits(&self, ip: Option<IpAddr>) -> bool {
        if !self.enabled {
            return true;
        }
        ip.map(|ip| self.allowed.contains(&ip)).unwrap_or(false)
    }
}
