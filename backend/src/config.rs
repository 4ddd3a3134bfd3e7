use std::net::{IpAddr, Ipv4Addr};

use rocket::figment::Figment;

/// Listen settings for the service. Address and port are fixed; everything
/// else Rocket reads from `Rocket.toml` and `ROCKET_*` as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Origins allowed by the CORS fairing must start with this.
pub const ALLOWED_ORIGIN_PREFIX: &str = "http://localhost";

impl ServiceConfig {
    pub const fn new() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
        }
    }

    /// Rocket's default figment with our address and port merged last, so
    /// they win over any environment override.
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub const CONFIG: ServiceConfig = ServiceConfig::new();
