use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use domain_name_query_types::QType;
use serde::Deserialize;

/// Loads `config_path` when it exists, otherwise falls back to the defaults
/// of every field.
pub fn get_config<T: for<'de> Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path).required(false);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupConfiguration {
    #[serde(default)]
    pub dns: DnsConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct DnsConfiguration {
    #[serde(default = "default_server_address")]
    pub server_address: SocketAddr,
    #[serde(default = "default_local_address")]
    pub local_address: SocketAddr,
    #[serde(default = "default_q_type")]
    pub q_type: QType,
}

impl Default for DnsConfiguration {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            local_address: default_local_address(),
            q_type: default_q_type(),
        }
    }
}

fn default_server_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53)
}

fn default_local_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
}

fn default_q_type() -> QType {
    QType::A
}
