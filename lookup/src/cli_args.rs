use std::net::SocketAddr;
use std::path::PathBuf;

use argh::FromArgs;
use domain_name_query_types::QType;

fn default_config_path() -> PathBuf {
    PathBuf::from("./lookup_config.toml")
}

fn default_id() -> u16 {
    22
}

#[derive(Debug, FromArgs)]
#[argh(description = "send one DNS query over UDP and print the parsed response")]
pub struct CliArgs {
    #[argh(positional, description = "host name to look up, e.g. dns.google.com")]
    pub hostname: String,

    #[argh(option, description = "query type, 'a' or 'ns' (default from config, else 'a')")]
    pub qtype: Option<QType>,

    #[argh(option, description = "name server address, overrides the config file")]
    pub server: Option<SocketAddr>,

    #[argh(option, description = "transaction id, default: 22", default = "default_id()")]
    pub id: u16,

    #[argh(
        option,
        description = "config file path, default: './lookup_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,
}
