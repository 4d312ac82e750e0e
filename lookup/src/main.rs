use std::error::Error;

use configuration::LookupConfiguration;
use dns::{ResponseMessage, Section};
use domain_name_query_types::NameQuery;
use transport::UdpTransport;
use tracing_subscriber::EnvFilter;

mod cli_args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: cli_args::CliArgs = argh::from_env();
    let config: LookupConfiguration = configuration::get_config(args.config)?;

    let server_addr = args.server.unwrap_or(config.dns.server_address);
    let q_type = args.qtype.unwrap_or(config.dns.q_type);
    let name_query = NameQuery::new(&args.hostname, q_type);

    tracing::info!(
        "querying {} for {} records of {}, id: {}",
        server_addr,
        q_type,
        name_query.name,
        args.id
    );

    let transport = UdpTransport::bind(config.dns.local_address).await?;
    let resp = transport.query(server_addr, &name_query, args.id).await?;

    print_response(&resp);

    Ok(())
}

fn print_response(resp: &ResponseMessage) {
    println!(";; HEADER\n{}", resp.header());

    println!("\n;; QUESTION");
    for q in resp.questions() {
        println!("{}", q);
    }

    match resp.section() {
        Some(Section::Answer) => println!("\n;; ANSWER"),
        Some(Section::Authority) => println!("\n;; AUTHORITY"),
        None => return,
    }
    for r in resp.records() {
        println!("{}", r);
    }
}
