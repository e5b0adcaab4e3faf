use std::net::SocketAddr;

use clap::Parser;
use zipline_events::Operator;

pub const LISTEN_ADDR_ENV: &str = "ZIPLINE_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "ZIPLINE_BASE_URL";
pub const OPERATOR_NAME_ENV: &str = "ZIPLINE_OPERATOR_NAME";
pub const OPERATOR_EMAIL_ENV: &str = "ZIPLINE_OPERATOR_EMAIL";
pub const OPERATOR_ID_ENV: &str = "ZIPLINE_OPERATOR_ID";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Gateway configuration, from flags or environment.
#[derive(Debug, Parser)]
#[command(name = "zipline-gateway", about = "HTTP gateway for the Zipline URL shortener")]
pub struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public base URL short links are composed against.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Operator name stamped into console event records.
    #[arg(long, env = OPERATOR_NAME_ENV)]
    pub operator_name: Option<String>,

    /// Operator email stamped into console event records.
    #[arg(long, env = OPERATOR_EMAIL_ENV)]
    pub operator_email: Option<String>,

    /// Operator id stamped into console event records.
    #[arg(long, env = OPERATOR_ID_ENV)]
    pub operator_id: Option<String>,
}

impl Cli {
    /// Operator identity assembled from the optional flags.
    pub fn operator(&self) -> Operator {
        Operator {
            name: self.operator_name.clone(),
            email: self.operator_email.clone(),
            id: self.operator_id.clone(),
        }
    }
}
