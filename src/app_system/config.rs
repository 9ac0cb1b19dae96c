use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:50051";
pub const DEFAULT_TARGET: &str = "localhost:50051";

/// User registry server
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to accept RPC connections on
    #[arg(long, env = "USER_REGISTRY_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,
}

/// User registry demo client
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ClientConfig {
    /// Server address as host:port
    #[arg(long, env = "USER_REGISTRY_TARGET", default_value = DEFAULT_TARGET)]
    pub target: String,
}
