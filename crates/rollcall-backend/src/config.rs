//! Command line and environment configuration for the backend.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use rollcall::data::RosterPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "rollcall-backend")]
#[command(about = "Activity signup directory for Mergington High School")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "ROLLCALL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "ROLLCALL_PORT", default_value_t = 3030)]
    pub port: u16,

    /// Where `GET /` redirects to
    #[arg(long, env = "ROLLCALL_INDEX_PATH", default_value = "/static/index.html")]
    pub index_path: String,

    /// Reject signups once an activity reaches max_participants
    #[arg(long, env = "ROLLCALL_ENFORCE_CAPACITY")]
    pub enforce_capacity: bool,

    /// Reject a signup when the email is already on the roster
    #[arg(long, env = "ROLLCALL_REJECT_DUPLICATES")]
    pub reject_duplicates: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn policy(&self) -> RosterPolicy {
        RosterPolicy {
            enforce_capacity: self.enforce_capacity,
            reject_duplicates: self.reject_duplicates,
        }
    }
}
