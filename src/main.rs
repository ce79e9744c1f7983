//! write-response: codec port for replica write acknowledgments.
//!
//! Communicates via stdin/stdout using length-prefixed bincode frames:
//!   [4-byte big-endian length][bincode(ref_id: u64, Request)]
//!   [4-byte big-endian length][bincode(ref_id: u64, Response)]
//!
//! Logs go to stderr so they don't corrupt the binary protocol.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::net::IpAddr;
use tracing::info;
use write_response::port::{self, PortConfig, DEFAULT_MAX_FRAME_LEN};
use write_response::MessagingVersion;

// ── CLI ───────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "write-response", about = "Write acknowledgment codec port")]
struct Cli {
    /// Address stamped as the sender of reply envelopes.
    #[arg(long, default_value = "127.0.0.1")]
    broadcast_address: IpAddr,

    /// Largest inbound frame accepted, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_LEN)]
    max_frame_len: usize,
}

fn main() -> Result<()> {
    // Logs to stderr so stdout stays clean for the binary protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(
        broadcast_address = %cli.broadcast_address,
        max_frame_len = cli.max_frame_len,
        current_version = %MessagingVersion::CURRENT,
        "write-response port starting"
    );

    let config = PortConfig {
        broadcast_address: cli.broadcast_address,
        max_frame_len: cli.max_frame_len,
    };

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    port::serve(&config, &mut stdin, &mut stdout)
}
