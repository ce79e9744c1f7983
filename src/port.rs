//! Request dispatch and the frame loop of the codec port.

use crate::error::Error;
use crate::frame::{read_frame, write_frame};
use crate::protocol::{RefId, Request, Response};
use crate::reply::make_write_response_message;
use crate::serializer::{self, VersionedSerializer};
use crate::write_response::{WriteResponse, SERIALIZER};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PortConfig {
    /// Sender address stamped on reply envelopes.
    pub broadcast_address: IpAddr,
    /// Inbound frames longer than this are treated as stream corruption.
    pub max_frame_len: usize,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            broadcast_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }
}

fn error_response(e: Error) -> Response {
    warn!(kind = ?e.kind(), error = %e, "codec request failed");
    Response::Error {
        kind: e.kind(),
        message: e.to_string(),
    }
}

// ── Request dispatch ──────────────────────────────────────────────────

pub fn handle_request(config: &PortConfig, req: Request) -> Response {
    match req {
        Request::Encode { version, table, key, status } => {
            let msg = WriteResponse::new(table, key, status);
            match serializer::serialize(&msg, &SERIALIZER, version) {
                Ok(bytes) => Response::Encoded { bytes },
                Err(e) => error_response(e),
            }
        }

        Request::Decode { version, bytes } => {
            match serializer::deserialize::<WriteResponse, _>(&bytes, &SERIALIZER, version) {
                Ok(msg) => Response::Decoded {
                    table: msg.table().to_owned(),
                    key: msg.key().to_vec(),
                    status: msg.is_success(),
                },
                Err(e) => error_response(e),
            }
        }

        Request::SizeOf { version, table, key, status } => {
            let msg = WriteResponse::new(table, key, status);
            match SERIALIZER.serialized_size(&msg, version) {
                Ok(size) => Response::Size {
                    size: u64::try_from(size).unwrap_or(u64::MAX),
                },
                Err(e) => error_response(e),
            }
        }

        Request::Reply { original, table, key, status } => {
            let msg = WriteResponse::new(table, key, status);
            match make_write_response_message(&original, &msg, config.broadcast_address) {
                Ok(envelope) => Response::Reply { envelope },
                Err(e) => error_response(e),
            }
        }
    }
}

// ── Main loop ─────────────────────────────────────────────────────────

/// Serve requests until `input` reaches EOF at a frame boundary.
pub fn serve(config: &PortConfig, input: &mut impl Read, output: &mut impl Write) -> Result<()> {
    loop {
        let frame = match read_frame(input, config.max_frame_len)? {
            Some(f) => f,
            None => {
                info!("input closed, shutting down");
                break;
            }
        };

        let (ref_id, request): (RefId, Request) =
            bincode::deserialize(&frame).context("decoding request frame")?;

        debug!(ref_id, ?request, "received request");

        let response = handle_request(config, request);

        debug!(ref_id, ?response, "sending response");

        let resp_bytes = bincode::serialize(&(ref_id, &response))?;
        write_frame(output, &resp_bytes)?;
    }

    Ok(())
}
