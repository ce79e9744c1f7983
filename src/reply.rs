//! Reply envelopes handed to the transport.

use crate::error::Result;
use crate::serializer;
use crate::version::MessagingVersion;
use crate::write_response::{WriteResponse, SERIALIZER};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verb {
    Mutation,
    RequestResponse,
}

/// A message as the transport sees it: header fields plus an opaque body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Correlation id; a reply carries the id of the message it answers.
    pub id: u64,
    pub from: IpAddr,
    pub verb: Verb,
    pub version: MessagingVersion,
    pub body: Vec<u8>,
}

impl Envelope {
    /// Build the response to this envelope.
    pub fn reply(&self, from: IpAddr, body: Vec<u8>, version: MessagingVersion) -> Envelope {
        Envelope {
            id: self.id,
            from,
            verb: Verb::RequestResponse,
            version,
            body,
        }
    }
}

/// Encode `response` with the version of the mutation it acknowledges and
/// wrap it as a reply sent from `local`.
#[instrument(skip_all, fields(id = original.id, version = %original.version))]
pub fn make_write_response_message(
    original: &Envelope,
    response: &WriteResponse<'_>,
    local: IpAddr,
) -> Result<Envelope> {
    let body = serializer::serialize(response, &SERIALIZER, original.version)?;
    debug!(len = body.len(), success = response.is_success(), "write response encoded");
    Ok(original.reply(local, body, original.version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::net::Ipv4Addr;

    fn mutation(version: MessagingVersion) -> Envelope {
        Envelope {
            id: 41,
            from: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
            verb: Verb::Mutation,
            version,
            body: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_reply_carries_encoded_body() {
        let local = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9));
        let original = mutation(MessagingVersion::VERSION_11);
        let response = WriteResponse::new("ks1", &[0xDEu8, 0xAD, 0xBE, 0xEF][..], true);

        let reply = make_write_response_message(&original, &response, local).unwrap();
        assert_eq!(reply.id, 41);
        assert_eq!(reply.from, local);
        assert_eq!(reply.verb, Verb::RequestResponse);
        assert_eq!(reply.version, MessagingVersion::VERSION_11);
        assert_eq!(
            reply.body,
            serializer::serialize(&response, &SERIALIZER, MessagingVersion::VERSION_11).unwrap()
        );
    }

    #[test]
    fn test_reply_to_unsupported_version_fails() {
        let original = mutation(MessagingVersion::new(12));
        let response = WriteResponse::new("ks1", &b"k"[..], false);
        let res = make_write_response_message(&original, &response, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(res, Err(Error::UnsupportedVersion(12)));
    }
}
