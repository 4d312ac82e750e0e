use std::net::{IpAddr, SocketAddr};

use bytes::BytesMut;
use dns::{CodecError, ResponseMessage};
use domain_name_query_types::NameQuery;
use thiserror::Error;
use tokio::net::UdpSocket;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
const MAX_RESPONSE_SIZE: usize = 512;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    #[error("Malformed response: {0}")]
    Codec(#[from] CodecError),

    #[error("Response id {actual} does not match request id {expected}")]
    IdMismatch { expected: u16, actual: u16 },
}

/// One UDP socket exchanging single datagrams with a name server.
///
/// `receive` waits for as long as it takes; there is no timeout. `query`
/// ignores datagrams from any address other than the server it asked.
pub struct UdpTransport {
    sock: UdpSocket,
}

impl UdpTransport {
    pub async fn bind(local_addr: SocketAddr) -> Result<Self, TransportError> {
        let sock = UdpSocket::bind(local_addr).await?;
        Ok(Self { sock })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.sock.local_addr()?)
    }

    pub async fn send(&self, buffer: &[u8], address: IpAddr, port: u16) -> Result<usize, TransportError> {
        let send_size = self.sock.send_to(buffer, SocketAddr::new(address, port)).await?;
        tracing::debug!("sent {} bytes to {}:{}", send_size, address, port);

        Ok(send_size)
    }

    pub async fn receive(&self) -> Result<Vec<u8>, TransportError> {
        let (response_bytes, _) = self.receive_from().await?;
        Ok(response_bytes)
    }

    async fn receive_from(&self) -> Result<(Vec<u8>, SocketAddr), TransportError> {
        let mut resp_buf = BytesMut::with_capacity(MAX_RESPONSE_SIZE);
        let (response_size, peer) = self.sock.recv_buf_from(&mut resp_buf).await?;
        tracing::debug!("received {} bytes from {}", response_size, peer);

        Ok((resp_buf.to_vec(), peer))
    }

    /// Encodes `name_query`, sends it to `server_addr` and decodes the first
    /// datagram that comes back.
    pub async fn query(
        &self,
        server_addr: SocketAddr,
        name_query: &NameQuery,
        id: u16,
    ) -> Result<ResponseMessage, TransportError> {
        tracing::debug!("DNS query, {:?}", name_query);

        let request_bytes = dns::encode_request(&name_query.name, id, name_query.q_type);
        self.send(&request_bytes, server_addr.ip(), server_addr.port())
            .await?;

        let response_bytes = loop {
            let (bytes, peer) = self.receive_from().await?;
            if peer == server_addr {
                break bytes;
            }
            tracing::warn!("dropping {} bytes from unexpected peer {}", bytes.len(), peer);
        };
        let resp = dns::decode_response(&response_bytes)?;

        if resp.header().id != id {
            return Err(TransportError::IdMismatch {
                expected: id,
                actual: resp.header().id,
            });
        }
        tracing::debug!(
            "received response has {} records",
            resp.records().len()
        );

        Ok(resp)
    }
}
