//! Axum extractor for the caller's network address

use std::convert::Infallible;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

/// Peer IP address of the request, used to key the auth rate limiter.
///
/// Read from the `ConnectInfo` the server attaches to every connection.
/// When it is absent (a router driven without a listener) all requests
/// share the unspecified address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr(pub IpAddr);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let ip = match parts.extensions.get::<ConnectInfo<SocketAddr>>() {
                Some(ConnectInfo(addr)) => addr.ip(),
                None => {
                    log::debug!("No connection info on request, using unspecified client address");
                    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
                }
            };

            Ok(ClientAddr(ip))
        }
    }
}
