use crate::ClientAddr;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use http::Request;

#[tokio::test]
async fn test_client_addr_reads_peer_ip_from_connect_info() {
    let peer: SocketAddr = "203.0.113.9:51234".parse().unwrap();
    let (mut parts, _) = Request::builder()
        .uri("/api/v1/auth/telegram")
        .extension(ConnectInfo(peer))
        .body(())
        .unwrap()
        .into_parts();

    let ClientAddr(ip) = ClientAddr::from_request_parts(&mut parts, &()).await.unwrap();

    assert_eq!(ip, peer.ip());
}

#[tokio::test]
async fn test_client_addr_without_connect_info_is_unspecified() {
    let (mut parts, _) = Request::builder()
        .uri("/api/v1/auth/telegram")
        .body(())
        .unwrap()
        .into_parts();

    let ClientAddr(ip) = ClientAddr::from_request_parts(&mut parts, &()).await.unwrap();

    assert_eq!(ip, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
}
