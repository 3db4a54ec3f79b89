use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use actix_web::HttpRequest;
use log::{debug, trace};

/// Get the remote IP address from the request.
///
/// If an `X-Forwarded-For` header is present, the **last** address in it is used. That is the one appended by the
/// reverse proxy nearest to us; earlier entries are supplied by the client and can't be trusted. If the last entry is
/// not an address, `None` is returned rather than falling back to the peer address.
///
/// Without the header, or with an empty one, the peer address from the connection is used.
pub fn get_remote_ip(req: &HttpRequest) -> Option<IpAddr> {
    let forwarded_for =
        req.headers().get("X-Forwarded-For").filter(|h| h.to_str().map(|v| !v.trim().is_empty()).unwrap_or(true));
    if let Some(header) = forwarded_for {
        trace!("Checking X-Forwarded-For header");
        let result = header.to_str().ok().and_then(last_forwarded_for).and_then(parse_ip);
        debug!("Using X-Forwarded-For header for remote address: {result:?}");
        return result;
    }
    let peer_addr = req.peer_addr().map(|a| a.ip());
    trace!("Using Peer address for remote address: {peer_addr:?}");
    peer_addr
}

/// The last, trimmed, comma-separated entry of an `X-Forwarded-For` value.
pub fn last_forwarded_for(header: &str) -> Option<&str> {
    header.rsplit(',').next().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_ip(s: &str) -> Option<IpAddr> {
    IpAddr::from_str(s).ok().or_else(|| SocketAddr::from_str(s).ok().map(|a| a.ip()))
}
