//! # std::net Boundary
//!
//! Conversions between [`IpAddress`] and the platform-facing `std::net`
//! types. This is the only place OS-flavored address structures touch the
//! core; sockets and name resolution stay outside the crate entirely.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::addr::IpAddress;
use crate::v4::Ipv4Repr;
use crate::v6::Ipv6Repr;

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::V4(Ipv4Repr::new(addr.octets()))
    }
}

impl From<Ipv6Addr> for IpAddress {
    /// `std` addresses carry no zone; the result has scope 0.
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::V6(Ipv6Repr::new(addr.octets(), 0))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<SocketAddr> for IpAddress {
    /// Takes the host part; a `SocketAddrV6` contributes its scope id.
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => (*v4.ip()).into(),
            SocketAddr::V6(v6) => IpAddress::V6(Ipv6Repr::new(v6.ip().octets(), v6.scope_id())),
        }
    }
}

impl From<IpAddress> for IpAddr {
    /// The zone id does not survive this conversion; `std` has nowhere to
    /// put it.
    fn from(addr: IpAddress) -> Self {
        match addr {
            IpAddress::V4(v4) => IpAddr::V4(Ipv4Addr::from(v4.octets())),
            IpAddress::V6(v6) => IpAddr::V6(Ipv6Addr::from(v6.octets())),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{SocketAddrV4, SocketAddrV6};

    #[test]
    fn std_addresses_convert_in() {
        let v4: IpAddress = Ipv4Addr::new(192, 168, 1, 1).into();
        assert_eq!(v4, IpAddress::parse("192.168.1.1").unwrap());

        let v6: IpAddress = Ipv6Addr::LOCALHOST.into();
        assert!(v6.is_loopback());
        assert_eq!(v6.scope(), 0);

        let ip: IpAddress = IpAddr::V4(Ipv4Addr::LOCALHOST).into();
        assert!(ip.is_loopback());
    }

    #[test]
    fn socket_addresses_contribute_host_and_scope() {
        let v4 = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 8080));
        assert_eq!(IpAddress::from(v4), IpAddress::parse("10.0.0.1").unwrap());

        let host: Ipv6Addr = "fe80::1".parse().unwrap();
        let v6 = SocketAddr::V6(SocketAddrV6::new(host, 443, 0, 3));
        let addr = IpAddress::from(v6);
        assert_eq!(addr.scope(), 3);
        assert_eq!(addr, IpAddress::parse("fe80::1%3").unwrap());
    }

    #[test]
    fn leaving_for_std_drops_the_zone() {
        let addr = IpAddress::parse("fe80::1%3").unwrap();
        let std_ip: IpAddr = addr.into();
        assert_eq!(std_ip, "fe80::1".parse::<IpAddr>().unwrap());

        let v4: IpAddr = IpAddress::parse("10.0.0.1").unwrap().into();
        assert_eq!(v4, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn agrees_with_std_rendering() {
        for text in ["10.0.0.1", "2001:db8::1", "::ffff:1.2.3.4"] {
            let ours = IpAddress::parse(text).unwrap();
            let theirs: IpAddr = text.parse().unwrap();
            assert_eq!(ours.to_string(), theirs.to_string(), "rendering {text}");
        }
    }
}
