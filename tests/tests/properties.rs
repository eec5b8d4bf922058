use std::cmp::Ordering;

use ipkit_core::{AddrError, Family, IpAddress, wire};
use ipkit_integration_tests::{random_addr, random_mask_for, random_v4, random_v6, wildcards};

const ROUNDS: usize = 500;

/*************************************************************
                 String round-trip properties
**************************************************************/

#[test]
fn parse_render_roundtrip_random() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let addr = random_addr(&mut rng);
        let rendered = addr.to_string();
        let reparsed = IpAddress::parse(&rendered)
            .unwrap_or_else(|e| panic!("failed to reparse {rendered:?}: {e}"));
        assert_eq!(reparsed, addr, "round trip of {rendered}");
    }
}

#[test]
fn wildcards_render_as_their_literals() {
    let [v4, v6] = wildcards();
    assert_eq!(v4.to_string(), "0.0.0.0");
    assert_eq!(v6.to_string(), "::");
    assert_eq!(IpAddress::parse("").unwrap(), v4);
    assert_eq!(IpAddress::parse("::").unwrap(), v6);
}

/*************************************************************
                  Wire codec properties
**************************************************************/

#[test]
fn wire_roundtrip_random() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let addr = random_addr(&mut rng);
        let encoded = wire::to_vec(&addr);
        assert_eq!(encoded[0] as usize, addr.len());
        assert_eq!(&encoded[1..], addr.as_bytes());

        let decoded = wire::decode(&mut encoded.as_slice()).expect("decode what we encoded");
        assert_eq!(decoded.family(), addr.family());
        assert_eq!(decoded.as_bytes(), addr.as_bytes());
        // The zone id deliberately does not survive the wire.
        assert_eq!(decoded.scope(), 0);
        if addr.scope() == 0 {
            assert_eq!(decoded, addr);
        } else {
            assert_ne!(decoded, addr);
        }
    }
}

/*************************************************************
                   Ordering properties
**************************************************************/

#[test]
fn ordering_trichotomy_random_pairs() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_addr(&mut rng);
        let b = random_addr(&mut rng);
        let verdicts = [a < b, a == b, a > b];
        assert_eq!(
            verdicts.iter().filter(|v| **v).count(),
            1,
            "trichotomy violated for {a} / {b}"
        );
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }
}

#[test]
fn ordering_transitivity_random_triples() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let mut triple = [
            random_addr(&mut rng),
            random_addr(&mut rng),
            random_addr(&mut rng),
        ];
        triple.sort();
        assert!(triple[0] <= triple[1]);
        assert!(triple[1] <= triple[2]);
        assert!(triple[0] <= triple[2]);
    }
}

#[test]
fn every_v4_sorts_below_every_v6() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let v4 = random_v4(&mut rng);
        let v6 = random_v6(&mut rng);
        assert_eq!(v4.cmp(&v6), Ordering::Less);
        assert_ne!(v4, v6);
    }
}

/*************************************************************
                Network arithmetic properties
**************************************************************/

#[test]
fn mask_partition_identity_random() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let addr = random_addr(&mut rng);
        let mask = random_mask_for(&mut rng, &addr);
        let network = addr.and(&mask).expect("same family");
        let host = addr.and(&!mask).expect("same family");
        let rebuilt = network.or(&host).expect("same family");
        assert_eq!(rebuilt, addr, "partition identity for {addr} under {mask}");
    }
}

#[test]
fn prefix_roundtrip_both_families() {
    for n in 0..=32 {
        let mask = IpAddress::from_prefix(n, Family::V4).expect("prefix in range");
        assert_eq!(mask.prefix_len(), n);
    }
    for n in 0..=128 {
        let mask = IpAddress::from_prefix(n, Family::V6).expect("prefix in range");
        assert_eq!(mask.prefix_len(), n);
    }
}

#[test]
fn mask_with_reassembles_network_and_host() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let addr = random_addr(&mut rng);
        let mask = random_mask_for(&mut rng, &addr);
        // Overlaying an address's own host bits changes nothing.
        let same = addr.mask_with(&mask, &addr).expect("same family");
        assert_eq!(same.as_bytes(), addr.as_bytes());
    }
}

#[test]
fn cross_family_bitwise_always_fails() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let v4 = random_v4(&mut rng);
        let v6 = random_v6(&mut rng);
        let expected = AddrError::FamilyMismatch {
            lhs: Family::V4,
            rhs: Family::V6,
        };
        assert_eq!(v4.and(&v6), Err(expected.clone()));
        assert_eq!(v4.or(&v6), Err(expected.clone()));
        assert_eq!(v4.xor(&v6), Err(expected));
        assert!(v6.mask(&v4).is_err());
    }
}

/*************************************************************
                 Cross-checks against std
**************************************************************/

#[test]
fn rendering_agrees_with_std_for_unzoned_addresses() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let addr = match random_addr(&mut rng) {
            a if a.scope() != 0 => continue,
            a => a,
        };
        let std_ip: std::net::IpAddr = addr.into();
        assert_eq!(addr.to_string(), std_ip.to_string(), "rendering {addr:?}");
        assert_eq!(IpAddress::from(std_ip), addr);
    }
}
