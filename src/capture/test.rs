use std::net::{IpAddr, Ipv4Addr};
use anyhow::Result;
use crate::Error;
use super::{discover, fingerprint, key, Addr, Fingerprints, Flow, Protocol};
use super::fixture::{self, LINKTYPE_ETHERNET};

const A: [u8; 4] = [172, 16, 10, 2];
const B: [u8; 4] = [172, 16, 11, 2];

fn flow(protocol: Protocol, sport: u16, dport: u16) -> Flow {
    let src = Addr { addr: IpAddr::V4(Ipv4Addr::from(A)), port: sport };
    let dst = Addr { addr: IpAddr::V4(Ipv4Addr::from(B)), port: dport };
    Flow::new(protocol, src, dst)
}

// crc32("123456789") is the standard CRC-32 check value.
const CHECK: u32 = 0xcbf43926;

#[test]
fn udp_fingerprint() {
    let frame = fixture::udp(A, 5000, B, 5001, 1234, b"56789");
    let flow  = flow(Protocol::UDP, 5000, 5001);
    assert_eq!(Some(CHECK), fingerprint(&flow, &frame));
}

#[test]
fn tcp_fingerprint() {
    let frame = fixture::tcp(A, 5000, B, 80, 1, 23, 456789);
    let flow  = flow(Protocol::TCP, 5000, 80);
    assert_eq!(Some(CHECK), fingerprint(&flow, &frame));
}

#[test]
fn udp_fingerprint_varies_with_ip_id() {
    let flow = flow(Protocol::UDP, 5000, 5001);
    let a = fingerprint(&flow, &fixture::udp(A, 5000, B, 5001, 1, b"same"));
    let b = fingerprint(&flow, &fixture::udp(A, 5000, B, 5001, 2, b"same"));
    assert!(a.is_some());
    assert_ne!(a, b);
}

#[test]
fn fingerprint_filters() {
    let flow = flow(Protocol::TCP, 5000, 80);

    let reply = fixture::tcp(B, 80, A, 5000, 1, 2, 3);
    let port  = fixture::tcp(A, 5001, B, 80, 1, 2, 3);
    let proto = fixture::udp(A, 5000, B, 80, 1, b"x");

    assert_eq!(None, fingerprint(&flow, &reply));
    assert_eq!(None, fingerprint(&flow, &port));
    assert_eq!(None, fingerprint(&flow, &proto));
    assert_eq!(None, fingerprint(&flow, &fixture::arp()));
    assert_eq!(None, fingerprint(&flow, &[0u8; 10]));
}

#[test]
fn fingerprint_vlan() {
    let frame = fixture::tcp(A, 5000, B, 80, 1, 23, 456789);
    let frame = fixture::vlan(&fixture::vlan(&frame, 10), 20);
    let flow  = flow(Protocol::TCP, 5000, 80);
    assert_eq!(Some(CHECK), fingerprint(&flow, &frame));
}

#[test]
fn flow_key() {
    let frame = fixture::udp(A, 5000, B, 5001, 1, b"x");
    assert_eq!(Some(flow(Protocol::UDP, 5000, 5001)), key(&frame));
    assert_eq!(None, key(&fixture::arp()));
}

#[test]
fn fingerprints() -> Result<()> {
    let flow   = flow(Protocol::UDP, 5000, 5001);
    let frames = vec![
        (1.000001, fixture::udp(A, 5000, B, 5001, 1, b"a")),
        (1.5,      fixture::arp()),
        (2.25,     fixture::udp(B, 5001, A, 5000, 2, b"b")),
        (3.5,      fixture::udp(A, 5000, B, 5001, 3, b"c")),
    ];

    for gzip in &[false, true] {
        let file = fixture::write(&fixture::pcap(LINKTYPE_ETHERNET, &frames), *gzip)?;
        let recs = Fingerprints::open(file.path(), flow)?.collect::<Result<Vec<_>, _>>()?;

        assert_eq!(2, recs.len());
        assert!((recs[0].ts - 1.000001).abs() < 1e-9);
        assert!((recs[1].ts - 3.5).abs() < 1e-9);
        assert_eq!(fingerprint(&flow, &frames[0].1), Some(recs[0].hash));
        assert_eq!(fingerprint(&flow, &frames[3].1), Some(recs[1].hash));
    }

    Ok(())
}

#[test]
fn discover_flows() -> Result<()> {
    let frames = vec![
        (1.0, fixture::tcp(B, 80, A, 5000, 1, 2, 3)),
        (2.0, fixture::tcp(A, 5000, B, 80, 1, 2, 3)),
        (3.0, fixture::tcp(A, 5000, B, 80, 2, 3, 4)),
        (4.0, fixture::udp(A, 6000, B, 6001, 3, b"x")),
        (5.0, fixture::arp()),
    ];
    let file  = fixture::write(&fixture::pcap(LINKTYPE_ETHERNET, &frames), true)?;
    let flows = discover(file.path())?;

    let reply = Flow::new(Protocol::TCP, flow(Protocol::TCP, 0, 80).dst, flow(Protocol::TCP, 5000, 0).src);

    assert_eq!(3, flows.len());
    assert!(flows.contains(&flow(Protocol::TCP, 5000, 80)));
    assert!(flows.contains(&flow(Protocol::UDP, 6000, 6001)));
    assert!(flows.contains(&reply));
    assert!(flows.windows(2).all(|w| w[0] < w[1]));

    Ok(())
}

#[test]
fn missing_capture() {
    let flow = flow(Protocol::TCP, 5000, 80);
    match Fingerprints::open("/nonexistent/capture.dmp.gz".as_ref(), flow) {
        Err(Error::Capture(path, _)) => assert!(path.ends_with("capture.dmp.gz")),
        Err(e)                       => panic!("unexpected error {}", e),
        Ok(_)                        => panic!("opened missing capture"),
    }
}

#[test]
fn not_ethernet() -> Result<()> {
    let file = fixture::write(&fixture::pcap(101, &[]), false)?;
    assert!(matches!(discover(file.path()), Err(Error::Capture(..))));
    Ok(())
}

#[test]
fn truncated_capture() -> Result<()> {
    let flow   = flow(Protocol::UDP, 5000, 5001);
    let frames = vec![
        (1.0, fixture::udp(A, 5000, B, 5001, 1, b"a")),
        (2.0, fixture::udp(A, 5000, B, 5001, 2, b"b")),
    ];

    let mut bytes = fixture::pcap(LINKTYPE_ETHERNET, &frames);
    bytes.truncate(bytes.len() - 10);

    let file = fixture::write(&bytes, false)?;
    let recs = Fingerprints::open(file.path(), flow)?.collect::<Vec<_>>();

    assert_eq!(2, recs.len());
    assert!(recs[0].is_ok());
    assert!(matches!(recs[1], Err(Error::Capture(..))));

    Ok(())
}
