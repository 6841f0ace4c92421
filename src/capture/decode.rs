use std::net::IpAddr;
use flate2::Crc;
use pnet::packet::Packet as PacketExt;
use pnet::packet::ethernet::EthernetPacket;
use crate::packet::{self, Transport::*};
use super::flow::{Addr, Flow, Protocol};

// CRC-32 over the decimal IP identification followed by the UDP payload, or
// by the decimal TCP sequence and acknowledgement numbers.
pub fn fingerprint(flow: &Flow, frame: &[u8]) -> Option<u32> {
    let eth = EthernetPacket::new(frame)?;
    let pkt = packet::decode(&eth)?;

    if IpAddr::V4(pkt.src()) != flow.src.addr || IpAddr::V4(pkt.dst()) != flow.dst.addr {
        return None;
    }

    let mut crc = Crc::new();
    crc.update(pkt.id().to_string().as_bytes());

    match (flow.protocol, pkt.transport()?) {
        (Protocol::UDP, UDP(p)) => {
            if p.get_source() != flow.src.port || p.get_destination() != flow.dst.port {
                return None;
            }
            crc.update(p.payload());
        }
        (Protocol::TCP, TCP(p)) => {
            if p.get_source() != flow.src.port || p.get_destination() != flow.dst.port {
                return None;
            }
            let seq = p.get_sequence().to_string();
            let ack = p.get_acknowledgement().to_string();
            crc.update(seq.as_bytes());
            crc.update(ack.as_bytes());
        }
        _ => return None,
    }

    Some(crc.sum())
}

pub fn key(frame: &[u8]) -> Option<Flow> {
    let eth = EthernetPacket::new(frame)?;
    let pkt = packet::decode(&eth)?;

    let src = IpAddr::V4(pkt.src());
    let dst = IpAddr::V4(pkt.dst());

    match pkt.transport()? {
        TCP(p)   => Some(Flow::new(Protocol::TCP,
                                   Addr { addr: src, port: p.get_source() },
                                   Addr { addr: dst, port: p.get_destination() })),
        UDP(p)   => Some(Flow::new(Protocol::UDP,
                                   Addr { addr: src, port: p.get_source() },
                                   Addr { addr: dst, port: p.get_destination() })),
        Other(_) => None,
    }
}
