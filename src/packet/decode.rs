use pnet::packet::Packet as PacketExt;
use pnet::packet::ipv4::Ipv4Packet;
use pnet::packet::vlan::VlanPacket;
use pnet::packet::ethernet::{EthernetPacket, EtherTypes};
use super::Packet;

pub fn decode<'a>(p: &'a EthernetPacket<'a>) -> Option<Packet<'a>> {
    let mut ethertype = p.get_ethertype();
    let mut payload   = p.payload();

    while ethertype == EtherTypes::Vlan {
        let pkt   = VlanPacket::new(payload)?;
        ethertype = pkt.get_ethertype();
        payload   = &payload[VlanPacket::minimum_packet_size()..];
    }

    match ethertype {
        EtherTypes::Ipv4 => ipv4(payload),
        _                => None,
    }
}

fn ipv4(payload: &[u8]) -> Option<Packet> {
    let pkt = Ipv4Packet::new(payload)?;
    if pkt.get_version() != 4 || pkt.get_header_length() < 5 {
        return None;
    }
    Some(Packet(pkt))
}
