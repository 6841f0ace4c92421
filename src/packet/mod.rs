use std::net::Ipv4Addr;
use pnet::packet::Packet as PacketExt;
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::Ipv4Packet;
use pnet::packet::tcp::TcpPacket;
use pnet::packet::udp::UdpPacket;

pub use decode::decode;

mod decode;

pub struct Packet<'a>(Ipv4Packet<'a>);

pub enum Transport<'a> {
    TCP(TcpPacket<'a>),
    UDP(UdpPacket<'a>),
    Other(u8),
}

impl<'a> Packet<'a> {
    pub fn src(&self) -> Ipv4Addr {
        self.0.get_source()
    }

    pub fn dst(&self) -> Ipv4Addr {
        self.0.get_destination()
    }

    pub fn id(&self) -> u16 {
        self.0.get_identification()
    }

    // Non-initial fragments carry no transport header.
    pub fn transport(&self) -> Option<Transport<'_>> {
        if self.0.get_fragment_offset() != 0 {
            return None;
        }

        let payload = self.0.payload();
        match self.0.get_next_level_protocol() {
            IpNextHeaderProtocols::Tcp => TcpPacket::new(payload).map(Transport::TCP),
            IpNextHeaderProtocols::Udp => UdpPacket::new(payload).map(Transport::UDP),
            other                      => Some(Transport::Other(other.0)),
        }
    }
}
