use std::io::Write;
use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::NamedTempFile;

pub const LINKTYPE_ETHERNET: u32 = 1;

pub fn tcp(src: [u8; 4], sport: u16, dst: [u8; 4], dport: u16, id: u16, seq: u32, ack: u32) -> Vec<u8> {
    let mut seg = Vec::with_capacity(20);
    seg.extend_from_slice(&sport.to_be_bytes());
    seg.extend_from_slice(&dport.to_be_bytes());
    seg.extend_from_slice(&seq.to_be_bytes());
    seg.extend_from_slice(&ack.to_be_bytes());
    seg.extend_from_slice(&[0x50, 0x10, 0xff, 0xff, 0, 0, 0, 0]);
    ethernet(0x0800, &ipv4(src, dst, id, 6, &seg))
}

pub fn udp(src: [u8; 4], sport: u16, dst: [u8; 4], dport: u16, id: u16, payload: &[u8]) -> Vec<u8> {
    let len = 8 + payload.len() as u16;
    let mut seg = Vec::with_capacity(len as usize);
    seg.extend_from_slice(&sport.to_be_bytes());
    seg.extend_from_slice(&dport.to_be_bytes());
    seg.extend_from_slice(&len.to_be_bytes());
    seg.extend_from_slice(&[0, 0]);
    seg.extend_from_slice(payload);
    ethernet(0x0800, &ipv4(src, dst, id, 17, &seg))
}

pub fn arp() -> Vec<u8> {
    ethernet(0x0806, &[0u8; 28])
}

pub fn vlan(frame: &[u8], tag: u16) -> Vec<u8> {
    let mut out = frame[..12].to_vec();
    out.extend_from_slice(&0x8100u16.to_be_bytes());
    out.extend_from_slice(&tag.to_be_bytes());
    out.extend_from_slice(&frame[12..]);
    out
}

fn ipv4(src: [u8; 4], dst: [u8; 4], id: u16, proto: u8, payload: &[u8]) -> Vec<u8> {
    let len = 20 + payload.len() as u16;
    let mut pkt = vec![0x45, 0];
    pkt.extend_from_slice(&len.to_be_bytes());
    pkt.extend_from_slice(&id.to_be_bytes());
    pkt.extend_from_slice(&[0x40, 0x00, 64, proto, 0, 0]);
    pkt.extend_from_slice(&src);
    pkt.extend_from_slice(&dst);
    pkt.extend_from_slice(payload);
    pkt
}

fn ethernet(ethertype: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x02, 0, 0, 0, 0, 0x02, 0x02, 0, 0, 0, 0, 0x01];
    frame.extend_from_slice(&ethertype.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

pub fn pcap(linktype: u32, frames: &[(f64, Vec<u8>)]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&0xa1b2c3d4u32.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes());
    buf.extend_from_slice(&0i32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&65535u32.to_le_bytes());
    buf.extend_from_slice(&linktype.to_le_bytes());

    for (ts, frame) in frames {
        let sec  = ts.trunc() as u32;
        let usec = ((ts - ts.trunc()) * 1e6).round() as u32;
        buf.extend_from_slice(&sec.to_le_bytes());
        buf.extend_from_slice(&usec.to_le_bytes());
        buf.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        buf.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        buf.extend_from_slice(frame);
    }

    buf
}

pub fn gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(bytes)?;
    Ok(gz.finish()?)
}

pub fn write(bytes: &[u8], compress: bool) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    if compress {
        file.write_all(&gzip(bytes)?)?;
    } else {
        file.write_all(bytes)?;
    }
    file.flush()?;
    Ok(file)
}
