use crate::error::CodecError;
use crate::question::{class_name, type_name};
use crate::utils::{read_u16, read_u32, take};
use domain_name_query_types::QType;
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRecord {
    /// The two name bytes as they appear on the wire, usually a pointer
    /// such as `0xc00c`. Not decoded.
    pub name: u16,
    pub record_type: u16,
    pub record_class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: Vec<u8>,
    pub rendered: String,
    /// Offset of the first byte after RDATA.
    pub position: usize,
}

impl ResourceRecord {
    pub fn parse(buf: &[u8], position: usize) -> Result<Self, CodecError> {
        let (name, position) = read_u16(buf, position)?;
        let (record_type, position) = read_u16(buf, position)?;
        let (record_class, position) = read_u16(buf, position)?;
        let (ttl, position) = read_u32(buf, position)?;
        let (rdlength, position) = read_u16(buf, position)?;

        let rdata = take(buf, position, rdlength as usize)?.to_vec();
        let rendered = render_rdata(record_type, &rdata);

        let record = Self {
            name,
            record_type,
            record_class,
            ttl,
            rdlength,
            rdata,
            rendered,
            position: position + rdlength as usize,
        };

        Ok(record)
    }

    pub fn rdata_hex(&self) -> String {
        self.rdata.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.record_type != QType::A.code() || self.rdata.len() != 4 {
            return None;
        }

        Some(Ipv4Addr::new(
            self.rdata[0],
            self.rdata[1],
            self.rdata[2],
            self.rdata[3],
        ))
    }
}

// NS rdata is a (usually compressed) domain name, yet it is rendered the same
// way as an A address here. Callers wanting the name must decode `rdata`.
fn render_rdata(record_type: u16, rdata: &[u8]) -> String {
    match QType::from_code(record_type) {
        Some(QType::A) | Some(QType::Ns) => rdata
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("."),
        None => String::new(),
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:#06x}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            class_name(self.record_class),
            type_name(self.record_type),
            self.rendered
        )
    }
}
