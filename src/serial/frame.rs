use std::io::{self, Write};

//frame format: two labeled ASCII lines per tick, CRLF terminated
//              M1: <(-left)+20>\r\n
//              M2: <right>\r\n
pub const M1_LABEL: &str = "M1: ";
pub const M2_LABEL: &str = "M2: ";
pub const LINE_END: &str = "\r\n";

//fixed offset the downstream controller expects on the M1 channel only
pub const M1_OFFSET: i32 = 20;

//emitted once at startup, before the first sample
pub const BANNER: &[u8] = b"M1:startup\r\nM2:startup\r\n";

/// One tick's motor speed decision, as it goes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandFrame{
    pub right: i32,
    pub left: i32,
}

impl CommandFrame{
    pub fn new(right: i32, left: i32) -> Self{
        CommandFrame{ right, left }
    }

    //value printed on the M1 line: negated left speed plus the fixed offset
    pub fn m1_value(&self) -> i32{
        -self.left + M1_OFFSET
    }

    pub fn m2_value(&self) -> i32{
        self.right
    }

    pub fn to_bytes(&self) -> Vec<u8>{
        format!(
            "{}{}{}{}{}{}",
            M1_LABEL,
            self.m1_value(),
            LINE_END,
            M2_LABEL,
            self.m2_value(),
            LINE_END
        )
        .into_bytes()
    }

    /// Fire-and-forget write: no flow control, no acknowledgement, no retry.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()>{
        w.write_all(&self.to_bytes())
    }

    pub fn from_bytes(data: &[u8]) -> Option<Self>{
        let text = std::str::from_utf8(data).ok()?;
        Self::parse(text)
    }

    /// Parse one frame back out of its two lines, inverting the M1 offset.
    pub fn parse(text: &str) -> Option<Self>{
        let mut lines = text.split(LINE_END);
        let m1 = lines.next()?.strip_prefix(M1_LABEL)?.trim().parse::<i32>().ok()?;
        let m2 = lines.next()?.strip_prefix(M2_LABEL)?.trim().parse::<i32>().ok()?;
        Some(CommandFrame{ right: m2, left: M1_OFFSET - m1 })
    }
}

/// Write the fixed startup banner lines.
pub fn write_banner<W: Write>(w: &mut W) -> io::Result<()>{
    w.write_all(BANNER)
}
