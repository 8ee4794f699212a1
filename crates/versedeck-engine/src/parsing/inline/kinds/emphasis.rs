/// `**strong**` delimiter.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// `*emphasis*` delimiter.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
}
