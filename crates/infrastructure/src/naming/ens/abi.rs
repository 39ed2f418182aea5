//! Minimal Solidity ABI codec for the ENS calls we make.
//!
//! ```text
//! resolver(bytes32)            -> address
//! text(bytes32,string)         -> string
//! supportsInterface(bytes4)    -> bool
//! resolve(bytes,bytes)         -> bytes     (ENSIP-10 wildcard)
//! ```
//!
//! Every value is laid out in 32-byte words. A dynamic `string` or `bytes` is
//! an offset word pointing at a length word followed by the bytes,
//! right-padded to a word boundary.

use super::namehash::Node;
use std::fmt;
use thiserror::Error;

const WORD: usize = 32;

/// `keccak256("resolver(bytes32)")[..4]`
pub const RESOLVER_SELECTOR: [u8; 4] = [0x01, 0x78, 0xb8, 0xbf];

/// `keccak256("text(bytes32,string)")[..4]`
pub const TEXT_SELECTOR: [u8; 4] = [0x59, 0xd1, 0xd4, 0x3c];

/// `keccak256("supportsInterface(bytes4)")[..4]`
pub const SUPPORTS_INTERFACE_SELECTOR: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// `keccak256("resolve(bytes,bytes)")[..4]`, also the ENSIP-10 interface id.
pub const RESOLVE_SELECTOR: [u8; 4] = [0x90, 0x61, 0xb9, 0x23];

const MAX_DNS_LABEL: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("response too short: {0} bytes")]
    Truncated(usize),

    #[error("offset or length out of range")]
    OutOfRange,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("label longer than 63 bytes: {0}")]
    LabelTooLong(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn parse(s: &str) -> Result<Self, AbiError> {
        let bytes = decode_hex(s).map_err(|_| AbiError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AbiError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Strips an optional `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, AbiError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| AbiError::InvalidHex(e.to_string()))
}

pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn encode_resolver_call(node: &Node) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&RESOLVER_SELECTOR);
    data.extend_from_slice(node);
    data
}

pub fn encode_text_call(node: &Node, key: &str) -> Vec<u8> {
    let key = key.as_bytes();
    let padded_len = key.len().div_ceil(WORD) * WORD;

    let mut data = Vec::with_capacity(4 + 3 * WORD + padded_len);
    data.extend_from_slice(&TEXT_SELECTOR);
    data.extend_from_slice(node);
    data.extend_from_slice(&uint_word(2 * WORD));
    data.extend_from_slice(&uint_word(key.len()));
    data.extend_from_slice(key);
    data.resize(4 + 3 * WORD + padded_len, 0);
    data
}

pub fn encode_supports_interface_call(interface_id: [u8; 4]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&SUPPORTS_INTERFACE_SELECTOR);
    data.extend_from_slice(&interface_id);
    data.resize(4 + WORD, 0);
    data
}

/// Wraps an inner resolver call for an ENSIP-10 `resolve(name, data)`.
pub fn encode_resolve_call(dns_name: &[u8], inner: &[u8]) -> Vec<u8> {
    let name_words = WORD + padded(dns_name.len());

    let mut data = Vec::with_capacity(4 + 2 * WORD + name_words + WORD + padded(inner.len()));
    data.extend_from_slice(&RESOLVE_SELECTOR);
    data.extend_from_slice(&uint_word(2 * WORD));
    data.extend_from_slice(&uint_word(2 * WORD + name_words));
    push_bytes(&mut data, dns_name);
    push_bytes(&mut data, inner);
    data
}

/// DNS wire format: length-prefixed labels closed by the zero-length root.
/// Labels are ASCII-lowercased, as for `namehash`.
pub fn dns_encode(name: &str) -> Result<Vec<u8>, AbiError> {
    let mut out = Vec::with_capacity(name.len() + 2);

    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_DNS_LABEL {
            return Err(AbiError::LabelTooLong(label.to_string()));
        }
        out.push(label.len() as u8);
        out.extend(label.bytes().map(|b| b.to_ascii_lowercase()));
    }

    out.push(0);
    Ok(out)
}

/// An address is the low 20 bytes of the first word.
pub fn decode_address(data: &[u8]) -> Result<Address, AbiError> {
    let word = data.get(..WORD).ok_or(AbiError::Truncated(data.len()))?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&word[12..]);
    Ok(Address(address))
}

/// A `bool` is true only when the first word is exactly 1.
pub fn decode_bool(data: &[u8]) -> Result<bool, AbiError> {
    Ok(read_uint(data, 0)? == 1)
}

pub fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, AbiError> {
    let offset = read_uint(data, 0)?;
    let len = read_uint(data, offset)?;
    let start = offset.checked_add(WORD).ok_or(AbiError::OutOfRange)?;
    let end = start.checked_add(len).ok_or(AbiError::OutOfRange)?;

    data.get(start..end)
        .map(<[u8]>::to_vec)
        .ok_or(AbiError::OutOfRange)
}

pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    String::from_utf8(decode_bytes(data)?).map_err(|_| AbiError::InvalidUtf8)
}

fn padded(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

/// Appends a length word and the right-padded bytes.
fn push_bytes(data: &mut Vec<u8>, bytes: &[u8]) {
    data.extend_from_slice(&uint_word(bytes.len()));
    data.extend_from_slice(bytes);
    data.resize(data.len() + padded(bytes.len()) - bytes.len(), 0);
}

fn uint_word(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

/// Reads a uint256 word that must fit in a `usize`.
fn read_uint(data: &[u8], at: usize) -> Result<usize, AbiError> {
    let end = at.checked_add(WORD).ok_or(AbiError::OutOfRange)?;
    let word = data.get(at..end).ok_or(AbiError::Truncated(data.len()))?;

    if word[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(AbiError::OutOfRange);
    }

    let mut low = [0u8; 8];
    low.copy_from_slice(&word[WORD - 8..]);
    usize::try_from(u64::from_be_bytes(low)).map_err(|_| AbiError::OutOfRange)
}
