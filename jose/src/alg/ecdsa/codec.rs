//! Conversion between the fixed width `R || S` signatures JOSE uses and the ASN.1 DER
//! `SEQUENCE { INTEGER r, INTEGER s }` native ECDSA primitives produce and consume.
//!
//! See [RFC 7518 Section 3.4](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.4)

use crate::prelude::*;

const SEQUENCE: u8 = 0x30;
const INTEGER: u8 = 0x02;
/// Long form length prefix with a single length byte
const LONG_FORM_1: u8 = 0x81;

/// Encodes a raw `R || S` signature, each component being `rs_size` bytes, as DER
pub fn raw_to_der(raw: &[u8], rs_size: usize) -> RustyJoseResult<Vec<u8>> {
    if rs_size == 0 || raw.len() != rs_size * 2 {
        return Err(RustyJoseError::InvalidSignature("raw ECDSA signature has an unexpected length"));
    }
    let (r, s) = raw.split_at(rs_size);
    let (r, s) = (der_integer(r), der_integer(s));

    let len = 2 + r.len() + 2 + s.len();
    let mut der = Vec::with_capacity(len + 3);
    der.push(SEQUENCE);
    match u8::try_from(len) {
        Ok(len) if len < 0x80 => der.push(len),
        Ok(len) => der.extend([LONG_FORM_1, len]),
        Err(_) => return Err(RustyJoseError::InvalidSignature("DER signature length is not supported")),
    }
    for int in [r, s] {
        match u8::try_from(int.len()) {
            Ok(len) if len < 0x80 => der.extend([INTEGER, len]),
            _ => return Err(RustyJoseError::InvalidSignature("DER integer length is not supported")),
        }
        der.extend(int);
    }
    Ok(der)
}

/// Minimal DER INTEGER content of a big-endian unsigned value: leading zeroes are stripped, one
/// zero byte is kept when the first significant byte has its high bit set
fn der_integer(component: &[u8]) -> Vec<u8> {
    let start = component
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(component.len() - 1);
    let trimmed = &component[start..];
    let mut int = Vec::with_capacity(trimmed.len() + 1);
    if trimmed[0] > 0x7f {
        int.push(0x00);
    }
    int.extend_from_slice(trimmed);
    int
}

/// Decodes a DER signature into a raw `R || S` signature, each component being `rs_size` bytes
pub fn der_to_raw(der: &[u8], rs_size: usize) -> RustyJoseResult<Vec<u8>> {
    // smallest possible input is `30 06 02 01 00 02 01 00`
    if rs_size == 0 || der.len() < 8 || der[0] != SEQUENCE {
        return Err(RustyJoseError::InvalidSignature("not a DER encoded ECDSA signature"));
    }
    let (len, mut offset) = match der[1] {
        LONG_FORM_1 => (der[2] as usize, 3),
        len if len < 0x80 => (len as usize, 2),
        _ => return Err(RustyJoseError::InvalidSignature("DER signature length is not supported")),
    };
    if offset + len != der.len() {
        return Err(RustyJoseError::InvalidSignature("DER sequence length mismatch"));
    }

    let r = read_integer(der, &mut offset, rs_size)?;
    let s = read_integer(der, &mut offset, rs_size)?;
    if offset != der.len() {
        return Err(RustyJoseError::InvalidSignature("trailing bytes after DER signature"));
    }

    let mut raw = vec![0u8; rs_size * 2];
    raw[rs_size - r.len()..rs_size].copy_from_slice(r);
    raw[2 * rs_size - s.len()..].copy_from_slice(s);
    Ok(raw)
}

/// Reads an INTEGER record at `offset` and returns its value without sign padding
fn read_integer<'a>(der: &'a [u8], offset: &mut usize, rs_size: usize) -> RustyJoseResult<&'a [u8]> {
    if der.get(*offset) != Some(&INTEGER) {
        return Err(RustyJoseError::InvalidSignature("expected a DER INTEGER"));
    }
    let len = *der
        .get(*offset + 1)
        .ok_or(RustyJoseError::InvalidSignature("truncated DER signature"))? as usize;
    if len == 0 || len > rs_size + 1 {
        return Err(RustyJoseError::InvalidSignature("ECDSA signature component has an invalid length"));
    }
    let start = *offset + 2;
    let value = der
        .get(start..start + len)
        .ok_or(RustyJoseError::InvalidSignature("truncated DER signature"))?;
    *offset = start + len;

    if len == rs_size + 1 {
        if value[0] != 0x00 {
            return Err(RustyJoseError::InvalidSignature("ECDSA signature component is too large"));
        }
        return Ok(&value[1..]);
    }
    Ok(value)
}
