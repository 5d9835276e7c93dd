//! Splitting and resolving CSI/DCS parameter runs.

use std::str;

use crate::error::{ParamError, Result};

/// Separator between parameter fields.
pub const PARAM_SEPARATOR: u8 = b';';

/// Split a raw parameter run into its fields.
///
/// Every separator delimits a field, so an empty run yields one empty field
/// and `;;` yields three. Any byte that is neither an ASCII digit nor the
/// separator is rejected, as is a separator outside ASCII.
pub fn split_params(bytes: &[u8], separator: u8) -> Result<Vec<&str>> {
    if let Some(position) = bytes
        .iter()
        .position(|&byte| !byte.is_ascii_digit() && byte != separator)
    {
        return Err(ParamError::Malformed {
            byte: bytes[position],
            position,
        });
    }

    let text = str::from_utf8(bytes).map_err(|err| {
        let position = err.valid_up_to();
        ParamError::Malformed {
            byte: bytes[position],
            position,
        }
    })?;

    Ok(text.split(char::from(separator)).collect())
}

/// [`split_params`] with the conventional `;` separator.
pub fn parse_params(bytes: &[u8]) -> Result<Vec<&str>> {
    split_params(bytes, PARAM_SEPARATOR)
}

/// Parameter fields of a single sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Params<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        Ok(Self {
            fields: parse_params(bytes)?,
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields as they appeared in the sequence.
    pub fn raw(&self) -> &[&'a str] {
        &self.fields
    }

    /// Numeric value of field `index`.
    ///
    /// A missing, empty or zero field resolves to `default`. Values that do
    /// not fit a `u16` saturate.
    pub fn get(&self, index: usize, default: u16) -> u16 {
        self.optional(index).unwrap_or(default)
    }

    /// Numeric value of field `index`, `None` when missing, empty or zero.
    pub fn optional(&self, index: usize) -> Option<u16> {
        self.fields
            .get(index)
            .and_then(|field| number(field))
            .filter(|&value| value != 0)
    }

    /// Every field in order, with empty fields resolved to `default`.
    ///
    /// Unlike [`get`](Self::get), an explicit zero is kept.
    pub fn values(&self, default: u16) -> Vec<u16> {
        self.fields
            .iter()
            .map(|field| number(field).unwrap_or(default))
            .collect()
    }
}

fn number(field: &str) -> Option<u16> {
    if field.is_empty() {
        return None;
    }

    Some(field.bytes().fold(0u16, |acc, byte| {
        acc.saturating_mul(10).saturating_add(u16::from(byte - b'0'))
    }))
}
