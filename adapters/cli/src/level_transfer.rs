#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use warehouse_core::Level;

const TRANSFER_DOMAIN: &str = "warehouse";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded level payload.
pub(crate) const TRANSFER_HEADER: &str = "warehouse:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Shareable single-line snapshot of one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct LevelTransfer {
    /// Number of columns in the transported level.
    pub(crate) columns: u32,
    /// Number of rows in the transported level.
    pub(crate) rows: u32,
    /// The transported level itself.
    pub(crate) level: Level,
}

impl LevelTransfer {
    /// Wraps a level, deriving the dimensions advertised in the header.
    pub(crate) fn from_level(level: Level) -> Self {
        let columns = level
            .rows()
            .first()
            .map_or(0, |row| row.chars().count()) as u32;
        let rows = level.rows().len() as u32;
        Self {
            columns,
            rows,
            level,
        }
    }

    /// Consumes the transfer, yielding the transported level.
    pub(crate) fn into_level(self) -> Level {
        self.level
    }

    /// Encodes the transfer into a single-line string suitable for sharing.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let json =
            serde_json::to_vec(&self.level).expect("level transfer serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{TRANSFER_HEADER}:{}x{}:{encoded}", self.columns, self.rows)
    }

    /// Decodes a transfer from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, LevelTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LevelTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(LevelTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(LevelTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(LevelTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(LevelTransferError::MissingPayload)?;

        if domain != TRANSFER_DOMAIN {
            return Err(LevelTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != TRANSFER_VERSION {
            return Err(LevelTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (columns, rows) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(LevelTransferError::InvalidEncoding)?;
        let level: Level =
            serde_json::from_slice(&bytes).map_err(LevelTransferError::InvalidPayload)?;

        Ok(Self {
            columns,
            rows,
            level,
        })
    }
}

/// Errors that can occur while decoding level transfer strings.
#[derive(Debug)]
pub(crate) enum LevelTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded transfer.
    MissingPrefix,
    /// The encoded transfer did not contain a version segment.
    MissingVersion,
    /// The encoded transfer did not include grid dimensions.
    MissingDimensions,
    /// The encoded transfer did not include the payload segment.
    MissingPayload,
    /// The encoded transfer used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded transfer used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded transfer.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
}

impl fmt::Display for LevelTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer string was empty"),
            Self::MissingPrefix => write!(f, "transfer string is missing the prefix"),
            Self::MissingVersion => write!(f, "transfer string is missing the version"),
            Self::MissingDimensions => write!(f, "transfer string is missing the grid dimensions"),
            Self::MissingPayload => write!(f, "transfer string is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "transfer prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "transfer version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse grid dimensions '{dimensions}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode transfer payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse transfer payload: {error}")
            }
        }
    }
}

impl Error for LevelTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), LevelTransferError> {
    let (columns, rows) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| LevelTransferError::InvalidDimensions(dimensions.to_owned()))?;

    let columns = columns
        .trim()
        .parse::<u32>()
        .map_err(|_| LevelTransferError::InvalidDimensions(dimensions.to_owned()))?;
    let rows = rows
        .trim()
        .parse::<u32>()
        .map_err(|_| LevelTransferError::InvalidDimensions(dimensions.to_owned()))?;

    if columns == 0 || rows == 0 {
        return Err(LevelTransferError::InvalidDimensions(
            dimensions.to_owned(),
        ));
    }

    Ok((columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_level() -> Level {
        Level::new(
            "First Push".to_owned(),
            vec!["#####".to_owned(), "#@$.#".to_owned(), "#####".to_owned()],
        )
    }

    #[test]
    fn round_trip_preserves_the_level() {
        let transfer = LevelTransfer::from_level(sample_level());

        let encoded = transfer.encode();
        assert!(encoded.starts_with(&format!("{TRANSFER_HEADER}:5x3:")));

        let decoded = LevelTransfer::decode(&encoded).expect("transfer decodes");
        assert_eq!(transfer, decoded);
        assert_eq!(decoded.into_level(), sample_level());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let encoded = format!("  {}\n", LevelTransfer::from_level(sample_level()).encode());
        let decoded = LevelTransfer::decode(&encoded).expect("transfer decodes");
        assert_eq!(decoded.level, sample_level());
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert!(matches!(
            LevelTransfer::decode("   "),
            Err(LevelTransferError::EmptyPayload)
        ));
    }

    #[test]
    fn foreign_prefixes_are_rejected() {
        assert!(matches!(
            LevelTransfer::decode("maze:v1:5x3:e30"),
            Err(LevelTransferError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn future_versions_are_rejected() {
        assert!(matches!(
            LevelTransfer::decode("warehouse:v9:5x3:e30"),
            Err(LevelTransferError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        for dimensions in ["5by3", "0x3", "5x", "x3"] {
            let encoded = format!("warehouse:v1:{dimensions}:e30");
            assert!(
                matches!(
                    LevelTransfer::decode(&encoded),
                    Err(LevelTransferError::InvalidDimensions(_))
                ),
                "dimensions '{dimensions}' should be rejected",
            );
        }
    }

    #[test]
    fn corrupted_payloads_are_rejected() {
        assert!(matches!(
            LevelTransfer::decode("warehouse:v1:5x3:!!!"),
            Err(LevelTransferError::InvalidEncoding(_))
        ));
    }
}
