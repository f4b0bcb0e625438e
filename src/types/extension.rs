//! Semantic extension annotations layered on top of physical column types.
//!
//! The columnar wire format carries extension tags as a pair of metadata
//! entries: an extension name (e.g. `pandas.period`) and an opaque
//! JSON-encoded payload. Both are parsed exactly once, when the schema is
//! read, into the strongly-typed `Extension` enum. Formatting never re-parses
//! raw JSON per cell.

use serde::Deserialize;
use tracing::warn;

/// Which side(s) of a pandas-style numeric interval are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalClosed {
    /// Both bounds included: `[left, right]`.
    Both,
    /// Left bound included: `[left, right)`.
    Left,
    /// Right bound included: `(left, right]`.
    Right,
    /// Neither bound included: `(left, right)`.
    Neither,
}

impl IntervalClosed {
    /// Parse the `closed` attribute of pandas interval metadata.
    ///
    /// An unknown value degrades to `Neither` with a warning.
    pub fn parse(value: &str) -> Self {
        match value {
            "both" => IntervalClosed::Both,
            "left" => IntervalClosed::Left,
            "right" => IntervalClosed::Right,
            "neither" => IntervalClosed::Neither,
            other => {
                warn!("Unknown interval closed value: {}", other);
                IntervalClosed::Neither
            }
        }
    }

    /// Opening bracket for this closedness.
    pub fn left_bracket(&self) -> char {
        match self {
            IntervalClosed::Both | IntervalClosed::Left => '[',
            _ => '(',
        }
    }

    /// Closing bracket for this closedness.
    pub fn right_bracket(&self) -> char {
        match self {
            IntervalClosed::Both | IntervalClosed::Right => ']',
            _ => ')',
        }
    }
}

/// A named semantic annotation refining a physical column type.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    /// pandas period: a duration-since-epoch with a frequency code.
    PandasPeriod { freq: String },
    /// pandas interval: a closed/open numeric range stored as a
    /// `{left, right}` struct.
    PandasInterval { closed: IntervalClosed },
    /// Unrecognized extension; formatting falls back to the physical type.
    Other { name: String },
}

#[derive(Deserialize)]
struct PeriodMetadata {
    freq: String,
}

#[derive(Deserialize)]
struct IntervalMetadata {
    closed: String,
}

impl Extension {
    /// Parse a raw extension annotation from the wire metadata pair.
    ///
    /// Malformed or missing payloads degrade to `Extension::Other` with a
    /// warning so the column still formats through its physical type.
    pub fn from_raw(name: &str, metadata_json: Option<&str>) -> Self {
        match name {
            "pandas.period" => match metadata_json
                .map(serde_json::from_str::<PeriodMetadata>)
            {
                Some(Ok(meta)) => Extension::PandasPeriod { freq: meta.freq },
                Some(Err(e)) => {
                    warn!("Invalid pandas.period metadata: {}", e);
                    Extension::Other {
                        name: name.to_string(),
                    }
                }
                None => {
                    warn!("Extension metadata is missing for pandas.period");
                    Extension::Other {
                        name: name.to_string(),
                    }
                }
            },
            "pandas.interval" => match metadata_json
                .map(serde_json::from_str::<IntervalMetadata>)
            {
                Some(Ok(meta)) => Extension::PandasInterval {
                    closed: IntervalClosed::parse(&meta.closed),
                },
                Some(Err(e)) => {
                    warn!("Invalid pandas.interval metadata: {}", e);
                    Extension::Other {
                        name: name.to_string(),
                    }
                }
                None => {
                    warn!("Extension metadata is missing for pandas.interval");
                    Extension::Other {
                        name: name.to_string(),
                    }
                }
            },
            other => Extension::Other {
                name: other.to_string(),
            },
        }
    }

    /// Get the extension name as it appears on the wire.
    pub fn name(&self) -> &str {
        match self {
            Extension::PandasPeriod { .. } => "pandas.period",
            Extension::PandasInterval { .. } => "pandas.interval",
            Extension::Other { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_extension() {
        let ext = Extension::from_raw("pandas.period", Some(r#"{"freq":"Q-DEC"}"#));
        assert_eq!(
            ext,
            Extension::PandasPeriod {
                freq: "Q-DEC".to_string()
            }
        );
        assert_eq!(ext.name(), "pandas.period");
    }

    #[test]
    fn test_parse_interval_extension() {
        let ext = Extension::from_raw("pandas.interval", Some(r#"{"closed":"both"}"#));
        assert_eq!(
            ext,
            Extension::PandasInterval {
                closed: IntervalClosed::Both
            }
        );
    }

    #[test]
    fn test_parse_interval_unknown_closed() {
        let ext = Extension::from_raw("pandas.interval", Some(r#"{"closed":"sideways"}"#));
        assert_eq!(
            ext,
            Extension::PandasInterval {
                closed: IntervalClosed::Neither
            }
        );
    }

    #[test]
    fn test_parse_missing_metadata() {
        let ext = Extension::from_raw("pandas.period", None);
        assert_eq!(
            ext,
            Extension::Other {
                name: "pandas.period".to_string()
            }
        );
    }

    #[test]
    fn test_parse_malformed_metadata() {
        let ext = Extension::from_raw("pandas.interval", Some("not json"));
        assert_eq!(
            ext,
            Extension::Other {
                name: "pandas.interval".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_extension() {
        let ext = Extension::from_raw("geoarrow.point", Some("{}"));
        assert_eq!(
            ext,
            Extension::Other {
                name: "geoarrow.point".to_string()
            }
        );
    }

    #[test]
    fn test_brackets() {
        assert_eq!(IntervalClosed::Both.left_bracket(), '[');
        assert_eq!(IntervalClosed::Both.right_bracket(), ']');
        assert_eq!(IntervalClosed::Left.left_bracket(), '[');
        assert_eq!(IntervalClosed::Left.right_bracket(), ')');
        assert_eq!(IntervalClosed::Right.left_bracket(), '(');
        assert_eq!(IntervalClosed::Right.right_bracket(), ']');
        assert_eq!(IntervalClosed::Neither.left_bracket(), '(');
        assert_eq!(IntervalClosed::Neither.right_bracket(), ')');
    }
}
