//! Reads the first time series out of a WaterML 1.1 `timeSeriesResponse`.
//!
//! Only the parts of the document that end up in [`SeriesMetadata`] and the
//! `time`/`value` frame are looked at. Namespace prefixes are ignored.

use crate::hydroshare::error::DecodeError;
use crate::types::series::{SeriesMetadata, TimeValue};
use chrono::{DateTime, NaiveDateTime};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;

/// Records and metadata of one decoded time series.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSeries {
    pub records: Vec<TimeValue>,
    /// Everything but `archive`, which is not part of the payload.
    pub metadata: SeriesMetadata,
}

/// Decodes the first `timeSeries` element of a WaterML document.
///
/// Values come from the first `values` block of that series, and the method
/// and quality control descriptions from the first entry of that block.
/// Timestamps are taken from `dateTimeUTC`, or `dateTime` when it is absent.
pub fn decode_waterml(xml: &str) -> Result<DecodedSeries, DecodeError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut series_depth: Option<usize> = None;
    let mut state = SeriesState::default();

    loop {
        let event = reader.read_event().map_err(|source| DecodeError::Xml {
            position: reader.buffer_position(),
            source,
        })?;

        match event {
            Event::Start(element) => {
                let name = local_name(&element);
                if series_depth.is_none() && name == "timeSeries" {
                    series_depth = Some(path.len());
                }
                if series_depth.is_some() {
                    state.open(&name, &element)?;
                }
                path.push(name);
            }
            Event::Empty(element) if series_depth.is_some() => {
                let name = local_name(&element);
                state.open(&name, &element)?;
                // A self-closing value has no number to read.
                if let Some(time) = state.pending_time.take() {
                    return Err(DecodeError::InvalidValue {
                        time,
                        value: String::new(),
                    });
                }
            }
            Event::End(_) => {
                let name = path.pop();
                if name.as_deref() == Some("value") {
                    state.pending_time = None;
                }
                if name.as_deref() == Some("timeSeries") && series_depth == Some(path.len()) {
                    break;
                }
            }
            Event::Text(text) if series_depth.is_some() => {
                let text = text.unescape().map_err(|source| DecodeError::Xml {
                    position: reader.buffer_position(),
                    source,
                })?;
                state.text(&path, text)?;
            }
            Event::CData(data) if series_depth.is_some() => {
                let text = String::from_utf8_lossy(&data).into_owned();
                state.text(&path, Cow::Owned(text))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if series_depth.is_none() {
        return Err(DecodeError::NoTimeSeries);
    }
    Ok(DecodedSeries {
        records: state.records,
        metadata: state.metadata,
    })
}

/// What has been read from the first series so far.
#[derive(Default)]
struct SeriesState {
    values_blocks: usize,
    pending_time: Option<NaiveDateTime>,
    records: Vec<TimeValue>,
    metadata: SeriesMetadata,
}

impl SeriesState {
    fn open(&mut self, name: &str, element: &BytesStart) -> Result<(), DecodeError> {
        if name == "values" {
            self.values_blocks += 1;
        } else if name == "value" && self.values_blocks == 1 {
            let raw = timestamp_attribute(element).ok_or(DecodeError::MissingTimestamp)?;
            self.pending_time = Some(parse_timestamp(&raw)?);
        }
        Ok(())
    }

    fn text(&mut self, path: &[String], text: Cow<'_, str>) -> Result<(), DecodeError> {
        let current = path.last().map(String::as_str).unwrap_or_default();
        let parent = path
            .len()
            .checked_sub(2)
            .and_then(|i| path.get(i))
            .map(String::as_str)
            .unwrap_or_default();
        let first_values = self.values_blocks == 1;
        let metadata = &mut self.metadata;

        match (parent, current) {
            ("sourceInfo", "siteName") if metadata.site_name.is_empty() => {
                metadata.site_name = text.into_owned();
            }
            ("variable", "variableName") => metadata.variable_name = text.into_owned(),
            ("variable", "valueType") => metadata.value_type = text.into_owned(),
            ("variable", "noDataValue") => {
                metadata.no_data_value = text.trim().parse().ok();
            }
            ("unit", "unitName") => metadata.variable_unit_name = text.into_owned(),
            ("unit", "unitAbbreviation") => metadata.variable_unit = text.into_owned(),
            ("values", "value") if first_values => {
                if let Some(time) = self.pending_time {
                    let value = text.trim().parse::<f64>().map_err(|_| {
                        DecodeError::InvalidValue {
                            time,
                            value: text.to_string(),
                        }
                    })?;
                    self.records.push(TimeValue { time, value });
                }
            }
            ("method", "methodDescription")
                if first_values && metadata.method_description.is_none() =>
            {
                metadata.method_description = Some(text.into_owned());
            }
            ("qualityControlLevel", "definition")
                if first_values && metadata.quality_control_level.is_none() =>
            {
                metadata.quality_control_level = Some(text.into_owned());
            }
            _ => {}
        }
        Ok(())
    }
}

fn local_name(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn timestamp_attribute(element: &BytesStart) -> Option<String> {
    let mut local_time = None;
    for attr in element.attributes().flatten() {
        match attr.key.local_name().as_ref() {
            b"dateTimeUTC" => return Some(String::from_utf8_lossy(&attr.value).into_owned()),
            b"dateTime" => local_time = Some(String::from_utf8_lossy(&attr.value).into_owned()),
            _ => {}
        }
    }
    local_time
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DecodeError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| DecodeError::InvalidTimestamp(raw.to_string()))
}
