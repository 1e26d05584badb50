//! Read-only view of a cell's content

use crate::number_format::is_date_format;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use umya_spreadsheet::Cell;

/// Classified cell content
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value
    Empty,
    /// Text (also used for error values such as `#N/A`)
    Text(String),
    /// Plain number
    Number(f64),
    /// Boolean
    Boolean(bool),
    /// Number displayed through a date/time format
    DateTime(NaiveDateTime),
    /// Serial below 1 displayed through a date/time format
    Time(NaiveTime),
}

impl CellValue {
    /// Classify a cell from its stored value and number format
    pub fn of(cell: &Cell) -> Self {
        let raw = cell.get_value();
        if raw.is_empty() {
            return CellValue::Empty;
        }

        match cell.get_data_type() {
            "s" | "str" | "inlineStr" | "e" => CellValue::Text(raw.to_string()),
            "b" => CellValue::Boolean(raw.eq_ignore_ascii_case("TRUE") || raw == "1"),
            _ => match raw.parse::<f64>() {
                Ok(n) => {
                    let dated = cell
                        .get_style()
                        .get_number_format()
                        .map(|f| is_date_format(f.get_format_code()))
                        .unwrap_or(false);
                    if !dated {
                        return CellValue::Number(n);
                    }
                    if (0.0..1.0).contains(&n) {
                        return from_excel_time(n)
                            .map(CellValue::Time)
                            .unwrap_or(CellValue::Number(n));
                    }
                    from_excel_serial(n)
                        .map(CellValue::DateTime)
                        .unwrap_or(CellValue::Number(n))
                }
                Err(_) => CellValue::Text(raw.to_string()),
            },
        }
    }

    /// Check if the value is a date/time
    pub fn is_date(&self) -> bool {
        matches!(self, CellValue::DateTime(_) | CellValue::Time(_))
    }

    /// Check if the cell counts towards its column's width
    ///
    /// Empty values, empty text, numeric zero and `false` do not count.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Boolean(b) => *b,
            CellValue::DateTime(_) | CellValue::Time(_) => true,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Boolean(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

/// Convert an Excel serial (1900 date system) to a date-time
///
/// Serial 1 is 1900-01-01. Serials after 60 account for the fictional
/// 1900-02-29 Excel keeps for Lotus compatibility.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    // 2_958_465 is 9999-12-31, the last date Excel displays
    if !serial.is_finite() || !(0.0..2_958_466.0).contains(&serial) {
        return None;
    }

    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;

    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?.and_hms_opt(0, 0, 0)?;
    let adjusted = if days > 60 { days - 1 } else { days };
    base.checked_add_signed(Duration::days(adjusted))?
        .checked_add_signed(Duration::seconds(seconds))
}

/// Convert the fractional part of a day (`0.0..1.0`) to a time of day
///
/// A fraction that rounds up to a full day is `None`.
pub fn from_excel_time(fraction: f64) -> Option<NaiveTime> {
    if !(0.0..1.0).contains(&fraction) {
        return None;
    }
    let seconds = (fraction * 86_400.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
