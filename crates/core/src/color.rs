//! The `Rgb` value object and the channel validator that builds it.
//!
//! Raw channel values arrive untyped from a dynamic host (pointer offsets,
//! JavaScript values, command-line text), so they are modelled as
//! [`ChannelInput`]. [`parse_channel`] is the strict check; [`make_color`]
//! is the total factory that substitutes 0 for every rejected channel and
//! logs the rejection at error level.

use std::fmt;

use crate::error::TileError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Largest value a color channel may hold.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// An 8-bit RGB color.
///
/// Channels are `u8`, so a constructed `Rgb` is always in range. There are no
/// setters: validation happens once, at construction.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

/// A raw, not yet validated channel value.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelInput {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
    /// Any structured value, kept as its textual form for diagnostics.
    Other(String),
}

impl fmt::Display for ChannelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelInput::Int(v) => write!(f, "{v}"),
            ChannelInput::Float(v) => write!(f, "{v}"),
            ChannelInput::Text(s) => write!(f, "{s}"),
            ChannelInput::Bool(v) => write!(f, "{v}"),
            ChannelInput::Null => f.write_str("null"),
            ChannelInput::Other(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! channel_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChannelInput {
                fn from(v: $t) -> Self {
                    ChannelInput::Int(i64::from(v))
                }
            }
        )*
    };
}

channel_input_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<f64> for ChannelInput {
    fn from(v: f64) -> Self {
        ChannelInput::Float(v)
    }
}

impl From<f32> for ChannelInput {
    fn from(v: f32) -> Self {
        ChannelInput::Float(f64::from(v))
    }
}

impl From<bool> for ChannelInput {
    fn from(v: bool) -> Self {
        ChannelInput::Bool(v)
    }
}

impl From<&str> for ChannelInput {
    fn from(s: &str) -> Self {
        ChannelInput::Text(s.to_owned())
    }
}

impl From<String> for ChannelInput {
    fn from(s: String) -> Self {
        ChannelInput::Text(s)
    }
}

impl From<Value> for ChannelInput {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => ChannelInput::Null,
            Value::Bool(b) => ChannelInput::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ChannelInput::Int(i),
                None => ChannelInput::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ChannelInput::Text(s),
            other => ChannelInput::Other(other.to_string()),
        }
    }
}

/// Validates a single channel value.
///
/// The value must already be an integer: an `Int`, or a finite `Float` with
/// no fractional part. It must also lie in `[0, 255]`. Numeric text is rejected.
pub fn parse_channel(value: &ChannelInput) -> Result<u8, TileError> {
    let parsed = match value {
        ChannelInput::Int(v) => u8::try_from(*v).ok(),
        ChannelInput::Float(v)
            if v.is_finite() && v.fract() == 0.0 && (0.0..=255.0).contains(v) =>
        {
            Some(*v as u8)
        }
        _ => None,
    };
    parsed.ok_or_else(|| TileError::InvalidChannelValue {
        got: value.to_string(),
        max: MAX_CHANNEL_VALUE,
    })
}

/// Validates a channel, logging the rejection and returning 0 if it is invalid.
pub fn channel_or_zero(value: &ChannelInput) -> u8 {
    parse_channel(value).unwrap_or_else(|e| {
        log::error!("{e}");
        0
    })
}

/// Builds a color from three raw channel values. Never fails.
///
/// Each invalid channel becomes 0 and produces one `log::error!` record.
pub fn make_color(
    r: impl Into<ChannelInput>,
    g: impl Into<ChannelInput>,
    b: impl Into<ChannelInput>,
) -> Rgb {
    Rgb {
        r: channel_or_zero(&r.into()),
        g: channel_or_zero(&g.into()),
        b: channel_or_zero(&b.into()),
    }
}

/// Like [`make_color`], but hands every rejection to `report` instead of the log.
pub fn make_color_reporting(
    r: impl Into<ChannelInput>,
    g: impl Into<ChannelInput>,
    b: impl Into<ChannelInput>,
    mut report: impl FnMut(TileError),
) -> Rgb {
    let mut channel = |value: ChannelInput| {
        parse_channel(&value).unwrap_or_else(|e| {
            report(e);
            0
        })
    };
    let r = channel(r.into());
    let g = channel(g.into());
    let b = channel(b.into());
    Rgb { r, g, b }
}

impl Rgb {
    /// Creates a color from channels that are already known to be valid.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same as [`make_color`].
    pub fn make(
        r: impl Into<ChannelInput>,
        g: impl Into<ChannelInput>,
        b: impl Into<ChannelInput>,
    ) -> Self {
        make_color(r, g, b)
    }

    pub fn red(self) -> u8 {
        self.r
    }

    pub fn green(self) -> u8 {
        self.g
    }

    pub fn blue(self) -> u8 {
        self.b
    }

    /// CSS functional notation, e.g. `"rgb(10, 5, 5)"`.
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `TileError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, TileError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(TileError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| TileError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: component(0..2, "red")?,
            g: component(2..4, "green")?,
            b: component(4..6, "blue")?,
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect_errors(
        r: impl Into<ChannelInput>,
        g: impl Into<ChannelInput>,
        b: impl Into<ChannelInput>,
    ) -> (Rgb, Vec<TileError>) {
        let mut errors = Vec::new();
        let color = make_color_reporting(r, g, b, |e| errors.push(e));
        (color, errors)
    }

    // -- parse_channel --

    #[test]
    fn parse_channel_accepts_range_bounds() {
        assert_eq!(parse_channel(&ChannelInput::Int(0)), Ok(0));
        assert_eq!(parse_channel(&ChannelInput::Int(255)), Ok(255));
    }

    #[test]
    fn parse_channel_rejects_256() {
        let err = parse_channel(&ChannelInput::Int(256)).unwrap_err();
        assert!(err.to_string().contains("256"), "got: {err}");
    }

    #[test]
    fn parse_channel_rejects_negative() {
        assert!(parse_channel(&ChannelInput::Int(-1)).is_err());
    }

    #[test]
    fn parse_channel_rejects_fractional_float() {
        let err = parse_channel(&ChannelInput::Float(1.5)).unwrap_err();
        assert!(err.to_string().contains("1.5"), "got: {err}");
    }

    #[test]
    fn parse_channel_accepts_integral_float() {
        assert_eq!(parse_channel(&ChannelInput::Float(10.0)), Ok(10));
    }

    #[test]
    fn parse_channel_rejects_non_finite_floats() {
        assert!(parse_channel(&ChannelInput::Float(f64::NAN)).is_err());
        assert!(parse_channel(&ChannelInput::Float(f64::INFINITY)).is_err());
        assert!(parse_channel(&ChannelInput::Float(f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn parse_channel_rejects_numeric_text() {
        assert!(parse_channel(&ChannelInput::from("10")).is_err());
    }

    #[test]
    fn parse_channel_rejects_non_numeric_kinds() {
        assert!(parse_channel(&ChannelInput::Bool(true)).is_err());
        assert!(parse_channel(&ChannelInput::Null).is_err());
        assert!(parse_channel(&ChannelInput::from(json!([1, 2]))).is_err());
    }

    #[test]
    fn invalid_channel_error_carries_max() {
        let err = parse_channel(&ChannelInput::Int(300)).unwrap_err();
        assert_eq!(
            err,
            TileError::InvalidChannelValue {
                got: "300".into(),
                max: 255
            }
        );
    }

    // -- ChannelInput conversions --

    #[test]
    fn channel_input_from_json_number_kinds() {
        assert_eq!(ChannelInput::from(json!(7)), ChannelInput::Int(7));
        assert_eq!(ChannelInput::from(json!(2.5)), ChannelInput::Float(2.5));
        assert_eq!(
            ChannelInput::from(json!("7")),
            ChannelInput::Text("7".into())
        );
        assert_eq!(ChannelInput::from(json!(null)), ChannelInput::Null);
        assert_eq!(ChannelInput::from(json!(false)), ChannelInput::Bool(false));
    }

    #[test]
    fn channel_input_displays_like_host_values() {
        assert_eq!(ChannelInput::Float(1.5).to_string(), "1.5");
        assert_eq!(ChannelInput::Float(256.0).to_string(), "256");
        assert_eq!(ChannelInput::Null.to_string(), "null");
        assert_eq!(ChannelInput::from("abc").to_string(), "abc");
    }

    // -- make_color --

    #[test]
    fn make_color_valid_channels_pass_through() {
        let (color, errors) = collect_errors(10, 5, 5);
        assert_eq!(color, Rgb::new(10, 5, 5));
        assert!(errors.is_empty());
    }

    #[test]
    fn make_color_out_of_range_red_becomes_zero() {
        let (color, errors) = collect_errors(256, 0, 0);
        assert_eq!(color, Rgb::new(0, 0, 0));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("256"));
    }

    #[test]
    fn make_color_fractional_red_becomes_zero() {
        let (color, errors) = collect_errors(1.5, 0, 0);
        assert_eq!(color, Rgb::new(0, 0, 0));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn make_color_validates_channels_independently() {
        let (color, errors) = collect_errors(-3, 128, "blue");
        assert_eq!(color, Rgb::new(0, 128, 0));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn make_color_logging_variant_matches_reporting_variant() {
        assert_eq!(make_color(256, 7, 1.5), Rgb::new(0, 7, 0));
        assert_eq!(Rgb::make(1, 2, 3), Rgb::new(1, 2, 3));
    }

    // -- diagnostics through the `log` facade --

    mod capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::cell::RefCell;

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
        }

        struct CaptureLogger;

        static LOGGER: CaptureLogger = CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS.with(|r| {
                    r.borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }

            fn flush(&self) {}
        }

        /// Runs `f` and returns the records it logged on this thread.
        pub fn logs_of(f: impl FnOnce()) -> Vec<(Level, String)> {
            // Only this module installs a logger in the test binary.
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
            RECORDS.with(|r| r.borrow_mut().clear());
            f();
            RECORDS.with(|r| r.take())
        }
    }

    #[test]
    fn make_color_logs_one_error_naming_the_bad_value() {
        let mut color = Rgb::default();
        let logs = capture::logs_of(|| color = make_color(256, 0, 0));
        assert_eq!(color, Rgb::new(0, 0, 0));
        assert_eq!(logs.len(), 1, "records: {logs:?}");
        assert_eq!(logs[0].0, log::Level::Error);
        assert!(logs[0].1.contains("256"), "got: {}", logs[0].1);
        assert!(logs[0].1.contains("[0, ..., 255]"), "got: {}", logs[0].1);
    }

    #[test]
    fn make_color_logs_each_rejected_channel() {
        let logs = capture::logs_of(|| {
            make_color(1.5, "x", -1);
        });
        assert_eq!(logs.len(), 3, "records: {logs:?}");
        assert!(logs.iter().all(|(level, _)| *level == log::Level::Error));
    }

    #[test]
    fn make_color_logs_nothing_for_valid_input() {
        let logs = capture::logs_of(|| {
            make_color(10, 5, 5);
            channel_or_zero(&ChannelInput::Int(255));
        });
        assert!(logs.is_empty(), "records: {logs:?}");
    }

    #[test]
    fn channel_or_zero_substitutes_zero() {
        assert_eq!(channel_or_zero(&ChannelInput::Int(999)), 0);
        assert_eq!(channel_or_zero(&ChannelInput::Int(42)), 42);
    }

    // -- text encodings --

    #[test]
    fn to_css_uses_comma_space_separators() {
        assert_eq!(Rgb::new(10, 5, 5).to_css(), "rgb(10, 5, 5)");
        assert_eq!(format!("{}", Rgb::new(0, 255, 1)), "rgb(0, 255, 1)");
    }

    #[test]
    fn accessors_return_channels() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!((c.red(), c.green(), c.blue()), (1, 2, 3));
        assert_eq!(<[u8; 3]>::from(c), [1, 2, 3]);
    }

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_hex("FF0080").unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Rgb::from_hex("#ff00").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("ééé").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(10, 5, 255).to_hex(), "#0a05ff");
    }

    // -- Serde tests --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_in_range_integer_is_accepted(v in 0i64..=255) {
                prop_assert_eq!(parse_channel(&ChannelInput::Int(v)), Ok(v as u8));
            }

            #[test]
            fn every_out_of_range_integer_becomes_zero_with_report(
                v in prop_oneof![i64::MIN..0i64, 256i64..=i64::MAX]
            ) {
                let (color, errors) = collect_errors(v, 0, 0);
                prop_assert_eq!(color.red(), 0);
                prop_assert_eq!(errors.len(), 1);
            }

            #[test]
            fn fractional_floats_are_rejected(v in 0.0f64..255.0) {
                prop_assume!(v.fract() != 0.0);
                prop_assert!(parse_channel(&ChannelInput::Float(v)).is_err());
            }

            #[test]
            fn make_color_is_total_over_mixed_inputs(
                r in any::<i64>(), g in any::<f64>(), b in ".*"
            ) {
                let (_, errors) = collect_errors(r, g, b);
                prop_assert!(errors.len() <= 3);
            }

            #[test]
            fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = Rgb::new(r, g, b);
                prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }
        }
    }
}
