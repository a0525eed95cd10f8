use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::{DayKey, LeadingInt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Teaching days shown as grid columns, Monday first.
///
/// Parsing expects text already folded by [`DayKey::to_day_key`]; strum's
/// case folding is ASCII-only and would miss `"MIÉRCOLES"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum SchoolDay {
    #[strum(serialize = "lunes", serialize = "lu", serialize = "l", to_string = "Lunes")]
    Lunes,
    #[strum(serialize = "martes", serialize = "ma", serialize = "m", to_string = "Martes")]
    Martes,
    #[strum(
        serialize = "miércoles",
        serialize = "miercoles",
        serialize = "mi",
        serialize = "x",
        to_string = "Miércoles"
    )]
    Miercoles,
    #[strum(serialize = "jueves", serialize = "ju", serialize = "j", to_string = "Jueves")]
    Jueves,
    #[strum(serialize = "viernes", serialize = "vi", serialize = "v", to_string = "Viernes")]
    Viernes,
    #[strum(
        serialize = "sábado",
        serialize = "sabado",
        serialize = "sa",
        serialize = "s",
        to_string = "Sábado"
    )]
    Sabado,
}

impl SchoolDay {
    pub const COUNT: usize = 6;

    /// Lenient lookup used by the normalizer: unknown text is `None`.
    pub fn resolve(raw: &str) -> Option<Self> {
        Self::from_str(&raw.to_day_key()).ok()
    }

    /// Strict lookup for user-facing input.
    pub fn try_from(s: &str) -> Result<Self> {
        Self::resolve(s).ok_or_else(|| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<SchoolDay>()
            ))
        })
    }

    /// Column index, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

impl Serialize for SchoolDay {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

/// Half-open range of whole hours rendered as grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub start: i32,
    pub end: i32,
}

impl Default for HourWindow {
    /// 07:00 to 21:00, fourteen rows.
    fn default() -> Self {
        Self { start: 7, end: 21 }
    }
}

impl HourWindow {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if !(0..=24).contains(&start) || !(0..=24).contains(&end) {
            return Err(Error::Parse(format!(
                "Hour window {start}-{end} must stay within 0-24."
            )));
        }
        if start >= end {
            return Err(Error::Parse(format!(
                "Start hour '{start}' must be earlier than end hour '{end}'."
            )));
        }
        Ok(Self { start, end })
    }

    /// Accepts `"7-21"` as well as `"07:00-21:00"`; minutes are ignored.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid hour window: '{}'. Expected format: '<start>-<end>', e.g. 7-21.",
                s
            ))
        })?;
        let start = Self::parse_hour(start)?;
        let end = Self::parse_hour(end)?;
        Self::new(start, end)
    }

    fn parse_hour(token: &str) -> Result<i32> {
        let hour = token.split(':').next().unwrap_or_default().trim();
        hour.parse::<i32>()
            .map_err(|_| Error::Parse(format!("Invalid hour: '{}'.", token.trim())))
    }

    pub fn rows(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn contains(&self, hour: i32) -> bool {
        (self.start..self.end).contains(&hour)
    }

    pub fn hours(&self) -> impl Iterator<Item = i32> {
        self.start..self.end
    }

    /// Row label such as `"07:00-08:00"`.
    pub fn slot_label(hour: i32) -> String {
        format!("{:02}:00-{:02}:00", hour, hour + 1)
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

impl Serialize for HourWindow {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HourWindow {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<HourWindow, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        HourWindow::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Hour component of an `"HH:MM"` string, the way the grid reads it:
/// minutes are discarded and anything unparseable becomes 0.
pub fn hour_of(time: Option<&str>) -> i32 {
    time.and_then(|t| t.split(':').next())
        .and_then(|h| h.leading_int())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Fixed palette blocks are painted with. Labels map onto it by hash, so two
/// different subjects may share a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ColorClass {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
    Indigo,
    Amber,
}

impl ColorClass {
    pub const RESET: &'static str = crate::csi!("0m");

    /// Style class handed to web renderers.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorClass::Blue => "bg-blue-100 border-blue-400 text-blue-900",
            ColorClass::Green => "bg-green-100 border-green-400 text-green-900",
            ColorClass::Purple => "bg-purple-100 border-purple-400 text-purple-900",
            ColorClass::Orange => "bg-orange-100 border-orange-400 text-orange-900",
            ColorClass::Pink => "bg-pink-100 border-pink-400 text-pink-900",
            ColorClass::Teal => "bg-teal-100 border-teal-400 text-teal-900",
            ColorClass::Indigo => "bg-indigo-100 border-indigo-400 text-indigo-900",
            ColorClass::Amber => "bg-amber-100 border-amber-400 text-amber-900",
        }
    }

    /// Foreground ANSI color for terminal output.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            ColorClass::Blue => crate::csi!("34m"),
            ColorClass::Green => crate::csi!("32m"),
            ColorClass::Purple => crate::csi!("35m"),
            ColorClass::Orange => crate::csi!("38;5;208m"),
            ColorClass::Pink => crate::csi!("38;5;205m"),
            ColorClass::Teal => crate::csi!("36m"),
            ColorClass::Indigo => crate::csi!("38;5;61m"),
            ColorClass::Amber => crate::csi!("33m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid value for color: '{}'. Valid colors: {}",
                s.trim(),
                valid_csv::<ColorClass>()
            ))
        })
    }
}

impl Serialize for ColorClass {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.css_class())
    }
}
