use crate::error::{ProcessingError, Result};

/// How the sign of a decimal-degree value is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignConvention {
    /// Every value is written as negative (southern/western hemisphere data)
    #[default]
    AlwaysNegative,
    /// N/E are positive, S/W/O are negative, anything else stays negative
    FromHemisphere,
}

/// DMS component list: degrees, minutes, seconds and hemisphere letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsCoordinate<'a> {
    pub degrees: &'a str,
    pub minutes: &'a str,
    pub seconds: &'a str,
    pub hemisphere: &'a str,
}

impl<'a> DmsCoordinate<'a> {
    /// Build from an already split component list. Requires exactly 4 elements.
    pub fn from_components(components: &[&'a str]) -> Option<Self> {
        match components {
            &[degrees, minutes, seconds, hemisphere] => Some(Self {
                degrees,
                minutes,
                seconds,
                hemisphere,
            }),
            _ => None,
        }
    }

    /// Split coordinate text such as `"01 30 00 S"` on whitespace.
    ///
    /// # Examples
    /// ```
    /// use cnefe2josm::utils::DmsCoordinate;
    ///
    /// assert!(DmsCoordinate::parse("01 30 00 S").is_some());
    /// assert!(DmsCoordinate::parse("01 30 S").is_none());
    /// ```
    pub fn parse(text: &'a str) -> Option<Self> {
        let components: Vec<&str> = text.split_whitespace().collect();
        Self::from_components(&components)
    }

    /// Hemisphere letter for display, with the Portuguese `O` (Oeste) shown as `W`
    pub fn display_hemisphere(&self) -> &'a str {
        if self.hemisphere == "O" {
            "W"
        } else {
            self.hemisphere
        }
    }

    /// Symbolic form: `1° 30' 00" S`. Numeric text is passed through untouched.
    pub fn format_symbolic(&self) -> String {
        format!(
            "{}° {}' {}\" {}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.display_hemisphere()
        )
    }

    /// Unsigned decimal value: degrees + minutes/60 + seconds/3600
    pub fn magnitude(&self) -> Result<f64> {
        let degrees = parse_component("degrees", self.degrees)?;
        let minutes = parse_component("minutes", self.minutes)?;
        let seconds = parse_component("seconds", self.seconds)?;

        Ok(degrees + minutes / 60.0 + seconds / 3600.0)
    }

    /// Decimal degrees as text, e.g. `"-1.5"`
    pub fn to_decimal_degrees(&self, convention: SignConvention) -> Result<String> {
        let sign = match convention {
            SignConvention::AlwaysNegative => "-",
            SignConvention::FromHemisphere => hemisphere_sign(self.hemisphere),
        };

        Ok(format!("{}{}", sign, format_decimal(self.magnitude()?)))
    }
}

fn hemisphere_sign(hemisphere: &str) -> &'static str {
    if hemisphere.eq_ignore_ascii_case("N") || hemisphere.eq_ignore_ascii_case("E") {
        ""
    } else {
        "-"
    }
}

fn parse_component(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProcessingError::NumericFormat {
            field,
            value: value.to_string(),
        })
}

/// Shortest round-trip text for a float. Integral values keep a `.0`, very
/// small or very large magnitudes switch to exponent notation (`1e-05`).
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let text = format!("{:e}", value);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
