use crate::error::Result;
use crate::models::{DecodedRow, LayoutDescriptor, OutputRow};
use crate::utils::coordinates::{DmsCoordinate, SignConvention};
use std::fmt;

/// Why a decoded row was not converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The row has no latitude/longitude fields at all
    MissingCoordinates { fields: usize },
    /// Latitude or longitude did not split into exactly 4 components
    CoordinateShape { latitude: usize, longitude: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingCoordinates { fields } => {
                write!(f, "only {} fields, coordinates missing", fields)
            }
            RejectReason::CoordinateShape {
                latitude,
                longitude,
            } => write!(
                f,
                "coordinates have {} latitude and {} longitude components, expected 4 each",
                latitude, longitude
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(OutputRow),
    Rejected(RejectReason),
}

pub struct RowTransformer {
    descriptor: LayoutDescriptor,
    sign_convention: SignConvention,
}

impl RowTransformer {
    pub fn new(descriptor: LayoutDescriptor, sign_convention: SignConvention) -> Self {
        Self {
            descriptor,
            sign_convention,
        }
    }

    /// Replace the DMS coordinate fields with symbolic and decimal columns.
    ///
    /// Rows whose coordinates are not 4 components each are rejected. A
    /// well-shaped coordinate with non-numeric components is an error.
    pub fn transform(&self, row: &DecodedRow) -> Result<RowOutcome> {
        let (latitude, longitude) = match (
            row.field(self.descriptor.latitude_field),
            row.field(self.descriptor.longitude_field),
        ) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Ok(RowOutcome::Rejected(RejectReason::MissingCoordinates {
                    fields: row.len(),
                }))
            }
        };

        let latitude_parts: Vec<&str> = latitude.split_whitespace().collect();
        let longitude_parts: Vec<&str> = longitude.split_whitespace().collect();

        let (latitude, longitude) = match (
            DmsCoordinate::from_components(&latitude_parts),
            DmsCoordinate::from_components(&longitude_parts),
        ) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Ok(RowOutcome::Rejected(RejectReason::CoordinateShape {
                    latitude: latitude_parts.len(),
                    longitude: longitude_parts.len(),
                }))
            }
        };

        let coordinates = [
            latitude.format_symbolic(),
            longitude.format_symbolic(),
            latitude.to_decimal_degrees(self.sign_convention)?,
            longitude.to_decimal_degrees(self.sign_convention)?,
        ];

        let fields = self.descriptor.assemble(&row.fields, &coordinates);
        Ok(RowOutcome::Accepted(OutputRow::new(fields)))
    }
}
