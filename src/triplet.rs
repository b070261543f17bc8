// Point triplet data structures and raw file output
use crate::error::{GenError, Result};
use byteorder::{NativeEndian, WriteBytesExt};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Output file holding one latitude per point
pub const LATS_FILE: &str = "lats";
/// Output file holding one longitude per point
pub const LONS_FILE: &str = "lons";
/// Output file holding one data value per point
pub const DATA_FILE: &str = "data_file";

/// Value stored for every generated point
pub const UNIT_VALUE: f32 = 1.0;

/// One generated sample, identified only by its index in the triplet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub lat: f32,  // Degrees, -90..=90
    pub lon: f32,  // Degrees, -180..=180
    pub value: f32,
}

/// Three index-aligned sequences: latitudes, longitudes and data values
#[derive(Debug, Clone, PartialEq)]
pub struct PointTriplet {
    lats: Vec<f32>,
    lons: Vec<f32>,
    values: Vec<f32>,
}

impl PointTriplet {
    /// Pair latitudes with longitudes and give every point the unit value.
    /// Panics if the two sequences differ in length.
    pub fn with_unit_values(lats: Vec<f32>, lons: Vec<f32>) -> Self {
        assert_eq!(
            lats.len(),
            lons.len(),
            "latitude and longitude sequences must be the same length"
        );
        let values = vec![UNIT_VALUE; lats.len()];
        Self { lats, lons, values }
    }

    /// Build a triplet from three sequences that must already be aligned
    pub fn from_parts(lats: Vec<f32>, lons: Vec<f32>, values: Vec<f32>) -> Result<Self> {
        if lats.len() != lons.len() || lats.len() != values.len() {
            return Err(GenError::LengthMismatch {
                lats: lats.len(),
                lons: lons.len(),
                values: values.len(),
            });
        }
        Ok(Self { lats, lons, values })
    }

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    pub fn lats(&self) -> &[f32] {
        &self.lats
    }

    pub fn lons(&self) -> &[f32] {
        &self.lons
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Iterate the triplet as individual sample points
    pub fn points(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.lats
            .iter()
            .zip(&self.lons)
            .zip(&self.values)
            .map(|((&lat, &lon), &value)| SamplePoint { lat, lon, value })
    }

    /// Write `lats`, `lons` and `data_file` into `dir`, replacing any
    /// existing files. Stops at the first failure.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        write_f32_file(&dir.join(LATS_FILE), &self.lats)?;
        write_f32_file(&dir.join(LONS_FILE), &self.lons)?;
        write_f32_file(&dir.join(DATA_FILE), &self.values)?;

        info!("Wrote {} points to {}", self.len(), dir.display());
        Ok(())
    }

    /// Write the three files into the current working directory
    pub fn write(&self) -> Result<()> {
        self.write_to(Path::new("."))
    }
}

/// Raw native-endian f32 array: no header, no delimiter, no length prefix
fn write_f32_file(path: &Path, samples: &[f32]) -> Result<()> {
    let mut buffer = Cursor::new(Vec::with_capacity(samples.len() * 4));

    for &sample in samples {
        buffer
            .write_f32::<NativeEndian>(sample)
            .map_err(|e| GenError::io(path, e))?;
    }

    std::fs::write(path, buffer.into_inner()).map_err(|e| GenError::io(path, e))?;
    debug!("Wrote {} records to {}", samples.len(), path.display());

    Ok(())
}
