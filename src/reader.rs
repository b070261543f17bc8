// Reading point triplets back from raw files
use crate::error::{GenError, Result};
use crate::triplet::{PointTriplet, DATA_FILE, LATS_FILE, LONS_FILE};
use byteorder::{NativeEndian, ReadBytesExt};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Load `lats`, `lons` and `data_file` from `dir`.
///
/// Each file must be a whole number of native-endian f32 records, and all
/// three must hold the same number of records.
pub fn read_triplet(dir: &Path) -> Result<PointTriplet> {
    let lats = read_f32_file(&dir.join(LATS_FILE))?;
    let lons = read_f32_file(&dir.join(LONS_FILE))?;
    let values = read_f32_file(&dir.join(DATA_FILE))?;

    PointTriplet::from_parts(lats, lons, values)
}

fn read_f32_file(path: &Path) -> Result<Vec<f32>> {
    let data = std::fs::read(path).map_err(|e| GenError::io(path, e))?;

    if data.len() % 4 != 0 {
        return Err(GenError::Truncated {
            path: path.to_path_buf(),
            len: data.len() as u64,
        });
    }

    let mut samples = vec![0.0f32; data.len() / 4];
    Cursor::new(data)
        .read_f32_into::<NativeEndian>(&mut samples)
        .map_err(|e| GenError::io(path, e))?;

    debug!("Read {} records from {}", samples.len(), path.display());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_bit_identical() {
        let dir = tempdir().unwrap();
        let lats = vec![-90.0, -0.0, 1.0e-7, 33.333_332, 90.0];
        let lons = vec![-180.0, 0.1, f32::MIN_POSITIVE, -179.99998, 180.0];
        let triplet = PointTriplet::with_unit_values(lats, lons);
        triplet.write_to(dir.path()).unwrap();

        let back = read_triplet(dir.path()).unwrap();
        let bits = |s: &[f32]| s.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(back.lats()), bits(triplet.lats()));
        assert_eq!(bits(back.lons()), bits(triplet.lons()));
        assert_eq!(bits(back.values()), bits(triplet.values()));
    }

    #[test]
    fn test_truncated_file() {
        let dir = tempdir().unwrap();
        PointTriplet::with_unit_values(vec![1.0, 2.0], vec![3.0, 4.0])
            .write_to(dir.path())
            .unwrap();
        std::fs::write(dir.path().join(LONS_FILE), [0u8; 6]).unwrap();

        let err = read_triplet(dir.path()).unwrap_err();
        assert!(matches!(err, GenError::Truncated { len: 6, .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let dir = tempdir().unwrap();
        PointTriplet::with_unit_values(vec![1.0, 2.0], vec![3.0, 4.0])
            .write_to(dir.path())
            .unwrap();
        std::fs::write(dir.path().join(DATA_FILE), 1.0f32.to_ne_bytes()).unwrap();

        let err = read_triplet(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            GenError::LengthMismatch { lats: 2, lons: 2, values: 1 }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_triplet(dir.path()),
            Err(GenError::Io { .. })
        ));
    }
}
