//! Fixed-resolution latitude/longitude grid.

use serde::Serialize;
use std::f64::consts::PI;

use crate::error::GeocodeError;
use crate::types::Coordinate;

/// Authalic (equal-area) Earth radius in meters.
pub const AUTHALIC_RADIUS_M: f64 = 6_371_008.8;

/// Target area of one cell: 3 m x 3 m.
pub const CELL_AREA_M2: f64 = 9.0;

/// Number of ~3 m cells needed to tile the Earth's surface.
pub fn target_total_cells() -> u64 {
    (4.0 * PI * AUTHALIC_RADIUS_M * AUTHALIC_RADIUS_M / CELL_AREA_M2).floor() as u64
}

/// Rectangular grid with twice as many longitude columns as latitude rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    latitude_cells: u64,
    longitude_cells: u64,
}

impl Grid {
    /// The ~3 m Earth grid.
    pub fn earth() -> Self {
        Self::from_target_cells(target_total_cells())
    }

    /// Largest 1:2 grid whose row count is `floor(sqrt(target / 2))`.
    pub fn from_target_cells(target: u64) -> Self {
        let target_wide = target as u128;
        let mut lat = ((target as f64) / 2.0).sqrt().floor() as u128;
        // Correct float error in either direction: 2 * lat^2 <= target.
        while lat > 0 && 2 * lat * lat > target_wide {
            lat -= 1;
        }
        while 2 * (lat + 1) * (lat + 1) <= target_wide {
            lat += 1;
        }
        let latitude_cells = (lat as u64).max(1);
        Self {
            latitude_cells,
            longitude_cells: 2 * latitude_cells,
        }
    }

    /// Grid with explicit dimensions; `None` if either is zero.
    pub fn with_dimensions(latitude_cells: u64, longitude_cells: u64) -> Option<Self> {
        if latitude_cells == 0 || longitude_cells == 0 {
            return None;
        }
        latitude_cells.checked_mul(longitude_cells)?;
        Some(Self {
            latitude_cells,
            longitude_cells,
        })
    }

    pub fn latitude_cells(&self) -> u64 {
        self.latitude_cells
    }

    pub fn longitude_cells(&self) -> u64 {
        self.longitude_cells
    }

    pub fn total_cells(&self) -> u64 {
        self.latitude_cells * self.longitude_cells
    }

    /// Cell height in degrees of latitude.
    pub fn cell_height_deg(&self) -> f64 {
        180.0 / self.latitude_cells as f64
    }

    /// Cell width in degrees of longitude.
    pub fn cell_width_deg(&self) -> f64 {
        360.0 / self.longitude_cells as f64
    }

    /// Linear index of the cell containing `(latitude, longitude)`.
    /// The north pole and antimeridian fold into the last row and column.
    pub fn cell_index(&self, latitude: f64, longitude: f64) -> Result<u64, GeocodeError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeocodeError::out_of_range(latitude, longitude));
        }

        let lat_cell = ((latitude + 90.0) / 180.0 * self.latitude_cells as f64).floor() as u64;
        let lng_cell = ((longitude + 180.0) / 360.0 * self.longitude_cells as f64).floor() as u64;
        let lat_cell = lat_cell.min(self.latitude_cells - 1);
        let lng_cell = lng_cell.min(self.longitude_cells - 1);

        Ok(lat_cell * self.longitude_cells + lng_cell)
    }

    /// Center of the cell at `index`; `None` past the last cell.
    pub fn cell_center(&self, index: u64) -> Option<Coordinate> {
        if index >= self.total_cells() {
            return None;
        }
        let lat_cell = index / self.longitude_cells;
        let lng_cell = index % self.longitude_cells;

        let latitude = (lat_cell as f64 / self.latitude_cells as f64) * 180.0 - 90.0
            + self.cell_height_deg() / 2.0;
        let longitude = (lng_cell as f64 / self.longitude_cells as f64) * 360.0 - 180.0
            + self.cell_width_deg() / 2.0;

        Some(Coordinate::new(
            latitude.clamp(-90.0, 90.0),
            longitude.clamp(-180.0, 180.0),
        ))
    }
}
