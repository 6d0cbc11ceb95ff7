/// Reference ellipsoid of a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Semiminor axis in meters.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / self.inv_flattening)
    }

    /// Radius of the sphere with the same mean radius as the ellipsoid, `(2a + b) / 3`.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semimajor + self.semiminor()) / 3.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
