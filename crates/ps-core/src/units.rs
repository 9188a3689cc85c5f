// ps-core/src/units.rs

use uom::si::f64::{Length as UomLength, Volume as UomVolume, VolumeRate as UomVolumeRate};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn m3_per_day(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_hour;
    VolumeRate::new::<cubic_meter_per_hour>(v / 24.0)
}

#[inline]
pub fn to_m(v: Length) -> f64 {
    use uom::si::length::meter;
    v.get::<meter>()
}

#[inline]
pub fn to_m3(v: Volume) -> f64 {
    use uom::si::volume::cubic_meter;
    v.get::<cubic_meter>()
}

#[inline]
pub fn to_m3_per_hour(v: VolumeRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_hour;
    v.get::<cubic_meter_per_hour>()
}

pub mod constants {
    /// Fixed tank length used for every stage (m).
    pub const TANK_LENGTH_M: f64 = 3.0;

    /// Fixed tank height used for every stage (m).
    pub const TANK_HEIGHT_M: f64 = 3.0;

    /// Plant capacity is spread over this many operating hours per day.
    pub const OPERATING_HOURS_PER_DAY: f64 = 20.0;
}
