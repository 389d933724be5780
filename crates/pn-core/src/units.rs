// pn-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, Ratio as UomRatio, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Volume = UomVolume;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}
