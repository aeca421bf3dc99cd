// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::force::Force;
use crate::interpolation::QuadraticInterpolant;
use crate::wind::state::WindState;
use crate::wind::tack_sign;

use super::upright_apparent_wind;

#[derive(Debug, Clone, Copy)]
/// Windage of the mast, for a mast that carries a sail.
///
/// The product of area and drag coefficient varies quadratically with the apparent wind angle
/// between 40% of the frontal area for head and stern winds and 60% of the side area for beam
/// winds.
pub struct MastWindage {
    x: Float,
    z_bottom: Float,
    z_top: Float,
    front_area: Float,
    side_area: Float,
    air_density: Float,
    area_times_drag: QuadraticInterpolant,
}

impl MastWindage {
    /// # Arguments
    /// * `x` - longitudinal position of the mast
    /// * `z_bottom` - altitude of the lowest part exposed to the wind, strictly positive
    /// * `z_top` - altitude of the highest part exposed to the wind, above `z_bottom`
    /// * `front_area` - exposed frontal area, strictly positive
    /// * `side_area` - exposed lateral area, strictly positive
    /// * `air_density` - strictly positive
    pub fn new(
        x: Float,
        z_bottom: Float,
        z_top: Float,
        front_area: Float,
        side_area: Float,
        air_density: Float,
    ) -> Result<Self, Error> {
        if !(z_bottom > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the mast bottom altitude must be strictly positive, got {}", z_bottom
            )));
        }

        if !(z_top > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the mast top altitude must be strictly positive, got {}", z_top
            )));
        }

        if z_top <= z_bottom {
            return Err(Error::invalid_parameter(format!(
                "the mast top ({}) must be strictly above the mast bottom ({})", z_top, z_bottom
            )));
        }

        if !(front_area > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the mast front area must be strictly positive, got {}", front_area
            )));
        }

        if !(side_area > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the mast side area must be strictly positive, got {}", side_area
            )));
        }

        if !(air_density > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the air density must be strictly positive, got {}", air_density
            )));
        }

        let area_times_drag = QuadraticInterpolant::new(
            [0.0, 90.0, 180.0],
            [0.4 * front_area, 0.6 * side_area, 0.4 * front_area]
        )?;

        Ok(Self {
            x,
            z_bottom,
            z_top,
            front_area,
            side_area,
            air_density,
            area_times_drag,
        })
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn z_bottom(&self) -> Float {
        self.z_bottom
    }

    pub fn z_top(&self) -> Float {
        self.z_top
    }

    pub fn front_area(&self) -> Float {
        self.front_area
    }

    pub fn side_area(&self) -> Float {
        self.side_area
    }

    pub fn air_density(&self) -> Float {
        self.air_density
    }

    /// Altitude of the centre of effort on the upright boat
    pub fn upright_centre_of_effort_altitude(&self) -> Float {
        0.5 * (self.z_bottom + self.z_top)
    }

    pub fn area_times_drag_coefficient(&self, apparent_wind_angle: Float) -> Float {
        self.area_times_drag.value(apparent_wind_angle.abs())
    }

    /// Mast windage for the wind state.
    ///
    /// The point of application only moves to the side of the heel when the boat is moving. With
    /// a boat speed of zero it stays on the centreline plane.
    pub fn force(&self, wind_state: &WindState, trim_angle: Float) -> Result<Force, Error> {
        let side_sign = if wind_state.boatspeed != 0.0 {
            tack_sign(wind_state.true_wind_angle)
        } else {
            0.0
        };

        let (awa, aws) = upright_apparent_wind(wind_state)?;

        let drag = 0.5 * self.air_density * self.area_times_drag_coefficient(awa) * aws.powi(2);

        let awa_radians = awa.to_radians();
        let heel = wind_state.heel_angle.to_radians();
        let trim = trim_angle.to_radians();

        let z_ce = self.upright_centre_of_effort_altitude();

        Ok(Force {
            fx: -drag * awa_radians.cos(),
            fy: drag * awa_radians.sin(),
            fz: 0.0,
            px: self.x - z_ce * trim.sin(),
            py: z_ce * heel.sin() * side_sign,
            pz: z_ce * heel.cos(),
        })
    }
}

#[allow(clippy::too_many_arguments)]
/// Mast windage for a single wind state, without keeping the model
pub fn windage_mast_with_sail(
    wind_state: &WindState,
    trim_angle: Float,
    mast_x: Float,
    mast_z_bottom: Float,
    mast_z_top: Float,
    mast_front_area: Float,
    mast_side_area: Float,
    air_density: Float,
) -> Result<Force, Error> {
    MastWindage::new(
        mast_x, mast_z_bottom, mast_z_top, mast_front_area, mast_side_area, air_density
    )?.force(wind_state, trim_angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::air::RHO_AIR_20C;

    fn test_mast() -> MastWindage {
        MastWindage::new(0.5, 0.07, 1.7, 0.017, 0.017, RHO_AIR_20C).unwrap()
    }

    #[test]
    fn test_starboard() {
        let mast = test_mast();

        let force = mast.force(&WindState::new(10.0, 45.0, 2.0, 10.0), 0.0).unwrap();

        assert!(force.fx < 0.0);
        assert!(force.fy > 0.0);
        assert!(force.py > 0.0);

        let heeled_to_windward = mast.force(&WindState::new(10.0, 45.0, 2.0, -10.0), 0.0).unwrap();

        assert!(heeled_to_windward.py < 0.0);
    }

    #[test]
    fn test_port() {
        let mast = test_mast();

        let force = mast.force(&WindState::new(10.0, -45.0, 2.0, 10.0), 0.0).unwrap();

        assert!(force.fx < 0.0);
        assert!(force.fy < 0.0);
        assert!(force.py < 0.0);

        let heeled_to_windward = mast.force(&WindState::new(10.0, -45.0, 2.0, -10.0), 0.0).unwrap();

        assert!(heeled_to_windward.py > 0.0);
    }

    #[test]
    fn test_downwind() {
        let mast = test_mast();

        let starboard = mast.force(&WindState::new(10.0, 165.0, 2.0, 10.0), 0.0).unwrap();
        let port = mast.force(&WindState::new(10.0, -165.0, 2.0, 10.0), 0.0).unwrap();

        assert!(starboard.fx > 0.0);
        assert!(starboard.fy > 0.0);
        assert!(port.fx > 0.0);
        assert!(port.fy < 0.0);
    }

    #[test]
    fn test_centre_of_effort() {
        let mast = test_mast();

        let half_height = 0.885 / 2.0;

        let heeled_30 = mast.force(&WindState::new(10.0, 45.0, 2.0, 30.0), 0.0).unwrap();
        let heeled_60 = mast.force(&WindState::new(10.0, 45.0, 2.0, 60.0), 0.0).unwrap();

        assert_abs_diff_eq!(heeled_30.py, half_height, epsilon = 1e-6);
        assert_abs_diff_eq!(heeled_60.pz, half_height, epsilon = 1e-6);

        let bow_down = mast.force(&WindState::new(10.0, 45.0, 2.0, 0.0), -5.0).unwrap();

        assert!(bow_down.px > 0.5);
    }

    #[test]
    fn test_no_side_shift_without_boatspeed() {
        let force = test_mast().force(&WindState::new(10.0, 45.0, 0.0, 20.0), 0.0).unwrap();

        assert_eq!(force.py, 0.0);
        assert!(force.fy > 0.0);
    }

    #[test]
    fn test_area_times_drag_coefficient() {
        let mast = MastWindage::new(0.5, 0.07, 1.7, 0.02, 0.03, RHO_AIR_20C).unwrap();

        assert_abs_diff_eq!(mast.area_times_drag_coefficient(0.0), 0.008, epsilon = 1e-12);
        assert_abs_diff_eq!(mast.area_times_drag_coefficient(-90.0), 0.018, epsilon = 1e-12);
        assert_abs_diff_eq!(mast.area_times_drag_coefficient(180.0), 0.008, epsilon = 1e-12);
        assert_abs_diff_eq!(
            mast.area_times_drag_coefficient(30.0),
            mast.area_times_drag_coefficient(150.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_wrong_geometry() {
        let wind_state = WindState::new(10.0, 45.0, 2.0, 10.0);

        assert!(matches!(
            windage_mast_with_sail(&wind_state, 0.0, 0.5, -0.07, 1.7, 0.017, 0.017, RHO_AIR_20C),
            Err(Error::InvalidParameter(_))
        ));
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 0.07, 1.7, -0.017, 0.017, RHO_AIR_20C).is_err());
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 0.07, 1.7, 0.017, 0.0, RHO_AIR_20C).is_err());
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 0.07, -1.7, 0.017, 0.017, RHO_AIR_20C).is_err());
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 1.7, 0.07, 0.017, 0.017, RHO_AIR_20C).is_err());
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 0.07, 1.7, 0.017, 0.017, 0.0).is_err());
        assert!(windage_mast_with_sail(&wind_state, 0.0, 0.5, 0.07, 1.7, 0.017, 0.017, RHO_AIR_20C).is_ok());
    }
}
