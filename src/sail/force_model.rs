// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Force from a rig with one mainsail and one front sail, inspired by the ORC 2013 VPP.

use std::fmt;

use serde::{Serialize, Deserialize};

use stormath::{
    type_aliases::Float,
    consts::PI,
};

use crate::error::Error;
use crate::force::Force;
use crate::wind::state::WindState;

use super::sail_type::SailType;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Quadratic parasite drag. Not modelled, kept as a separate term in the induced drag factor.
const QUADRATIC_PARASITE_DRAG: Float = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// A single sail in the rig
pub struct SailSpec {
    pub sail_type: SailType,
    /// Area, in m^2
    pub area: Float,
    /// Position of the centre of effort, in m, in the boat-fixed coordinate system
    pub centre_of_effort: [Float; 3],
}

impl SailSpec {
    pub fn new(sail_type: SailType, area: Float, centre_of_effort: [Float; 3]) -> Self {
        Self { sail_type, area, centre_of_effort }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Dimensionless parameters describing how the rig is shaped and trimmed
pub struct RigShape {
    #[serde(default = "RigShape::default_flat")]
    /// Mainsail flattening, realistic values between 0.6 and 1.0
    pub flat: Float,
    #[serde(default = "RigShape::default_fractionality")]
    /// Fore triangle height relative to the mast height, between 0 and 1
    pub fractionality: Float,
    #[serde(default = "RigShape::default_overlap")]
    /// Front sail overlap, LP / J
    pub overlap: Float,
    #[serde(default = "RigShape::default_roach")]
    /// Mainsail area relative to the triangle P x E / 2, minus one
    pub roach: Float,
}

impl Default for RigShape {
    fn default() -> Self {
        Self {
            flat: Self::default_flat(),
            fractionality: Self::default_fractionality(),
            overlap: Self::default_overlap(),
            roach: Self::default_roach(),
        }
    }
}

impl RigShape {
    pub fn default_flat() -> Float {1.0}
    pub fn default_fractionality() -> Float {0.8}
    pub fn default_overlap() -> Float {1.1}
    pub fn default_roach() -> Float {0.2}

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.flat > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "flat must be strictly positive, got {}", self.flat
            )));
        }

        if !(0.0..=1.0).contains(&self.fractionality) {
            return Err(Error::invalid_parameter(format!(
                "fractionality must be between 0 and 1, got {}", self.fractionality
            )));
        }

        if !(self.overlap >= 0.0) {
            return Err(Error::invalid_parameter(format!(
                "overlap must be positive or zero, got {}", self.overlap
            )));
        }

        if !(self.roach >= -1.0) {
            return Err(Error::invalid_parameter(format!(
                "roach must be greater than or equal to -1, got {}", self.roach
            )));
        }

        Ok(())
    }

    /// Parameters that are valid, but outside of what is seen on real rigs
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        if self.flat < 0.6 {
            advisories.push(Advisory::Flat(self.flat));
        }

        if self.fractionality < 0.6 {
            advisories.push(Advisory::Fractionality(self.fractionality));
        }

        if self.overlap < 0.7 || self.overlap > 2.0 {
            advisories.push(Advisory::Overlap(self.overlap));
        }

        if self.roach < -0.2 || self.roach > 2.0 {
            advisories.push(Advisory::Roach(self.roach));
        }

        advisories
    }

    pub fn twist(&self) -> Float {
        twist(self.flat, self.fractionality)
    }

    pub fn effective_span_correction(&self) -> Float {
        effective_span_correction(self.roach, self.fractionality, self.overlap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Non-fatal notice about a rig shape parameter, with the value that triggered it
pub enum Advisory {
    Flat(Float),
    Fractionality(Float),
    Overlap(Float),
    Roach(Float),
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Flat(value) => write!(
                f, "flat is {}, realistic values are between 0.6 and 1.0", value
            ),
            Advisory::Fractionality(value) => write!(
                f, "fractionality is {}, realistic values are between 0.6 and 1.0", value
            ),
            Advisory::Overlap(value) => write!(
                f, "overlap is {}, realistic values are between 0.7 and 2.0", value
            ),
            Advisory::Roach(value) => write!(
                f, "roach is {}, realistic values are between -0.2 and 2.0", value
            ),
        }
    }
}

/// Heel angle used when looking up the sail coefficients, in degrees.
///
/// The sails are re-trimmed as the boat heels, so the coefficients are taken at a smaller
/// effective heel than the one used to resolve the forces.
pub fn phi_up(heel_angle: Float) -> Float {
    10.0 * (heel_angle / 30.0).powi(2)
}

/// Reduction of the centre of effort height from twist, ORC 2013
pub fn twist(flat: Float, fractionality: Float) -> Float {
    1.0 - 0.203 * (1.0 - flat) - 0.451 * (1.0 - flat) * (1.0 - fractionality)
}

/// ORC 2013 eqn. 38
pub fn effective_span_correction(roach: Float, fractionality: Float, overlap: Float) -> Float {
    1.1 + 0.08 * (roach - 0.2) + 0.5 * (0.68 + 0.31 * fractionality + 0.075 * overlap - 1.10)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// The aerodynamic force model for a rig with a mainsail and a front sail.
///
/// The geometry is validated when the model is created, and stays fixed afterwards.
pub struct SailForceModel {
    mainsail: SailSpec,
    frontsail: SailSpec,
    rig_z_max: Float,
    rig_shape: RigShape,
    air_density: Float,
}

impl SailForceModel {
    /// Creates a new model after validating the input.
    ///
    /// # Arguments
    /// * `mainsail` - area must be positive or zero
    /// * `frontsail` - area must be positive or zero
    /// * `rig_z_max` - height of the mainsail head, or the average of the two heads when the
    ///   front sail is higher. Must be strictly positive.
    /// * `rig_shape` - validated with [`RigShape::validate`]. Advisories are logged as warnings.
    /// * `air_density` - in kg/m^3, must be strictly positive
    pub fn new(
        mainsail: SailSpec,
        frontsail: SailSpec,
        rig_z_max: Float,
        rig_shape: RigShape,
        air_density: Float,
    ) -> Result<Self, Error> {
        if !(mainsail.area >= 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the mainsail area must be positive or zero, got {}", mainsail.area
            )));
        }

        if !(frontsail.area >= 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the front sail area must be positive or zero, got {}", frontsail.area
            )));
        }

        if !(mainsail.area + frontsail.area > 0.0) {
            return Err(Error::invalid_parameter("the total sail area must be strictly positive"));
        }

        if !(rig_z_max > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "rig_z_max must be strictly positive, got {}", rig_z_max
            )));
        }

        rig_shape.validate()?;

        if !(air_density > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the air density must be strictly positive, got {}", air_density
            )));
        }

        for advisory in rig_shape.advisories() {
            log::warn!("{}", advisory);
        }

        Ok(Self {
            mainsail,
            frontsail,
            rig_z_max,
            rig_shape,
            air_density,
        })
    }

    pub fn mainsail(&self) -> &SailSpec {
        &self.mainsail
    }

    pub fn frontsail(&self) -> &SailSpec {
        &self.frontsail
    }

    pub fn rig_z_max(&self) -> Float {
        self.rig_z_max
    }

    pub fn rig_shape(&self) -> &RigShape {
        &self.rig_shape
    }

    pub fn air_density(&self) -> Float {
        self.air_density
    }

    pub fn reference_area(&self) -> Float {
        self.mainsail.area + self.frontsail.area
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.rig_shape.advisories()
    }

    /// Effective rig height used for the induced drag
    pub fn effective_height(&self) -> Float {
        self.rig_z_max * self.rig_shape.effective_span_correction()
    }

    /// Aerodynamic force on the rig for the given wind state.
    ///
    /// # Arguments
    /// * `wind_state` - the heel angle is not checked against the [-90, 90] range
    /// * `trim_angle` - in degrees, bow up is positive. Shifts the x position of the centre of
    ///   effort.
    pub fn aero_force(&self, wind_state: &WindState, trim_angle: Float) -> Result<Force, Error> {
        let sign = wind_state.tack_sign();

        let starboard_state = WindState {
            true_wind_angle: wind_state.true_wind_angle.abs(),
            ..*wind_state
        };

        let awa_phi_up = starboard_state
            .with_heel_angle(phi_up(wind_state.heel_angle))
            .apparent_wind_angle(false)?;

        let awa = starboard_state.apparent_wind_angle(false)?;
        let aws = starboard_state.apparent_wind_speed(false)?;

        let reference_area = self.reference_area();

        let main_weight = self.mainsail.area / reference_area;
        let front_weight = self.frontsail.area / reference_area;

        let (main_lift, main_drag) = self.mainsail.sail_type.coefficients().value(awa_phi_up);
        let (front_lift, front_drag) = self.frontsail.sail_type.coefficients().value(awa_phi_up);

        let cl_max = main_lift * main_weight + front_lift * front_weight;
        let cdp = main_drag * main_weight + front_drag * front_weight;

        let combined_magnitude_squared = cl_max.powi(2) + cdp.powi(2);

        // Each sail contributes to the centre of effort in proportion to its area and to the
        // magnitude of its own force coefficient
        let (main_factor, front_factor) = if combined_magnitude_squared == 0.0 {
            (main_weight, front_weight)
        } else {
            let combined_magnitude = combined_magnitude_squared.sqrt();

            (
                main_weight * main_lift.hypot(main_drag) / combined_magnitude,
                front_weight * front_lift.hypot(front_drag) / combined_magnitude,
            )
        };

        let x_coe = self.mainsail.centre_of_effort[0] * main_factor +
            self.frontsail.centre_of_effort[0] * front_factor;
        let z_coe = self.mainsail.centre_of_effort[2] * main_factor +
            self.frontsail.centre_of_effort[2] * front_factor;

        let z_coe_twist = z_coe * self.rig_shape.twist();

        let effective_height = self.effective_height();

        let induced_drag_factor = QUADRATIC_PARASITE_DRAG +
            reference_area / (PI * effective_height.powi(2));

        let flat = self.rig_shape.flat;

        let c_drag = cdp + induced_drag_factor * cl_max.powi(2) * flat.powi(2);
        let c_lift = cl_max * flat;

        let awa_radians = awa.to_radians();

        let c_driving = c_lift * awa_radians.sin() - c_drag * awa_radians.cos();
        let c_heeling = c_lift * awa_radians.cos() + c_drag * awa_radians.sin();

        let dynamic_pressure_force = 0.5 * self.air_density * reference_area * aws.powi(2);

        let driving_force = c_driving * dynamic_pressure_force;
        let heeling_force = c_heeling * dynamic_pressure_force;

        let heel = wind_state.heel_angle.to_radians();
        let trim = trim_angle.to_radians();

        Ok(Force {
            fx: driving_force,
            fy: sign * heeling_force * heel.cos(),
            fz: -heeling_force * heel.sin(),
            px: x_coe - z_coe_twist * trim.sin(),
            py: sign * z_coe_twist * heel.sin(),
            pz: z_coe_twist * heel.cos(),
        })
    }

    /// Evaluates [`SailForceModel::aero_force`] for many wind states with the same trim angle.
    ///
    /// The states are evaluated in parallel when the `parallel` feature is enabled. The output
    /// has the same order as the input.
    pub fn aero_forces(
        &self,
        wind_states: &[WindState],
        trim_angle: Float
    ) -> Vec<Result<Force, Error>> {
        #[cfg(feature = "parallel")]
        let forces = wind_states.par_iter().map(
            |wind_state| self.aero_force(wind_state, trim_angle)
        ).collect();

        #[cfg(not(feature = "parallel"))]
        let forces = wind_states.iter().map(
            |wind_state| self.aero_force(wind_state, trim_angle)
        ).collect();

        forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use std::sync::Mutex;

    static CAPTURED_RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

    struct CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED_RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;

    fn test_model() -> SailForceModel {
        SailForceModel::new(
            SailSpec::new(SailType::Main, 0.3, [0.4, 0.0, 0.68]),
            SailSpec::new(SailType::Jib, 0.2, [0.8, 0.0, 0.45]),
            1.7,
            RigShape::default(),
            1.205,
        ).unwrap()
    }

    #[test]
    fn test_starboard_upwind() {
        let force = test_model().aero_force(&WindState::new(10.0, 45.0, 2.0, 10.0), 0.0).unwrap();

        assert!(force.fx > 0.0);
        assert!(force.fy > 0.0);
        assert!(force.fz < 0.0);
        assert!(force.py > 0.0);
    }

    #[test]
    fn test_starboard_upwind_values() {
        let force = test_model().aero_force(&WindState::new(10.0, 45.0, 2.0, 10.0), 0.0).unwrap();

        // Apparent wind angle of 37.93 degrees at the re-trimmed heel of 1.11 degrees for the
        // coefficients, and 37.51 degrees at 11.44 m/s at the actual heel for the forces
        assert_relative_eq!(force.fx, 27.725363362158287, max_relative = 1e-9);
        assert_relative_eq!(force.fy, 47.40671407939969, max_relative = 1e-9);
        assert_relative_eq!(force.fz, -8.359082758930024, max_relative = 1e-9);
        assert_relative_eq!(force.px, 0.5656004828989283, max_relative = 1e-9);
        assert_relative_eq!(force.py, 0.10176950128933253, max_relative = 1e-9);
        assert_relative_eq!(force.pz, 0.5771635224537527, max_relative = 1e-9);
    }

    #[test]
    fn test_going_backwards() {
        let force = test_model().aero_force(&WindState::new(10.0, 45.0, -2.0, 10.0), 0.0).unwrap();

        assert!(force.fx > 0.0);
        assert!(force.fy > 0.0);
        assert!(force.fz < 0.0);
        assert!(force.py > 0.0);
    }

    #[test]
    fn test_heeled_to_windward() {
        let force = test_model().aero_force(&WindState::new(10.0, 45.0, 2.0, -10.0), 0.0).unwrap();

        assert!(force.fx > 0.0);
        assert!(force.fy > 0.0);
        assert!(force.fz > 0.0);
        assert!(force.py < 0.0);
    }

    #[test]
    fn test_port_upwind() {
        let force = test_model().aero_force(&WindState::new(10.0, -45.0, 2.0, 10.0), 0.0).unwrap();

        assert!(force.fx > 0.0);
        assert!(force.fy < 0.0);
        assert!(force.fz < 0.0);
        assert!(force.py < 0.0);
    }

    #[test]
    fn test_tack_symmetry() {
        let model = test_model();

        let wind_state = WindState::new(10.0, 45.0, 2.0, 10.0);

        let starboard = model.aero_force(&wind_state, 0.0).unwrap();
        let port = model.aero_force(&wind_state.mirrored(), 0.0).unwrap();

        assert_eq!(starboard.fx, port.fx);
        assert_eq!(starboard.fy, -port.fy);
        assert_eq!(starboard.fz, port.fz);
        assert_eq!(starboard.py, -port.py);
        assert_eq!(starboard, port.mirrored());
    }

    #[test]
    fn test_head_to_wind_uses_area_weighted_centre_of_effort() {
        // No coefficient is defined at an apparent wind angle of zero
        let force = test_model().aero_force(&WindState::new(10.0, 0.0, 2.0, 0.0), 0.0).unwrap();

        assert_eq!(force.fx, 0.0);
        assert_eq!(force.fy, 0.0);
        assert_eq!(force.py, 0.0);

        assert_abs_diff_eq!(force.px, 0.4 * 0.6 + 0.8 * 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(force.pz, 0.68 * 0.6 + 0.45 * 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_trim_moves_centre_of_effort() {
        let model = test_model();
        let wind_state = WindState::new(10.0, 60.0, 2.0, 0.0);

        let level = model.aero_force(&wind_state, 0.0).unwrap();
        let bow_up = model.aero_force(&wind_state, 5.0).unwrap();

        assert!(bow_up.px < level.px);
        assert_eq!(bow_up.fx, level.fx);
        assert_eq!(bow_up.pz, level.pz);
    }

    #[test]
    fn test_upright_has_no_vertical_force() {
        let force = test_model().aero_force(&WindState::upright(8.0, 90.0, 3.0), 0.0).unwrap();

        assert_eq!(force.fz, 0.0);
        assert_eq!(force.py, 0.0);
    }

    #[test]
    fn test_force_scales_with_air_density() {
        let light = test_model();
        let heavy = SailForceModel::new(
            *light.mainsail(), *light.frontsail(), light.rig_z_max(), *light.rig_shape(), 2.41
        ).unwrap();

        let wind_state = WindState::new(10.0, 45.0, 2.0, 10.0);

        let light_force = light.aero_force(&wind_state, 0.0).unwrap();
        let heavy_force = heavy.aero_force(&wind_state, 0.0).unwrap();

        assert_abs_diff_eq!(heavy_force.fx, 2.0 * light_force.fx, epsilon = 1e-9);
        assert_abs_diff_eq!(heavy_force.px, light_force.px, epsilon = 1e-12);
    }

    #[test]
    fn test_wrong_wind() {
        let model = test_model();

        assert!(matches!(
            model.aero_force(&WindState::new(-10.0, 45.0, 2.0, 0.0), 0.0),
            Err(Error::Domain(_))
        ));
        assert!(model.aero_force(&WindState::new(10.0, 181.0, 2.0, 0.0), 0.0).is_err());
        assert!(model.aero_force(&WindState::new(10.0, -181.0, 2.0, 0.0), 0.0).is_err());
    }

    #[test]
    fn test_wrong_geometry() {
        let main = SailSpec::new(SailType::Main, 0.3, [0.4, 0.0, 0.68]);
        let jib = SailSpec::new(SailType::Jib, 0.2, [0.8, 0.0, 0.45]);

        let negative_main = SailSpec { area: -0.3, ..main };
        let negative_jib = SailSpec { area: -0.2, ..jib };
        let no_main = SailSpec { area: 0.0, ..main };
        let no_jib = SailSpec { area: 0.0, ..jib };

        let shape = RigShape::default();

        assert!(matches!(
            SailForceModel::new(negative_main, jib, 1.7, shape, 1.205),
            Err(Error::InvalidParameter(_))
        ));
        assert!(SailForceModel::new(main, negative_jib, 1.7, shape, 1.205).is_err());
        assert!(SailForceModel::new(no_main, no_jib, 1.7, shape, 1.205).is_err());
        assert!(SailForceModel::new(main, jib, 0.0, shape, 1.205).is_err());
        assert!(SailForceModel::new(main, jib, 1.7, shape, 0.0).is_err());
        assert!(SailForceModel::new(main, jib, 1.7, shape, -1.205).is_err());

        assert!(SailForceModel::new(main, no_jib, 1.7, shape, 1.205).is_ok());
    }

    #[test]
    fn test_wrong_rig_shape() {
        let default = RigShape::default();

        assert!(default.validate().is_ok());
        assert!(RigShape { flat: 0.0, ..default }.validate().is_err());
        assert!(RigShape { flat: -0.5, ..default }.validate().is_err());
        assert!(RigShape { flat: Float::NAN, ..default }.validate().is_err());
        assert!(RigShape { flat: 1.2, ..default }.validate().is_ok());
        assert!(RigShape { fractionality: 1.1, ..default }.validate().is_err());
        assert!(RigShape { fractionality: -0.1, ..default }.validate().is_err());
        assert!(RigShape { overlap: -0.1, ..default }.validate().is_err());
        assert!(RigShape { roach: -1.1, ..default }.validate().is_err());
        assert!(RigShape { roach: -1.0, ..default }.validate().is_ok());
    }

    #[test]
    fn test_advisories() {
        assert!(RigShape::default().advisories().is_empty());

        let unusual = RigShape {
            flat: 0.5,
            fractionality: 0.5,
            overlap: 2.5,
            roach: -0.5,
        };

        assert_eq!(
            unusual.advisories(),
            vec![
                Advisory::Flat(0.5),
                Advisory::Fractionality(0.5),
                Advisory::Overlap(2.5),
                Advisory::Roach(-0.5),
            ]
        );

        // Advisories never prevent the model from being built
        let model = SailForceModel::new(
            SailSpec::new(SailType::Main, 0.3, [0.4, 0.0, 0.68]),
            SailSpec::new(SailType::Jib, 0.2, [0.8, 0.0, 0.45]),
            1.7,
            unusual,
            1.205,
        ).unwrap();

        assert_eq!(model.advisories().len(), 4);
        assert!(model.aero_force(&WindState::new(10.0, 45.0, 2.0, 10.0), 0.0).is_ok());
    }

    #[test]
    fn test_advisories_are_logged_as_warnings() {
        // The logger is installed once for all the tests in this module
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);

        let shape = RigShape {
            flat: 0.45,
            ..Default::default()
        };

        SailForceModel::new(
            SailSpec::new(SailType::Main, 0.3, [0.4, 0.0, 0.68]),
            SailSpec::new(SailType::Jib, 0.2, [0.8, 0.0, 0.45]),
            1.7,
            shape,
            1.205,
        ).unwrap();

        let records = CAPTURED_RECORDS.lock().unwrap();

        assert!(records.iter().any(
            |(level, message)| *level == log::Level::Warn && message.starts_with("flat is 0.45")
        ));
        assert!(!records.iter().any(|(_, message)| message.starts_with("fractionality is 0.8")));
    }

    #[test]
    fn test_shape_functions() {
        assert_eq!(phi_up(0.0), 0.0);
        assert_abs_diff_eq!(phi_up(30.0), 10.0, epsilon = 1e-12);
        assert_eq!(phi_up(-15.0), phi_up(15.0));

        assert_eq!(twist(1.0, 0.3), 1.0);
        assert_abs_diff_eq!(twist(0.0, 1.0), 1.0 - 0.203, epsilon = 1e-12);

        assert_abs_diff_eq!(
            effective_span_correction(0.2, 0.8, 1.1),
            1.1 + 0.5 * (0.68 + 0.31 * 0.8 + 0.075 * 1.1 - 1.10),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_batch_matches_single_evaluations() {
        let model = test_model();

        let wind_states: Vec<WindState> = (0..12).map(
            |i| WindState::new(8.0, -165.0 + 30.0 * i as Float, 2.5, 5.0)
        ).chain(std::iter::once(WindState::new(-1.0, 45.0, 2.0, 0.0))).collect();

        let forces = model.aero_forces(&wind_states, 1.0);

        assert_eq!(forces.len(), wind_states.len());

        for (wind_state, force) in wind_states.iter().zip(&forces) {
            match model.aero_force(wind_state, 1.0) {
                Ok(expected) => assert_eq!(*force.as_ref().unwrap(), expected),
                Err(_) => assert!(force.is_err()),
            }
        }

        assert!(forces.last().unwrap().is_err());
    }
}
