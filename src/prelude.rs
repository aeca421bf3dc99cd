// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)


pub use crate::{
    error::Error,
    force::Force,
    air::{
        RHO_AIR_20C,
        density_air,
        kinematic_viscosity_air,
    },
    wind::{
        tack_sign,
        apparent::{apparent_wind, apparent_wind_angle, apparent_wind_speed},
        true_wind::{true_wind, true_wind_angle, true_wind_speed},
        condition::WindCondition,
        state::WindState,
        height_variation::HeightVariationModel,
        distribution::WeibullDistribution,
        environment::WindEnvironment,
    },
    sail::{
        sail_type::SailType,
        coefficients::{SailCoefficients, coefficient, coefficient_by_name, coefficient_interp},
        force_model::{SailForceModel, SailSpec, RigShape, Advisory},
        builder::SailForceModelBuilder,
    },
    windage::{
        hull::{HullWindage, windage_hull},
        mast::{MastWindage, windage_mast_with_sail},
        builder::{HullWindageBuilder, MastWindageBuilder},
    },
    complete_model::{
        CompleteAeroModel,
        CompleteAeroResult,
        builder::CompleteAeroModelBuilder,
    },
};
