// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// A wind speed, in m/s, together with the angle the wind is coming from, in degrees relative to
/// the bow. Used both for the true and the apparent wind.
pub struct WindCondition {
    pub speed: Float,
    pub angle: Float,
}
