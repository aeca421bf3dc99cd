// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Aerodynamic force from a rig with a mainsail and a front sail, based on the empirical sail
//! coefficients of the ORC 2013 velocity prediction program.

pub mod sail_type;
pub mod coefficients;
pub mod force_model;
pub mod builder;
