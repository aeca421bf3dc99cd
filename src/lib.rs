// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Aerodynamic force models for sailing yachts.
//!
//! The library computes the force from the sails, and the windage of the hull and mast, as a
//! function of the wind, the boat speed and the attitude of the boat. The models follow the
//! empirical approach of the ORC velocity prediction program, and are meant to be evaluated many
//! times by an outer solver that searches for the equilibrium state of the boat.
//!
//! All angles at the public interface are given in degrees. Wind angles are positive on
//! starboard tack and negative on port tack, and heel angles are positive when the boat heels to
//! leeward.

pub mod error;
pub mod force;
pub mod air;
pub mod interpolation;
pub mod wind;
pub mod sail;
pub mod windage;
pub mod complete_model;
pub mod prelude;
