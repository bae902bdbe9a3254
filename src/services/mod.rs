// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accessor;
pub mod resolver;
pub mod seed;

pub use accessor::{parse_payload, ResourceAccessor};
pub use resolver::resolve;
pub use seed::{compute_standings, populate, SeedSummary, TeamStanding};
