// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod session;
pub mod timezone;
pub mod value;

pub use session::Session;
pub use timezone::TimeZoneKey;
pub use value::{Date, DisplayValue, MILLIS_PER_DAY, SqlDate};
