// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

mod date;
mod display;
mod sql_date;

pub use date::{Date, MILLIS_PER_DAY};
pub use display::DisplayValue;
pub use sql_date::SqlDate;
