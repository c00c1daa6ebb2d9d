/*
    This file is part of Hostend.

    Hostend is free software: you can redistribute it and/or modify
    it under the terms of the GNU Lesser General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    Hostend is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU Lesser General Public License
    along with Hostend. (LICENSE.md)  If not, see <https://www.gnu.org/licenses/>.
*/
//! Conversion of 16-bit values from a known wire order into host order.
//!
//! On a little-endian host [`to_host_from_little`] is a no-op and
//! [`to_host_from_big`] a byte swap:
//!
//! ```
//! # #[cfg(target_endian = "little")] {
//! use hostend::{to_host_from_big, to_host_from_little};
//!
//! assert_eq!(to_host_from_little(0x1234), 0x1234);
//! assert_eq!(to_host_from_big(0x1234), 0x3412);
//! # }
//! ```
//!
//! The host order follows `target_endian`. The `host-little-endian` and
//! `host-big-endian` features pin it instead, and the build fails if the
//! pinned order disagrees with the target, see [`Endian::HOST`].

pub mod convert;
pub mod error;
pub mod order;
pub mod swap;

#[cfg(test)]
mod tests;

pub use crate::convert::{to_host, to_host_from_big, to_host_from_little, FromWire};
pub use crate::error::{ParseEndianError, Result};
pub use crate::order::{Endian, HOST_IS_LITTLE_ENDIAN};
