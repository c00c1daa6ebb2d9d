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
use crate::order::Endian;
use crate::swap::swap_bytes;

/// The identity on a little-endian host. Call it anyway, so every value read
/// from outside names its source order.
#[inline]
pub const fn to_host_from_little(x: u16) -> u16 {
    to_host(x, Endian::Little)
}

#[inline]
pub const fn to_host_from_big(x: u16) -> u16 {
    to_host(x, Endian::Big)
}

#[inline]
pub const fn to_host(x: u16, from: Endian) -> u16 {
    if from.is_host() {
        x
    } else {
        swap_bytes(x)
    }
}

/// ```
/// use hostend::FromWire;
///
/// let raw: u16 = 0xCAFE;
/// assert_eq!(raw.be_to_host(), u16::from_be_bytes(raw.to_ne_bytes()));
/// ```
pub trait FromWire: Sized {
    fn to_host_from(self, from: Endian) -> Self;

    #[inline]
    fn le_to_host(self) -> Self {
        self.to_host_from(Endian::Little)
    }

    #[inline]
    fn be_to_host(self) -> Self {
        self.to_host_from(Endian::Big)
    }
}

impl FromWire for u16 {
    #[inline]
    fn to_host_from(self, from: Endian) -> Self {
        to_host(self, from)
    }
}
