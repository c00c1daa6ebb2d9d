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
//! Exchanging the two bytes of a 16-bit value.

#[inline]
#[allow(clippy::manual_rotate)]
pub const fn swap_bytes_portable(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

/// With the `intrinsics` feature this lowers to the target's byte-swap
/// instruction, otherwise it is [`swap_bytes_portable`].
#[inline]
pub const fn swap_bytes(x: u16) -> u16 {
    if cfg!(feature = "intrinsics") {
        x.swap_bytes()
    } else {
        swap_bytes_portable(x)
    }
}
