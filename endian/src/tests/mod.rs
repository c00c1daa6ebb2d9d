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


use lazy_static::lazy_static;

lazy_static! {
    /// Every 16-bit value with its bytes exchanged, indexed by the value itself.
    /// Built from the standard library's byte conversions so it shares no code with the crate.
    static ref SWAPPED: Vec<u16> = (0..=u16::MAX)
        .map(|x| u16::from_be_bytes(x.to_le_bytes()))
        .collect();
}

fn all_values() -> impl Iterator<Item = u16> {
    0..=u16::MAX
}

fn split(x: u16) -> (u16, u16) {
    (x >> 8, x & 0xff)
}
