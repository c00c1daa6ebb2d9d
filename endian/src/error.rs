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
use thiserror::Error;

/// Returned when a byte order name cannot be parsed into an [`Endian`](crate::Endian).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEndianError {
    #[error("Empty byte order name")]
    Empty,
    #[error("Unknown byte order: {0} (expected little, le, big, be or network)")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ParseEndianError>;
