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
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseEndianError, Result};

#[cfg(all(feature = "host-little-endian", feature = "host-big-endian"))]
compile_error!("features `host-little-endian` and `host-big-endian` are mutually exclusive");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// The byte order of the host. Pinned by the `host-*-endian` features, otherwise `target_endian`.
    #[cfg(feature = "host-little-endian")]
    pub const HOST: Endian = Endian::Little;
    #[cfg(all(feature = "host-big-endian", not(feature = "host-little-endian")))]
    pub const HOST: Endian = Endian::Big;
    #[cfg(not(any(feature = "host-little-endian", feature = "host-big-endian")))]
    pub const HOST: Endian = if cfg!(target_endian = "little") {
        Endian::Little
    } else {
        Endian::Big
    };

    pub const NETWORK: Endian = Endian::Big;

    #[inline]
    pub const fn is_host(self) -> bool {
        matches!(
            (self, Self::HOST),
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big)
        )
    }

    #[inline]
    pub const fn swapped(self) -> Endian {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    const fn matches_target(self) -> bool {
        match self {
            Endian::Little => cfg!(target_endian = "little"),
            Endian::Big => cfg!(target_endian = "big"),
        }
    }
}

const _: () = assert!(
    Endian::HOST.matches_target(),
    "the configured host byte order does not match `target_endian`"
);

pub const HOST_IS_LITTLE_ENDIAN: bool = matches!(Endian::HOST, Endian::Little);

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endian::Little => "little-endian",
            Endian::Big => "big-endian",
        })
    }
}

const LITTLE_NAMES: [&str; 3] = ["little", "le", "little-endian"];
const BIG_NAMES: [&str; 4] = ["big", "be", "big-endian", "network"];

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseEndianError::Empty);
        }
        if LITTLE_NAMES.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            Ok(Endian::Little)
        } else if BIG_NAMES.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            Ok(Endian::Big)
        } else {
            Err(ParseEndianError::Unknown(name.to_owned()))
        }
    }
}
