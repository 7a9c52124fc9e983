//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Directory enumeration and its failures.
    Flist,
    /// Non-regular entries (devices, sockets, FIFOs) and symlinked directories.
    Nonreg,
    /// Entries skipped because they are invalid or inaccessible.
    Skip,
    /// Symbolic link resolution and cycle detection.
    Symsafe,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Flist, Self::Nonreg, Self::Skip, Self::Symsafe];

    /// Returns the token used on the command line and in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flist => "flist",
            Self::Nonreg => "nonreg",
            Self::Skip => "skip",
            Self::Symsafe => "symsafe",
        }
    }

    /// Looks up a flag by its token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Recursion depth bookkeeping.
    Depth,
    /// Visited-set membership changes.
    Dup,
    /// Per-entry traversal decisions.
    Flist,
    /// Individual filesystem calls.
    Io,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Depth, Self::Dup, Self::Flist, Self::Io];

    /// Returns the token used on the command line and in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Dup => "dup",
            Self::Flist => "flist",
            Self::Io => "io",
        }
    }

    /// Looks up a flag by its token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfoLevels {
    /// Directory enumeration level.
    pub flist: u8,
    /// Non-regular entry level.
    pub nonreg: u8,
    /// Skipped entry level.
    pub skip: u8,
    /// Symlink handling level.
    pub symsafe: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Flist => self.flist,
            InfoFlag::Nonreg => self.nonreg,
            InfoFlag::Skip => self.skip,
            InfoFlag::Symsafe => self.symsafe,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Flist => self.flist = level,
            InfoFlag::Nonreg => self.nonreg = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Symsafe => self.symsafe = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }

    /// Highest level configured for any flag.
    pub fn max(&self) -> u8 {
        InfoFlag::ALL
            .into_iter()
            .map(|flag| self.get(flag))
            .max()
            .unwrap_or(0)
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugLevels {
    /// Recursion depth level.
    pub depth: u8,
    /// Visited-set level.
    pub dup: u8,
    /// Per-entry traversal level.
    pub flist: u8,
    /// Filesystem call level.
    pub io: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Depth => self.depth,
            DebugFlag::Dup => self.dup,
            DebugFlag::Flist => self.flist,
            DebugFlag::Io => self.io,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Depth => self.depth = level,
            DebugFlag::Dup => self.dup = level,
            DebugFlag::Flist => self.flist = level,
            DebugFlag::Io => self.io = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }

    /// Highest level configured for any flag.
    pub fn max(&self) -> u8 {
        DebugFlag::ALL
            .into_iter()
            .map(|flag| self.get(flag))
            .max()
            .unwrap_or(0)
    }
}
