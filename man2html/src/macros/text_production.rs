//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Fixed texts printed by the mdoc text production macros.

use std::fmt::Display;
use std::str::FromStr;

/// Types of formatting AT&T UNIX version
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AtType {
    #[default]
    General,
    Version(String),
    V32,
    SystemIII,
    SystemV(Option<String>),
}

impl FromStr for AtType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let at_type = match s {
            "32v" => Self::V32,
            "III" => Self::SystemIII,
            "V" => Self::SystemV(None),
            _ => {
                if let Some(release) = s.strip_prefix("V.") {
                    Self::SystemV(Some(release.to_string()))
                } else if let Some(digit) = s.chars().find(char::is_ascii_digit) {
                    Self::Version(digit.to_string())
                } else {
                    Self::General
                }
            }
        };

        Ok(at_type)
    }
}

impl Display for AtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let at_n_t_unix = match self {
            AtType::General => "AT&T UNIX".to_string(),
            AtType::Version(v) => format!("Version {v} AT&T UNIX"),
            AtType::V32 => "AT&T UNIX v32".to_string(),
            AtType::SystemIII => "AT&T System III UNIX".to_string(),
            AtType::SystemV(None) => "AT&T System V UNIX".to_string(),
            AtType::SystemV(Some(v)) => format!("AT&T System V Release {v} UNIX"),
        };

        write!(f, "{at_n_t_unix}")
    }
}

/// Used for incapsulating formatting BSD version logic
pub struct BxType;

impl BxType {
    pub fn format(version: &str, variant: Option<&str>) -> String {
        match (version, variant) {
            ("-devel", _) => "BSD(currently under development)".to_string(),
            (version, Some(var)) => format!("{}BSD-{}", version, var),
            (version, None) => format!("{}BSD", version),
        }
    }
}

/// Operating systems with a plain `<name> <version>` rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OsType {
    Bsx,
    Dx,
    Fx,
    Nx,
    Ox,
}

impl OsType {
    pub fn name(self) -> &'static str {
        match self {
            OsType::Bsx => "BSD/OS",
            OsType::Dx => "DragonFly",
            OsType::Fx => "FreeBSD",
            OsType::Nx => "NetBSD",
            OsType::Ox => "OpenBSD",
        }
    }

    pub fn format(self, version: &str) -> String {
        if version.is_empty() {
            self.name().to_string()
        } else {
            format!("{} {}", self.name(), version)
        }
    }
}

/// Used for incapsulating formatting C language standards logic
#[derive(Debug, Clone, PartialEq)]
pub enum StType {
    // C Language Standards
    AnsiC,
    AnsiC89,
    IsoC,
    IsoC90,
    IsoCAmd1,
    IsoCTcor1,
    IsoCTcor2,
    IsoC99,
    IsoC2011,
    // POSIX.1 Standards before XPG4.2
    P1003188,
    P10031,
    P1003190,
    Iso9945190,
    P10031B93,
    P10031B,
    P10031C95,
    P10031I95,
    P1003196,
    Iso9945196,
    // X/Open Portability Guide before XPG4.2
    Xpg3,
    P10032,
    P1003292,
    Iso9945293,
    P10032A92,
    Xpg4,
    // X/Open Portability Guide Issue 4 Version 2 and Related Standards
    Susv1,
    Xpg42,
    XCurses42,
    P10031G2000,
    Svid4,
    // X/Open Portability Guide Issue 5 and Related Standards
    Susv2,
    Xbd5,
    Xsh5,
    Xcu5,
    Xns5,
    Xns52,
    // POSIX Issue 6 Standards
    P100312001,
    Susv3,
    P100312004,
    // POSIX Issues 7 and 8 Standards
    P100312008,
    Susv4,
    P100312024,
    // Other Standards
    Ieee754,
    Iso8601,
    Iso88023,
    Ieee127594,
}

impl FromStr for StType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let st_type = match s.trim() {
            // C Language Standards
            "-ansiC" => Self::AnsiC,
            "-ansiC-89" => Self::AnsiC89,
            "-isoC" => Self::IsoC,
            "-isoC-90" => Self::IsoC90,
            "-isoC-amd1" => Self::IsoCAmd1,
            "-isoC-tcor1" => Self::IsoCTcor1,
            "-isoC-tcor2" => Self::IsoCTcor2,
            "-isoC-99" => Self::IsoC99,
            "-isoC-2011" => Self::IsoC2011,
            // POSIX.1 Standards before XPG4.2
            "-p1003.1-88" => Self::P1003188,
            "-p1003.1" => Self::P10031,
            "-p1003.1-90" => Self::P1003190,
            "-iso9945-1-90" => Self::Iso9945190,
            "-p1003.1b-93" => Self::P10031B93,
            "-p1003.1b" => Self::P10031B,
            "-p1003.1c-95" => Self::P10031C95,
            "-p1003.1i-95" => Self::P10031I95,
            "-p1003.1-96" => Self::P1003196,
            "-iso9945-1-96" => Self::Iso9945196,
            // X/Open Portability Guide before XPG4.2
            "-xpg3" => Self::Xpg3,
            "-p1003.2" => Self::P10032,
            "-p1003.2-92" => Self::P1003292,
            "-iso9945-2-93" => Self::Iso9945293,
            "-p1003.2a-92" => Self::P10032A92,
            "-xpg4" => Self::Xpg4,
            // X/Open Portability Guide Issue 4 Version 2 and Related Standards
            "-susv1" => Self::Susv1,
            "-xpg4.2" => Self::Xpg42,
            "-xcurses4.2" => Self::XCurses42,
            "-p1003.1g-2000" => Self::P10031G2000,
            "-svid4" => Self::Svid4,
            // X/Open Portability Guide Issue 5 and Related Standards
            "-susv2" => Self::Susv2,
            "-xbd5" => Self::Xbd5,
            "-xsh5" => Self::Xsh5,
            "-xcu5" => Self::Xcu5,
            "-xns5" => Self::Xns5,
            "-xns5.2" => Self::Xns52,
            // POSIX Issue 6 Standards
            "-p1003.1-2001" => Self::P100312001,
            "-susv3" => Self::Susv3,
            "-p1003.1-2004" => Self::P100312004,
            // POSIX Issues 7 and 8 Standards
            "-p1003.1-2008" => Self::P100312008,
            "-susv4" => Self::Susv4,
            "-p1003.1-2024" => Self::P100312024,
            // Other Standards
            "-ieee754" => Self::Ieee754,
            "-iso8601" => Self::Iso8601,
            "-iso8802-3" => Self::Iso88023,
            "-ieee1275-94" => Self::Ieee127594,
            _ => return Err(()),
        };

        Ok(st_type)
    }
}

impl Display for StType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let standard = match self {
            // C Language Standards
            StType::AnsiC | StType::AnsiC89 => "ANSI X3.159-1989 (“ANSI C89”)",
            StType::IsoC | StType::IsoC90 => "ISO/IEC 9899:1990 (“ISO C90”)",
            StType::IsoCAmd1 => "ISO/IEC 9899/AMD1:1995 (“ISO C90, Amendment 1”)",
            StType::IsoCTcor1 => "ISO/IEC 9899/TCOR1:1994 (“ISO C90, Technical Corrigendum 1”)",
            StType::IsoCTcor2 => "ISO/IEC 9899/TCOR2:1995 (“ISO C90, Technical Corrigendum 2”)",
            StType::IsoC99 => "ISO/IEC 9899:1999 (“ISO C99”)",
            StType::IsoC2011 => "ISO/IEC 9899:2011 (“ISO C11”)",
            // POSIX.1 Standards before XPG4.2
            StType::P1003188 => "IEEE Std 1003.1-1988 (“POSIX.1”)",
            StType::P10031 => "IEEE Std 1003.1 (“POSIX.1”)",
            StType::P1003190 => "IEEE Std 1003.1-1990 (“POSIX.1”)",
            StType::Iso9945190 => "ISO/IEC 9945-1:1990 (“POSIX.1”)",
            StType::P10031B93 => "IEEE Std 1003.1b-1993 (“POSIX.1b”)",
            StType::P10031B => "IEEE Std 1003.1b (“POSIX.1b”)",
            StType::P10031C95 => "IEEE Std 1003.1c-1995 (“POSIX.1c”)",
            StType::P10031I95 => "IEEE Std 1003.1i-1995 (“POSIX.1i”)",
            StType::P1003196 | StType::Iso9945196 => "ISO/IEC 9945-1:1996 (“POSIX.1”)",
            // X/Open Portability Guide before XPG4.2
            StType::Xpg3 => "X/Open Portability Guide Issue 3 (“XPG3”)",
            StType::P10032 => "IEEE Std 1003.2 (“POSIX.2”)",
            StType::P1003292 => "IEEE Std 1003.2-1992 (“POSIX.2”)",
            StType::Iso9945293 => "ISO/IEC 9945-2:1993 (“POSIX.2”)",
            StType::P10032A92 => "IEEE Std 1003.2a-1992 (“POSIX.2”)",
            StType::Xpg4 => "X/Open Portability Guide Issue 4 (“XPG4”)",
            // X/Open Portability Guide Issue 4 Version 2 and Related Standards
            StType::Susv1 => "Version 1 of the Single UNIX Specification (“SUSv1”)",
            StType::Xpg42 => "X/Open Portability Guide Issue 4, Version 2 (“XPG4.2”)",
            StType::XCurses42 => "X/Open Curses Issue 4, Version 2 (“XCURSES4.2”)",
            StType::P10031G2000 => "IEEE Std 1003.1g-2000 (“POSIX.1g”)",
            StType::Svid4 => "System V Interface Definition, Fourth Edition (“SVID4”)",
            // X/Open Portability Guide Issue 5 and Related Standards
            StType::Susv2 => "Version 2 of the Single UNIX Specification (“SUSv2”)",
            StType::Xbd5 => "X/Open Base Definitions Issue 5 (“XBD5”)",
            StType::Xsh5 => "X/Open System Interfaces and Headers Issue 5 (“XSH5”)",
            StType::Xcu5 => "X/Open Commands and Utilities Issue 5 (“XCU5”)",
            StType::Xns5 => "X/Open Networking Services Issue 5 (“XNS5”)",
            StType::Xns52 => "X/Open Networking Services Issue 5.2 (“XNS5.2”)",
            // POSIX Issue 6 Standards
            StType::P100312001 => "IEEE Std 1003.1-2001 (“POSIX.1”)",
            StType::Susv3 => "Version 3 of the Single UNIX Specification (“SUSv3”)",
            StType::P100312004 => "IEEE Std 1003.1-2004 (“POSIX.1”)",
            // POSIX Issues 7 and 8 Standards
            StType::P100312008 => "IEEE Std 1003.1-2008 (“POSIX.1”)",
            StType::Susv4 => "Version 4 of the Single UNIX Specification (“SUSv4”)",
            StType::P100312024 => "IEEE Std 1003.1-2024 (“POSIX.1”)",
            // Other Standards
            StType::Ieee754 => "IEEE Std 754-1985",
            StType::Iso8601 => "ISO 8601",
            StType::Iso88023 => "ISO 8802-3: 1989",
            StType::Ieee127594 => "IEEE Std 1275-1994 (“Open Firmware”)",
        };

        write!(f, "{standard}")
    }
}

/// Manual names of the numbered sections, used by `Dt`
pub fn section_name(section: &str) -> Option<&'static str> {
    let name = match section {
        "1" => "General Commands Manual",
        "2" => "System Calls Manual",
        "3" => "Library Functions Manual",
        "4" => "Kernel Interfaces Manual",
        "5" => "File Formats Manual",
        "6" => "Games Manual",
        "7" => "Miscellaneous Information Manual",
        "8" => "System Manager's Manual",
        "9" => "Kernel Developer's Manual",
        _ => return None,
    };

    Some(name)
}

pub fn volume_name(volume: &str) -> Option<&'static str> {
    let name = match volume {
        "USD" => "User's Supplementary Documents",
        "PS1" => "Programmer's Supplementary Documents",
        "AMD" => "Ancestral Manual Documents",
        "SMM" => "System Manager's Manual",
        "URM" => "User's Reference Manual",
        "PRM" => "Programmer's Manual",
        "KM" => "Kernel Manual",
        "IND" => "Manual Master Index",
        "LOCAL" => "Local Manual",
        "CON" => "Contributed Software Manual",
        _ => return None,
    };

    Some(name)
}

pub const ARCHITECTURES: &[&str] = &[
    "alpha", "acorn26", "acorn32", "algor", "amd64", "amiga", "arc", "arm26", "arm32", "atari",
    "bebox", "cats", "cesfic", "cobalt", "dreamcast", "evbarm", "evbmips", "evbppc", "evbsh3",
    "hp300", "hp700", "hpcmips", "i386", "luna68k", "m68k", "mac68k", "macppc", "mips", "mmeye",
    "mvme68k", "mvmeppc", "netwinder", "news68k", "newsmips", "next68k", "ofppc", "pc532", "pmax",
    "pmppc", "powerpc", "prep", "sandpoint", "sgimips", "sh3", "shark", "sparc", "sparc64", "sun3",
    "tahoe", "vax", "x68k", "x86_64",
];

/// HTML for a two character `\(xx` special character name
pub fn special_char(name: &str) -> Option<&'static str> {
    let html = match name {
        "em" => "&mdash;",
        "en" => "&ndash;",
        "hy" => "&hyphen;",
        "mi" => "&minus;",
        "pl" => "&plus;",
        "bu" => "&bull;",
        "co" => "&copy;",
        "rg" => "&reg;",
        "tm" => "&trade;",
        "lq" => "&ldquo;",
        "rq" => "&rdquo;",
        "oq" => "&lsquo;",
        "cq" => "&rsquo;",
        "dq" => "&quot;",
        "aq" => "&apos;",
        "ga" => "&grave;",
        "aa" => "&acute;",
        "ti" => "~",
        "ha" => "^",
        "rs" => "\\",
        "ba" => "|",
        "or" => "|",
        "sl" => "/",
        "de" => "&deg;",
        "mu" => "&times;",
        "di" => "&divide;",
        "+-" => "&plusmn;",
        "!=" => "&ne;",
        "sc" => "&sect;",
        "dg" => "&dagger;",
        _ => return None,
    };

    Some(html)
}
