//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;

fn main() {
    env_logger::init();
    let args = man2html::Args::parse();

    let stdout = std::io::stdout();
    if let Err(err) = man2html::run(stdout.lock(), args) {
        eprintln!("man2html: {err}");
        std::process::exit(1);
    }
}
