// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use clap::Parser;

use redoubt_shasum::{Cli, logging, shasum};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    logging::init();

    let summary = match shasum(
        cli.algorithm,
        &cli.files,
        cli.chunk_size,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
    {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("redoubt-shasum: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        hashed = summary.hashed,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );

    if !summary.success() {
        std::process::exit(1);
    }
}
