// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{process, time::Instant};

use fp2_demo::{run_walkthrough, Command, DemoError, DemoOptions, FieldParams};
use structopt::StructOpt;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// DEMO RUNNER
// ================================================================================================

fn main() {
    // configure logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    // read command-line args
    let options = DemoOptions::from_args();

    if let Err(err) = run(&options) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(options: &DemoOptions) -> Result<(), DemoError> {
    info!("============================================================");

    let now = Instant::now();
    let field = options.build_field()?;
    debug!("Extension field built in {} ms", now.elapsed().as_millis());

    match options.command {
        Command::Params => FieldParams::new(&field).log(),
        Command::Walkthrough => {
            let mut rng = options.rng();
            let now = Instant::now();
            run_walkthrough(&field, options, &mut rng)?;
            debug!("Walkthrough completed in {} ms", now.elapsed().as_millis());
        },
    }

    info!("============================================================");
    Ok(())
}
