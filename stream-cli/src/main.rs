// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


//! Stream dispatch strategy inspection binary.

use std::{env, io};

use clap::Parser;
use log::info;
use stream_cli::config::Config;
use stream_cli::logging::rolling_log_file;
use stream_cli::STREAM_CLI_VERSION;
use tracing_subscriber::EnvFilter;

fn main() -> stream_core::error::Result<()> {
    let opt = Config::parse();

    let rust_log = env::var(EnvFilter::DEFAULT_ENV);
    let log_filter = EnvFilter::new(rust_log.unwrap_or(opt.log_level_setting.clone()));

    // Command output goes to stdout, so the console log goes to stderr.
    let tracing = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_thread_names(opt.print_thread_info)
        .with_thread_ids(opt.print_thread_info)
        .with_writer(io::stderr)
        .with_env_filter(log_filter);

    // File layer
    if let Some(log_dir) = &opt.log_dir {
        let log_file = rolling_log_file(log_dir, opt.log_rotation_policy)?;
        tracing.with_writer(log_file).init();
    } else {
        tracing.init();
    }

    info!("stream-dispatch v{STREAM_CLI_VERSION}: {:?}", opt.command);

    let stdout = io::stdout();
    opt.command.execute(&mut stdout.lock())
}
