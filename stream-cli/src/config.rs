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


//! Command line configuration of `stream-dispatch`

use clap::Parser;
use stream_core::config::LogRotationPolicy;

use crate::command::Command;

/// Inspect dispatch strategies and the wire records the execution runtime receives
#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        long,
        global = true,
        help = "Log dir: a path to save log. This will create a new storage directory at the specified path if it does not already exist."
    )]
    pub log_dir: Option<String>,
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Enable print thread ids and names in log file."
    )]
    pub print_thread_info: bool,
    #[arg(
        long,
        global = true,
        default_value_t = String::from("WARN,stream_core=INFO"),
        help = "Special log level for sub mod. For example we want whole level is WARN but stream_core is DEBUG"
    )]
    pub log_level_setting: String,
    #[arg(
        long,
        global = true,
        default_value_t = LogRotationPolicy::Daily,
        help = "Tracing log rotation policy, possible values: minutely, hourly, daily, never. Default: daily"
    )]
    pub log_rotation_policy: LogRotationPolicy,
}
