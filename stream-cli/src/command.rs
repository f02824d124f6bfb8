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


//! Subcommands of `stream-dispatch`

use std::io::Write;

use clap::Subcommand;
use log::debug;
use stream_core::error::{Result, StreamError};
use stream_core::{DispatchStrategy, DispatcherType};

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the wire record of a strategy, e.g. `hash(3)` or `round-robin`
    Encode {
        #[arg(help = "simple, round-robin, broadcast, black-hole or hash(<column>[,<column>...])")]
        strategy: DispatchStrategy,
    },
    /// Decode a hex encoded wire record
    Decode {
        #[arg(help = "Protobuf bytes of the record in hex, e.g. 08021005")]
        bytes: String,
    },
    /// List the dispatcher types
    Describe {
        #[arg(long, value_enum, help = "Only describe this dispatcher type")]
        kind: Option<DispatcherType>,
    },
}

impl Command {
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Command::Encode { strategy } => {
                let record = strategy.serialize();
                let bytes = strategy.encode_to_vec();
                debug!("Encoded {strategy} into {} bytes", bytes.len());

                writeln!(out, "strategy:   {strategy}")?;
                writeln!(out, "type:       {}", record.r#type().as_str_name())?;
                if strategy.is_hash() {
                    writeln!(out, "column_idx: {}", record.column_idx)?;
                }
                writeln!(out, "bytes:      {}", display_bytes(&bytes))?;
            }
            Command::Decode { bytes } => {
                let bytes = hex::decode(bytes.trim()).map_err(|e| {
                    StreamError::Configuration(format!(
                        "Invalid hex input '{}': {e}",
                        bytes.trim()
                    ))
                })?;
                let strategy = DispatchStrategy::decode(&bytes)?;
                debug!("Decoded {} bytes into {strategy}", bytes.len());

                writeln!(out, "{strategy}")?;
            }
            Command::Describe { kind } => {
                let kinds = match kind {
                    Some(kind) => vec![*kind],
                    None => DispatcherType::ALL.to_vec(),
                };
                for kind in kinds {
                    writeln!(out, "{:<12} {}", kind.to_string(), kind.description())?;
                }
            }
        }
        Ok(())
    }
}

fn display_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "<empty>".to_owned()
    } else {
        hex::encode(bytes)
    }
}
