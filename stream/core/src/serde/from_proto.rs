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


use prost::Message;

use crate::dispatcher::{DispatchStrategy, DispatcherType};
use crate::error::{protocol_violation, Result, StreamError};
use crate::serde::protobuf;
use crate::serde::protobuf::dispatcher::DispatcherType as ProtoDispatcherType;

impl From<ProtoDispatcherType> for DispatcherType {
    fn from(dispatcher_type: ProtoDispatcherType) -> Self {
        match dispatcher_type {
            ProtoDispatcherType::Simple => DispatcherType::Simple,
            ProtoDispatcherType::RoundRobin => DispatcherType::RoundRobin,
            ProtoDispatcherType::Hash => DispatcherType::Hash,
            ProtoDispatcherType::Broadcast => DispatcherType::Broadcast,
            ProtoDispatcherType::Blackhole => DispatcherType::BlackHole,
        }
    }
}

/// `column_idx` is only read for `HASH` records and becomes the single
/// partition column of the strategy.
impl TryFrom<protobuf::Dispatcher> for DispatchStrategy {
    type Error = StreamError;

    fn try_from(dispatcher: protobuf::Dispatcher) -> Result<Self> {
        let dispatcher_type = ProtoDispatcherType::try_from(dispatcher.r#type)
            .map_err(|_| {
                protocol_violation(format!(
                    "No such dispatcher type: {}",
                    dispatcher.r#type
                ))
            })?;

        match DispatcherType::from(dispatcher_type) {
            DispatcherType::Hash => {
                let column = u32::try_from(dispatcher.column_idx).map_err(|_| {
                    protocol_violation(format!(
                        "Negative partition column in hash dispatcher: {}",
                        dispatcher.column_idx
                    ))
                })?;
                DispatchStrategy::hash(vec![column])
            }
            DispatcherType::Simple => Ok(DispatchStrategy::simple()),
            DispatcherType::RoundRobin => Ok(DispatchStrategy::round_robin()),
            DispatcherType::Broadcast => Ok(DispatchStrategy::broadcast()),
            DispatcherType::BlackHole => Ok(DispatchStrategy::black_hole()),
        }
    }
}

impl DispatchStrategy {
    /// Decodes a protobuf encoded wire record.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        protobuf::Dispatcher::decode(bytes)?.try_into()
    }
}
