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


use log::debug;
use prost::Message;

use crate::dispatcher::{DispatchStrategy, DispatcherType};
use crate::serde::protobuf;
use crate::serde::protobuf::dispatcher::DispatcherType as ProtoDispatcherType;

impl From<DispatcherType> for ProtoDispatcherType {
    fn from(dispatcher_type: DispatcherType) -> Self {
        match dispatcher_type {
            DispatcherType::Simple => ProtoDispatcherType::Simple,
            DispatcherType::RoundRobin => ProtoDispatcherType::RoundRobin,
            DispatcherType::Hash => ProtoDispatcherType::Hash,
            DispatcherType::Broadcast => ProtoDispatcherType::Broadcast,
            DispatcherType::BlackHole => ProtoDispatcherType::Blackhole,
        }
    }
}

impl From<&DispatchStrategy> for protobuf::Dispatcher {
    fn from(strategy: &DispatchStrategy) -> Self {
        let column_idx = match strategy {
            DispatchStrategy::Hash(columns) => {
                if columns.columns().len() > 1 {
                    debug!(
                        "Hash dispatcher on columns {:?} only encodes column {}",
                        columns.columns(),
                        columns.first()
                    );
                }
                // bounded by HashColumns::MAX_COLUMN_INDEX
                columns.first() as i32
            }
            DispatchStrategy::Simple
            | DispatchStrategy::RoundRobin
            | DispatchStrategy::Broadcast
            | DispatchStrategy::BlackHole => 0,
        };

        protobuf::Dispatcher {
            r#type: ProtoDispatcherType::from(strategy.dispatcher_type()) as i32,
            column_idx,
        }
    }
}

impl From<DispatchStrategy> for protobuf::Dispatcher {
    fn from(strategy: DispatchStrategy) -> Self {
        (&strategy).into()
    }
}

impl DispatchStrategy {
    /// The wire record the execution runtime configures its routing from.
    pub fn serialize(&self) -> protobuf::Dispatcher {
        self.into()
    }

    /// Protobuf encoding of [`DispatchStrategy::serialize`].
    pub fn encode_to_vec(&self) -> Vec<u8> {
        self.serialize().encode_to_vec()
    }
}
