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


//! Dispatch strategies of the streaming dataflow graph.
//!
//! A dispatcher redirects the output chunks of an actor to its downstream
//! actors. Plan compilation attaches one [`DispatchStrategy`] to each edge of
//! the graph; the execution runtime configures its routing from the
//! serialized form (see [`crate::serde`]).

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{protocol_violation, stream_error, Result, StreamError};

/// The kind of a dispatcher, without its parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "build-binary", derive(clap::ValueEnum))]
pub enum DispatcherType {
    /// Dispatch data to the downstream actor, assuming there is only one downstream.
    Simple,
    /// Dispatch data to multiple downstream actors by round robin strategy.
    RoundRobin,
    /// Dispatch data to multiple downstream actors by hash distribution on a certain column.
    Hash,
    /// Dispatch every data chunk to all downstream actors.
    Broadcast,
    /// Do not dispatch data.
    BlackHole,
}

impl DispatcherType {
    pub const ALL: [DispatcherType; 5] = [
        DispatcherType::Simple,
        DispatcherType::RoundRobin,
        DispatcherType::Hash,
        DispatcherType::Broadcast,
        DispatcherType::BlackHole,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            DispatcherType::Simple => {
                "Dispatch data to the downstream actor, assuming there is only one downstream."
            }
            DispatcherType::RoundRobin => {
                "Dispatch data to multiple downstream actors by round robin strategy."
            }
            DispatcherType::Hash => {
                "Dispatch data to multiple downstream actors by hash distribution on a certain column."
            }
            DispatcherType::Broadcast => "Dispatch every data chunk to all downstream actors.",
            DispatcherType::BlackHole => "Do not dispatch data.",
        }
    }
}

impl Display for DispatcherType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DispatcherType::Simple => f.write_str("simple"),
            DispatcherType::RoundRobin => f.write_str("round-robin"),
            DispatcherType::Hash => f.write_str("hash"),
            DispatcherType::Broadcast => f.write_str("broadcast"),
            DispatcherType::BlackHole => f.write_str("black-hole"),
        }
    }
}

impl FromStr for DispatcherType {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "simple" => Ok(DispatcherType::Simple),
            "round-robin" | "roundrobin" => Ok(DispatcherType::RoundRobin),
            "hash" => Ok(DispatcherType::Hash),
            "broadcast" => Ok(DispatcherType::Broadcast),
            "black-hole" | "blackhole" => Ok(DispatcherType::BlackHole),
            _ => Err(StreamError::General(format!(
                "Unknown dispatcher type '{}'",
                s.trim()
            ))),
        }
    }
}

/// Partition columns of a hash dispatcher, in the order given by the plan.
///
/// Never empty, and every index fits the `int32` wire field. Only the first
/// column is carried on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashColumns(Vec<u32>);

impl HashColumns {
    /// Largest partition column index the wire record can carry.
    pub const MAX_COLUMN_INDEX: u32 = i32::MAX as u32;

    pub fn try_new(columns: impl Into<Vec<u32>>) -> Result<Self> {
        let columns = columns.into();
        if columns.is_empty() {
            return Err(protocol_violation(
                "Hash dispatcher requires at least one partition column",
            ));
        }
        if let Some(column) = columns.iter().find(|c| **c > Self::MAX_COLUMN_INDEX) {
            return Err(protocol_violation(format!(
                "Partition column {column} exceeds the maximum index {}",
                Self::MAX_COLUMN_INDEX
            )));
        }
        Ok(Self(columns))
    }

    /// The column rows are hashed on downstream.
    pub fn first(&self) -> u32 {
        self.0[0]
    }

    pub fn columns(&self) -> &[u32] {
        &self.0
    }
}

/// How the output chunks of an actor are routed to its downstream actors.
///
/// Only the `Hash` variant carries parameters, and [`HashColumns`] can only be
/// built non-empty, so every value of this type can be serialized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DispatchStrategy {
    Simple,
    RoundRobin,
    Hash(HashColumns),
    Broadcast,
    BlackHole,
}

impl DispatchStrategy {
    pub fn simple() -> Self {
        DispatchStrategy::Simple
    }

    pub fn round_robin() -> Self {
        DispatchStrategy::RoundRobin
    }

    /// Hash dispatcher on the given partition columns. Fails with
    /// [`StreamError::ProtocolViolation`] when `columns` is empty.
    pub fn hash(columns: impl Into<Vec<u32>>) -> Result<Self> {
        Ok(DispatchStrategy::Hash(HashColumns::try_new(columns)?))
    }

    pub fn broadcast() -> Self {
        DispatchStrategy::Broadcast
    }

    pub fn black_hole() -> Self {
        DispatchStrategy::BlackHole
    }

    /// Builds a dispatcher from its kind and partition columns. Columns are
    /// only accepted for [`DispatcherType::Hash`].
    pub fn try_new(
        dispatcher_type: DispatcherType,
        columns: impl Into<Vec<u32>>,
    ) -> Result<Self> {
        let columns = columns.into();
        if dispatcher_type != DispatcherType::Hash && !columns.is_empty() {
            return Err(protocol_violation(format!(
                "{dispatcher_type} dispatcher does not take partition columns, got {columns:?}"
            )));
        }
        Ok(match dispatcher_type {
            DispatcherType::Simple => DispatchStrategy::simple(),
            DispatcherType::RoundRobin => DispatchStrategy::round_robin(),
            DispatcherType::Hash => DispatchStrategy::hash(columns)?,
            DispatcherType::Broadcast => DispatchStrategy::broadcast(),
            DispatcherType::BlackHole => DispatchStrategy::black_hole(),
        })
    }

    pub fn dispatcher_type(&self) -> DispatcherType {
        match self {
            DispatchStrategy::Simple => DispatcherType::Simple,
            DispatchStrategy::RoundRobin => DispatcherType::RoundRobin,
            DispatchStrategy::Hash(_) => DispatcherType::Hash,
            DispatchStrategy::Broadcast => DispatcherType::Broadcast,
            DispatchStrategy::BlackHole => DispatcherType::BlackHole,
        }
    }

    /// Partition columns of a hash dispatcher, empty for every other kind.
    pub fn partition_columns(&self) -> &[u32] {
        match self {
            DispatchStrategy::Hash(columns) => columns.columns(),
            _ => &[],
        }
    }

    pub fn is_hash(&self) -> bool {
        matches!(self, DispatchStrategy::Hash(_))
    }
}

/// Formats as `simple`, `round-robin`, `hash(1,2)`, `broadcast` or `black-hole`.
impl Display for DispatchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStrategy::Hash(columns) => {
                let columns = columns
                    .columns()
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "hash({columns})")
            }
            other => write!(f, "{}", other.dispatcher_type()),
        }
    }
}

impl FromStr for DispatchStrategy {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (kind, args) = match s.find('(') {
            Some(open) => {
                let args = s[open + 1..].strip_suffix(')').ok_or_else(|| {
                    stream_error(&format!("Unterminated column list in dispatcher '{s}'"))
                })?;
                (&s[..open], Some(args))
            }
            None => (s, None),
        };

        let columns = match args {
            Some(args) if !args.trim().is_empty() => args
                .split(',')
                .map(|c| {
                    c.trim().parse::<u32>().map_err(|e| {
                        StreamError::General(format!(
                            "Invalid partition column '{}' in dispatcher '{s}': {e}",
                            c.trim()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            _ => vec![],
        };

        DispatchStrategy::try_new(kind.parse()?, columns)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parameterless_constructors() {
        let cases = [
            (DispatchStrategy::simple(), DispatcherType::Simple),
            (DispatchStrategy::round_robin(), DispatcherType::RoundRobin),
            (DispatchStrategy::broadcast(), DispatcherType::Broadcast),
            (DispatchStrategy::black_hole(), DispatcherType::BlackHole),
        ];
        for (strategy, expected) in cases {
            assert_eq!(strategy.dispatcher_type(), expected);
            assert!(strategy.partition_columns().is_empty());
            assert!(!strategy.is_hash());
        }
    }

    #[test]
    fn hash_keeps_columns_in_order() -> Result<()> {
        let strategy = DispatchStrategy::hash(vec![3, 0, 7])?;
        assert_eq!(strategy.dispatcher_type(), DispatcherType::Hash);
        assert_eq!(strategy.partition_columns(), &[3, 0, 7]);
        assert!(strategy.is_hash());

        let single = DispatchStrategy::hash([5])?;
        assert_eq!(single.partition_columns(), &[5]);
        Ok(())
    }

    #[test]
    fn hash_without_columns_is_rejected() {
        let err = DispatchStrategy::hash(Vec::<u32>::new()).unwrap_err();
        assert!(matches!(err, StreamError::ProtocolViolation(_)));

        assert!(matches!(
            HashColumns::try_new(Vec::<u32>::new()),
            Err(StreamError::ProtocolViolation(_))
        ));
    }

    #[test]
    fn hash_column_index_must_fit_the_wire() -> Result<()> {
        let max = HashColumns::MAX_COLUMN_INDEX;
        assert_eq!(DispatchStrategy::hash([max])?.partition_columns(), &[max]);

        let err = DispatchStrategy::hash([1, max + 1]).unwrap_err();
        assert!(matches!(err, StreamError::ProtocolViolation(_)));
        assert!(matches!(
            "hash(4294967295)".parse::<DispatchStrategy>(),
            Err(StreamError::ProtocolViolation(_))
        ));
        Ok(())
    }

    #[test]
    fn try_new_only_accepts_columns_for_hash() -> Result<()> {
        assert_eq!(
            DispatchStrategy::try_new(DispatcherType::Hash, [2, 1])?,
            DispatchStrategy::hash([2, 1])?
        );
        assert_eq!(
            DispatchStrategy::try_new(DispatcherType::Broadcast, Vec::<u32>::new())?,
            DispatchStrategy::broadcast()
        );

        let err = DispatchStrategy::try_new(DispatcherType::Simple, [1]).unwrap_err();
        assert!(matches!(err, StreamError::ProtocolViolation(_)));
        let err = DispatchStrategy::try_new(DispatcherType::Hash, Vec::<u32>::new()).unwrap_err();
        assert!(matches!(err, StreamError::ProtocolViolation(_)));
        Ok(())
    }

    #[test]
    fn every_type_has_a_description() {
        for dispatcher_type in DispatcherType::ALL {
            assert!(!dispatcher_type.description().is_empty());
        }
        assert_eq!(DispatcherType::BlackHole.description(), "Do not dispatch data.");
    }

    #[test]
    fn dispatcher_type_names() -> Result<()> {
        for dispatcher_type in DispatcherType::ALL {
            assert_eq!(
                dispatcher_type.to_string().parse::<DispatcherType>()?,
                dispatcher_type
            );
        }
        assert_eq!(" ROUND_ROBIN ".parse::<DispatcherType>()?, DispatcherType::RoundRobin);
        assert_eq!("BlackHole".parse::<DispatcherType>()?, DispatcherType::BlackHole);
        assert!(matches!(
            "shuffle".parse::<DispatcherType>(),
            Err(StreamError::General(_))
        ));
        Ok(())
    }

    #[test]
    fn deserialize_dispatcher_type() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;
        use serde::Deserialize;

        let deserializer: StrDeserializer<Error> = "round-robin".into_deserializer();
        assert_eq!(
            DispatcherType::deserialize(deserializer),
            Ok(DispatcherType::RoundRobin)
        );
        let deserializer: StrDeserializer<Error> = "shuffle".into_deserializer();
        assert!(DispatcherType::deserialize(deserializer).is_err());
    }

    #[test]
    fn display_and_parse_strategies() -> Result<()> {
        let strategies = vec![
            DispatchStrategy::simple(),
            DispatchStrategy::round_robin(),
            DispatchStrategy::hash([4, 2])?,
            DispatchStrategy::broadcast(),
            DispatchStrategy::black_hole(),
        ];
        for strategy in strategies {
            assert_eq!(strategy.to_string().parse::<DispatchStrategy>()?, strategy);
        }

        assert_eq!(DispatchStrategy::hash([4, 2])?.to_string(), "hash(4,2)");
        assert_eq!(
            " Hash( 1 , 9 ) ".parse::<DispatchStrategy>()?,
            DispatchStrategy::hash([1, 9])?
        );
        assert_eq!("simple()".parse::<DispatchStrategy>()?, DispatchStrategy::simple());
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_strategies() {
        assert!(matches!(
            "hash".parse::<DispatchStrategy>(),
            Err(StreamError::ProtocolViolation(_))
        ));
        assert!(matches!(
            "hash()".parse::<DispatchStrategy>(),
            Err(StreamError::ProtocolViolation(_))
        ));
        assert!(matches!(
            "broadcast(1)".parse::<DispatchStrategy>(),
            Err(StreamError::ProtocolViolation(_))
        ));
        assert!(matches!(
            "hash(1".parse::<DispatchStrategy>(),
            Err(StreamError::General(_))
        ));
        assert!(matches!(
            "hash(a)".parse::<DispatchStrategy>(),
            Err(StreamError::General(_))
        ));
        assert!(matches!(
            "hash(-1)".parse::<DispatchStrategy>(),
            Err(StreamError::General(_))
        ));
    }

    #[test]
    fn strategies_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<DispatchStrategy>();
    }
}
