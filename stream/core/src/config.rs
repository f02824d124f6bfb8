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


//! Configuration shared by the stream binaries

use std::fmt::Display;

/// Rotation policy of the log files written by the stream binaries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "build-binary", derive(clap::ValueEnum))]
pub enum LogRotationPolicy {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl Display for LogRotationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogRotationPolicy::Minutely => f.write_str("minutely"),
            LogRotationPolicy::Hourly => f.write_str("hourly"),
            LogRotationPolicy::Daily => f.write_str("daily"),
            LogRotationPolicy::Never => f.write_str("never"),
        }
    }
}

#[cfg(feature = "build-binary")]
impl std::str::FromStr for LogRotationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        clap::ValueEnum::from_str(s, true)
    }
}

#[cfg(test)]
mod test {
    use super::LogRotationPolicy;

    #[test]
    fn default_rotation_is_daily() {
        assert_eq!(LogRotationPolicy::default(), LogRotationPolicy::Daily);
        assert_eq!(LogRotationPolicy::default().to_string(), "daily");
    }

    #[test]
    fn deserialize_rotation_policy() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;
        use serde::Deserialize;

        let deserializer: StrDeserializer<Error> = "minutely".into_deserializer();
        assert_eq!(
            LogRotationPolicy::deserialize(deserializer),
            Ok(LogRotationPolicy::Minutely)
        );
    }

    #[cfg(feature = "build-binary")]
    #[test]
    fn parse_rotation_policy_ignoring_case() {
        assert_eq!(
            "Hourly".parse::<LogRotationPolicy>(),
            Ok(LogRotationPolicy::Hourly)
        );
        assert!("weekly".parse::<LogRotationPolicy>().is_err());
    }
}
