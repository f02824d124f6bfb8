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


//! Log file output of `stream-dispatch`

use std::path::Path;

use stream_core::config::LogRotationPolicy;
use stream_core::error::{Result, StreamError};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub const LOG_FILE_NAME_PREFIX: &str = "stream_dispatch";

/// Rolling log file under `log_dir`, creating the directory when missing.
pub fn rolling_log_file(
    log_dir: impl AsRef<Path>,
    policy: LogRotationPolicy,
) -> Result<RollingFileAppender> {
    let rotation = match policy {
        LogRotationPolicy::Minutely => Rotation::MINUTELY,
        LogRotationPolicy::Hourly => Rotation::HOURLY,
        LogRotationPolicy::Daily => Rotation::DAILY,
        LogRotationPolicy::Never => Rotation::NEVER,
    };

    let log_dir = log_dir.as_ref();
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(LOG_FILE_NAME_PREFIX)
        .build(log_dir)
        .map_err(|e| {
            StreamError::Configuration(format!(
                "Cannot write log files to {}: {e}",
                log_dir.display()
            ))
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn log_dir_is_created() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let log_dir = dir.path().join("logs");

        rolling_log_file(&log_dir, LogRotationPolicy::Never)?;
        assert!(log_dir.is_dir());
        Ok(())
    }

    #[test]
    fn log_dir_under_a_regular_file_is_a_configuration_error() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        let log_dir = file.path().join("sub");

        let result = rolling_log_file(&log_dir, LogRotationPolicy::Daily);
        assert!(matches!(result, Err(StreamError::Configuration(_))));
        Ok(())
    }
}
