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


//! Stream error types

use std::{
    error::Error,
    fmt::{Display, Formatter},
    io, result,
};

pub type Result<T> = result::Result<T, StreamError>;

/// Stream error
#[derive(Debug)]
pub enum StreamError {
    /// A dispatch configuration that the execution runtime cannot accept,
    /// e.g. a hash dispatcher without partition columns or an unknown wire tag.
    ProtocolViolation(String),
    General(String),
    Configuration(String),
    IoError(io::Error),
}

pub fn protocol_violation(message: impl Into<String>) -> StreamError {
    StreamError::ProtocolViolation(message.into())
}

pub fn stream_error(message: &str) -> StreamError {
    StreamError::General(message.to_owned())
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::IoError(e)
    }
}

impl From<prost::DecodeError> for StreamError {
    fn from(e: prost::DecodeError) -> Self {
        StreamError::ProtocolViolation(format!("Malformed dispatcher record: {e}"))
    }
}

impl Display for StreamError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            StreamError::ProtocolViolation(desc) => {
                write!(f, "Protocol violation: {desc}")
            }
            StreamError::General(desc) => write!(f, "General error: {desc}"),
            StreamError::Configuration(desc) => {
                write!(f, "Configuration error: {desc}")
            }
            StreamError::IoError(desc) => write!(f, "IO error: {desc}"),
        }
    }
}

impl Error for StreamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StreamError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::serde::protobuf::Dispatcher;
    use prost::Message;

    #[test]
    fn display_names_the_error_category() {
        let e = protocol_violation("No such dispatcher type: 9");
        assert_eq!(e.to_string(), "Protocol violation: No such dispatcher type: 9");

        let e = stream_error("bad input");
        assert_eq!(e.to_string(), "General error: bad input");
    }

    #[test]
    fn decode_errors_are_protocol_violations() {
        // a tag without its varint value
        let e: StreamError = Dispatcher::decode(&[0x08_u8][..]).unwrap_err().into();
        assert!(matches!(e, StreamError::ProtocolViolation(_)));
    }

    #[test]
    fn io_error_is_the_source() {
        let e: StreamError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(e.source().is_some());
        assert!(stream_error("x").source().is_none());
    }
}
