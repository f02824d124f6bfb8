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


use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), String> {
    // The generated code is checked in so that downstreams do not need
    // PROTOC. Set STREAM_REGENERATE_PROTO after editing the proto file.
    println!("cargo:rerun-if-env-changed=STREAM_REGENERATE_PROTO");
    println!("cargo:rerun-if-changed=proto/stream_plan.proto");

    if std::env::var_os("STREAM_REGENERATE_PROTO").is_none() {
        return Ok(());
    }

    let out = PathBuf::from(std::env::var("OUT_DIR").map_err(|e| e.to_string())?);

    prost_build::Config::new()
        .out_dir(&out)
        .compile_protos(&["proto/stream_plan.proto"], &["proto"])
        .map_err(|e| format!("protobuf compilation failed: {e}"))?;

    let generated_source_path = out.join("stream_plan.rs");
    let code = fs::read_to_string(&generated_source_path)
        .map_err(|e| format!("reading {generated_source_path:?} failed: {e}"))?;
    fs::write("src/serde/generated/stream_plan.rs", code)
        .map_err(|e| format!("writing generated protobuf code failed: {e}"))?;

    Ok(())
}
