// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generates a Rust client library from a Discovery document.
//!
//! The output is not formatted, run `cargo fmt` on the generated crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod generator;
mod model;
mod schema;
mod util;
use generator::DocumentGenerator;
use model::Document;

// TODO: support resumable uploads, raster files are often too large to
//     buffer in memory.

#[derive(Debug, Parser)]
#[command(name = "discogen", version, about)]
struct Opt {
    /// Input discovery document file to generate sources from.
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory which contains generated sources, stdout if not present
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let opt = Opt::parse();
    generate_api(&opt.input, opt.output.as_deref())
}

/// Entry point for generating a discovery based client from the passed in `input`
/// that is written to `output`.
fn generate_api(input: &Path, output: Option<&Path>) -> Result<()> {
    let contents =
        fs::read(input).with_context(|| format!("cannot read {}", input.display()))?;
    let d: Document = serde_json::from_slice(&contents)
        .with_context(|| format!("cannot parse {}", input.display()))?;
    tracing::info!(id = %d.id, "generating client library");
    let mut doc_gen = DocumentGenerator::new(d);
    let services = doc_gen.gen_services()?;
    let models = doc_gen.gen_models()?;
    match output {
        Some(out) => {
            fs::create_dir_all(out)?;
            let lib = out.join("lib.rs");
            fs::write(&lib, services).with_context(|| format!("cannot write {}", lib.display()))?;
            let model = out.join("model.rs");
            fs::write(&model, models)
                .with_context(|| format!("cannot write {}", model.display()))?;
            tracing::info!(output = %out.display(), "wrote lib.rs and model.rs");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(services.as_bytes())?;
            stdout.write_all(models.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("resources/test");
        d.push(name);
        d
    }

    #[test]
    fn writes_files() -> Result<()> {
        let out = tempfile::tempdir()?;
        generate_api(&fixture("genomics-v1beta2.json"), Some(out.path()))?;
        let lib = fs::read_to_string(out.path().join("lib.rs"))?;
        let model = fs::read_to_string(out.path().join("model.rs"))?;
        assert!(lib.contains("pub struct DatasetsService"), "{lib}");
        assert!(model.contains("pub struct Dataset {"), "{model}");
        Ok(())
    }

    #[test]
    fn missing_input() -> Result<()> {
        let out = tempfile::tempdir()?;
        let err = generate_api(&fixture("does-not-exist.json"), Some(out.path())).unwrap_err();
        assert!(format!("{err}").contains("cannot read"), "{err:?}");
        Ok(())
    }

    #[test]
    fn command_line() {
        let opt = Opt::parse_from(["discogen", "--input", "in.json", "-o", "out"]);
        assert_eq!(opt.input, PathBuf::from("in.json"));
        assert_eq!(opt.output, Some(PathBuf::from("out")));
    }
}
