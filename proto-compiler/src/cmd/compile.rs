use std::fs::{copy, create_dir_all, remove_dir_all};
use std::path::{Path, PathBuf};
use std::process;

use tempdir::TempDir;
use walkdir::WalkDir;

use argh::FromArgs;

/// Generated packages that are kept in `proto/src/prost`; anything else
/// (gogoproto, cosmos_proto, ...) is only needed at compile time.
const KEEP_PREFIXES: &[&str] = &["cosmos.", "tendermint.abci"];

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "compile")]
/// Compile the service protos into Rust sources
pub struct CompileCmd {
    #[argh(option, short = 's')]
    /// path to the Cosmos SDK
    sdk: PathBuf,

    #[argh(option, short = 'g')]
    /// path to the Cosmos SDK checkout carrying `cosmos.group.v1beta1`, defaults to `--sdk`
    group: Option<PathBuf>,

    #[argh(option, short = 't')]
    /// path to the Tendermint repo, defaults to the SDK third-party protos
    tendermint: Option<PathBuf>,

    #[argh(option, short = 'o')]
    /// path to output the generated Rust sources into
    out: PathBuf,
}

impl CompileCmd {
    pub fn run(&self) {
        let tmp = TempDir::new("cosmos-rpc-proto").unwrap_or_else(|e| {
            println!("[error] Failed to create a temporary directory: {}", e);
            process::exit(1)
        });

        self.compile_protos(tmp.as_ref());
        Self::copy_generated_files(tmp.as_ref(), &self.out);
    }

    fn proto_paths(&self) -> Vec<String> {
        let sdk = self.sdk.display();
        let group = self.group.as_ref().unwrap_or(&self.sdk).display();

        let mut paths = vec![
            format!("{}/proto/cosmos/base/v1beta1", sdk),
            format!("{}/proto/cosmos/base/query", sdk),
            format!("{}/proto/cosmos/base/reflection/v2alpha1", sdk),
            format!("{}/proto/cosmos/distribution", sdk),
            format!("{}/proto/cosmos/gov", sdk),
            format!("{}/proto/cosmos/staking", sdk),
            format!("{}/proto/cosmos/group", group),
        ];

        match &self.tendermint {
            Some(tm) => paths.push(format!("{}/proto/tendermint/abci", tm.display())),
            None => paths.push(format!("{}/third_party/proto/tendermint/abci", sdk)),
        }

        paths
    }

    fn include_paths(&self) -> Vec<PathBuf> {
        let sdk = self.sdk.display();

        let mut includes = vec![
            format!("{}/proto", sdk),
            format!("{}/third_party/proto", sdk),
        ];

        if let Some(group) = &self.group {
            includes.push(format!("{}/proto", group.display()));
        }

        if let Some(tm) = &self.tendermint {
            includes.push(format!("{}/proto", tm.display()));
        }

        includes.iter().map(PathBuf::from).collect()
    }

    fn compile_protos(&self, out_dir: &Path) {
        println!(
            "[info ] Compiling .proto files to Rust into '{}'...",
            out_dir.display()
        );

        // List available proto files
        let mut protos: Vec<PathBuf> = vec![];
        for proto_path in &self.proto_paths() {
            println!("Looking for proto files in {:?}", proto_path);
            protos.append(
                &mut WalkDir::new(proto_path)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.file_type().is_file()
                            && e.path().extension().map_or(false, |ext| ext == "proto")
                    })
                    .map(|e| e.into_path())
                    .collect(),
            );
        }

        println!("Found the following protos:");
        for proto in &protos {
            println!("\t-> {:?}", proto);
        }
        println!("[info ] Compiling..");

        let compilation = tonic_build::configure()
            .build_client(true)
            .build_server(true)
            .client_mod_attribute(".", r#"#[cfg(feature = "client")]"#)
            .server_mod_attribute(".", r#"#[cfg(feature = "server")]"#)
            .format(true)
            .out_dir(out_dir)
            .extern_path(".tendermint", "::tendermint_proto")
            .compile(&protos, &self.include_paths());

        match compilation {
            Ok(_) => {
                println!("Successfully compiled proto files");
            }
            Err(e) => {
                println!("Failed to compile:{:?}", e.to_string());
                process::exit(1);
            }
        }
    }

    fn copy_generated_files(from_dir: &Path, to_dir: &Path) {
        println!(
            "[info ] Copying generated files into '{}'...",
            to_dir.display()
        );

        // Remove old compiled files
        remove_dir_all(to_dir).unwrap_or_default();
        create_dir_all(to_dir).unwrap_or_else(|e| {
            println!("[error] Failed to create '{}': {}", to_dir.display(), e);
            process::exit(1)
        });

        // prost does not use folder structures
        let errors = WalkDir::new(from_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_string_lossy();
                let keep = KEEP_PREFIXES.iter().any(|p| name.starts_with(p));
                if !keep {
                    println!("[info ] Skipping {}", name);
                }
                keep
            })
            .map(|e| copy(e.path(), to_dir.join(e.file_name())))
            .filter_map(|e| e.err())
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            for e in errors {
                println!("[error] Error while copying compiled file: {}", e);
            }

            process::exit(1);
        }
    }
}
